use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use carousel_core::{CarouselConfig, SlideManifest};
use carousel_tui::{
    event::{AppEvent, EventHandler},
    widgets::{CarouselWidget, StatusBarWidget},
    App, Theme,
};

/// Slides shown when no manifest is given
const PLACEHOLDER_SLIDES: usize = 8;

/// How long the input thread blocks before checking for shutdown
const INPUT_POLL_MS: u64 = 50;

pub async fn run(config: CarouselConfig, slides: Option<PathBuf>) -> Result<()> {
    let slides = match slides {
        Some(path) => SlideManifest::load(&path)?,
        None => SlideManifest::placeholder(PLACEHOLDER_SLIDES, "https://example.com/")?,
    };
    tracing::info!(slides = slides.len(), "Starting carousel");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Carousel"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, config, slides).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    config: CarouselConfig,
    slides: SlideManifest,
) -> Result<()> {
    let size = terminal.size()?;
    // Last row is the status bar
    let mut app = App::new(
        config,
        slides,
        Theme::default(),
        size.width,
        size.height.saturating_sub(1),
    )?;

    // Terminal input blocks, so it is read on its own thread
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();
    let reader = tokio::task::spawn_blocking(move || -> Result<()> {
        let handler = EventHandler::new(INPUT_POLL_MS);
        while !event_tx.is_closed() {
            if let Some(event) = handler.next()? {
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        }
        Ok(())
    });

    let mut frames = tokio::time::interval(app.frame_duration());
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // Main loop
    loop {
        tokio::select! {
            _ = frames.tick() => {
                app.on_frame(Instant::now());

                terminal.draw(|frame| {
                    let layout = Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([Constraint::Min(1), Constraint::Length(1)])
                        .split(frame.area());

                    CarouselWidget::render(frame, layout[0], &app);
                    StatusBarWidget::render(frame, layout[1], &app);
                })?;
            }
            event = event_rx.recv() => match event {
                Some(event) => app.handle_event(event, Instant::now()),
                // Input thread stopped; its error surfaces below
                None => break,
            },
        }

        if app.should_quit {
            break;
        }
    }

    drop(event_rx);
    reader.await??;

    Ok(())
}

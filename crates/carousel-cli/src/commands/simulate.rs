use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use carousel_core::{CarouselConfig, CarouselController, Frame, Release, WheelEvent};

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Number of tiles on the track
    #[arg(short = 'n', long, default_value_t = 5)]
    pub tiles: usize,
    /// Tile width plus margin, in pixels
    #[arg(short, long, default_value_t = 100.0)]
    pub pitch: f64,
    /// Frames to run
    #[arg(short, long, default_value_t = 120)]
    pub ticks: u32,
    /// Pixel wheel delta delivered before the first frame (repeatable)
    #[arg(short, long, allow_negative_numbers = true)]
    pub wheel: Vec<f64>,
    /// Tile to hover before the first frame
    #[arg(long)]
    pub hover: Option<usize>,
    /// Frame at which the hovered tile is left
    #[arg(long)]
    pub leave_at: Option<u32>,
    /// Pointer x positions, one per frame: press at the first, release after the last
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    pub drag: Vec<f64>,
    /// Print every frame as a JSON line
    #[arg(long)]
    pub json: bool,
    /// Print a summary line every N frames
    #[arg(long, default_value_t = 10)]
    pub every: u32,
}

#[derive(Serialize)]
struct TickRecord<'a> {
    tick: u32,
    #[serde(flatten)]
    frame: &'a Frame,
}

pub fn run(config: &CarouselConfig, args: &SimulateArgs) -> Result<()> {
    let mut controller = CarouselController::from_layout(args.tiles, args.pitch, config)?;

    let frame_duration = Duration::from_secs_f64(1.0 / config.ui.animation_fps.max(1) as f64);
    let start = Instant::now();

    for delta in &args.wheel {
        controller.on_wheel(&WheelEvent::pixels(0.0, *delta));
    }
    if let Some(index) = args.hover {
        if !controller.on_hover_enter(index) {
            tracing::warn!(index, tiles = args.tiles, "Hover index is not a tile");
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let every = args.every.max(1);

    for tick in 0..args.ticks {
        let now = start + frame_duration * tick;
        if let Some(release) = step_drag(&mut controller, &args.drag, tick, now) {
            if !args.json {
                writeln!(out, "# released at frame {} ({:?})", tick, release.state)?;
            }
        }

        if args.leave_at == Some(tick) {
            if let Some(index) = args.hover {
                controller.on_hover_leave(index);
            }
        }

        let frame = controller.tick();

        if args.json {
            serde_json::to_writer(&mut out, &TickRecord { tick, frame: &frame })?;
            writeln!(out)?;
        } else if tick % every == 0 || tick + 1 == args.ticks {
            let scales = frame
                .scales
                .iter()
                .map(|s| format!("{}:{:.4}", s.index, s.factor))
                .collect::<Vec<_>>()
                .join(" ");
            let offsets = frame
                .offsets
                .iter()
                .map(|o| format!("{:.1}", o.offset_x))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(
                out,
                "{:>5}  pos {:>10.4}  target {:>9.3}  {:<8}  [{}]  {}",
                tick,
                frame.position,
                frame.target,
                format!("{:?}", frame.drag_state),
                offsets,
                scales
            )?;
        }
    }

    Ok(())
}

/// Feed the scripted pointer path: press on frame 0, one move per frame,
/// release on the frame after the last point
fn step_drag(
    controller: &mut CarouselController,
    path: &[f64],
    tick: u32,
    now: Instant,
) -> Option<Release> {
    let step = tick as usize;
    match path.get(step) {
        Some(&x) if step == 0 => {
            controller.on_drag_start(x, now);
            None
        }
        Some(&x) => {
            controller.on_drag_move(x);
            None
        }
        None if step == path.len() && step > 0 => {
            let release = controller.on_drag_end(now, None);
            tracing::debug!(tick, state = ?release.state, "Released");
            Some(release)
        }
        None => None,
    }
}

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

/// Event source for terminal input
///
/// Polling is blocking; run it off the frame loop and forward what it yields.
pub struct EventHandler {
    poll_interval: Duration,
}

impl EventHandler {
    pub fn new(poll_interval_ms: u64) -> Self {
        Self {
            poll_interval: Duration::from_millis(poll_interval_ms),
        }
    }

    /// Poll for the next event
    ///
    /// Returns `Ok(None)` when nothing arrived within the poll interval or the
    /// event is irrelevant.
    pub fn next(&self) -> Result<Option<AppEvent>> {
        if event::poll(self.poll_interval)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    // (crossterm 0.27+ sends release events on some systems)
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => Ok(Some(AppEvent::Mouse(mouse))),
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(None)
        }
    }
}

/// Application events
#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse button, motion or wheel
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
}

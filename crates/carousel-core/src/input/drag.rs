use std::time::{Duration, Instant};

use crate::config::DragConfig;

/// One pointer-down..pointer-up interaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer x at the last processed move
    pub anchor_x: f64,
    origin_x: f64,
    started_at: Instant,
    /// Largest distance from the press point seen so far
    travel: f64,
}

impl DragSession {
    fn new(x: f64, now: Instant) -> Self {
        Self {
            anchor_x: x,
            origin_x: x,
            started_at: now,
            travel: 0.0,
        }
    }

    /// How long the pointer has been held
    pub fn held_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    pub fn travel(&self) -> f64 {
        self.travel
    }
}

/// Outcome of releasing the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragRelease {
    /// The release counts as a click on whatever lies under the pointer
    pub is_click: bool,
}

/// Turns pointer movement into scroll targets and tells clicks from drags
#[derive(Debug, Clone)]
pub struct DragTracker {
    session: Option<DragSession>,
    config: DragConfig,
    multiplier: f64,
}

impl DragTracker {
    pub fn new(config: DragConfig, multiplier: f64) -> Self {
        Self {
            session: None,
            config,
            multiplier,
        }
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Pointer pressed at `x`; replaces any session left open
    pub fn begin(&mut self, x: f64, now: Instant) {
        self.session = Some(DragSession::new(x, now));
    }

    /// Pointer moved to `x`
    ///
    /// Returns the scroll target for this movement, or `None` when there is
    /// no session or the pointer did not move. Dragging right yields a
    /// positive target so content follows the pointer.
    pub fn move_to(&mut self, x: f64) -> Option<f64> {
        let session = self.session.as_mut()?;
        let delta = session.anchor_x - x;
        if delta == 0.0 {
            return None;
        }

        session.travel = session.travel.max((x - session.origin_x).abs());
        session.anchor_x = x;
        Some(delta * -self.multiplier)
    }

    /// Pointer released; closes the session
    pub fn end(&mut self, now: Instant) -> Option<DragRelease> {
        let session = self.session.take()?;
        let threshold = Duration::from_millis(self.config.hold_threshold_ms);
        let was_dragged =
            session.held_for(now) >= threshold || session.travel >= self.config.click_slop_px;

        Some(DragRelease {
            is_click: !was_dragged,
        })
    }
}

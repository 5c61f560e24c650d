//! L3 Molecular Layer: Scroll engine
//!
//! `position` is the per-frame offset every tile is moved by. It eases toward
//! `target`, which input sets directly. There is no velocity state: the eased
//! offset itself is the momentum.

use super::easing::{approach, unit_sign};
use super::track::Track;
use crate::config::ScrollConfig;

/// Which call site last wrote the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetMode {
    /// Raw magnitude from an ongoing wheel or drag gesture
    #[default]
    Gesture,
    /// Unit sign left behind when a gesture is released
    Coast,
}

/// Eased scroll position
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollEngine {
    position: f64,
    target: f64,
    mode: TargetMode,
    config: ScrollConfig,
}

impl Default for ScrollEngine {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollEngine {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            position: 0.0,
            target: config.initial_drift,
            mode: TargetMode::Coast,
            config,
        }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    pub fn mode(&self) -> TargetMode {
        self.mode
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Distance still to cover
    #[inline]
    pub fn gap(&self) -> f64 {
        (self.position - self.target).abs()
    }

    /// Whether the position is within `settle_epsilon` of the target
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.gap() < self.config.settle_epsilon
    }

    /// Replace the target with a raw gesture magnitude
    pub fn aim(&mut self, target: f64) {
        self.target = target;
        self.mode = TargetMode::Gesture;
    }

    /// Collapse the target to its unit sign so the carousel keeps drifting
    /// in the release direction
    ///
    /// A zero target stays zero.
    pub fn coast(&mut self) {
        self.target = unit_sign(self.target);
        self.mode = TargetMode::Coast;
    }

    /// Advance one frame and return the new position
    pub fn tick(&mut self) -> f64 {
        self.position = approach(self.position, self.target, self.config.ease_factor);
        self.position
    }

    /// Where a tile currently at `position` lands after this frame's offset
    #[inline]
    pub fn wrapped_position(&self, track: &Track, position: f64) -> f64 {
        track.wrap(self.position, position)
    }
}

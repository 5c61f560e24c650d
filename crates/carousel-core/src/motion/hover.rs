//! L3 Molecular Layer: Hover scale engine
//!
//! Each tile owns at most one scale animation. Records are created on first
//! hover and reused afterwards; reversing an animation mid-flight continues
//! from the current scale instead of restarting.

use std::collections::BTreeMap;

use super::easing::lerp;
use crate::config::HoverConfig;

/// Animation state of one tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoverPhase {
    Idle,
    Animating { from: f64, to: f64 },
}

/// Per-tile scale animation record
#[derive(Debug, Clone, PartialEq)]
pub struct HoverAnimation {
    phase: HoverPhase,
    /// Fraction of the from→to distance still to traverse, counting down
    progress: f64,
    /// Last factor handed to the renderer
    scale: f64,
}

impl HoverAnimation {
    fn new(rest_scale: f64) -> Self {
        Self {
            phase: HoverPhase::Idle,
            progress: 1.0,
            scale: rest_scale,
        }
    }

    #[inline]
    pub fn phase(&self) -> HoverPhase {
        self.phase
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, HoverPhase::Animating { .. })
    }

    /// Scale at the current progress
    pub fn factor(&self) -> f64 {
        match self.phase {
            HoverPhase::Idle => self.scale,
            HoverPhase::Animating { from, to } => lerp(from, to, 1.0 - self.progress),
        }
    }

    /// Head toward `to`, reversing an in-flight animation in place
    fn start(&mut self, from: f64, to: f64) {
        match self.phase {
            // Stale enter/leave: already resting there
            HoverPhase::Idle if self.scale == to => return,
            HoverPhase::Idle => {
                self.progress = 1.0;
            }
            // Duplicate enter/leave: already heading there
            HoverPhase::Animating { from: f, to: t } if f == from && t == to => return,
            HoverPhase::Animating { .. } => {
                self.progress = 1.0 - self.progress;
            }
        }
        self.phase = HoverPhase::Animating { from, to };
    }

    /// Emit this frame's factor and decay the progress
    fn step(&mut self, decay: f64, threshold: f64) -> Option<f64> {
        let HoverPhase::Animating { to, .. } = self.phase else {
            return None;
        };

        let factor = self.factor();
        self.progress *= decay;

        if self.progress < threshold {
            self.phase = HoverPhase::Idle;
            self.progress = 1.0;
            self.scale = to;
        } else {
            self.scale = factor;
        }

        Some(self.scale)
    }
}

/// Table of hover animations keyed by tile index
#[derive(Debug, Clone, PartialEq)]
pub struct HoverScaleEngine {
    animations: BTreeMap<usize, HoverAnimation>,
    config: HoverConfig,
}

impl Default for HoverScaleEngine {
    fn default() -> Self {
        Self::new(HoverConfig::default())
    }
}

impl HoverScaleEngine {
    pub fn new(config: HoverConfig) -> Self {
        Self {
            animations: BTreeMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &HoverConfig {
        &self.config
    }

    /// Grow the tile at `index` toward the hover scale
    pub fn enter(&mut self, index: usize) {
        let (rest, hover) = (self.config.rest_scale, self.config.hover_scale);
        self.record(index).start(rest, hover);
    }

    /// Shrink the tile at `index` back to its rest scale
    pub fn leave(&mut self, index: usize) {
        let (rest, hover) = (self.config.rest_scale, self.config.hover_scale);
        self.record(index).start(hover, rest);
    }

    /// Advance every running animation by one frame
    ///
    /// Returns `(index, factor)` for each tile that animated this frame, in
    /// index order. A tile that finishes reports its exact end scale.
    pub fn tick(&mut self) -> Vec<(usize, f64)> {
        let HoverConfig {
            decay,
            completion_threshold,
            ..
        } = self.config;

        self.animations
            .iter_mut()
            .filter_map(|(&index, anim)| {
                anim.step(decay, completion_threshold)
                    .map(|factor| (index, factor))
            })
            .collect()
    }

    /// Current scale of the tile at `index`
    pub fn scale(&self, index: usize) -> f64 {
        self.animations
            .get(&index)
            .map(HoverAnimation::factor)
            .unwrap_or(self.config.rest_scale)
    }

    pub fn animation(&self, index: usize) -> Option<&HoverAnimation> {
        self.animations.get(&index)
    }

    #[inline]
    pub fn is_animating(&self, index: usize) -> bool {
        self.animations
            .get(&index)
            .is_some_and(HoverAnimation::is_animating)
    }

    /// Whether any tile still needs frames
    pub fn needs_update(&self) -> bool {
        self.animations.values().any(HoverAnimation::is_animating)
    }

    fn record(&mut self, index: usize) -> &mut HoverAnimation {
        let rest = self.config.rest_scale;
        self.animations
            .entry(index)
            .or_insert_with(|| HoverAnimation::new(rest))
    }
}

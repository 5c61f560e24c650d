//! Carousel controller
//!
//! Owns the layout-derived track and composes the scroll engine, the hover
//! engine and input normalization. The host forwards input as it arrives and
//! calls [`CarouselController::tick`] once per displayed frame; every method
//! returns immediately.

use std::time::Instant;

use serde::Serialize;

use crate::config::CarouselConfig;
use crate::input::{DragTracker, WheelEvent, WheelNormalizer};
use crate::motion::{HoverScaleEngine, ScrollEngine, Track};
use crate::Result;

/// Pointer state the host mirrors in its cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DragState {
    #[default]
    Idle,
    /// Pointer is down
    Dragging,
    /// Released, momentum still easing out
    Settling,
}

/// Result of a pointer release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Release {
    pub state: DragState,
    /// Tile to navigate to, when the release was a click on a known tile
    pub click: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TileOffset {
    pub index: usize,
    pub offset_x: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TileScale {
    pub index: usize,
    pub factor: f64,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub position: f64,
    pub target: f64,
    pub drag_state: DragState,
    /// Wrapped x of every tile, in index order
    pub offsets: Vec<TileOffset>,
    /// Tiles whose hover animation ran this frame
    pub scales: Vec<TileScale>,
}

/// Rendering collaborator that receives per-frame results
pub trait RenderSink {
    fn apply_offset(&mut self, index: usize, offset_x: f64);

    fn apply_scale(&mut self, index: usize, factor: f64);
}

impl Frame {
    /// Hand this frame's offsets and scales to `sink`
    pub fn apply_to<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        for tile in &self.offsets {
            sink.apply_offset(tile.index, tile.offset_x);
        }
        for tile in &self.scales {
            sink.apply_scale(tile.index, tile.factor);
        }
    }
}

#[derive(Debug, Clone)]
pub struct CarouselController {
    track: Track,
    /// Current x of each tile; rebuilt from the slots on layout change
    placements: Vec<f64>,
    scroll: ScrollEngine,
    hover: HoverScaleEngine,
    wheel: WheelNormalizer,
    drag: DragTracker,
    drag_state: DragState,
}

impl CarouselController {
    pub fn new(track: Track, config: &CarouselConfig) -> Self {
        Self {
            track,
            placements: track.slots().collect(),
            scroll: ScrollEngine::new(config.scroll),
            hover: HoverScaleEngine::new(config.hover),
            wheel: WheelNormalizer::new(config.wheel),
            drag: DragTracker::new(config.drag, config.scroll.drag_multiplier),
            drag_state: DragState::Idle,
        }
    }

    /// Build from raw layout values, rejecting an empty or degenerate track
    pub fn from_layout(tile_count: usize, pitch: f64, config: &CarouselConfig) -> Result<Self> {
        Ok(Self::new(Track::new(tile_count, pitch)?, config))
    }

    #[inline]
    pub fn track(&self) -> &Track {
        &self.track
    }

    #[inline]
    pub fn scroll(&self) -> &ScrollEngine {
        &self.scroll
    }

    #[inline]
    pub fn hover(&self) -> &HoverScaleEngine {
        &self.hover
    }

    #[inline]
    pub fn drag_state(&self) -> DragState {
        self.drag_state
    }

    /// Current x of every tile, in index order
    pub fn placements(&self) -> &[f64] {
        &self.placements
    }

    /// Current scale of the tile at `index`
    pub fn scale_factor(&self, index: usize) -> f64 {
        self.hover.scale(index)
    }

    /// Whether the next frame would differ from the last beyond the steady drift
    pub fn needs_update(&self) -> bool {
        !self.scroll.is_settled() || self.hover.needs_update() || self.drag_state != DragState::Idle
    }

    pub fn on_wheel(&mut self, event: &WheelEvent) {
        self.scroll.aim(self.wheel.target(event));
    }

    pub fn on_drag_start(&mut self, x: f64, now: Instant) -> DragState {
        self.drag.begin(x, now);
        self.set_drag_state(DragState::Dragging)
    }

    pub fn on_drag_move(&mut self, x: f64) -> DragState {
        if let Some(target) = self.drag.move_to(x) {
            self.scroll.aim(target);
        }
        self.drag_state
    }

    /// Pointer released over `under_pointer` (if any tile)
    ///
    /// The target collapses to its unit sign so the carousel coasts in the
    /// drag direction. Only a short, still press reports a click.
    pub fn on_drag_end(&mut self, now: Instant, under_pointer: Option<usize>) -> Release {
        let Some(release) = self.drag.end(now) else {
            return Release {
                state: self.drag_state,
                click: None,
            };
        };

        self.scroll.coast();
        let state = self.set_drag_state(DragState::Settling);

        let click = match under_pointer {
            Some(index) if release.is_click && self.track.contains(index) => {
                tracing::info!(index, "Tile clicked");
                Some(index)
            }
            Some(index) if release.is_click => {
                tracing::debug!(index, "Ignoring click on unknown tile");
                None
            }
            _ => None,
        };

        Release { state, click }
    }

    /// Returns false when `index` is not a tile
    pub fn on_hover_enter(&mut self, index: usize) -> bool {
        if !self.track.contains(index) {
            tracing::debug!(index, "Ignoring hover on unknown tile");
            return false;
        }
        self.hover.enter(index);
        true
    }

    /// Returns false when `index` is not a tile
    pub fn on_hover_leave(&mut self, index: usize) -> bool {
        if !self.track.contains(index) {
            tracing::debug!(index, "Ignoring hover leave on unknown tile");
            return false;
        }
        self.hover.leave(index);
        true
    }

    /// Apply a new layout
    ///
    /// Tile placement restarts from the slots; scroll and hover state carry
    /// over. Returns `Ok(false)` when the layout is unchanged.
    pub fn on_resize(&mut self, pitch: f64, tile_count: usize) -> Result<bool> {
        let track = Track::new(tile_count, pitch)?;
        if track == self.track {
            return Ok(false);
        }

        tracing::info!(
            tile_count,
            pitch,
            previous_pitch = self.track.pitch(),
            "Layout changed"
        );
        self.track = track;
        self.placements = track.slots().collect();
        Ok(true)
    }

    /// Advance one frame
    pub fn tick(&mut self) -> Frame {
        let position = self.scroll.tick();

        let (scroll, track) = (&self.scroll, &self.track);
        let offsets = self
            .placements
            .iter_mut()
            .enumerate()
            .map(|(index, x)| {
                *x = scroll.wrapped_position(track, *x);
                TileOffset { index, offset_x: *x }
            })
            .collect();

        // Stale records from a larger layout keep animating but are not drawn
        let scales = self
            .hover
            .tick()
            .into_iter()
            .filter(|&(index, _)| self.track.contains(index))
            .map(|(index, factor)| TileScale { index, factor })
            .collect();

        if self.drag_state == DragState::Settling && self.scroll.is_settled() {
            self.set_drag_state(DragState::Idle);
        }

        Frame {
            position,
            target: self.scroll.target(),
            drag_state: self.drag_state,
            offsets,
            scales,
        }
    }

    fn set_drag_state(&mut self, state: DragState) -> DragState {
        if self.drag_state != state {
            tracing::debug!(from = ?self.drag_state, to = ?state, "Drag state");
            self.drag_state = state;
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn controller() -> CarouselController {
        CarouselController::from_layout(5, 100.0, &CarouselConfig::default()).unwrap()
    }

    #[derive(Default)]
    struct RecordingSink {
        offsets: Vec<(usize, f64)>,
        scales: Vec<(usize, f64)>,
    }

    impl RenderSink for RecordingSink {
        fn apply_offset(&mut self, index: usize, offset_x: f64) {
            self.offsets.push((index, offset_x));
        }

        fn apply_scale(&mut self, index: usize, factor: f64) {
            self.scales.push((index, factor));
        }
    }

    #[test]
    fn test_invalid_layout_rejected() {
        let config = CarouselConfig::default();
        assert!(CarouselController::from_layout(0, 100.0, &config).is_err());
        assert!(CarouselController::from_layout(3, 0.0, &config).is_err());

        let mut carousel = controller();
        assert!(carousel.on_resize(-5.0, 3).is_err());
        assert_eq!(carousel.track().tile_count(), 5);
    }

    #[test]
    fn test_wheel_scenario() {
        let mut carousel = controller();
        carousel.on_wheel(&WheelEvent::pixels(0.0, 120.0));
        assert_eq!(carousel.scroll().target(), -120.0);

        for _ in 0..90 {
            carousel.tick();
        }
        let scroll = carousel.scroll();
        assert!((scroll.position() - scroll.target()).abs() < 0.01);
    }

    #[test]
    fn test_tick_emits_every_tile_in_range() {
        let mut carousel = controller();
        carousel.on_wheel(&WheelEvent::pixels(0.0, 300.0));
        for _ in 0..40 {
            let frame = carousel.tick();
            assert_eq!(frame.offsets.len(), 5);
            for (i, tile) in frame.offsets.iter().enumerate() {
                assert_eq!(tile.index, i);
                assert!((-100.0..400.0).contains(&tile.offset_x));
            }
        }
    }

    #[test]
    fn test_tiles_keep_their_spacing() {
        let mut carousel = controller();
        carousel.on_wheel(&WheelEvent::pixels(0.0, 37.0));
        for _ in 0..25 {
            carousel.tick();
        }
        let mut xs = carousel.placements().to_vec();
        xs.sort_by(f64::total_cmp);
        for pair in xs.windows(2) {
            assert!((pair[1] - pair[0] - 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_frame_applies_to_sink() {
        let mut carousel = controller();
        carousel.on_hover_enter(1);
        let frame = carousel.tick();
        let mut sink = RecordingSink::default();
        frame.apply_to(&mut sink);
        assert_eq!(sink.offsets.len(), 5);
        assert_eq!(sink.scales, vec![(1, 1.0)]);
    }

    #[test]
    fn test_hover_scenario() {
        let mut carousel = controller();
        assert!(carousel.on_hover_enter(2));
        for _ in 0..111 {
            carousel.tick();
        }
        assert_eq!(carousel.scale_factor(2), 1.2);

        assert!(carousel.on_hover_leave(2));
        for _ in 0..111 {
            carousel.tick();
        }
        assert_eq!(carousel.scale_factor(2), 1.0);
    }

    #[test]
    fn test_unknown_tile_index_is_ignored() {
        let mut carousel = controller();
        assert!(!carousel.on_hover_enter(5));
        assert!(!carousel.on_hover_leave(99));
        assert!(carousel.tick().scales.is_empty());

        let t0 = Instant::now();
        carousel.on_drag_start(10.0, t0);
        let release = carousel.on_drag_end(t0 + Duration::from_millis(50), Some(7));
        assert_eq!(release.click, None);
    }

    #[test]
    fn test_resize_twice_is_idempotent() {
        let mut carousel = controller();
        carousel.on_wheel(&WheelEvent::pixels(0.0, 80.0));
        carousel.on_hover_enter(3);
        for _ in 0..12 {
            carousel.tick();
        }

        assert!(carousel.on_resize(120.0, 4).unwrap());
        let scroll = carousel.scroll().clone();
        let hover = carousel.hover().clone();
        let placements = carousel.placements().to_vec();

        assert!(!carousel.on_resize(120.0, 4).unwrap());
        assert_eq!(carousel.scroll(), &scroll);
        assert_eq!(carousel.hover(), &hover);
        assert_eq!(carousel.placements(), placements.as_slice());
    }

    #[test]
    fn test_resize_keeps_momentum_and_hover() {
        let mut carousel = controller();
        carousel.on_wheel(&WheelEvent::pixels(0.0, 80.0));
        carousel.on_hover_enter(1);
        for _ in 0..12 {
            carousel.tick();
        }
        let scroll = carousel.scroll().clone();
        let hover = carousel.hover().clone();

        carousel.on_resize(150.0, 5).unwrap();
        assert_eq!(carousel.scroll(), &scroll);
        assert_eq!(carousel.hover(), &hover);
        assert_eq!(carousel.placements(), &[0.0, 150.0, 300.0, 450.0, 600.0]);
    }

    #[test]
    fn test_shrinking_layout_hides_stale_hover() {
        let mut carousel = controller();
        carousel.on_hover_enter(4);
        carousel.tick();
        carousel.on_resize(100.0, 3).unwrap();
        let frame = carousel.tick();
        assert!(frame.scales.is_empty());
        assert!(carousel.hover().is_animating(4));
    }

    #[test]
    fn test_quick_press_clicks() {
        let mut carousel = controller();
        let t0 = Instant::now();
        assert_eq!(carousel.on_drag_start(200.0, t0), DragState::Dragging);
        carousel.on_drag_move(202.0);
        let release = carousel.on_drag_end(t0 + Duration::from_millis(150), Some(2));
        assert_eq!(release.click, Some(2));
        assert_eq!(release.state, DragState::Settling);
    }

    #[test]
    fn test_long_press_never_clicks() {
        let mut carousel = controller();
        let t0 = Instant::now();
        carousel.on_drag_start(200.0, t0);
        let release = carousel.on_drag_end(t0 + Duration::from_millis(200), Some(2));
        assert_eq!(release.click, None);

        carousel.on_drag_start(200.0, t0);
        carousel.on_drag_move(260.0);
        let release = carousel.on_drag_end(t0 + Duration::from_millis(900), Some(2));
        assert_eq!(release.click, None);
    }

    #[test]
    fn test_drag_release_coasts_then_settles() {
        let mut carousel = controller();
        let t0 = Instant::now();
        carousel.on_drag_start(100.0, t0);
        carousel.on_drag_move(140.0);
        assert_eq!(carousel.scroll().target(), 60.0);

        let release = carousel.on_drag_end(t0 + Duration::from_millis(400), None);
        assert_eq!(release.state, DragState::Settling);
        assert_eq!(carousel.scroll().target(), 1.0);

        let mut settled_after = None;
        for i in 0..200 {
            if carousel.tick().drag_state == DragState::Idle {
                settled_after = Some(i);
                break;
            }
        }
        assert!(settled_after.is_some());
        assert!(!carousel.needs_update());
    }

    #[test]
    fn test_release_without_movement_keeps_zero_target() {
        let config = CarouselConfig {
            scroll: crate::ScrollConfig {
                initial_drift: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut carousel = CarouselController::from_layout(3, 50.0, &config).unwrap();
        let t0 = Instant::now();
        carousel.on_drag_start(10.0, t0);
        carousel.on_drag_end(t0 + Duration::from_millis(500), None);
        assert_eq!(carousel.scroll().target(), 0.0);
        assert!(!carousel.tick().position.is_nan());
    }

    #[test]
    fn test_release_without_press_is_noop() {
        let mut carousel = controller();
        let release = carousel.on_drag_end(Instant::now(), Some(1));
        assert_eq!(release.state, DragState::Idle);
        assert_eq!(release.click, None);
        assert_eq!(carousel.scroll().target(), -1.0);
    }

    #[test]
    fn test_stray_leave_on_resting_tile_is_absorbed() {
        let mut carousel = controller();
        assert!(carousel.on_hover_leave(1));
        assert_eq!(carousel.scale_factor(1), 1.0);
        assert!(!carousel.hover().is_animating(1));
        assert!(carousel.tick().scales.is_empty());
        assert_eq!(carousel.scale_factor(1), 1.0);
    }

    #[test]
    fn test_repeated_enter_on_settled_tile_is_absorbed() {
        let mut carousel = controller();
        carousel.on_hover_enter(2);
        for _ in 0..111 {
            carousel.tick();
        }
        assert_eq!(carousel.scale_factor(2), 1.2);

        assert!(carousel.on_hover_enter(2));
        assert_eq!(carousel.scale_factor(2), 1.2);
        assert!(carousel.tick().scales.is_empty());
        assert_eq!(carousel.scale_factor(2), 1.2);
    }

    #[test]
    fn test_tick_places_tiles_through_scroll_wrap() {
        let mut carousel = controller();
        carousel.on_wheel(&WheelEvent::pixels(0.0, 50.0));
        let before = carousel.placements().to_vec();
        let frame = carousel.tick();
        for (tile, x) in frame.offsets.iter().zip(before) {
            let expected = carousel.scroll().wrapped_position(carousel.track(), x);
            assert_eq!(tile.offset_x, expected);
        }
    }
}

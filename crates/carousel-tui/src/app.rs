use std::time::{Duration, Instant};

use anyhow::{ensure, Result};
use carousel_core::{
    CarouselConfig, CarouselController, DragState, RenderSink, SlideManifest, WheelEvent,
};

use crate::event::AppEvent;
use crate::input::{handle_key_event, handle_mouse_event, Action, PointerAction};
use crate::layout::{CellScale, TileLayout};
use crate::theme::Theme;

/// Quiet period after which a wheel burst counts as finished
const WHEEL_IDLE: Duration = Duration::from_millis(150);

/// Terminal host state around the carousel controller
///
/// Terminal wheels arrive as discrete notches with no release, so the host
/// treats 150 ms without a notch as the end of a wheel gesture and
/// leaves the carousel drifting at unit speed in the wheel direction, the
/// same way a drag release does. A drag in progress keeps its target.
pub struct App {
    pub config: CarouselConfig,
    pub controller: CarouselController,
    pub slides: SlideManifest,
    pub theme: Theme,
    pub layout: TileLayout,
    pub cells: CellScale,
    /// Carousel area size in cells (columns, rows)
    pub viewport: (u16, u16),
    /// Last x (px) applied to each tile
    pub offsets: Vec<f64>,
    /// Last scale applied to each tile
    pub scales: Vec<f64>,
    /// Tile currently under the pointer
    pub hovered: Option<usize>,
    pub pointer: Option<(u16, u16)>,
    pub status_message: Option<String>,
    pub should_quit: bool,
    pending_resize: Option<(Instant, u16, u16)>,
    last_wheel: Option<Instant>,
}

impl App {
    /// Create the app for a carousel area of `columns` x `rows` cells
    pub fn new(
        config: CarouselConfig,
        slides: SlideManifest,
        theme: Theme,
        columns: u16,
        rows: u16,
    ) -> Result<Self> {
        let cells = CellScale::new(config.ui.cell_width_px);
        let layout = TileLayout::for_viewport(cells.to_px(columns));
        ensure_room(&layout)?;
        let controller = CarouselController::from_layout(slides.len(), layout.pitch(), &config)?;

        let offsets = controller.placements().to_vec();
        let scales = vec![config.hover.rest_scale; slides.len()];

        Ok(Self {
            config,
            controller,
            slides,
            theme,
            layout,
            cells,
            viewport: (columns, rows),
            offsets,
            scales,
            hovered: None,
            pointer: None,
            status_message: None,
            should_quit: false,
            pending_resize: None,
            last_wheel: None,
        })
    }

    /// Interval between animation frames
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.config.ui.animation_fps.max(1) as f64)
    }

    /// Cursor the host should show, following the drag/hover state
    pub fn cursor_hint(&self) -> &'static str {
        match self.controller.drag_state() {
            DragState::Dragging => "grabbing",
            _ if self.hovered.is_some() => "pointer",
            _ => "grab",
        }
    }

    pub fn handle_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Key(key) => {
                if handle_key_event(key) == Action::Quit {
                    self.should_quit = true;
                }
            }
            AppEvent::Mouse(mouse) => self.handle_pointer(handle_mouse_event(mouse), now),
            AppEvent::Resize(columns, rows) => {
                // Status bar takes the last row
                self.pending_resize = Some((now, columns, rows.saturating_sub(1)));
            }
        }
    }

    pub fn handle_pointer(&mut self, action: PointerAction, now: Instant) {
        match action {
            PointerAction::Press { column, row } => {
                self.pointer = Some((column, row));
                self.status_message = None;
                self.controller
                    .on_drag_start(self.cells.column_center(column), now);
            }
            PointerAction::DragTo { column, row } => {
                self.pointer = Some((column, row));
                self.controller.on_drag_move(self.cells.column_center(column));
                self.update_hover();
            }
            PointerAction::Release { column, row } => {
                self.pointer = Some((column, row));
                let tile = self.tile_at(column, row);
                let release = self.controller.on_drag_end(now, tile);
                if let Some(index) = release.click {
                    self.open_slide(index);
                }
            }
            PointerAction::Hover { column, row } => {
                self.pointer = Some((column, row));
                self.update_hover();
            }
            PointerAction::Wheel(event) => {
                self.controller.on_wheel(&event);
                self.last_wheel = Some(now);
            }
            PointerAction::None => {}
        }
    }

    /// Advance one animation frame
    pub fn on_frame(&mut self, now: Instant) {
        if let Some((since, columns, rows)) = self.pending_resize {
            if now.saturating_duration_since(since)
                >= Duration::from_millis(self.config.ui.resize_debounce_ms)
            {
                self.pending_resize = None;
                self.apply_resize(columns, rows);
            }
        }

        if let Some(since) = self.last_wheel {
            if now.saturating_duration_since(since) >= WHEEL_IDLE {
                self.last_wheel = None;
                self.end_wheel_gesture();
            }
        }

        let frame = self.controller.tick();
        frame.apply_to(self);

        // Tiles move under a resting pointer too
        self.update_hover();
    }

    /// Tile under the cell at `column`, `row`
    pub fn tile_at(&self, column: u16, row: u16) -> Option<usize> {
        if row >= self.viewport.1 || column >= self.viewport.0 {
            return None;
        }
        let px = self.cells.column_center(column);
        self.offsets
            .iter()
            .position(|&x| px >= x && px < x + self.layout.tile_width)
    }

    fn update_hover(&mut self) {
        let under = self.pointer.and_then(|(column, row)| self.tile_at(column, row));
        if under == self.hovered {
            return;
        }
        if let Some(previous) = self.hovered {
            self.controller.on_hover_leave(previous);
        }
        if let Some(index) = under {
            self.controller.on_hover_enter(index);
        }
        self.hovered = under;
    }

    fn apply_resize(&mut self, columns: u16, rows: u16) {
        self.viewport = (columns, rows);
        let layout = TileLayout::for_viewport(self.cells.to_px(columns));

        let resized = ensure_room(&layout).and_then(|()| {
            Ok(self.controller.on_resize(layout.pitch(), self.slides.len())?)
        });

        match resized {
            Ok(changed) => {
                self.layout = layout;
                if changed {
                    self.offsets = self.controller.placements().to_vec();
                }
            }
            Err(e) => {
                tracing::warn!(columns, error = %e, "Keeping previous layout");
                self.status_message = Some(format!("Terminal too narrow: {}", e));
            }
        }
    }

    fn end_wheel_gesture(&mut self) {
        if self.controller.drag_state() == DragState::Dragging {
            return;
        }
        let target = self.controller.scroll().target();
        if target != 0.0 {
            // A one pixel notch aims the target at its unit sign
            self.controller
                .on_wheel(&WheelEvent::pixels(0.0, -target.signum()));
        }
    }

    fn open_slide(&mut self, index: usize) {
        if let Some(slide) = self.slides.get(index) {
            tracing::info!(index, url = %slide.url, "Navigate");
            self.status_message = Some(format!(" Open {} → {}", slide.title, slide.url));
        }
    }
}

fn ensure_room(layout: &TileLayout) -> Result<()> {
    ensure!(
        layout.has_room(),
        "no room for a tile ({:.0} px after margins)",
        layout.tile_width
    );
    Ok(())
}

impl RenderSink for App {
    fn apply_offset(&mut self, index: usize, offset_x: f64) {
        if let Some(slot) = self.offsets.get_mut(index) {
            *slot = offset_x;
        }
    }

    fn apply_scale(&mut self, index: usize, factor: f64) {
        if let Some(slot) = self.scales.get_mut(index) {
            *slot = factor;
        }
    }
}

//! Responsive tile sizing
//!
//! Mirrors the breakpoints of the web carousel the engine was built for:
//! one tile plus a peek on narrow viewports, two on medium, three on wide.

/// Tile geometry in virtual pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileLayout {
    pub tile_width: f64,
    pub margin: f64,
}

impl TileLayout {
    /// Compute the tile geometry for a viewport `width` pixels wide
    pub fn for_viewport(width: f64) -> Self {
        if width < 540.0 {
            let margin = 30.0;
            Self {
                tile_width: width - 2.5 * margin,
                margin,
            }
        } else if width < 768.0 {
            let margin = 30.0;
            Self {
                tile_width: (width - margin) / 2.0,
                margin,
            }
        } else {
            let margin = 50.0;
            Self {
                tile_width: (width - 2.0 * margin) / 3.0,
                margin,
            }
        }
    }

    /// Tile width plus margin
    #[inline]
    pub fn pitch(&self) -> f64 {
        self.tile_width + self.margin
    }

    /// Whether the viewport leaves any width for a tile once margins are taken
    #[inline]
    pub fn has_room(&self) -> bool {
        self.tile_width > 0.0
    }
}

/// Converts between terminal columns and virtual pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellScale {
    pub cell_width_px: u16,
}

impl CellScale {
    pub fn new(cell_width_px: u16) -> Self {
        Self {
            cell_width_px: cell_width_px.max(1),
        }
    }

    /// Pixel at the horizontal center of `column`
    #[inline]
    pub fn column_center(&self, column: u16) -> f64 {
        (column as f64 + 0.5) * self.cell_width_px as f64
    }

    /// Width of `columns` cells in pixels
    #[inline]
    pub fn to_px(&self, columns: u16) -> f64 {
        columns as f64 * self.cell_width_px as f64
    }

    /// Fractional column for a pixel coordinate
    #[inline]
    pub fn to_columns(&self, px: f64) -> f64 {
        px / self.cell_width_px as f64
    }
}

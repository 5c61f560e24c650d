use ratatui::style::Color;

/// Runtime theme colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey1: Color,
    pub grey2: Color,

    // Tile accents, cycled by tile index
    pub tiles: [Color; 6],

    // Semantic colors
    pub hover: Color,
    pub accent: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Default to Gruvbox Dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey1: Color::Rgb(0x92, 0x83, 0x74),
            grey2: Color::Rgb(0xa8, 0x99, 0x84),
            tiles: [
                Color::Rgb(0xea, 0x69, 0x62),
                Color::Rgb(0xe7, 0x8a, 0x4e),
                Color::Rgb(0xd8, 0xa6, 0x57),
                Color::Rgb(0xa9, 0xb6, 0x65),
                Color::Rgb(0x7d, 0xae, 0xa3),
                Color::Rgb(0xd3, 0x86, 0x9b),
            ],
            hover: Color::Rgb(0xd8, 0xa6, 0x57),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            info: Color::Rgb(0x7d, 0xae, 0xa3),
        }
    }
}

impl Theme {
    /// Accent color of the tile at `index`
    pub fn tile_color(&self, index: usize) -> Color {
        self.tiles[index % self.tiles.len()]
    }
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarouselConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub hover: HoverConfig,
    #[serde(default)]
    pub drag: DragConfig,
    #[serde(default)]
    pub wheel: WheelConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Scroll engine tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Fraction of the remaining gap closed on each tick (0.0-1.0)
    #[serde(default = "default_ease_factor")]
    pub ease_factor: f64,
    /// Drag amplification relative to raw pointer movement
    #[serde(default = "default_drag_multiplier")]
    pub drag_multiplier: f64,
    /// Gap below which a released carousel counts as settled
    #[serde(default = "default_settle_epsilon")]
    pub settle_epsilon: f64,
    /// Target at startup; the carousel idles drifting at this speed
    #[serde(default = "default_initial_drift")]
    pub initial_drift: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            ease_factor: default_ease_factor(),
            drag_multiplier: default_drag_multiplier(),
            settle_epsilon: default_settle_epsilon(),
            initial_drift: default_initial_drift(),
        }
    }
}

/// Hover emphasis tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverConfig {
    /// Scale of a tile at rest
    #[serde(default = "default_rest_scale")]
    pub rest_scale: f64,
    /// Scale of a hovered tile
    #[serde(default = "default_hover_scale")]
    pub hover_scale: f64,
    /// Per-tick multiplier applied to the remaining progress
    #[serde(default = "default_hover_decay")]
    pub decay: f64,
    /// Progress below which the animation snaps to its end value
    #[serde(default = "default_completion_threshold")]
    pub completion_threshold: f64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            rest_scale: default_rest_scale(),
            hover_scale: default_hover_scale(),
            decay: default_hover_decay(),
            completion_threshold: default_completion_threshold(),
        }
    }
}

/// Click vs. drag disambiguation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragConfig {
    /// Hold time after which a release no longer counts as a click
    #[serde(default = "default_hold_threshold")]
    pub hold_threshold_ms: u64,
    /// Movement (px) tolerated inside a click
    #[serde(default = "default_click_slop")]
    pub click_slop_px: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            hold_threshold_ms: default_hold_threshold(),
            click_slop_px: default_click_slop(),
        }
    }
}

/// Wheel delta normalization constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelConfig {
    /// Pixels per legacy wheel notch
    #[serde(default = "default_pixel_step")]
    pub pixel_step: f64,
    /// Pixels per line in line delta mode
    #[serde(default = "default_line_height")]
    pub line_height: f64,
    /// Pixels per page in page delta mode
    #[serde(default = "default_page_height")]
    pub page_height: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            pixel_step: default_pixel_step(),
            line_height: default_line_height(),
            page_height: default_page_height(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Frames per second for the animation tick
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Quiet period before a resize is applied
    #[serde(default = "default_resize_debounce")]
    pub resize_debounce_ms: u64,
    /// Virtual pixels per terminal column
    #[serde(default = "default_cell_width")]
    pub cell_width_px: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            animation_fps: default_animation_fps(),
            resize_debounce_ms: default_resize_debounce(),
            cell_width_px: default_cell_width(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_ease_factor() -> f64 {
    0.1
}

fn default_drag_multiplier() -> f64 {
    1.5
}

fn default_settle_epsilon() -> f64 {
    0.01
}

fn default_initial_drift() -> f64 {
    -1.0
}

fn default_rest_scale() -> f64 {
    1.0
}

fn default_hover_scale() -> f64 {
    1.2
}

fn default_hover_decay() -> f64 {
    0.92
}

fn default_completion_threshold() -> f64 {
    0.0001
}

fn default_hold_threshold() -> u64 {
    200
}

fn default_click_slop() -> f64 {
    5.0
}

fn default_pixel_step() -> f64 {
    10.0
}

fn default_line_height() -> f64 {
    40.0
}

fn default_page_height() -> f64 {
    800.0
}

fn default_animation_fps() -> u32 {
    60
}

fn default_resize_debounce() -> u64 {
    300
}

fn default_cell_width() -> u16 {
    8
}

impl CarouselConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Self =
                toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/carousel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("carousel")
            .join("config.toml")
    }

    /// Reject tuning values that would stall or diverge the animations
    pub fn validate(&self) -> crate::Result<()> {
        let unit_open = |name: &str, value: f64| {
            if value > 0.0 && value < 1.0 {
                Ok(())
            } else {
                Err(crate::Error::Config(format!(
                    "{name} must be within (0, 1), got {value}"
                )))
            }
        };

        // ease_factor == 1 is a valid (instant) easing
        if !(self.scroll.ease_factor > 0.0 && self.scroll.ease_factor <= 1.0) {
            return Err(crate::Error::Config(format!(
                "scroll.ease_factor must be within (0, 1], got {}",
                self.scroll.ease_factor
            )));
        }
        unit_open("hover.decay", self.hover.decay)?;
        unit_open("hover.completion_threshold", self.hover.completion_threshold)?;

        if self.ui.animation_fps == 0 {
            return Err(crate::Error::Config(
                "ui.animation_fps must be positive".to_string(),
            ));
        }
        if self.ui.cell_width_px == 0 {
            return Err(crate::Error::Config(
                "ui.cell_width_px must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

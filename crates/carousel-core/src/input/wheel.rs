use crate::config::WheelConfig;

/// Unit of a wheel event's deltas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

/// Raw wheel event as delivered by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelEvent {
    pub delta_x: f64,
    pub delta_y: f64,
    pub mode: DeltaMode,
    /// Legacy notch-based delta (120 per notch, positive = away from user)
    pub wheel_delta: Option<f64>,
}

impl WheelEvent {
    pub fn pixels(delta_x: f64, delta_y: f64) -> Self {
        Self {
            delta_x,
            delta_y,
            ..Default::default()
        }
    }

    pub fn lines(delta_x: f64, delta_y: f64) -> Self {
        Self {
            delta_x,
            delta_y,
            mode: DeltaMode::Line,
            wheel_delta: None,
        }
    }

    pub fn pages(delta_x: f64, delta_y: f64) -> Self {
        Self {
            delta_x,
            delta_y,
            mode: DeltaMode::Page,
            wheel_delta: None,
        }
    }

    /// Event that only carries a notch-based delta
    pub fn legacy(wheel_delta: f64) -> Self {
        Self {
            wheel_delta: Some(wheel_delta),
            ..Default::default()
        }
    }
}

/// Wheel motion in device-independent units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormalizedWheel {
    /// Notches, with fractional values for high resolution devices
    pub spin_x: f64,
    pub spin_y: f64,
    /// Pixel-equivalent distance
    pub pixel_x: f64,
    pub pixel_y: f64,
}

/// Maps wheel events from any device onto a pixel scale
#[derive(Debug, Clone, Copy, Default)]
pub struct WheelNormalizer {
    config: WheelConfig,
}

impl WheelNormalizer {
    pub fn new(config: WheelConfig) -> Self {
        Self { config }
    }

    pub fn normalize(&self, event: &WheelEvent) -> NormalizedWheel {
        let mut spin_x = 0.0;
        let mut spin_y = 0.0;

        let modern = event.delta_x != 0.0 || event.delta_y != 0.0;

        let (mut pixel_x, mut pixel_y) = match event.wheel_delta {
            Some(wheel_delta) if !modern => {
                spin_y = -wheel_delta / 120.0;
                (0.0, spin_y * self.config.pixel_step)
            }
            _ => (event.delta_x, event.delta_y),
        };

        if modern {
            let unit = match event.mode {
                DeltaMode::Pixel => 1.0,
                DeltaMode::Line => self.config.line_height,
                DeltaMode::Page => self.config.page_height,
            };
            pixel_x *= unit;
            pixel_y *= unit;
        }

        // Fall back to one notch in the scroll direction when only pixels are known
        if pixel_x != 0.0 && spin_x == 0.0 {
            spin_x = if pixel_x < 1.0 { -1.0 } else { 1.0 };
        }
        if pixel_y != 0.0 && spin_y == 0.0 {
            spin_y = if pixel_y < 1.0 { -1.0 } else { 1.0 };
        }

        NormalizedWheel {
            spin_x,
            spin_y,
            pixel_x,
            pixel_y,
        }
    }

    /// Scroll target produced by a wheel event
    ///
    /// Wheeling down (positive pixels) moves the content left.
    pub fn target(&self, event: &WheelEvent) -> f64 {
        -self.normalize(event).pixel_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_mode_passes_through() {
        let normalizer = WheelNormalizer::default();
        let n = normalizer.normalize(&WheelEvent::pixels(0.0, 120.0));
        assert_eq!(n.pixel_y, 120.0);
        assert_eq!(n.spin_y, 1.0);
        assert_eq!(normalizer.target(&WheelEvent::pixels(0.0, 120.0)), -120.0);
    }

    #[test]
    fn test_line_and_page_modes_scale() {
        let normalizer = WheelNormalizer::default();
        assert_eq!(normalizer.normalize(&WheelEvent::lines(0.0, 3.0)).pixel_y, 120.0);
        assert_eq!(normalizer.normalize(&WheelEvent::pages(0.0, -1.0)).pixel_y, -800.0);
        assert_eq!(normalizer.normalize(&WheelEvent::lines(2.0, 0.0)).pixel_x, 80.0);
    }

    #[test]
    fn test_legacy_notch() {
        let normalizer = WheelNormalizer::default();
        let n = normalizer.normalize(&WheelEvent::legacy(-120.0));
        assert_eq!(n.spin_y, 1.0);
        assert_eq!(n.pixel_y, 10.0);
        assert_eq!(normalizer.target(&WheelEvent::legacy(240.0)), 20.0);
    }

    #[test]
    fn test_custom_constants() {
        let normalizer = WheelNormalizer::new(WheelConfig {
            pixel_step: 10.0,
            line_height: 16.0,
            page_height: 600.0,
        });
        assert_eq!(normalizer.target(&WheelEvent::lines(0.0, 1.0)), -16.0);
    }

    #[test]
    fn test_empty_event_is_still() {
        let normalizer = WheelNormalizer::default();
        assert_eq!(normalizer.normalize(&WheelEvent::default()), NormalizedWheel::default());
    }
}

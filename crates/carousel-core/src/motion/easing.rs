//! L4 Atomic Layer: Exponential easing primitives
//!
//! Both engines use the same first-order low-pass idiom: each tick closes a
//! fixed fraction of whatever distance remains.

/// Move `current` toward `target` by `factor` of the remaining gap
///
/// # Arguments
/// * `current` - Value before the step
/// * `target` - Value being approached
/// * `factor` - Fraction of the gap closed per step, in (0, 1]
#[inline]
pub fn approach(current: f64, target: f64, factor: f64) -> f64 {
    current - (current - target) * factor
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Sign of `value` as -1, 0 or 1
///
/// Zero maps to zero instead of the NaN a bare `value / value.abs()` gives.
#[inline]
pub fn unit_sign(value: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        0.0
    } else {
        value / value.abs()
    }
}

#[cfg(test)]
/// Number of steps a decay of `factor` per step needs to shrink `gap` below `epsilon`
pub fn steps_to_settle(gap: f64, factor: f64, epsilon: f64) -> u32 {
    let gap = gap.abs();
    if gap < epsilon {
        return 0;
    }
    ((epsilon / gap).ln() / factor.ln()).floor() as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approach_closes_fraction_of_gap() {
        assert!((approach(0.0, 100.0, 0.1) - 10.0).abs() < 1e-12);
        assert!((approach(100.0, 0.0, 0.1) - 90.0).abs() < 1e-12);
        assert_eq!(approach(5.0, 5.0, 0.1), 5.0);
    }

    #[test]
    fn test_lerp() {
        assert!((lerp(1.0, 1.2, 0.0) - 1.0).abs() < 1e-12);
        assert!((lerp(1.0, 1.2, 0.5) - 1.1).abs() < 1e-12);
        assert!((lerp(1.0, 1.2, 1.0) - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_unit_sign_guards_zero() {
        assert_eq!(unit_sign(-42.0), -1.0);
        assert_eq!(unit_sign(0.3), 1.0);
        assert_eq!(unit_sign(0.0), 0.0);
        assert_eq!(unit_sign(-0.0), 0.0);
    }

    #[test]
    fn test_steps_to_settle() {
        assert_eq!(steps_to_settle(0.001, 0.9, 0.01), 0);
        // 120 * 0.9^89 > 0.01 > 120 * 0.9^90
        assert_eq!(steps_to_settle(120.0, 0.9, 0.01), 90);
        // 0.92^110 > 0.0001 > 0.92^111
        assert_eq!(steps_to_settle(1.0, 0.92, 0.0001), 111);
    }
}

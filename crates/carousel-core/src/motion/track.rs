//! L4 Atomic Layer: The virtual track tiles sit on
//!
//! The track is conceptually infinite: tiles leaving one edge re-enter from
//! the other, one slot early so that nothing snaps at the seam.

use crate::{Error, Result};

/// Tile slots laid out at a fixed pitch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    tile_count: usize,
    pitch: f64,
}

impl Track {
    /// Create a track, rejecting layouts with no tiles or a non-positive pitch
    pub fn new(tile_count: usize, pitch: f64) -> Result<Self> {
        if tile_count == 0 || !pitch.is_finite() || pitch <= 0.0 {
            return Err(Error::InvalidLayout { tile_count, pitch });
        }
        Ok(Self { tile_count, pitch })
    }

    #[inline]
    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Tile width plus inter-tile margin
    #[inline]
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Length of one full lap around the track
    #[inline]
    pub fn length(&self) -> f64 {
        self.tile_count as f64 * self.pitch
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index < self.tile_count
    }

    /// Unwrapped position of the slot at `index`
    #[inline]
    pub fn nominal(&self, index: usize) -> f64 {
        index as f64 * self.pitch
    }

    /// Nominal positions for every slot, in index order
    pub fn slots(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.tile_count).map(|i| self.nominal(i))
    }

    /// Fold `offset + position` onto the track
    ///
    /// The result lies in `[-pitch, length - pitch)`, so a tile is already
    /// one slot into view on the leading edge when it disappears from the
    /// trailing one.
    pub fn wrap(&self, offset: f64, position: f64) -> f64 {
        let length = self.length();
        let mut folded = (offset + position + length + self.pitch).rem_euclid(length);
        // rem_euclid rounds up to `length` for tiny negative inputs
        if folded >= length {
            folded -= length;
        }
        folded - self.pitch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_layout() {
        assert!(matches!(
            Track::new(0, 100.0),
            Err(Error::InvalidLayout { tile_count: 0, .. })
        ));
        assert!(Track::new(3, 0.0).is_err());
        assert!(Track::new(3, -10.0).is_err());
        assert!(Track::new(3, f64::NAN).is_err());
        assert!(Track::new(3, f64::INFINITY).is_err());
    }

    #[test]
    fn test_length_and_slots() {
        let track = Track::new(5, 100.0).unwrap();
        assert_eq!(track.pitch(), 100.0);
        assert_eq!(track.length(), 500.0);
        assert_eq!(track.slots().collect::<Vec<_>>(), vec![0.0, 100.0, 200.0, 300.0, 400.0]);
        assert!(track.contains(4));
        assert!(!track.contains(5));
    }

    #[test]
    fn test_wrap_at_rest_keeps_slots() {
        let track = Track::new(5, 100.0).unwrap();
        for (i, x) in track.slots().enumerate() {
            let expected = if i == 4 { -100.0 } else { x };
            assert_eq!(track.wrap(0.0, x), expected);
        }
    }

    #[test]
    fn test_wrap_is_periodic() {
        let track = Track::new(5, 100.0).unwrap();
        for offset in [-1250.0, -30.0, 0.0, 75.0, 999.0] {
            for p in [0.0, 100.0, 250.0, 400.0] {
                assert_eq!(
                    track.wrap(offset, p),
                    track.wrap(offset, p + track.length()),
                    "offset {offset} position {p}"
                );
            }
        }
    }

    #[test]
    fn test_wrap_handles_negative_positions() {
        let track = Track::new(5, 100.0).unwrap();
        let x = track.wrap(-10_000.0, 0.0);
        assert!((-100.0..400.0).contains(&x));
        assert_eq!(x, 0.0);
        assert_eq!(track.wrap(-150.0, 0.0), 350.0);
    }

    #[test]
    fn test_wrap_stays_below_upper_bound() {
        let track = Track::new(5, 100.0).unwrap();
        let mut offset: f64 = -600.0;
        for _ in 0..2000 {
            offset = f64::from_bits(offset.to_bits() + 1);
            for p in [-100.0, -1e-300, 0.0, 400.0] {
                let x = track.wrap(offset, p);
                assert!((-100.0..400.0).contains(&x), "offset {offset} position {p} got {x}");
            }
        }
    }
}

//! Motion engine for the carousel
//!
//! Everything here is advanced by a single per-frame tick and holds no
//! clock of its own, so the same inputs always produce the same frames.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure exponential approach and interpolation helpers
//! - `track` - Tile slots and wrap-around placement on the virtual track
//!
//! ## L3 Molecular Layer
//! - `scroll` - Scroll position easing toward an input-driven target
//! - `hover` - Interruptible per-tile scale animations
//!
//! # Usage
//!
//! ```ignore
//! use carousel_core::motion::{ScrollEngine, Track};
//!
//! let track = Track::new(5, 100.0)?;
//! let mut engine = ScrollEngine::with_defaults();
//!
//! engine.set_target(-120.0, TargetMode::Gesture);
//!
//! // Once per frame
//! engine.tick();
//! let x = engine.wrapped_position(&track, track.nominal(2));
//! ```

// L4 Atomic Layer
pub mod easing;
pub mod track;

// L3 Molecular Layer
pub mod hover;
pub mod scroll;

pub use hover::{HoverAnimation, HoverPhase, HoverScaleEngine};
pub use scroll::{ScrollEngine, TargetMode};
pub use track::Track;

//! Input normalization
//!
//! Turns device-level wheel and pointer events into the single scalar target
//! the scroll engine understands.

pub mod drag;
pub mod wheel;

pub use drag::{DragRelease, DragSession, DragTracker};
pub use wheel::{DeltaMode, NormalizedWheel, WheelEvent, WheelNormalizer};

pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod motion;
pub mod slides;

pub use config::{
    CarouselConfig, DragConfig, GeneralConfig, HoverConfig, ScrollConfig, UiConfig, WheelConfig,
};
pub use controller::{CarouselController, DragState, Frame, Release, RenderSink, TileOffset, TileScale};
pub use error::{Error, Result};
pub use input::{DeltaMode, WheelEvent};
pub use motion::{HoverScaleEngine, ScrollEngine, TargetMode, Track};
pub use slides::{Slide, SlideManifest};

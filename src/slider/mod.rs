//! Snap-slider position tracking for horizontally scrolled strips.

mod tracker;

pub use tracker::{ScrollContainer, SnapSlider};

//! Presentation overlay

pub mod overlay;

pub use overlay::OverlayRenderer;

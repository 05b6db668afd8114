//! High-level detection module

pub mod config;
pub mod detector;

pub use config::{BallStrategy, DetectionConfig, VisualizationConfig};
pub use detector::{CandidatePixels, Detection, DetectionStats, MarkerDetector};

//! Offside Computer Vision Library
//!
//! Colour-marker detection and offside evaluation for still images of a
//! football play: classify pixels, cluster them into players, then apply the
//! offside rule along the image x-axis.

pub mod classify;
pub mod cluster;
pub mod detection;
pub mod error;
pub mod offside;
pub mod render;
pub mod session;
pub mod utils;

// Re-export commonly used types
pub use classify::{PixelClass, PixelClassifier};
pub use cluster::{Cluster, ClusterStrategy, consolidate};
pub use detection::{Detection, DetectionConfig, MarkerDetector};
pub use error::{AnalysisError, Prerequisite};
pub use offside::{AnalysisResult, DefenderLines, OffsideLine, analyze, evaluate};
pub use render::OverlayRenderer;
pub use session::AnalysisSession;

pub use offside_core::{Point, Team};

// Error handling
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Core traits for the CV system
pub mod traits {
    use crate::cluster::Cluster;
    use offside_core::Point;

    /// Groups same-category pixel coordinates into clusters.
    ///
    /// Implementations must agree exactly: seeds are visited in input order,
    /// a seed already absorbed by an earlier cluster is skipped, and a
    /// cluster holds every input point strictly closer than `radius` to its
    /// seed. Only clusters larger than `min_size` are returned.
    pub trait ClusterSearch {
        fn find_clusters(&self, points: &[Point], radius: f64, min_size: usize) -> Vec<Cluster>;
    }
}

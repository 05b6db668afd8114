//! Consolidation of raw marker pixels into player positions

pub mod grid;
pub mod naive;

pub use grid::GridClusterer;
pub use naive::NaiveClusterer;

use crate::traits::ClusterSearch;
use offside_core::Point;
use offside_core::geometry::centroid;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A group of raw points collapsed to its centroid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    pub centroid: Point,
    pub size: usize,
}

/// Which [`ClusterSearch`] implementation to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterStrategy {
    /// Scan the whole input for every seed
    #[default]
    Naive,
    /// Bucket points into radius-sized cells and scan only the 3x3 neighbourhood
    Grid,
}

impl ClusterStrategy {
    pub fn find_clusters(&self, points: &[Point], radius: f64, min_size: usize) -> Vec<Cluster> {
        match self {
            ClusterStrategy::Naive => NaiveClusterer.find_clusters(points, radius, min_size),
            ClusterStrategy::Grid => GridClusterer.find_clusters(points, radius, min_size),
        }
    }
}

/// Clustering configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Points strictly closer than this to a seed join its cluster
    pub radius: f64,
    /// Clusters must be strictly larger than this to count as a player
    pub min_cluster_size: usize,
    /// Upper bound on players reported per team
    pub max_players: usize,
    pub strategy: ClusterStrategy,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            radius: 50.0,
            min_cluster_size: 5,
            max_players: 11,
            strategy: ClusterStrategy::Naive,
        }
    }
}

/// Collapse raw same-category points into player positions.
///
/// When more than `max_players` clusters survive, the positions are sorted
/// by descending x (stable) and the first `max_players` are kept. This is a
/// positional cut, not a ranking by cluster size.
pub fn consolidate(points: &[Point], config: &ClusteringConfig) -> Vec<Point> {
    let clusters = config
        .strategy
        .find_clusters(points, config.radius, config.min_cluster_size);

    let mut consolidated: Vec<Point> = clusters.iter().map(|c| c.centroid).collect();

    if consolidated.len() > config.max_players {
        warn!(
            found = consolidated.len(),
            kept = config.max_players,
            "too many clusters, keeping rightmost"
        );
        consolidated.sort_by(|a, b| b.x.cmp(&a.x));
        consolidated.truncate(config.max_players);
    }

    consolidated
}

/// Build a cluster from the points collected around one seed, if large enough.
pub(crate) fn finish_cluster(members: &[Point], min_size: usize) -> Option<Cluster> {
    if members.len() <= min_size {
        return None;
    }
    centroid(members).map(|centroid| Cluster {
        centroid,
        size: members.len(),
    })
}

//! Greedy radius clustering over the full point list

use super::{Cluster, finish_cluster};
use crate::traits::ClusterSearch;
use offside_core::Point;
use std::collections::HashSet;

/// O(n²) single-pass greedy agglomeration.
///
/// Every unprocessed point in input order seeds a cluster made of all input
/// points (processed or not) strictly within `radius` of it. Collected points
/// are marked processed so they never seed a cluster of their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveClusterer;

impl ClusterSearch for NaiveClusterer {
    fn find_clusters(&self, points: &[Point], radius: f64, min_size: usize) -> Vec<Cluster> {
        let mut processed: HashSet<Point> = HashSet::new();
        let mut clusters = Vec::new();

        for seed in points {
            if processed.contains(seed) {
                continue;
            }

            let mut members = Vec::new();
            for other in points {
                if seed.distance(other) < radius {
                    members.push(*other);
                    processed.insert(*other);
                }
            }

            if let Some(cluster) = finish_cluster(&members, min_size) {
                clusters.push(cluster);
            }
        }

        clusters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_is_strict() {
        let mut points = vec![Point::new(0, 0); 6];
        points.extend(vec![Point::new(30, 40); 6]); // exactly 50 away

        let clusters = NaiveClusterer.find_clusters(&points, 50.0, 5);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0], Cluster { centroid: Point::new(0, 0), size: 6 });
        assert_eq!(clusters[1], Cluster { centroid: Point::new(30, 40), size: 6 });
    }

    #[test]
    fn test_processed_points_still_join_later_clusters() {
        // b is within radius of both a and c, so it is counted twice
        let a = Point::new(0, 0);
        let b = Point::new(40, 0);
        let c = Point::new(80, 0);
        let mut points = vec![a; 3];
        points.extend(vec![b; 3]);
        points.extend(vec![c; 3]);

        let clusters = NaiveClusterer.find_clusters(&points, 50.0, 5);
        assert_eq!(
            clusters,
            vec![
                Cluster { centroid: Point::new(20, 0), size: 6 },
                Cluster { centroid: Point::new(60, 0), size: 6 },
            ]
        );
    }

    #[test]
    fn test_small_clusters_are_noise() {
        let points = vec![Point::new(5, 5), Point::new(6, 5), Point::new(200, 200)];
        assert!(NaiveClusterer.find_clusters(&points, 50.0, 5).is_empty());
    }
}

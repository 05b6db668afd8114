//! Cell-bucketed variant of the greedy radius clustering

use super::{Cluster, NaiveClusterer, finish_cluster};
use crate::traits::ClusterSearch;
use offside_core::Point;
use std::collections::{HashMap, HashSet};

/// Same contract as [`NaiveClusterer`], but candidate neighbours come from a
/// uniform grid whose cells are at least `radius` wide, so only the 3x3 block
/// of cells around a seed is inspected.
///
/// Membership depends only on distance to the seed and the centroid only on
/// the member multiset, so the output matches the naive scan for any input.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridClusterer;

struct Grid {
    cell: i64,
    buckets: HashMap<(i64, i64), Vec<usize>>,
}

impl Grid {
    fn build(points: &[Point], cell: i64) -> Self {
        let mut buckets: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
        for (idx, p) in points.iter().enumerate() {
            buckets.entry(Self::key(p, cell)).or_default().push(idx);
        }
        Self { cell, buckets }
    }

    fn key(p: &Point, cell: i64) -> (i64, i64) {
        (i64::from(p.x).div_euclid(cell), i64::from(p.y).div_euclid(cell))
    }

    fn neighbours(&self, p: &Point) -> impl Iterator<Item = usize> + '_ {
        let (cx, cy) = Self::key(p, self.cell);
        (-1..=1)
            .flat_map(move |dy| (-1..=1).map(move |dx| (cx + dx, cy + dy)))
            .filter_map(|key| self.buckets.get(&key))
            .flatten()
            .copied()
    }
}

impl ClusterSearch for GridClusterer {
    fn find_clusters(&self, points: &[Point], radius: f64, min_size: usize) -> Vec<Cluster> {
        if !radius.is_finite() || radius > i32::MAX as f64 {
            return NaiveClusterer.find_clusters(points, radius, min_size);
        }

        let grid = Grid::build(points, (radius.ceil() as i64).max(1));
        let mut processed: HashSet<Point> = HashSet::new();
        let mut clusters = Vec::new();

        for seed in points {
            if processed.contains(seed) {
                continue;
            }

            let mut members = Vec::new();
            for idx in grid.neighbours(seed) {
                let other = &points[idx];
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

//! Metric adjacencies on the digital plane.
//!
//! Two points are adjacent when they are at most one unit apart along each
//! axis and their L1 distance does not exceed `max_norm1`. With
//! `max_norm1 = 1` this is the 4-adjacency, with `max_norm1 = 2` the
//! 8-adjacency.

use dss_kernel::Point;
use serde::{Deserialize, Serialize};

/// Offsets of the 3x3 block around a point, center excluded, in
/// counter-clockwise order starting from +x.
const RING: [(i64, i64); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetricAdjacency {
    pub max_norm1: u64,
}

impl MetricAdjacency {
    /// Standard 4-neighborhood.
    pub const FOUR: Self = Self { max_norm1: 1 };
    /// Standard 8-neighborhood.
    pub const EIGHT: Self = Self { max_norm1: 2 };

    pub const fn new(max_norm1: u64) -> Self {
        Self { max_norm1 }
    }

    /// Adjacency is reflexive: a point is adjacent to itself.
    pub fn is_adjacent_to(&self, p1: Point, p2: Point) -> bool {
        p1.norm_inf_to(&p2) <= 1 && p1.norm1_to(&p2) <= self.max_norm1
    }

    pub fn is_properly_adjacent_to(&self, p1: Point, p2: Point) -> bool {
        p1 != p2 && self.is_adjacent_to(p1, p2)
    }

    /// Closed neighborhood of `p`: `p` itself first, then its proper
    /// neighbors counter-clockwise from +x. Neighbors that would overflow
    /// the coordinate range are skipped.
    pub fn neighborhood(&self, p: Point) -> impl Iterator<Item = Point> + Clone + '_ {
        std::iter::once(p).chain(self.proper_neighborhood(p))
    }

    /// Neighbors of `p`, `p` excluded.
    pub fn proper_neighborhood(&self, p: Point) -> impl Iterator<Item = Point> + Clone + '_ {
        RING.iter()
            .filter(|(dx, dy)| dx.unsigned_abs() + dy.unsigned_abs() <= self.max_norm1)
            .filter_map(move |&(dx, dy)| p.checked_offset(dx, dy))
    }

    pub fn neighborhood_filtered<'a, F>(&'a self, p: Point, mut keep: F) -> impl Iterator<Item = Point> + 'a
    where
        F: FnMut(&Point) -> bool + 'a,
    {
        self.neighborhood(p).filter(move |q| keep(q))
    }

    pub fn proper_neighborhood_filtered<'a, F>(
        &'a self,
        p: Point,
        mut keep: F,
    ) -> impl Iterator<Item = Point> + 'a
    where
        F: FnMut(&Point) -> bool + 'a,
    {
        self.proper_neighborhood(p).filter(move |q| keep(q))
    }
}

//! Incremental exact convex hull of lattice points.
//!
//! A hull is stored as its two monotone chains. Both run from the
//! bottom-most, left-most vertex to the top-most, right-most one: the east
//! chain turns left at every vertex, the west chain turns right. Chains are
//! sorted, so a point arriving beyond either end of a chain costs a couple
//! of orientation tests plus one per vertex it swallows; points along a
//! digital straight run always arrive that way.
//!
//! The counter-clockwise vertex ring is a derived view. A point-set hull
//! with one or two distinct points degenerates to a single vertex or a
//! segment.

use crate::geometry::Point;
use crate::predicate::{ExactPredicate, Orientation};
use std::cmp::Ordering;
use std::collections::VecDeque;

/// Turn kept at every interior vertex of the east chain.
const EAST_TURN: Orientation = Orientation::Left;
/// Turn kept at every interior vertex of the west chain.
const WEST_TURN: Orientation = Orientation::Right;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConvexHull {
    east: VecDeque<Point>,
    west: VecDeque<Point>,
}

/// What one insertion did to a chain.
#[derive(Debug)]
struct ChainEdit {
    /// Final index of the inserted point.
    at: usize,
    /// Vertices removed behind the new point, nearest first.
    behind: Vec<Point>,
    /// Vertices removed ahead of the new point, nearest first.
    ahead: Vec<Point>,
}

/// Undo record of [`ConvexHull::insert_undoable`].
#[derive(Debug, Default)]
pub(crate) struct HullEdit {
    seeded: bool,
    east: Option<ChainEdit>,
    west: Option<ChainEdit>,
}

impl HullEdit {
    pub(crate) fn changed(&self) -> bool {
        self.seeded || self.east.is_some() || self.west.is_some()
    }
}

impl ConvexHull {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_point(point: Point) -> Self {
        Self {
            east: VecDeque::from([point]),
            west: VecDeque::from([point]),
        }
    }

    /// Build a hull by inserting every point in turn.
    pub fn from_points<K: ExactPredicate>(kernel: &K, points: impl IntoIterator<Item = Point>) -> Self {
        let mut hull = Self::new();
        for p in points {
            hull.insert(kernel, p);
        }
        hull
    }

    /// Vertices in counter-clockwise order, bottom-most (then left-most)
    /// vertex first.
    pub fn vertices(&self) -> Vec<Point> {
        let mut ring: Vec<Point> = self.east.iter().copied().collect();
        let between = self.west.len().saturating_sub(2);
        ring.extend(self.west.iter().rev().skip(1).take(between));
        ring
    }

    pub fn len(&self) -> usize {
        self.east.len() + self.west.len().saturating_sub(2)
    }

    pub fn is_empty(&self) -> bool {
        self.east.is_empty()
    }

    /// Boundary edges. A segment hull has exactly one edge; a single point
    /// has none.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> {
        let ring = self.vertices();
        let n = ring.len();
        let count = match n {
            0 | 1 => 0,
            2 => 1,
            _ => n,
        };
        (0..count).map(move |i| (ring[i], ring[(i + 1) % n]))
    }

    /// Add `point`, returning whether the hull changed.
    ///
    /// Points inside or on the boundary are redundant and leave the hull
    /// untouched.
    pub fn insert<K: ExactPredicate>(&mut self, kernel: &K, point: Point) -> bool {
        self.insert_undoable(kernel, point).changed()
    }

    /// [`insert`](Self::insert), keeping what is needed to take it back.
    pub(crate) fn insert_undoable<K: ExactPredicate>(&mut self, kernel: &K, point: Point) -> HullEdit {
        if self.is_empty() {
            *self = Self::from_point(point);
            return HullEdit {
                seeded: true,
                ..HullEdit::default()
            };
        }
        HullEdit {
            seeded: false,
            east: insert_into_chain(kernel, &mut self.east, EAST_TURN, point),
            west: insert_into_chain(kernel, &mut self.west, WEST_TURN, point),
        }
    }

    /// Revert the most recent insertion. Edits must be undone in reverse
    /// order of application.
    pub(crate) fn undo(&mut self, edit: HullEdit) {
        if edit.seeded {
            *self = Self::new();
            return;
        }
        if let Some(edit) = edit.east {
            undo_chain(&mut self.east, edit);
        }
        if let Some(edit) = edit.west {
            undo_chain(&mut self.west, edit);
        }
    }

    /// Closed containment: interior or boundary.
    pub fn contains<K: ExactPredicate>(&self, kernel: &K, point: Point) -> bool {
        !self.is_empty()
            && chain_contains(kernel, &self.east, EAST_TURN, point)
            && chain_contains(kernel, &self.west, WEST_TURN, point)
    }

    /// Both chains sorted, strictly turning their own way, and sharing
    /// their end points.
    pub fn is_convex<K: ExactPredicate>(&self, kernel: &K) -> bool {
        self.east.front() == self.west.front()
            && self.east.back() == self.west.back()
            && chain_is_convex(kernel, &self.east, EAST_TURN)
            && chain_is_convex(kernel, &self.west, WEST_TURN)
    }
}

/// Index at which `point` keeps `chain` sorted, or `None` when it is
/// already a vertex. Scans inwards from both ends at once, so points near
/// either end are placed in constant time.
fn sorted_position(chain: &VecDeque<Point>, point: Point) -> Option<usize> {
    let (mut lo, mut hi) = (0, chain.len());
    while lo < hi {
        match chain[lo].cmp_lowest(&point) {
            Ordering::Less => lo += 1,
            Ordering::Equal => return None,
            Ordering::Greater => return Some(lo),
        }
        match chain[hi - 1].cmp_lowest(&point) {
            Ordering::Greater => hi -= 1,
            Ordering::Equal => return None,
            Ordering::Less => return Some(hi),
        }
    }
    Some(lo)
}

fn insert_into_chain<K: ExactPredicate>(
    kernel: &K,
    chain: &mut VecDeque<Point>,
    turn: Orientation,
    point: Point,
) -> Option<ChainEdit> {
    let at = sorted_position(chain, point)?;
    // Between two vertices, only a point beyond their edge joins the chain.
    if at > 0 && at < chain.len() && kernel.orient(chain[at - 1], chain[at], point) != turn.reversed() {
        return None;
    }
    chain.insert(at, point);

    let mut edit = ChainEdit {
        at,
        behind: Vec::new(),
        ahead: Vec::new(),
    };
    while edit.at >= 2 && kernel.orient(chain[edit.at - 2], chain[edit.at - 1], point) != turn {
        edit.at -= 1;
        edit.behind.extend(chain.remove(edit.at));
    }
    while edit.at + 2 < chain.len() && kernel.orient(point, chain[edit.at + 1], chain[edit.at + 2]) != turn {
        edit.ahead.extend(chain.remove(edit.at + 1));
    }
    Some(edit)
}

fn undo_chain(chain: &mut VecDeque<Point>, edit: ChainEdit) {
    chain.remove(edit.at);
    for &q in edit.ahead.iter().rev() {
        chain.insert(edit.at, q);
    }
    for &q in &edit.behind {
        chain.insert(edit.at, q);
    }
}

fn chain_contains<K: ExactPredicate>(kernel: &K, chain: &VecDeque<Point>, turn: Orientation, point: Point) -> bool {
    match sorted_position(chain, point) {
        None => true,
        Some(at) if at == 0 || at == chain.len() => false,
        Some(at) => kernel.orient(chain[at - 1], chain[at], point) != turn.reversed(),
    }
}

fn chain_is_convex<K: ExactPredicate>(kernel: &K, chain: &VecDeque<Point>, turn: Orientation) -> bool {
    let n = chain.len();
    (1..n).all(|i| chain[i - 1].cmp_lowest(&chain[i]) == Ordering::Less)
        && (2..n).all(|i| kernel.orient(chain[i - 2], chain[i - 1], chain[i]) == turn)
}

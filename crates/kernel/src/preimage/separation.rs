//! Exact search for a line separating two convex hulls.
//!
//! The inner hull must end up on the left of (or on) the line and the outer
//! hull strictly on its right. Two disjoint convex polygons always admit such
//! a line parallel to an edge of one of them; when both hulls are points or
//! segments the line may instead have to be perpendicular to those edges, or
//! to the segment joining two single points.

use crate::geometry::{StraightLine, Vector};
use crate::hull::ConvexHull;
use crate::predicate::{ExactPredicate, Orientation};
use std::cmp::Ordering;

/// Directions worth trying, in a fixed order determined by the hulls alone.
fn candidate_directions(inner: &ConvexHull, outer: &ConvexHull) -> Vec<Vector> {
    let mut edges: Vec<Vector> = inner
        .edges()
        .chain(outer.edges())
        .map(|(u, v)| v - u)
        .collect();

    let degenerate = inner.len() <= 2 && outer.len() <= 2;
    if degenerate {
        if let (&[p], &[q]) = (inner.vertices().as_slice(), outer.vertices().as_slice()) {
            edges.push(q - p);
        }
        let normals: Vec<Vector> = edges.iter().map(Vector::perp).collect();
        edges.extend(normals);
    }

    edges.into_iter().flat_map(|d| [d, -d]).collect()
}

/// Try the family of lines with direction `d`: anchor it at the inner vertex
/// furthest to the right, then check every outer vertex.
fn try_direction<K: ExactPredicate>(
    kernel: &K,
    direction: Vector,
    inner: &ConvexHull,
    outer: &ConvexHull,
) -> Option<StraightLine> {
    let mut vertices = inner.vertices().into_iter();
    let first = vertices.next()?;
    let anchor = vertices.fold(first, |w, x| {
        if kernel.cross_sign(direction, x - w) == Ordering::Less {
            x
        } else {
            w
        }
    });
    let line = StraightLine::new(anchor, direction).ok()?;
    outer
        .vertices()
        .into_iter()
        .all(|q| kernel.orientation(&line, q) == Orientation::Right)
        .then_some(line)
}

/// First separating line found among the candidate directions, or `None`
/// when the hulls intersect.
pub fn find_separating_line<K: ExactPredicate>(
    kernel: &K,
    inner: &ConvexHull,
    outer: &ConvexHull,
) -> Option<StraightLine> {
    if inner.is_empty() || outer.is_empty() {
        return None;
    }
    candidate_directions(inner, outer)
        .into_iter()
        .find_map(|d| try_direction(kernel, d, inner, outer))
}

/// Whether `line` keeps every inner vertex left of or on it and every outer
/// vertex strictly right.
pub fn separates<K: ExactPredicate>(
    kernel: &K,
    line: &StraightLine,
    inner: &ConvexHull,
    outer: &ConvexHull,
) -> bool {
    inner
        .vertices()
        .into_iter()
        .all(|p| kernel.orientation(line, p).is_left_or_on())
        && outer
            .vertices()
            .into_iter()
            .all(|q| kernel.orientation(line, q) == Orientation::Right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::predicate::NativeKernel;

    fn hull(points: &[(i64, i64)]) -> ConvexHull {
        ConvexHull::from_points(&NativeKernel, points.iter().map(|&(x, y)| Point::new(x, y)))
    }

    fn check(inner: &[(i64, i64)], outer: &[(i64, i64)]) -> Option<StraightLine> {
        let (i, o) = (hull(inner), hull(outer));
        let line = find_separating_line(&NativeKernel, &i, &o);
        if let Some(l) = &line {
            assert!(separates(&NativeKernel, l, &i, &o));
        }
        line
    }

    #[test]
    fn test_two_points() {
        assert!(check(&[(0, 0)], &[(0, 1)]).is_some());
        assert!(check(&[(3, -2)], &[(-5, 7)]).is_some());
    }

    #[test]
    fn test_identical_points_do_not_separate() {
        assert!(check(&[(1, 1)], &[(1, 1)]).is_none());
    }

    #[test]
    fn test_collinear_disjoint_segments() {
        assert!(check(&[(0, 0), (2, 0)], &[(3, 0), (5, 0)]).is_some());
        assert!(check(&[(0, 0), (2, 0)], &[(2, 0), (5, 0)]).is_none());
        assert!(check(&[(0, 0), (4, 0)], &[(2, 0)]).is_none());
    }

    #[test]
    fn test_point_on_segment_line_outside_segment() {
        assert!(check(&[(0, 0)], &[(1, 1), (3, 3)]).is_some());
    }

    #[test]
    fn test_crossing_segments() {
        assert!(check(&[(0, 0), (2, 2)], &[(0, 2), (2, 0)]).is_none());
    }

    #[test]
    fn test_horizontal_rows() {
        let line = check(&[(0, 0), (1, 0), (2, 0)], &[(0, 1), (1, 1), (2, 1)]).unwrap();
        // Only horizontal lines separate two full rows.
        assert_eq!(line.direction().y, 0);
    }

    #[test]
    fn test_digital_segment_with_one_step() {
        // y = floor(x / 3): lower row points and the row above them.
        assert!(check(&[(0, 0), (1, 0), (2, 0), (3, 1)], &[(0, 1), (1, 1), (2, 1), (3, 2)]).is_some());
    }

    #[test]
    fn test_double_step_is_not_straight() {
        assert!(check(&[(0, 0), (1, 0), (2, 0), (3, 2)], &[(0, 1), (1, 1), (2, 1), (3, 3)]).is_none());
    }

    #[test]
    fn test_polygon_inside_polygon() {
        assert!(check(&[(1, 1), (2, 1), (1, 2)], &[(0, 0), (5, 0), (0, 5)]).is_none());
    }
}

//! Brute-force reference used by the integration tests.
//!
//! Shares nothing with the engine beyond `Point`; signs are computed
//! directly in `i128` on small coordinates.

#![allow(dead_code)]

use dss_kernel::Point;

pub fn p(x: i64, y: i64) -> Point {
    Point::new(x, y)
}

fn sign(a: Point, b: Point, c: Point) -> i8 {
    let v = (b.x as i128 - a.x as i128) * (c.y as i128 - a.y as i128)
        - (b.y as i128 - a.y as i128) * (c.x as i128 - a.x as i128);
    v.signum() as i8
}

fn on_segment(a: Point, b: Point, q: Point) -> bool {
    sign(a, b, q) == 0
        && a.x.min(b.x) <= q.x
        && q.x <= a.x.max(b.x)
        && a.y.min(b.y) <= q.y
        && q.y <= a.y.max(b.y)
}

fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let (o1, o2) = (sign(a, b, c), sign(a, b, d));
    let (o3, o4) = (sign(c, d, a), sign(c, d, b));
    if o1 * o2 < 0 && o3 * o4 < 0 {
        return true;
    }
    on_segment(a, b, c) || on_segment(a, b, d) || on_segment(c, d, a) || on_segment(c, d, b)
}

fn in_triangle(a: Point, b: Point, c: Point, q: Point) -> bool {
    let s = [sign(a, b, q), sign(b, c, q), sign(c, a, q)];
    if sign(a, b, c) == 0 {
        return on_segment(a, b, q) || on_segment(b, c, q) || on_segment(c, a, q);
    }
    s.iter().all(|&x| x >= 0) || s.iter().all(|&x| x <= 0)
}

fn in_hull(points: &[Point], q: Point) -> bool {
    for &a in points {
        for &b in points {
            for &c in points {
                if in_triangle(a, b, c, q) {
                    return true;
                }
            }
        }
    }
    false
}

/// Whether the convex hulls of `inner` and `outer` share a point.
pub fn hulls_intersect(inner: &[Point], outer: &[Point]) -> bool {
    if inner.iter().any(|&q| in_hull(outer, q)) || outer.iter().any(|&q| in_hull(inner, q)) {
        return true;
    }
    for &a in inner {
        for &b in inner {
            for &c in outer {
                for &d in outer {
                    if segments_intersect(a, b, c, d) {
                        return true;
                    }
                }
            }
        }
    }
    false
}

/// Pairs `(x, floor(t)) / (x, floor(t) + 1)` with `t = (a * x + mu) / b`:
/// always a digital straight run.
pub fn digital_line(a: i64, b: i64, mu: i64, xs: impl IntoIterator<Item = i64>) -> Vec<(Point, Point)> {
    xs.into_iter()
        .map(|x| {
            let y = (a * x + mu).div_euclid(b);
            (p(x, y), p(x, y + 1))
        })
        .collect()
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::point::Point;
use super::vector::Vector;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("line direction has zero length")]
    ZeroDirection,
    #[error("cannot build a line through two copies of {0}")]
    CoincidentPoints(Point),
}

/// An oriented straight line: an anchor lattice point and a non-zero
/// integer direction.
///
/// Orientation matters: the predicate reports points as left or right of
/// the direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LineRepr")]
pub struct StraightLine {
    anchor: Point,
    direction: Vector,
}

#[derive(Deserialize)]
struct LineRepr {
    anchor: Point,
    direction: Vector,
}

impl TryFrom<LineRepr> for StraightLine {
    type Error = LineError;
    fn try_from(repr: LineRepr) -> Result<Self, Self::Error> {
        Self::new(repr.anchor, repr.direction)
    }
}

impl StraightLine {
    pub fn new(anchor: Point, direction: Vector) -> Result<Self, LineError> {
        if direction.is_zero() {
            return Err(LineError::ZeroDirection);
        }
        Ok(Self { anchor, direction })
    }

    /// The line through `a` and `b`, oriented from `a` towards `b`.
    pub fn through(a: Point, b: Point) -> Result<Self, LineError> {
        if a == b {
            return Err(LineError::CoincidentPoints(a));
        }
        Ok(Self {
            anchor: a,
            direction: b - a,
        })
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn direction(&self) -> Vector {
        self.direction
    }

    /// `anchor + direction`, when it is representable as a lattice point.
    pub fn second_point(&self) -> Option<Point> {
        let x = i64::try_from(self.anchor.x as i128 + self.direction.x).ok()?;
        let y = i64::try_from(self.anchor.y as i128 + self.direction.y).ok()?;
        Some(Point::new(x, y))
    }

    /// Same line, travelled the other way. Left and right swap.
    pub fn reversed(&self) -> Self {
        Self {
            anchor: self.anchor,
            direction: -self.direction,
        }
    }

    /// Approximate `(slope, intercept)` of `y = slope * x + intercept`.
    ///
    /// Presentation only; returns `None` for vertical lines.
    pub fn slope_intercept(&self) -> Option<(f64, f64)> {
        if self.direction.x == 0 {
            return None;
        }
        let (dx, dy) = self.direction.to_f64();
        let slope = dy / dx;
        let intercept = self.anchor.y as f64 - slope * self.anchor.x as f64;
        Some((slope, intercept))
    }
}

//! 4-connected grid curves and the pixel pairs straddling their steps.
//!
//! A grid curve walks along pointels (pixel corners). Pixels are named by
//! their lower-left corner, so the unit square `[x, x+1] x [y, y+1]` is the
//! pixel `(x, y)`. Each unit step of the curve separates exactly two pixels:
//! the one on its left becomes the inner point of a constraint pair, the one
//! on its right the outer point.

use std::fmt;
use std::str::FromStr;

use dss_kernel::{ConstraintPair, Point, PreimageError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::adjacency::MetricAdjacency;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    #[error("a grid curve needs at least two distinct pointels")]
    TooShort,
    #[error("step {index} from {from} to {to} is not a unit 4-move")]
    NotConnected { index: usize, from: Point, to: Point },
    #[error("invalid Freeman code {code:?} at position {index}")]
    InvalidFreemanCode { index: usize, code: char },
    #[error("pointel {index} next to {point} leaves the supported coordinate range")]
    CoordinateOverflow { index: usize, point: Point },
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error(transparent)]
    Pair(#[from] PreimageError),
}

/// One unit move of a grid curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    East,
    North,
    West,
    South,
}

impl Step {
    pub fn from_freeman(code: char) -> Option<Self> {
        match code {
            '0' => Some(Self::East),
            '1' => Some(Self::North),
            '2' => Some(Self::West),
            '3' => Some(Self::South),
            _ => None,
        }
    }

    pub fn freeman_code(&self) -> char {
        match self {
            Self::East => '0',
            Self::North => '1',
            Self::West => '2',
            Self::South => '3',
        }
    }

    pub fn offset(&self) -> (i64, i64) {
        match self {
            Self::East => (1, 0),
            Self::North => (0, 1),
            Self::West => (-1, 0),
            Self::South => (0, -1),
        }
    }

    fn between(from: Point, to: Point) -> Option<Self> {
        match (to.x.checked_sub(from.x)?, to.y.checked_sub(from.y)?) {
            (1, 0) => Some(Self::East),
            (0, 1) => Some(Self::North),
            (-1, 0) => Some(Self::West),
            (0, -1) => Some(Self::South),
            _ => None,
        }
    }

    /// Pixels on the left and on the right of this step when it starts at
    /// pointel `from`. `from` must have `x > i64::MIN` and `y > i64::MIN`.
    fn incident_pixels(&self, from: Point) -> (Point, Point) {
        let Point { x, y } = from;
        match self {
            Self::East => (Point::new(x, y), Point::new(x, y - 1)),
            Self::North => (Point::new(x - 1, y), Point::new(x, y)),
            Self::West => (Point::new(x - 1, y - 1), Point::new(x - 1, y)),
            Self::South => (Point::new(x, y - 1), Point::new(x - 1, y - 1)),
        }
    }
}

/// A 4-connected sequence of pointels, open or closed.
///
/// A closed curve is given with its first pointel repeated at the end; the
/// repetition is dropped and the closing step is implied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct GridCurve {
    points: Vec<Point>,
    steps: Vec<Step>,
    pairs: Vec<ConstraintPair>,
    closed: bool,
}

impl GridCurve {
    pub fn new(mut points: Vec<Point>) -> Result<Self, CurveError> {
        if points.len() < 2 {
            return Err(CurveError::TooShort);
        }
        for (index, &point) in points.iter().enumerate() {
            if point.x == i64::MIN || point.y == i64::MIN {
                return Err(CurveError::CoordinateOverflow { index, point });
            }
        }
        let mut steps = Vec::with_capacity(points.len() - 1);
        for (index, w) in points.windows(2).enumerate() {
            let (from, to) = (w[0], w[1]);
            let step = MetricAdjacency::FOUR
                .is_properly_adjacent_to(from, to)
                .then(|| Step::between(from, to))
                .flatten()
                .ok_or(CurveError::NotConnected { index, from, to })?;
            steps.push(step);
        }

        // The shortest closed 4-curve goes around a single pixel.
        let closed = points.len() > 4 && points.first() == points.last();
        if closed {
            points.pop();
        }
        let pairs = points
            .iter()
            .zip(&steps)
            .map(|(&from, step)| {
                let (left, right) = step.incident_pixels(from);
                ConstraintPair::new(left, right)
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(pointels = points.len(), closed, "grid curve built");
        Ok(Self {
            points,
            steps,
            pairs,
            closed,
        })
    }

    /// Follow a Freeman chain code (`0` = +x, `1` = +y, `2` = -x, `3` = -y)
    /// from `start`. Whitespace in `codes` is ignored.
    pub fn from_freeman(start: Point, codes: &str) -> Result<Self, CurveError> {
        let mut points = vec![start];
        let mut current = start;
        for (index, code) in codes.chars().filter(|c| !c.is_whitespace()).enumerate() {
            let step = Step::from_freeman(code).ok_or(CurveError::InvalidFreemanCode { index, code })?;
            let (dx, dy) = step.offset();
            current = current
                .checked_offset(dx, dy)
                .ok_or(CurveError::CoordinateOverflow { index: index + 1, point: current })?;
            points.push(current);
        }
        Self::new(points)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of steps, the closing one included.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Steps with their starting pointel, in curve order.
    pub fn steps(&self) -> impl DoubleEndedIterator<Item = (Point, Step)> + ExactSizeIterator + Clone + '_ {
        self.points.iter().copied().zip(self.steps.iter().copied())
    }

    pub fn freeman_code(&self) -> String {
        self.steps().map(|(_, step)| step.freeman_code()).collect()
    }

    /// The (left pixel, right pixel) pair of every step, in curve order.
    pub fn incident_pairs(&self) -> impl DoubleEndedIterator<Item = ConstraintPair> + ExactSizeIterator + Clone + '_ {
        self.pairs.iter().copied()
    }
}

impl TryFrom<Vec<Point>> for GridCurve {
    type Error = CurveError;
    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<GridCurve> for Vec<Point> {
    fn from(curve: GridCurve) -> Self {
        let mut points = curve.points;
        if curve.closed {
            if let Some(&first) = points.first() {
                points.push(first);
            }
        }
        points
    }
}

impl fmt::Display for GridCurve {
    /// One `x y` line per pointel, the same format `from_str` reads.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.points {
            writeln!(f, "{} {}", p.x, p.y)?;
        }
        if self.closed {
            if let Some(first) = self.points.first() {
                writeln!(f, "{} {}", first.x, first.y)?;
            }
        }
        Ok(())
    }
}

impl FromStr for GridCurve {
    type Err = CurveError;

    /// Parse one `x y` pointel per line. Blank lines and lines starting
    /// with `#` are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut points = Vec::new();
        for (i, raw) in s.lines().enumerate() {
            let line = i + 1;
            let text = raw.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }
            let mut fields = text.split_whitespace();
            let (Some(x), Some(y), None) = (fields.next(), fields.next(), fields.next()) else {
                return Err(CurveError::Parse {
                    line,
                    reason: format!("expected two coordinates, got {text:?}"),
                });
            };
            let coord = |field: &str| {
                field.parse::<i64>().map_err(|e| CurveError::Parse {
                    line,
                    reason: format!("{field:?}: {e}"),
                })
            };
            points.push(Point::new(coord(x)?, coord(y)?));
        }
        Self::new(points)
    }
}

//! Exact side-of-line predicates.
//!
//! Every geometric decision in the crate reduces to the sign of a 2x2
//! determinant or of a dot product of two lattice vectors. Those signs are
//! computed by an [`ExactPredicate`] implementation; floating point never
//! takes part in a decision.

use num_bigint::BigInt;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::geometry::{Point, StraightLine, Vector};

/// Position of a point relative to an oriented line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Strictly on the left of the direction of travel (counter-clockwise).
    Left,
    /// Strictly on the right (clockwise).
    Right,
    /// Exactly on the line.
    On,
}

impl Orientation {
    pub fn from_sign(sign: Ordering) -> Self {
        match sign {
            Ordering::Greater => Orientation::Left,
            Ordering::Less => Orientation::Right,
            Ordering::Equal => Orientation::On,
        }
    }

    pub fn is_left_or_on(self) -> bool {
        self != Orientation::Right
    }

    /// Left and right swapped.
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Left => Orientation::Right,
            Orientation::Right => Orientation::Left,
            Orientation::On => Orientation::On,
        }
    }
}

/// Arithmetic strategy for exact sign computations.
///
/// Implementors decide which coordinates they can handle exactly through
/// [`supports`](ExactPredicate::supports); callers must reject points outside
/// that range before asking for signs involving them.
pub trait ExactPredicate {
    /// Whether sign computations involving `point` are exact.
    fn supports(&self, point: Point) -> bool;

    /// Sign of the cross product `u.x * v.y - u.y * v.x`.
    fn cross_sign(&self, u: Vector, v: Vector) -> Ordering;

    /// Sign of the dot product `u.x * v.x + u.y * v.y`.
    fn dot_sign(&self, u: Vector, v: Vector) -> Ordering;

    /// Side of `line` on which `point` lies.
    fn orientation(&self, line: &StraightLine, point: Point) -> Orientation {
        Orientation::from_sign(self.cross_sign(line.direction(), point - line.anchor()))
    }

    /// Turn direction of the path `a -> b -> c`.
    fn orient(&self, a: Point, b: Point, c: Point) -> Orientation {
        Orientation::from_sign(self.cross_sign(b - a, c - a))
    }
}

/// Largest coordinate magnitude handled by [`NativeKernel`].
pub const NATIVE_COORDINATE_LIMIT: i64 = 1 << 62;

/// Native `i128` arithmetic.
///
/// With |coordinate| <= 2^62 every vector component is below 2^63 and every
/// product below 2^126. Signs are obtained by comparing the two products,
/// never by subtracting them, so nothing overflows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeKernel;

impl ExactPredicate for NativeKernel {
    fn supports(&self, point: Point) -> bool {
        (-NATIVE_COORDINATE_LIMIT..=NATIVE_COORDINATE_LIMIT).contains(&point.x)
            && (-NATIVE_COORDINATE_LIMIT..=NATIVE_COORDINATE_LIMIT).contains(&point.y)
    }

    fn cross_sign(&self, u: Vector, v: Vector) -> Ordering {
        (u.x * v.y).cmp(&(u.y * v.x))
    }

    fn dot_sign(&self, u: Vector, v: Vector) -> Ordering {
        (u.x * v.x).cmp(&(-(u.y * v.y)))
    }
}

/// Arbitrary-precision arithmetic backed by `num-bigint`; exact for every
/// `i64` point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BigIntKernel;

impl ExactPredicate for BigIntKernel {
    fn supports(&self, _point: Point) -> bool {
        true
    }

    fn cross_sign(&self, u: Vector, v: Vector) -> Ordering {
        let lhs = BigInt::from(u.x) * BigInt::from(v.y);
        let rhs = BigInt::from(u.y) * BigInt::from(v.x);
        lhs.cmp(&rhs)
    }

    fn dot_sign(&self, u: Vector, v: Vector) -> Ordering {
        let sum = BigInt::from(u.x) * BigInt::from(v.x) + BigInt::from(u.y) * BigInt::from(v.y);
        sum.cmp(&BigInt::zero())
    }
}

impl<K: ExactPredicate + ?Sized> ExactPredicate for &K {
    fn supports(&self, point: Point) -> bool {
        (**self).supports(point)
    }

    fn cross_sign(&self, u: Vector, v: Vector) -> Ordering {
        (**self).cross_sign(u, v)
    }

    fn dot_sign(&self, u: Vector, v: Vector) -> Ordering {
        (**self).dot_sign(u, v)
    }
}

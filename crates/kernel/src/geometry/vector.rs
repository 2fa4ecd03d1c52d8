use serde::{Deserialize, Serialize};
use std::ops::Neg;

/// A displacement between two lattice points.
///
/// Components are `i128` so that the difference of any two `i64` points is
/// exact. Products of components are the job of an
/// [`ExactPredicate`](crate::predicate::ExactPredicate), never of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector {
    pub x: i128,
    pub y: i128,
}

impl Vector {
    pub const ZERO: Self = Self { x: 0, y: 0 };
    pub const X: Self = Self { x: 1, y: 0 };
    pub const Y: Self = Self { x: 0, y: 1 };

    pub const fn new(x: i128, y: i128) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Counter-clockwise quarter turn: `(x, y) -> (-y, x)`.
    pub fn perp(&self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    pub fn to_f64(&self) -> (f64, f64) {
        (self.x as f64, self.y as f64)
    }
}

impl Neg for Vector {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perp_is_quarter_turn() {
        assert_eq!(Vector::X.perp(), Vector::Y);
        assert_eq!(Vector::Y.perp(), -Vector::X);
        assert_eq!(Vector::new(3, -2).perp().perp(), Vector::new(-3, 2));
    }

    #[test]
    fn test_zero() {
        assert!(Vector::ZERO.is_zero());
        assert!(!Vector::X.is_zero());
    }
}

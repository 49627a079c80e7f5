//! 2D vector type for directions and offsets.

use num_traits::Float;
use std::ops::{Mul, Neg};

/// A 2D vector representing a direction or offset.
///
/// Tangent vectors on a Hermite segment are `Vec2` values: they describe
/// the curve's velocity at an endpoint, not a position in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Returns true if both components are exactly zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == F::zero() && self.y == F::zero()
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let v: Vec2<f64> = Vec2::new(3.0, 4.0);
        assert_eq!(v.x, 3.0);
        assert_eq!(v.y, 4.0);
    }

    #[test]
    fn test_zero() {
        let v: Vec2<f64> = Vec2::zero();
        assert!(v.is_zero());
        assert!(!Vec2::new(0.0, 1.0).is_zero());
    }

    #[test]
    fn test_scale_and_negate() {
        let v: Vec2<f64> = Vec2::new(1.0, -2.0);

        let scaled = v * 0.5;
        assert_eq!(scaled.x, 0.5);
        assert_eq!(scaled.y, -1.0);

        let flipped = -v;
        assert_eq!(flipped.x, -1.0);
        assert_eq!(flipped.y, 2.0);
    }
}

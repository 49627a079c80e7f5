//! 2D point type for positions.

use super::Vec2;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A 2D point representing a position in the plane.
///
/// Generic over floating-point types (`f32` or `f64`). Points are immutable
/// values; curve operations produce new points rather than mutating inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }
}

/// Point + vector gives a translated point.
impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, offset: Vec2<F>) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
        }
    }
}

/// Point - point gives the displacement vector between them.
impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

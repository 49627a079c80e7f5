//! Cubic Hermite segments with cardinal-derived tangents.
//!
//! A segment is defined by two endpoints and two tangent vectors. The
//! tangents come from a three-point cardinal configuration: P0 and P1 are
//! the endpoints, and a third shape point P2 steers the tangents without
//! itself lying on the curve.
//!
//! # Example
//!
//! ```
//! use hermite2d::Point2;
//! use hermite2d::curves::{HermiteSegment2, CARDINAL_TENSION};
//!
//! let points = [
//!     Point2::new(2.0, 2.0),
//!     Point2::new(12.0, 10.0),
//!     Point2::new(4.0, 8.0),
//! ];
//!
//! let segment = HermiteSegment2::from_control_points(&points, CARDINAL_TENSION).unwrap();
//! let path = segment.sample_path(100); // 101 plot vertices
//! assert_eq!(path.len(), 101);
//! ```

use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// Tension used when deriving tangents from the three control points.
///
/// Configuration value, not an algorithmic constraint; every tangent
/// function also accepts an explicit tension argument.
pub const CARDINAL_TENSION: f64 = 0.5;

/// Number of equal parameter steps used for the dense plot polyline.
///
/// Sampling with this value yields `PLOT_STEPS + 1` vertices, the first
/// being the segment's start point.
pub const PLOT_STEPS: usize = 100;

/// Fixed parameter values for the sparse point table (Q1..Q5).
pub const TABLE_PARAMS: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];

/// Derives the Hermite boundary tangents from a three-point cardinal
/// configuration.
///
/// Given control points `[P0, P1, P2]`, the tangent at the segment start
/// follows the chord from P0 to the shape point, the tangent at the end
/// follows the chord from the shape point to P1:
///
/// - `T0 = tension * (P2 - P0)`
/// - `T1 = tension * (P1 - P2)`
///
/// Fewer than 3 points is treated as degenerate-but-valid input and yields
/// the zero tangent pair. Coincident points (e.g. P0 == P2) likewise give a
/// zero-length tangent; the evaluator accepts both.
///
/// Note that P2 only shapes the tangents. Unlike a four-point Catmull-Rom
/// construction, the curve never passes through it.
pub fn cardinal_tangents<F: Float>(points: &[Point2<F>], tension: F) -> (Vec2<F>, Vec2<F>) {
    if points.len() < 3 {
        return (Vec2::zero(), Vec2::zero());
    }

    let (p0, p1, p2) = (points[0], points[1], points[2]);
    ((p2 - p0) * tension, (p1 - p2) * tension)
}

/// Evaluates the four cubic Hermite basis functions at `u`.
///
/// Returns `[h00, h10, h01, h11]` where h00/h10 weight the start and end
/// points and h01/h11 weight the start and end tangents:
///
/// - `h00(u) = 2u^3 - 3u^2 + 1`
/// - `h10(u) = -2u^3 + 3u^2`
/// - `h01(u) = u^3 - 2u^2 + u`
/// - `h11(u) = u^3 - u^2`
#[inline]
pub fn hermite_basis<F: Float>(u: F) -> [F; 4] {
    let u2 = u * u;
    let u3 = u2 * u;

    let one = F::one();
    let two = one + one;
    let three = two + one;

    [
        two * u3 - three * u2 + one,
        -two * u3 + three * u2,
        u3 - two * u2 + u,
        u3 - u2,
    ]
}

/// A single cubic Hermite segment in 2D.
///
/// The curve starts at `p0` with velocity `t0` and ends at `p1` with
/// velocity `t1`, for the parameter u in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HermiteSegment2<F> {
    /// Start point (u = 0)
    pub p0: Point2<F>,
    /// End point (u = 1)
    pub p1: Point2<F>,
    /// Tangent at the start point
    pub t0: Vec2<F>,
    /// Tangent at the end point
    pub t1: Vec2<F>,
}

impl<F: Float> HermiteSegment2<F> {
    /// Creates a new Hermite segment from explicit boundary conditions.
    #[inline]
    pub fn new(p0: Point2<F>, p1: Point2<F>, t0: Vec2<F>, t1: Vec2<F>) -> Self {
        Self { p0, p1, t0, t1 }
    }

    /// Builds a segment from a cardinal control-point set `[P0, P1, P2]`.
    ///
    /// Tangents are derived with [`cardinal_tangents`]. Returns `None` when
    /// fewer than 2 points are supplied; with exactly 2 points the tangents
    /// are zero and the segment degenerates to linear blending between the
    /// endpoints.
    pub fn from_control_points(points: &[Point2<F>], tension: F) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }

        let (t0, t1) = cardinal_tangents(points, tension);
        Some(Self::new(points[0], points[1], t0, t1))
    }

    /// Evaluates the segment at parameter `u` in [0, 1].
    ///
    /// `eval(0)` equals `p0` and `eval(1)` equals `p1`, up to floating-point
    /// rounding. Values outside [0, 1] extrapolate the cubic; non-finite
    /// input propagates arithmetically.
    ///
    /// # Example
    ///
    /// ```
    /// use hermite2d::{Point2, Vec2, curves::HermiteSegment2};
    ///
    /// let segment = HermiteSegment2::new(
    ///     Point2::new(0.0_f64, 0.0),
    ///     Point2::new(10.0, 0.0),
    ///     Vec2::new(0.0, 4.0),
    ///     Vec2::new(0.0, -4.0),
    /// );
    ///
    /// let end = segment.eval(1.0);
    /// assert!((end.x - 10.0).abs() < 1e-9);
    /// ```
    pub fn eval(&self, u: F) -> Point2<F> {
        let [h00, h10, h01, h11] = hermite_basis(u);

        Point2::new(
            h00 * self.p0.x + h10 * self.p1.x + h01 * self.t0.x + h11 * self.t1.x,
            h00 * self.p0.y + h10 * self.p1.y + h01 * self.t0.y + h11 * self.t1.y,
        )
    }

    /// Samples the segment at `steps` equal parameter increments for
    /// plotting.
    ///
    /// Returns `steps + 1` points in increasing-u order. The first vertex is
    /// `p0` itself rather than a basis evaluation at u = 0; the remaining
    /// vertices are `eval(i / steps)` for i in 1..=steps. Consecutive points
    /// are intended to be joined by straight segments.
    pub fn sample_path(&self, steps: usize) -> Vec<Point2<F>> {
        let mut points = Vec::with_capacity(steps + 1);
        points.push(self.p0);

        let denom = F::from(steps).unwrap();
        for i in 1..=steps {
            let u = F::from(i).unwrap() / denom;
            points.push(self.eval(u));
        }

        points
    }

    /// Evaluates the segment at each of the given parameter values, in
    /// order.
    ///
    /// Used with [`TABLE_PARAMS`] to produce the Q1..Q5 point table.
    pub fn sample_at(&self, params: &[F]) -> Vec<Point2<F>> {
        params.iter().map(|&u| self.eval(u)).collect()
    }

    /// Samples the fixed table parameters {0.2, 0.4, 0.6, 0.8, 1.0}.
    pub fn table_points(&self) -> Vec<Point2<F>> {
        let params: Vec<F> = TABLE_PARAMS
            .iter()
            .map(|&u| F::from(u).unwrap())
            .collect();
        self.sample_at(&params)
    }
}

//! Monomial expansion of a Hermite segment.
//!
//! The basis-weighted sum can be rearranged into a plain cubic per axis,
//! `position(u) = a*u^3 + b*u^2 + c*u + d`, which is what the algebra panel
//! displays. Both forms evaluate to the same points.

use super::HermiteSegment2;
use crate::primitives::Point2;
use num_traits::Float;

/// Decimal places used when rounding coefficients for display.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Cubic coefficients for one axis: `a*u^3 + b*u^2 + c*u + d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicCoeffs<F> {
    pub a: F,
    pub b: F,
    pub c: F,
    pub d: F,
}

impl<F: Float> CubicCoeffs<F> {
    /// Creates coefficients from the four monomial weights.
    #[inline]
    pub fn new(a: F, b: F, c: F, d: F) -> Self {
        Self { a, b, c, d }
    }

    /// Expands one axis of a Hermite boundary configuration into monomial
    /// form.
    ///
    /// This is the Hermite matrix applied to the scalar constraint vector
    /// `[p0, p1, t0, t1]`:
    ///
    /// - `a = 2*p0 - 2*p1 + t0 + t1`
    /// - `b = -3*p0 + 3*p1 - 2*t0 - t1`
    /// - `c = t0`
    /// - `d = p0`
    pub fn from_hermite_axis(p0: F, p1: F, t0: F, t1: F) -> Self {
        let two = F::one() + F::one();
        let three = two + F::one();

        Self {
            a: two * p0 - two * p1 + t0 + t1,
            b: -three * p0 + three * p1 - two * t0 - t1,
            c: t0,
            d: p0,
        }
    }

    /// Evaluates the cubic at `u` using Horner's scheme.
    #[inline]
    pub fn eval(&self, u: F) -> F {
        ((self.a * u + self.b) * u + self.c) * u + self.d
    }

    /// Returns a copy with every coefficient rounded to `decimals` decimal
    /// places.
    ///
    /// Display-only: callers keep the unrounded value for any further
    /// computation.
    pub fn rounded(&self, decimals: u32) -> Self {
        let scale = F::from(10u64.pow(decimals)).unwrap();
        let round = |v: F| (v * scale).round() / scale;

        Self {
            a: round(self.a),
            b: round(self.b),
            c: round(self.c),
            d: round(self.d),
        }
    }
}

/// Per-axis cubic coefficients for a whole segment.
///
/// # Example
///
/// ```
/// use hermite2d::Point2;
/// use hermite2d::curves::{HermiteSegment2, SegmentPolynomial, CARDINAL_TENSION};
///
/// let points = [
///     Point2::new(2.0, 2.0),
///     Point2::new(12.0, 10.0),
///     Point2::new(4.0, 8.0),
/// ];
///
/// let segment = HermiteSegment2::from_control_points(&points, CARDINAL_TENSION).unwrap();
/// let poly = SegmentPolynomial::from_segment(&segment);
///
/// // Both forms describe the same curve.
/// let u = 0.3;
/// let direct = segment.eval(u);
/// assert!((poly.eval(u).x - direct.x).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPolynomial<F> {
    /// Coefficients of x(u)
    pub x: CubicCoeffs<F>,
    /// Coefficients of y(u)
    pub y: CubicCoeffs<F>,
}

impl<F: Float> SegmentPolynomial<F> {
    /// Expands a Hermite segment into monomial coefficients per axis.
    pub fn from_segment(segment: &HermiteSegment2<F>) -> Self {
        Self {
            x: CubicCoeffs::from_hermite_axis(
                segment.p0.x,
                segment.p1.x,
                segment.t0.x,
                segment.t1.x,
            ),
            y: CubicCoeffs::from_hermite_axis(
                segment.p0.y,
                segment.p1.y,
                segment.t0.y,
                segment.t1.y,
            ),
        }
    }

    /// Evaluates both axes at `u`.
    #[inline]
    pub fn eval(&self, u: F) -> Point2<F> {
        Point2::new(self.x.eval(u), self.y.eval(u))
    }

    /// Returns a display copy with all coefficients rounded.
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            x: self.x.rounded(decimals),
            y: self.y.rounded(decimals),
        }
    }
}

impl<F: Float> From<&HermiteSegment2<F>> for SegmentPolynomial<F> {
    fn from(segment: &HermiteSegment2<F>) -> Self {
        Self::from_segment(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn scenario_segment() -> HermiteSegment2<f64> {
        let points = [
            Point2::new(2.0, 2.0),
            Point2::new(12.0, 10.0),
            Point2::new(4.0, 8.0),
        ];
        HermiteSegment2::from_control_points(&points, 0.5).unwrap()
    }

    #[test]
    fn test_x_axis_coefficients() {
        // Scenario C: a = 2*2 - 2*12 + 1 + 4 = -15, b = -3*2 + 3*12 - 2*1 - 4 = 24,
        // c = 1, d = 2.
        let poly = SegmentPolynomial::from_segment(&scenario_segment());

        assert_relative_eq!(poly.x.a, -15.0, epsilon = 1e-12);
        assert_relative_eq!(poly.x.b, 24.0, epsilon = 1e-12);
        assert_relative_eq!(poly.x.c, 1.0, epsilon = 1e-12);
        assert_relative_eq!(poly.x.d, 2.0, epsilon = 1e-12);

        // a + b + c + d = P1.x
        assert_relative_eq!(poly.x.eval(1.0), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_matches_basis_evaluation() {
        let segment = scenario_segment();
        let poly = SegmentPolynomial::from_segment(&segment);

        for i in 0..=100 {
            let u = i as f64 / 100.0;
            let via_basis = segment.eval(u);
            let via_poly = poly.eval(u);

            assert_relative_eq!(via_poly.x, via_basis.x, epsilon = 1e-9);
            assert_relative_eq!(via_poly.y, via_basis.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_boundary_values() {
        let segment = scenario_segment();
        let poly: SegmentPolynomial<f64> = (&segment).into();

        let start = poly.eval(0.0);
        assert_relative_eq!(start.x, segment.p0.x, epsilon = 1e-12);
        assert_relative_eq!(start.y, segment.p0.y, epsilon = 1e-12);

        let end = poly.eval(1.0);
        assert_relative_eq!(end.x, segment.p1.x, epsilon = 1e-12);
        assert_relative_eq!(end.y, segment.p1.y, epsilon = 1e-12);
    }

    #[test]
    fn test_rounding_is_display_only() {
        let coeffs = CubicCoeffs::new(1.2345_f64, -0.005, 0.994999, 7.0);
        let display = coeffs.rounded(DISPLAY_DECIMALS);

        assert_relative_eq!(display.a, 1.23, epsilon = 1e-12);
        assert_relative_eq!(display.b, -0.01, epsilon = 1e-12);
        assert_relative_eq!(display.c, 0.99, epsilon = 1e-12);
        assert_relative_eq!(display.d, 7.0, epsilon = 1e-12);

        // The source coefficients are untouched.
        assert_relative_eq!(coeffs.a, 1.2345, epsilon = 1e-12);
    }
}

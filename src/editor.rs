//! Edit session over the three control points.
//!
//! The editor owns the only mutable state in the system: the current
//! control points and a flag recording whether generated output is still
//! valid. Every coordinate edit invalidates previously generated data; the
//! curve is recomputed only on an explicit [`CurveEditor::generate`] call.
//! The curve math itself stays pure.
//!
//! # Example
//!
//! ```
//! use hermite2d::{Axis, CurveEditor, Point2};
//!
//! let mut editor = CurveEditor::new([
//!     Point2::new(2.0, 2.0),
//!     Point2::new(12.0, 10.0),
//!     Point2::new(4.0, 8.0),
//! ]);
//!
//! let curve = editor.generate();
//! assert_eq!(curve.path.len(), 101);
//! assert!(editor.table_points().is_some());
//!
//! // Editing a coordinate invalidates the generated output.
//! editor.set_coordinate(2, Axis::Y, 6.0);
//! assert!(!editor.is_generated());
//! assert!(editor.table_points().is_none());
//! ```

use crate::curves::{
    cardinal_tangents, HermiteSegment2, SegmentPolynomial, CARDINAL_TENSION, DISPLAY_DECIMALS,
    PLOT_STEPS,
};
use crate::io::{curve_path_data, format_cubic};
use crate::primitives::{Point2, Vec2};
use num_traits::Float;
use std::fmt;

/// Coordinate axis selector for point edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Everything computed from one generate call.
///
/// All fields derive purely from the control points and the tension
/// constant; none of them survive a later point edit.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCurve<F> {
    /// Dense polyline for plotting: P0 followed by 100 evaluated points.
    pub path: Vec<Point2<F>>,
    /// The same polyline as SVG path data.
    pub path_data: String,
    /// Segment endpoints (P0, P1).
    pub endpoints: (Point2<F>, Point2<F>),
    /// Derived tangents (T0 at P0, T1 at P1), e.g. for tangent handles.
    pub tangents: (Vec2<F>, Vec2<F>),
    /// Sparse samples Q1..Q5 at u = 0.2, 0.4, 0.6, 0.8, 1.0.
    pub table: Vec<Point2<F>>,
    /// Unrounded per-axis cubic coefficients.
    pub polynomial: SegmentPolynomial<F>,
    /// Display equation for x(u), built from rounded coefficients.
    pub x_equation: String,
    /// Display equation for y(u), built from rounded coefficients.
    pub y_equation: String,
}

/// Mutable editing state for a three-point cardinal configuration.
///
/// Holds `[P0, P1, P2]` where P0/P1 are the segment endpoints and P2 shapes
/// the tangents.
#[derive(Debug, Clone)]
pub struct CurveEditor<F> {
    points: [Point2<F>; 3],
    initial: [Point2<F>; 3],
    generated: bool,
}

impl<F: Float + fmt::Display> CurveEditor<F> {
    /// Creates an editor over the given control points.
    ///
    /// The construction-time points are remembered as the reset target.
    pub fn new(points: [Point2<F>; 3]) -> Self {
        Self {
            points,
            initial: points,
            generated: false,
        }
    }

    /// Returns the current control points `[P0, P1, P2]`.
    pub fn points(&self) -> &[Point2<F>; 3] {
        &self.points
    }

    /// True while the most recent generated output is still valid.
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Returns the Q1..Q5 table points, or `None` while no valid generated
    /// output exists.
    ///
    /// The point table is only shown alongside a visible curve; before the
    /// first [`generate`](Self::generate) call, and after any edit or
    /// reset, there is nothing to tabulate.
    pub fn table_points(&self) -> Option<Vec<Point2<F>>> {
        if !self.generated {
            return None;
        }

        let tension = F::from(CARDINAL_TENSION).unwrap();
        let (t0, t1) = cardinal_tangents(&self.points, tension);
        Some(HermiteSegment2::new(self.points[0], self.points[1], t0, t1).table_points())
    }

    /// Sets one coordinate of one control point.
    ///
    /// Any edit invalidates previously generated output until the next
    /// [`generate`](Self::generate) call. Indices 0..=2 select P0, P1, P2.
    ///
    /// # Panics
    ///
    /// Panics if `index > 2`.
    pub fn set_coordinate(&mut self, index: usize, axis: Axis, value: F) {
        assert!(index < 3, "control point index out of range");

        match axis {
            Axis::X => self.points[index].x = value,
            Axis::Y => self.points[index].y = value,
        }
        self.generated = false;
    }

    /// Restores the construction-time control points and invalidates any
    /// generated output.
    pub fn reset(&mut self) {
        self.points = self.initial;
        self.generated = false;
    }

    /// Computes the full curve output from the current control points.
    ///
    /// This is the explicit compute trigger: tangents at tension
    /// [`CARDINAL_TENSION`], the dense plot path, the Q1..Q5 table, and the
    /// per-axis polynomial with display equations. Marks the output as
    /// generated.
    pub fn generate(&mut self) -> GeneratedCurve<F> {
        let tension = F::from(CARDINAL_TENSION).unwrap();
        let (t0, t1) = cardinal_tangents(&self.points, tension);
        let segment = HermiteSegment2::new(self.points[0], self.points[1], t0, t1);

        let polynomial = SegmentPolynomial::from_segment(&segment);
        let display = polynomial.rounded(DISPLAY_DECIMALS);

        self.generated = true;

        GeneratedCurve {
            path: segment.sample_path(PLOT_STEPS),
            path_data: curve_path_data(&segment, PLOT_STEPS),
            endpoints: (segment.p0, segment.p1),
            tangents: (segment.t0, segment.t1),
            table: segment.table_points(),
            polynomial,
            x_equation: format_cubic(&display.x, 'u'),
            y_equation: format_cubic(&display.y, 'u'),
        }
    }
}

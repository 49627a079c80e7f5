//! hermite2d - Cubic Hermite segment math for interactive curve display
//!
//! A single cubic Hermite segment is defined by two endpoints and two tangent
//! vectors. This crate derives the tangents from a three-point cardinal
//! configuration, evaluates the Hermite basis for plotting and point tables,
//! and expands the segment into monomial coefficients for algebraic display.
//!
//! # Example
//!
//! ```
//! use hermite2d::{Point2, curves::{cardinal_tangents, HermiteSegment2, CARDINAL_TENSION}};
//!
//! let points = [
//!     Point2::new(2.0, 2.0),   // P0, segment start
//!     Point2::new(12.0, 10.0), // P1, segment end
//!     Point2::new(4.0, 8.0),   // P2, shapes the tangents only
//! ];
//!
//! let (t0, t1) = cardinal_tangents(&points, CARDINAL_TENSION);
//! let segment = HermiteSegment2::new(points[0], points[1], t0, t1);
//!
//! let start = segment.eval(0.0); // == P0
//! assert!((start.x - 2.0).abs() < 1e-9);
//! ```

pub mod curves;
pub mod editor;
pub mod error;
pub mod io;
pub mod primitives;

pub use editor::{Axis, CurveEditor, GeneratedCurve};
pub use error::EquationError;
pub use primitives::{Point2, Vec2};

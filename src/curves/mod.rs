//! Hermite segment evaluation and its algebraic form.

mod hermite;
mod polynomial;

pub use hermite::{
    cardinal_tangents, hermite_basis, HermiteSegment2, CARDINAL_TENSION, PLOT_STEPS, TABLE_PARAMS,
};
pub use polynomial::{CubicCoeffs, SegmentPolynomial, DISPLAY_DECIMALS};

//! String output formats for display collaborators.
//!
//! SVG path data for the plot and human-readable equations for the algebra
//! panel.

mod equation;
mod svg;

pub use equation::{format_cubic, parse_cubic};
pub use svg::{curve_path_data, polyline_to_path_data};

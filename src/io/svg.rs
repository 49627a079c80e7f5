//! SVG path data export.
//!
//! The plot collaborator consumes the curve as the `d` attribute of an SVG
//! `<path>`: a move to the first vertex followed by straight line segments.

use crate::curves::HermiteSegment2;
use crate::primitives::Point2;
use num_traits::Float;
use std::fmt;

/// Converts a polyline to SVG path data (`M x y L x y ...`).
///
/// The path is left open; curve plots are never closed. Empty input yields
/// an empty string.
///
/// # Example
///
/// ```
/// use hermite2d::Point2;
/// use hermite2d::io::polyline_to_path_data;
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
/// ];
///
/// assert_eq!(polyline_to_path_data(&points), "M 0 0 L 10 0 L 10 10");
/// ```
pub fn polyline_to_path_data<F: Float + fmt::Display>(points: &[Point2<F>]) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mut data = format!("M {} {}", points[0].x, points[0].y);
    for p in &points[1..] {
        data.push_str(&format!(" L {} {}", p.x, p.y));
    }

    data
}

/// Samples a segment at `steps` equal parameter increments and returns the
/// polyline as SVG path data.
///
/// The first vertex is the segment's start point, so the data holds
/// `steps + 1` vertices in increasing-u order.
pub fn curve_path_data<F: Float + fmt::Display>(
    segment: &HermiteSegment2<F>,
    steps: usize,
) -> String {
    polyline_to_path_data(&segment.sample_path(steps))
}

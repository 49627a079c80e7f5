//! Renders the curve for the default control points to an SVG file.
//!
//! Run with: cargo run --example plot

use hermite2d::{Axis, CurveEditor, Point2};

use std::fs::File;
use std::io::Write;

const VIEW: f64 = 400.0;

fn main() -> std::io::Result<()> {
    let mut editor = CurveEditor::new([
        Point2::new(2.0, 2.0),
        Point2::new(12.0, 10.0),
        Point2::new(4.0, 8.0),
    ]);

    // Nudge the shape point, as an interactive user would.
    editor.set_coordinate(2, Axis::Y, 7.0);
    let curve = editor.generate();

    println!("x(u) = {}", curve.x_equation);
    println!("y(u) = {}", curve.y_equation);
    for (i, q) in curve.table.iter().enumerate() {
        println!("Q{}: ({:.2}, {:.2})", i + 1, q.x, q.y);
    }

    // Fit the plot into the viewport with a small margin, y up.
    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in &curve.path {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    let span = (max_x - min_x).max(max_y - min_y).max(1e-9);
    let scale = VIEW * 0.9 / span;
    let to_view = |p: &Point2<f64>| {
        (
            (p.x - min_x) * scale + VIEW * 0.05,
            VIEW - ((p.y - min_y) * scale + VIEW * 0.05),
        )
    };

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{VIEW}" height="{VIEW}" viewBox="0 0 {VIEW} {VIEW}">"#,
    ));
    svg.push('\n');

    let mut d = String::new();
    for (i, p) in curve.path.iter().enumerate() {
        let (x, y) = to_view(p);
        let cmd = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{cmd} {x:.2} {y:.2} "));
    }
    svg.push_str(&format!(
        r##"<path d="{}" stroke="#FF7E67" stroke-width="2" fill="none"/>"##,
        d.trim_end()
    ));
    svg.push('\n');

    // Tangent handles: T0 leads out of P0, T1 arrives into P1.
    let handles = [
        (curve.endpoints.0, curve.endpoints.0 + curve.tangents.0),
        (curve.endpoints.1, curve.endpoints.1 + -curve.tangents.1),
    ];
    for (anchor, tip) in handles {
        let (x1, y1) = to_view(&anchor);
        let (x2, y2) = to_view(&tip);
        svg.push_str(&format!(
            r##"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="#9ca3af" stroke-dasharray="4 3"/>"##
        ));
        svg.push('\n');
    }

    for (label, p) in [("P0", &curve.endpoints.0), ("P1", &curve.endpoints.1)] {
        let (x, y) = to_view(p);
        svg.push_str(&format!(
            r##"<circle cx="{x:.2}" cy="{y:.2}" r="4" fill="#1f2937"/>"##
        ));
        svg.push_str(&format!(
            r#"<text x="{x:.2}" y="{:.2}" text-anchor="middle" font-size="12">{label}</text>"#,
            y - 8.0
        ));
        svg.push('\n');
    }

    for (i, q) in curve.table.iter().enumerate() {
        let (x, y) = to_view(q);
        svg.push_str(&format!(
            r##"<circle cx="{x:.2}" cy="{y:.2}" r="3" fill="#006A71"><title>Q{}: ({:.2}, {:.2})</title></circle>"##,
            i + 1,
            q.x,
            q.y
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");

    let mut file = File::create("hermite_plot.svg")?;
    file.write_all(svg.as_bytes())?;
    println!("Wrote hermite_plot.svg");

    Ok(())
}

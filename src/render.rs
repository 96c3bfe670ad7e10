//! A module for rendering a computed layout as an SVG document.
//!
//! This is the sink end of the visualisation pipeline: it consumes the geometry and display
//! attributes produced by [`layout`](crate::layout) and knows nothing about the graph itself.

use std::io::{self, Write};

use crate::layout::Layout;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 800.0;
const MARGIN: f64 = 40.0;

const NODE_FILL: &str = "rgb(24, 119, 191)";
const EDGE_STROKE: &str = "#888";
const EDGE_WIDTH: f64 = 0.5;

/// Writes the layout as a self-contained SVG document.
///
/// Edges are drawn beneath the vertex markers; each marker carries its caption as an SVG
/// `<title>` so it appears on hover.
pub fn write_svg<T, W: Write>(layout: &Layout<T>, title: &str, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
    )?;
    writeln!(
        out,
        r#"  <text x="{}" y="28" text-anchor="middle" font-size="26" font-family="sans-serif">{}</text>"#,
        WIDTH / 2.0,
        escape(title)
    )?;

    for (from, to) in &layout.edges {
        let (x1, y1) = to_viewport(from.x, from.y);
        let (x2, y2) = to_viewport(to.x, to.y);

        writeln!(
            out,
            r#"  <line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{EDGE_STROKE}" stroke-width="{EDGE_WIDTH}"/>"#
        )?;
    }

    for node in &layout.nodes {
        let (cx, cy) = to_viewport(node.position.x, node.position.y);

        writeln!(
            out,
            r#"  <circle cx="{cx:.2}" cy="{cy:.2}" r="{:.2}" fill="{NODE_FILL}"><title>{}</title></circle>"#,
            node.size / 2.0,
            escape(&node.caption)
        )?;
    }

    writeln!(out, "</svg>")
}

/// Maps a unit-square position into the viewport, flipping the y axis so "up" in layout space
/// is up on screen.
fn to_viewport(x: f64, y: f64) -> (f64, f64) {
    let span_x = WIDTH - 2.0 * MARGIN;
    let span_y = HEIGHT - 2.0 * MARGIN;

    (MARGIN + x * span_x, MARGIN + (1.0 - y) * span_y)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

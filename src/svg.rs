//! SVG rendering of a board and its openings.
//!
//! Draws the board, the no-cut band along its edges, and every opening in
//! its own shape, scaled to fit a fixed panel. Openings that break the rules
//! are highlighted.
//!
//! # Example
//!
//! ```
//! use matlayout::{Board, Opening, svg::render_board_svg};
//!
//! let board = Board::new(16.0, 20.0)
//!     .with_opening(Opening::rect("photo", 3.0, 3.0, 10.0, 8.0));
//! let svg = render_board_svg(&board);
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("photo"));
//! ```

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::geometry::{Aabb, Board, Motif, Opening, Rules, Shape};
use crate::units::format_dimension;
use crate::validate::check_board;

/// Maximum drawing width for the board.
const MAX_PANEL_W: f64 = 480.0;
/// Maximum drawing height for the board.
const MAX_PANEL_H: f64 = 480.0;
/// Margin around the board.
const MARGIN: f64 = 24.0;
/// Height of the title line above the board.
const LABEL_H: f64 = 22.0;

/// Render `board` against the default rules.
pub fn render_board_svg(board: &Board) -> String {
    render_board_svg_with_rules(board, &Rules::default())
}

/// Render `board`, drawing the no-cut band and conflicts for `rules`.
pub fn render_board_svg_with_rules(board: &Board, rules: &Rules) -> String {
    let (bw, bh, scale) = scale_to_fit(board.width, board.height);
    let total_w = bw + 2.0 * MARGIN;
    let total_h = bh + 2.0 * MARGIN + LABEL_H;
    let ox = MARGIN;
    let oy = MARGIN + LABEL_H;

    let flagged: Vec<String> = check_board(board, rules)
        .into_iter()
        .map(|v| String::from(v.id()))
        .collect();

    let mut svg = String::with_capacity(2048);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {:.1} {:.1}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Light/dark mode via prefers-color-scheme
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .id { font-size: 11px; fill: #333; }
  .board { fill: #f4f1ea; stroke: #999; stroke-width: 1; }
  .no-cut { fill: none; stroke: #c97b7b; stroke-width: 1; stroke-dasharray: 4,3; }
  .opening { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  .conflict { fill: #e08a8a; stroke: #a33; stroke-width: 1.5; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .id { fill: #e0e0e0; }
    .board { fill: #2d2d2d; stroke: #555; }
    .no-cut { stroke: #a05a5a; }
    .opening { fill: #3a72a4; stroke: #5a9fd4; }
    .conflict { fill: #8a3a3a; stroke: #d46a6a; }
  }
</style>
"##,
    );

    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" class="label" text-anchor="middle">{}</text>"#,
        total_w / 2.0,
        MARGIN + 14.0,
        escape_xml(&format!(
            "Board  {}×{}\"",
            format_dimension(board.width),
            format_dimension(board.height)
        ))
    ));
    svg.push('\n');

    svg.push_str(&format!(
        r#"<rect x="{ox:.1}" y="{oy:.1}" width="{bw:.1}" height="{bh:.1}" class="board"/>"#
    ));
    svg.push('\n');

    let inset = rules.no_cut_inset * scale;
    if inset > 0.0 && bw > 2.0 * inset && bh > 2.0 * inset {
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="no-cut"/>"#,
            ox + inset,
            oy + inset,
            bw - 2.0 * inset,
            bh - 2.0 * inset
        ));
        svg.push('\n');
    }

    for opening in &board.openings {
        if opening.validate().is_err() {
            continue;
        }
        let b = opening.aabb();
        let px = Aabb::new(
            ox + b.x1 * scale,
            oy + b.y1 * scale,
            ox + b.x2 * scale,
            oy + b.y2 * scale,
        );
        let class = if flagged.iter().any(|id| *id == opening.id) {
            "conflict"
        } else {
            "opening"
        };
        svg.push_str(&shape_element(opening, &px, class));
        svg.push('\n');

        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="id" text-anchor="middle">{}</text>"#,
            (px.x1 + px.x2) / 2.0,
            (px.y1 + px.y2) / 2.0 + 4.0,
            escape_xml(&opening.id)
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

/// Element for one opening occupying `px` in drawing coordinates.
fn shape_element(opening: &Opening, px: &Aabb, class: &str) -> String {
    let cx = (px.x1 + px.x2) / 2.0;
    let cy = (px.y1 + px.y2) / 2.0;
    match opening.shape {
        Shape::Rectangle => format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="{class}"/>"#,
            px.x1,
            px.y1,
            px.width(),
            px.height()
        ),
        Shape::Circle | Shape::Oval => format!(
            r#"<ellipse cx="{cx:.1}" cy="{cy:.1}" rx="{:.1}" ry="{:.1}" class="{class}"/>"#,
            px.width() / 2.0,
            px.height() / 2.0
        ),
        Shape::Decorative(motif) => {
            let size = px.width().min(px.height());
            format!(
                r#"<path d="{}" class="{class}"/>"#,
                motif_path(motif, cx, cy, size)
            )
        }
    }
}

/// SVG path data for a decorative motif centered on `(cx, cy)` that fits a
/// `size` square.
pub fn motif_path(motif: Motif, cx: f64, cy: f64, size: f64) -> String {
    let half = size / 2.0;
    match motif {
        Motif::Diamond => format!(
            "M {cx:.2},{:.2} L {:.2},{cy:.2} L {cx:.2},{:.2} L {:.2},{cy:.2} Z",
            cy - half,
            cx + half,
            cy + half,
            cx - half
        ),
        Motif::Club => {
            // Three lobes around the center plus a flared stem.
            let r = size * 0.2;
            let stem_top = cy + r * 0.5;
            let stem_bottom = cy + half;
            format!(
                "{} {} {} M {:.2},{stem_top:.2} L {:.2},{stem_bottom:.2} L {:.2},{stem_bottom:.2} L {:.2},{stem_top:.2} Z",
                circle_path(cx, cy - half + r, r),
                circle_path(cx - r * 1.2, cy - r * 0.6, r),
                circle_path(cx + r * 1.2, cy - r * 0.6, r),
                cx - size * 0.05,
                cx - size * 0.15,
                cx + size * 0.15,
                cx + size * 0.05
            )
        }
        Motif::Spade => {
            let r = size * 0.25;
            let stem_bottom = cy + half;
            format!(
                "M {cx:.2},{:.2} Q {:.2},{:.2} {:.2},{cy:.2} a {r:.2},{r:.2} 0 1,0 {:.2},0 \
                 Q {:.2},{:.2} {cx:.2},{:.2} Z \
                 M {:.2},{cy:.2} L {:.2},{stem_bottom:.2} L {:.2},{stem_bottom:.2} L {:.2},{cy:.2} Z",
                cy - half,
                cx - half,
                cy - r,
                cx - r,
                r * 2.0,
                cx + half,
                cy - r,
                cy - half,
                cx - size * 0.05,
                cx - size * 0.15,
                cx + size * 0.15,
                cx + size * 0.05
            )
        }
    }
}

/// Closed circle of radius `r` centered on `(cx, cy)`, drawn as two half arcs.
fn circle_path(cx: f64, cy: f64, r: f64) -> String {
    format!(
        "M {:.2},{cy:.2} a {r:.2},{r:.2} 0 1,0 {:.2},0 a {r:.2},{r:.2} 0 1,0 {:.2},0 Z",
        cx - r,
        r * 2.0,
        -r * 2.0
    )
}

/// Scale board inches to fit within MAX_PANEL_W × MAX_PANEL_H.
fn scale_to_fit(w: f64, h: f64) -> (f64, f64, f64) {
    if !(w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite()) {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

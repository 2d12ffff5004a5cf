//! Named layouts offered as starting points for specialty frames.
//!
//! Presets are generated from a handful of dimensions (item size, spacing,
//! mat border) rather than hand-entered coordinates, so each one agrees with
//! the constraint rules it declares.
//!
//! ```
//! use matlayout::catalog;
//! use matlayout::validate::check_board;
//!
//! for preset in catalog::presets() {
//!     assert!(check_board(&preset.board, &preset.rules).is_empty(), "{}", preset.id);
//! }
//! ```

pub mod puck;
pub mod ticket;

use alloc::format;
use alloc::vec::Vec;

use crate::geometry::{Board, Opening, Rules, Size};
use crate::quantize::{QUANTIZE_STEP, quantize};

/// How a preset arranges its openings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Category {
    Single,
    Row,
    Grid,
    /// A photo opening combined with memorabilia openings.
    PhotoCombo,
}

/// One catalog layout.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    /// Board with its openings already placed.
    pub board: Board,
    /// Border between the outermost openings and the board edge.
    pub mat_border: f64,
    /// Rules the layout was built for.
    pub rules: Rules,
}

/// Every preset, pucks first.
pub fn presets() -> Vec<Preset> {
    let mut all = puck::presets();
    all.extend(ticket::presets());
    all
}

/// Look up a preset by id.
pub fn preset(id: &str) -> Option<Preset> {
    presets().into_iter().find(|p| p.id == id)
}

/// Presets of one category.
pub fn presets_in(category: Category) -> Vec<Preset> {
    presets()
        .into_iter()
        .filter(|p| p.category == category)
        .collect()
}

/// Length of `count` items of `item` length with `spacing` between them.
fn run_length(count: u32, item: f64, spacing: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    f64::from(count) * item + f64::from(count - 1) * spacing
}

/// Board holding a `rows` × `cols` grid of equal rectangles, `border` from
/// every edge. Ids are `{prefix}-1`, `{prefix}-2`, … in row-major order.
fn rect_grid(prefix: &str, rows: u32, cols: u32, item: Size, spacing: f64, border: f64) -> Board {
    let mut board = Board::new(
        run_length(cols, item.width, spacing) + border * 2.0,
        run_length(rows, item.height, spacing) + border * 2.0,
    );
    for row in 0..rows {
        for col in 0..cols {
            let n = row * cols + col + 1;
            board.openings.push(Opening::rect(
                format!("{prefix}-{n}"),
                border + f64::from(col) * (item.width + spacing),
                border + f64::from(row) * (item.height + spacing),
                item.width,
                item.height,
            ));
        }
    }
    board
}

/// Board holding `items` top to bottom, each centered horizontally and
/// rounded to the cutting grid.
fn column(items: &[(&str, Size)], spacing: f64, border: f64) -> Board {
    let widest = items.iter().map(|(_, s)| s.width).fold(0.0, f64::max);
    let content_h = items.iter().map(|(_, s)| s.height).sum::<f64>()
        + spacing * items.len().saturating_sub(1) as f64;
    let mut board = Board::new(widest + border * 2.0, content_h + border * 2.0);

    let mut y = border;
    for &(id, size) in items {
        let x = quantize(border + (widest - size.width) / 2.0, QUANTIZE_STEP);
        board
            .openings
            .push(Opening::rect(id, x, y, size.width, size.height));
        y += size.height + spacing;
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantize::is_quantized;
    use crate::sizing::{is_oversize_mat, required_mat_border};
    use crate::validate::check_board;
    use alloc::vec;

    #[test]
    fn every_preset_passes_its_rules() {
        for p in presets() {
            let violations = check_board(&p.board, &p.rules);
            assert!(violations.is_empty(), "{}: {violations:?}", p.id);
        }
    }

    #[test]
    fn every_preset_fits_a_standard_sheet() {
        for p in presets() {
            assert!(!is_oversize_mat(p.board.width, p.board.height), "{}", p.id);
        }
    }

    #[test]
    fn every_cut_is_on_the_cutting_grid() {
        for p in presets() {
            for o in &p.board.openings {
                let b = o.aabb();
                for v in [b.x1, b.y1, b.x2, b.y2] {
                    assert!(is_quantized(v, QUANTIZE_STEP), "{} {}: {b:?}", p.id, o.id);
                }
            }
        }
    }

    #[test]
    fn every_border_brings_items_to_the_minimum_interior() {
        for p in presets() {
            let mut margin = f64::INFINITY;
            for o in &p.board.openings {
                let b = o.aabb();
                let needed = required_mat_border(b.width(), b.height());
                assert!(p.mat_border >= needed, "{} {}: needs {needed}", p.id, o.id);
                margin = margin
                    .min(b.x1)
                    .min(b.y1)
                    .min(p.board.width - b.x2)
                    .min(p.board.height - b.y2);
            }
            assert_eq!(margin, p.mat_border, "{}", p.id);
        }
    }

    #[test]
    fn preset_ids_are_unique() {
        let all = presets();
        for (i, a) in all.iter().enumerate() {
            assert!(all[i + 1..].iter().all(|b| b.id != a.id), "{}", a.id);
        }
    }

    #[test]
    fn lookup_by_id_and_category() {
        assert_eq!(preset("grid-3x3").map(|p| p.board.openings.len()), Some(9));
        assert_eq!(preset("nope"), None);
        assert!(presets_in(Category::PhotoCombo).len() >= 2);
        assert!(
            presets_in(Category::Row)
                .iter()
                .all(|p| p.category == Category::Row)
        );
    }

    #[test]
    fn rect_grid_geometry() {
        let b = rect_grid("t", 2, 3, Size::new(2.0, 1.0), 0.5, 1.0);
        assert_eq!((b.width, b.height), (9.0, 4.5));
        let ids: Vec<&str> = b.openings.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["t-1", "t-2", "t-3", "t-4", "t-5", "t-6"]);
        let last = &b.openings[5];
        assert_eq!((last.x, last.y), (6.0, 2.5));
    }

    #[test]
    fn column_centers_items() {
        let b = column(
            &[("a", Size::new(4.0, 1.0)), ("b", Size::new(8.0, 2.0))],
            1.0,
            2.0,
        );
        assert_eq!((b.width, b.height), (12.0, 8.0));
        assert_eq!((b.openings[0].x, b.openings[0].y), (4.0, 2.0));
        assert_eq!((b.openings[1].x, b.openings[1].y), (2.0, 4.0));
    }

    #[test]
    fn column_rounds_centering_to_the_grid() {
        // Exact center would be 2 + 0.1875.
        let b = column(
            &[("a", Size::new(5.625, 2.0)), ("b", Size::new(6.0, 4.0))],
            1.0,
            2.0,
        );
        assert_eq!(b.openings[0].x, 2.25);
        assert_eq!(b.openings[1].x, 2.0);
    }

    #[test]
    fn empty_run_has_no_length() {
        assert_eq!(run_length(0, 3.0, 0.75), 0.0);
        assert_eq!(run_length(1, 3.0, 0.75), 3.0);
    }
}

//! Hockey puck display layouts.
//!
//! Pucks are 3" across and cut as circles. Puck openings are stored in the
//! legacy center + radius form, which is how saved puck designs have always
//! been persisted.

use alloc::format;
use alloc::vec::Vec;

use super::{Category, Preset, run_length};
use crate::geometry::{Board, Opening, Rules};

/// Regulation puck diameter.
pub const PUCK_DIAMETER: f64 = 3.0;

/// Gap between neighboring pucks.
pub const PUCK_SPACING: f64 = 0.75;

/// Border around the outermost pucks.
pub const DEFAULT_PUCK_MAT_BORDER: f64 = 2.0;

/// Photo opening paired with pucks in the combo layouts.
pub const PUCK_PHOTO_WIDTH: f64 = 8.0;
pub const PUCK_PHOTO_HEIGHT: f64 = 10.0;

/// Board holding a `rows` × `cols` grid of circular openings.
///
/// Openings are named `puck-1`, `puck-2`, … in row-major order.
///
/// ```
/// use matlayout::catalog::puck::puck_grid;
///
/// let board = puck_grid(1, 2, 3.0, 0.75, 2.0);
/// assert_eq!((board.width, board.height), (10.75, 7.0));
/// assert_eq!(board.openings[1].aabb().x1, 5.75);
/// ```
pub fn puck_grid(rows: u32, cols: u32, diameter: f64, spacing: f64, border: f64) -> Board {
    let mut board = Board::new(
        run_length(cols, diameter, spacing) + border * 2.0,
        run_length(rows, diameter, spacing) + border * 2.0,
    );
    let radius = diameter / 2.0;
    for row in 0..rows {
        for col in 0..cols {
            let n = row * cols + col + 1;
            board.openings.push(Opening::legacy_circle(
                format!("puck-{n}"),
                border + f64::from(col) * (diameter + spacing) + radius,
                border + f64::from(row) * (diameter + spacing) + radius,
                radius,
            ));
        }
    }
    board
}

fn standard_grid(rows: u32, cols: u32, border: f64) -> Board {
    puck_grid(rows, cols, PUCK_DIAMETER, PUCK_SPACING, border)
}

/// 8×10 photo on top with `pucks` pucks centered underneath.
fn photo_combo(pucks: u32) -> Board {
    let border = DEFAULT_PUCK_MAT_BORDER;
    let width = PUCK_PHOTO_WIDTH + border * 2.0;
    let puck_row_y = border + PUCK_PHOTO_HEIGHT + PUCK_SPACING;
    let mut board = Board::new(width, puck_row_y + PUCK_DIAMETER + border).with_opening(
        Opening::rect(
            "photo",
            border,
            border,
            PUCK_PHOTO_WIDTH,
            PUCK_PHOTO_HEIGHT,
        ),
    );

    let row_w = run_length(pucks, PUCK_DIAMETER, PUCK_SPACING);
    let first_x = (width - row_w) / 2.0;
    let radius = PUCK_DIAMETER / 2.0;
    for i in 0..pucks {
        board.openings.push(Opening::legacy_circle(
            format!("puck-{}", i + 1),
            first_x + f64::from(i) * (PUCK_DIAMETER + PUCK_SPACING) + radius,
            puck_row_y + radius,
            radius,
        ));
    }
    board
}

/// All puck layouts.
///
/// Pucks sit exactly [`PUCK_SPACING`] apart, so the layouts are built for
/// single-mat spacing.
pub fn presets() -> Vec<Preset> {
    let rules = Rules::single_mat();
    let preset = |id, name, category, board: Board, mat_border| Preset {
        id,
        name,
        category,
        board,
        mat_border,
        rules,
    };
    let d = DEFAULT_PUCK_MAT_BORDER;

    let mut all = Vec::new();
    all.push(preset("single", "Single Puck", Category::Single, standard_grid(1, 1, d), d));
    all.push(preset("row-2", "2 Puck Row", Category::Row, standard_grid(1, 2, d), d));
    all.push(preset("row-3", "3 Puck Row", Category::Row, standard_grid(1, 3, d), d));
    all.push(preset("row-4", "4 Puck Row", Category::Row, standard_grid(1, 4, d), d));
    all.push(preset(
        "photo-1-puck",
        "8×10 Photo + 1 Puck",
        Category::PhotoCombo,
        photo_combo(1),
        d,
    ));
    all.push(preset(
        "photo-2-pucks",
        "8×10 Photo + 2 Pucks",
        Category::PhotoCombo,
        photo_combo(2),
        d,
    ));
    for &(id, name, rows, cols, border) in &[
        ("grid-3x2", "3×2 Grid", 2, 3, d),
        ("grid-3x3", "3×3 Grid", 3, 3, d),
        ("grid-4x3", "4×3 Grid", 3, 4, d),
        ("grid-4x4", "4×4 Grid", 4, 4, d),
        ("grid-5x4", "5×4 Grid", 4, 5, 2.25),
        ("grid-8x4", "8×4 Grid", 4, 8, d),
    ] {
        all.push(preset(id, name, Category::Grid, standard_grid(rows, cols, border), border));
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Aabb;

    fn find(id: &str) -> Preset {
        presets()
            .into_iter()
            .find(|p| p.id == id)
            .unwrap_or_else(|| panic!("missing preset {id}"))
    }

    #[test]
    fn single_and_rows() {
        let single = find("single");
        assert_eq!((single.board.width, single.board.height), (7.0, 7.0));
        assert_eq!(single.board.openings[0].aabb(), Aabb::new(2.0, 2.0, 5.0, 5.0));

        let widths: Vec<f64> = ["row-2", "row-3", "row-4"]
            .iter()
            .map(|id| find(id).board.width)
            .collect();
        assert_eq!(widths, [10.75, 14.5, 18.25]);
    }

    #[test]
    fn row_centers_follow_pitch() {
        let row = find("row-4");
        let centers: Vec<f64> = row.board.openings.iter().map(|o| o.x).collect();
        assert_eq!(centers, [3.5, 7.25, 11.0, 14.75]);
        assert!(row.board.openings.iter().all(|o| o.is_legacy()));
    }

    #[test]
    fn photo_combos() {
        let one = find("photo-1-puck");
        assert_eq!((one.board.width, one.board.height), (12.0, 17.75));
        let puck = one.board.opening("puck-1").map(|o| (o.x, o.y));
        assert_eq!(puck, Some((6.0, 14.25)));

        let two = find("photo-2-pucks");
        let xs: Vec<f64> = two.board.openings[1..].iter().map(|o| o.x).collect();
        assert_eq!(xs, [4.125, 7.875]);
        assert_eq!(
            two.board.opening("photo").map(|o| o.aabb()),
            Some(Aabb::new(2.0, 2.0, 10.0, 12.0))
        );
    }

    #[test]
    fn grid_sizes_follow_from_counts() {
        let g = find("grid-5x4");
        assert_eq!((g.board.width, g.board.height), (22.5, 18.75));
        assert_eq!(g.board.openings.len(), 20);

        let g = find("grid-8x4");
        assert_eq!((g.board.width, g.board.height), (33.25, 18.25));
        assert_eq!(g.board.openings.len(), 32);
        assert_eq!(g.board.openings[31].id, "puck-32");
    }

    #[test]
    fn puck_grid_handles_empty() {
        let b = puck_grid(0, 3, PUCK_DIAMETER, PUCK_SPACING, 2.0);
        assert!(b.openings.is_empty());
        assert_eq!(b.height, 4.0);
    }
}

//! Finding room for a new opening, and centering openings on a board.

use crate::geometry::{Board, Opening, Position, Rules, Size};
use crate::quantize::quantize;
use crate::validate::{violates_no_cut_zone, violates_spacing};

/// Id given to the hypothetical opening tested at each scan position.
const CANDIDATE_ID: &str = "\u{0}placement-candidate";

/// Slack on the scan bounds so steps that are not binary fractions still
/// reach the last position.
const SCAN_EPSILON: f64 = 1e-9;

/// First position where an opening of `size` fits on the board.
///
/// Scans row-major from `(inset, inset)` in `rules.grid_step` increments and
/// returns the first candidate that, once quantized to `rules.quantize_step`,
/// clears both the no-cut zone and `rules.min_spacing` from every opening in
/// `existing`. `None` means the board has no room for
/// that size; show the customer a "doesn't fit" message.
///
/// The scan order is fixed, so identical inputs always give the same answer.
///
/// ```
/// use matlayout::{Opening, Position, Rules, Size};
/// use matlayout::placement::first_free_placement;
///
/// let existing = [Opening::rect("a", 0.75, 0.75, 5.0, 5.0)];
/// let pos = first_free_placement(20.0, 16.0, Size::new(3.0, 3.0), &existing, &Rules::default());
/// assert_eq!(pos, Some(Position::new(6.75, 0.75)));
/// ```
pub fn first_free_placement(
    board_w: f64,
    board_h: f64,
    size: Size,
    existing: &[Opening],
    rules: &Rules,
) -> Option<Position> {
    let step = rules.grid_step;
    if !(step.is_finite() && step > 0.0) {
        log::debug!("placement scan skipped: unusable grid step {step}");
        return None;
    }
    if !(size.width >= 0.0 && size.height >= 0.0) {
        log::debug!("placement scan skipped: invalid size {}x{}", size.width, size.height);
        return None;
    }

    let start = rules.no_cut_inset;
    let max_x = board_w - rules.no_cut_inset - size.width + SCAN_EPSILON;
    let max_y = board_h - rules.no_cut_inset - size.height + SCAN_EPSILON;
    let mut candidate = Opening::rect(CANDIDATE_ID, start, start, size.width, size.height);

    // Positions are start + i·step rather than accumulated sums so long
    // scans do not drift.
    let mut row = 0u32;
    loop {
        let y = start + f64::from(row) * step;
        if !(y <= max_y) {
            break;
        }
        let mut col = 0u32;
        loop {
            let x = start + f64::from(col) * step;
            if !(x <= max_x) {
                break;
            }
            // Checked after quantizing: a grid step off the cutting grid can
            // round an accepted position back into the spacing band.
            candidate.x = quantize(x, rules.quantize_step);
            candidate.y = quantize(y, rules.quantize_step);
            if !violates_no_cut_zone(&candidate, board_w, board_h, rules)
                && !violates_spacing(&candidate, existing, rules.min_spacing)
            {
                let found = Position::new(candidate.x, candidate.y);
                log::trace!(
                    "placed {}x{} at ({}, {}) on {board_w}x{board_h}",
                    size.width,
                    size.height,
                    found.x,
                    found.y
                );
                return Some(found);
            }
            col += 1;
        }
        row += 1;
    }

    log::debug!(
        "no room for {}x{} on {board_w}x{board_h} with {} existing opening(s)",
        size.width,
        size.height,
        existing.len()
    );
    None
}

/// [`first_free_placement`] against everything already on `board`.
pub fn first_free_placement_on(board: &Board, size: Size, rules: &Rules) -> Option<Position> {
    first_free_placement(board.width, board.height, size, &board.openings, rules)
}

/// Top-left position that centers `size` on a board.
pub fn center_within(size: Size, board_w: f64, board_h: f64) -> Position {
    Position::new((board_w - size.width) / 2.0, (board_h - size.height) / 2.0)
}

/// Copy of `opening` re-centered after the board or opening was resized.
///
/// The new position is quantized so it stays on the cutting grid. Legacy
/// center + radius openings come back in top-left + size form.
pub fn recenter_after_size_change(
    opening: &Opening,
    board_w: f64,
    board_h: f64,
    rules: &Rules,
) -> Opening {
    let centered = center_within(opening.size(), board_w, board_h);
    opening.at(Position::new(
        quantize(centered.x, rules.quantize_step),
        quantize(centered.y, rules.quantize_step),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Aabb;
    use crate::quantize::is_quantized;
    use alloc::vec;

    fn rules() -> Rules {
        Rules::default()
    }

    #[test]
    fn empty_board_places_at_inset() {
        let pos = first_free_placement(10.0, 10.0, Size::new(2.0, 2.0), &[], &rules());
        assert_eq!(pos, Some(Position::new(0.75, 0.75)));
    }

    #[test]
    fn skips_past_existing_opening() {
        let existing = [Opening::rect("a", 0.75, 0.75, 5.0, 5.0)];
        let pos = first_free_placement(20.0, 16.0, Size::new(3.0, 3.0), &existing, &rules());
        assert_eq!(pos, Some(Position::new(6.75, 0.75)));
    }

    #[test]
    fn drops_to_next_row_when_row_is_full() {
        // Existing opening spans the whole usable width of the first rows.
        let existing = [Opening::rect("a", 0.75, 0.75, 8.5, 3.0)];
        let pos = first_free_placement(10.0, 10.0, Size::new(2.0, 2.0), &existing, &rules())
            .unwrap();
        assert_eq!(pos.x, 0.75);
        // Needs y - 0.75 > 3.75.
        assert_eq!(pos.y, 4.75);
    }

    #[test]
    fn no_room_returns_none() {
        let existing = [Opening::rect("a", 0.75, 0.75, 3.5, 3.5)];
        let pos = first_free_placement(5.0, 5.0, Size::new(2.0, 2.0), &existing, &rules());
        assert_eq!(pos, None);
    }

    #[test]
    fn opening_larger_than_board_returns_none() {
        let pos = first_free_placement(4.0, 4.0, Size::new(3.0, 3.0), &[], &rules());
        assert_eq!(pos, None);
    }

    #[test]
    fn exact_fit_is_found() {
        // 5 - 2·0.75 = 3.5 usable.
        let pos = first_free_placement(5.0, 5.0, Size::new(3.5, 3.5), &[], &rules());
        assert_eq!(pos, Some(Position::new(0.75, 0.75)));
    }

    #[test]
    fn single_mat_spacing_packs_tighter() {
        let existing = [Opening::rect("a", 0.75, 0.75, 2.0, 2.0)];
        let tight = first_free_placement(
            10.0,
            10.0,
            Size::new(2.0, 2.0),
            &existing,
            &Rules::single_mat(),
        );
        // Needs x - 0.25 > 2.75.
        assert_eq!(tight, Some(Position::new(3.25, 0.75)));
    }

    #[test]
    fn legacy_neighbors_are_respected() {
        let existing = [Opening::legacy_circle("puck", 2.25, 2.25, 1.5)];
        let pos = first_free_placement(12.0, 6.0, Size::new(2.0, 2.0), &existing, &rules())
            .unwrap();
        let placed = Opening::rect("new", pos.x, pos.y, 2.0, 2.0);
        assert!(!violates_spacing(&placed, &existing, rules().min_spacing));
        assert_eq!(pos, Position::new(4.75, 0.75));
    }

    #[test]
    fn invalid_inputs_return_none() {
        assert_eq!(
            first_free_placement(10.0, 10.0, Size::new(1.0, 1.0), &[], &rules().grid_step(0.0)),
            None
        );
        assert_eq!(
            first_free_placement(10.0, 10.0, Size::new(f64::NAN, 1.0), &[], &rules()),
            None
        );
        assert_eq!(
            first_free_placement(f64::NAN, 10.0, Size::new(1.0, 1.0), &[], &rules()),
            None
        );
    }

    #[test]
    fn result_is_quantized_with_odd_grid_step() {
        let r = rules().grid_step(0.3);
        let existing = [Opening::rect("a", 0.75, 0.75, 2.0, 2.0)];
        let pos = first_free_placement(10.0, 10.0, Size::new(2.0, 2.0), &existing, &r).unwrap();
        assert!(is_quantized(pos.x, r.quantize_step));
        assert!(is_quantized(pos.y, r.quantize_step));
    }

    #[test]
    fn quantized_result_still_clears_neighbors() {
        // The neighbor's spacing band ends at 4.0. Scan x = 4.05 clears it
        // but rounds to 4.0, so the next step (4.35 → 4.375) is the answer.
        let r = rules().grid_step(0.3);
        let existing = [Opening::rect("a", 0.75, 0.75, 2.5, 2.5)];
        let pos = first_free_placement(10.0, 10.0, Size::new(2.0, 2.0), &existing, &r).unwrap();
        let placed = Opening::rect("new", pos.x, pos.y, 2.0, 2.0);
        assert!(!violates_spacing(&placed, &existing, r.min_spacing), "{pos:?}");
        assert!(!violates_no_cut_zone(&placed, 10.0, 10.0, &r), "{pos:?}");
        assert!(is_quantized(pos.x, r.quantize_step));
        assert_eq!(pos, Position::new(4.375, 0.75));
    }

    #[test]
    fn board_convenience_uses_board_openings() {
        let board = Board::new(20.0, 16.0).with_opening(Opening::rect("a", 0.75, 0.75, 5.0, 5.0));
        assert_eq!(
            first_free_placement_on(&board, Size::new(3.0, 3.0), &rules()),
            Some(Position::new(6.75, 0.75))
        );
    }

    #[test]
    fn centers_and_quantizes() {
        let o = Opening::rect("a", 1.0, 1.0, 5.0, 7.0);
        let c = recenter_after_size_change(&o, 16.0, 20.0, &rules());
        assert_eq!((c.x, c.y), (5.5, 6.5));

        // (11 - 5.3) / 2 = 2.85 → 2.875
        let o = Opening::rect("a", 0.0, 0.0, 5.3, 5.3);
        let c = recenter_after_size_change(&o, 11.0, 11.0, &rules());
        assert_eq!((c.x, c.y), (2.875, 2.875));
        assert_eq!(c.width, 5.3);
    }

    #[test]
    fn recentering_legacy_opening_converts_form() {
        let o = Opening::legacy_circle("p", 1.0, 1.0, 1.5);
        let c = recenter_after_size_change(&o, 7.0, 7.0, &rules());
        assert!(!c.is_legacy());
        assert_eq!(c.aabb(), Aabb::new(2.0, 2.0, 5.0, 5.0));
    }

    #[test]
    fn center_within_board() {
        assert_eq!(
            center_within(Size::new(4.0, 6.0), 10.0, 10.0),
            Position::new(3.0, 2.0)
        );
    }

    #[test]
    fn repeated_placement_fills_board_without_conflicts() {
        let r = rules();
        let mut placed = vec![];
        while let Some(pos) = first_free_placement(16.0, 12.0, Size::new(2.0, 2.0), &placed, &r) {
            let id = alloc::format!("o{}", placed.len());
            placed.push(Opening::rect(id, pos.x, pos.y, 2.0, 2.0));
            assert!(placed.len() < 100, "placement did not terminate");
        }
        assert!(!placed.is_empty());
        for o in &placed {
            assert!(!violates_no_cut_zone(o, 16.0, 12.0, &r), "{}", o.id);
            assert!(!violates_spacing(o, &placed, r.min_spacing), "{}", o.id);
        }
    }
}

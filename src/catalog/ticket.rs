//! Ticket stub layouts.

use alloc::vec::Vec;

use super::{Category, Preset, column, rect_grid};
use crate::geometry::{Board, Rules, Size};

/// Mat border around ticket layouts.
pub const TICKET_MAT_BORDER: f64 = 2.0;

/// Gap between items in multi-opening ticket layouts.
pub const TICKET_SPACING: f64 = 0.5;

/// Physical ticket formats.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TicketKind {
    /// Box-office ticket with stub attached.
    Standard,
    /// Ticket with the stub torn off.
    Stubless,
    Vip,
}

impl TicketKind {
    pub const fn size(self) -> Size {
        match self {
            Self::Standard => Size::new(5.625, 2.125),
            Self::Stubless => Size::new(5.5, 2.0),
            Self::Vip => Size::new(8.5, 2.75),
        }
    }
}

/// Landscape photo sizes offered next to a ticket.
const PHOTO_SIZES: [(&str, &str, Size); 3] = [
    ("ticket-photo-4x6", "Ticket + 4×6 Photo", Size::new(6.0, 4.0)),
    ("ticket-photo-5x7", "Ticket + 5×7 Photo", Size::new(7.0, 5.0)),
    ("ticket-photo-8x10", "Ticket + 8×10 Photo", Size::new(10.0, 8.0)),
];

fn tickets(rows: u32, cols: u32, kind: TicketKind) -> Board {
    rect_grid("ticket", rows, cols, kind.size(), TICKET_SPACING, TICKET_MAT_BORDER)
}

/// All ticket layouts, built for single-mat spacing.
pub fn presets() -> Vec<Preset> {
    let rules = Rules::single_mat();
    let preset = |id, name, category, board| Preset {
        id,
        name,
        category,
        board,
        mat_border: TICKET_MAT_BORDER,
        rules,
    };

    let mut all = Vec::new();
    all.push(preset(
        "single-ticket",
        "Single Ticket",
        Category::Single,
        tickets(1, 1, TicketKind::Standard),
    ));
    all.push(preset(
        "single-stubless",
        "Single Stubless Ticket",
        Category::Single,
        tickets(1, 1, TicketKind::Stubless),
    ));
    all.push(preset(
        "single-vip",
        "Single VIP Pass",
        Category::Single,
        tickets(1, 1, TicketKind::Vip),
    ));
    all.push(preset(
        "ticket-trio",
        "Ticket Trio",
        Category::Row,
        tickets(1, 3, TicketKind::Standard),
    ));
    all.push(preset(
        "ticket-grid-4",
        "Four Ticket Grid",
        Category::Grid,
        tickets(2, 2, TicketKind::Standard),
    ));
    for &(id, name, photo) in &PHOTO_SIZES {
        let board = column(
            &[("ticket", TicketKind::Standard.size()), ("photo", photo)],
            TICKET_SPACING * 2.0,
            TICKET_MAT_BORDER,
        );
        all.push(preset(id, name, Category::PhotoCombo, board));
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(id: &str) -> Preset {
        presets()
            .into_iter()
            .find(|p| p.id == id)
            .unwrap_or_else(|| panic!("missing preset {id}"))
    }

    #[test]
    fn single_ticket_is_ticket_plus_border() {
        let p = find("single-ticket");
        assert_eq!((p.board.width, p.board.height), (9.625, 6.125));
        let t = &p.board.openings[0];
        assert_eq!((t.x, t.y, t.width, t.height), (2.0, 2.0, 5.625, 2.125));
    }

    #[test]
    fn trio_spacing() {
        let p = find("ticket-trio");
        let xs: Vec<f64> = p.board.openings.iter().map(|o| o.x).collect();
        assert_eq!(xs, [2.0, 8.125, 14.25]);
        assert_eq!(p.board.width, 21.875);
    }

    #[test]
    fn photo_combo_centers_ticket_over_photo() {
        let p = find("ticket-photo-8x10");
        assert_eq!((p.board.width, p.board.height), (14.0, 15.125));
        let ticket = p.board.opening("ticket").map(|o| (o.x, o.y));
        assert_eq!(ticket, Some((4.25, 2.0)));
        let photo = p.board.opening("photo").map(|o| (o.x, o.y));
        assert_eq!(photo, Some((2.0, 5.125)));
    }

    #[test]
    fn vip_is_wider() {
        assert!(TicketKind::Vip.size().width > TicketKind::Standard.size().width);
        assert_eq!(find("single-vip").board.width, 12.5);
    }
}

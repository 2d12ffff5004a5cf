//! Saved designs read back through the `serde` derives, including records
//! written before openings carried a bounding size.

#![cfg(feature = "serde")]

use matlayout::*;
use pretty_assertions::assert_eq;

// ---- Openings ----

#[test]
fn legacy_circle_record_keeps_its_radius() {
    let json = r#"{"id":"puck-1","shape":"circle","x":3.5,"y":3.5,"width":0.0,"height":0.0,"rx":1.5}"#;
    let opening: Opening = serde_json::from_str(json).unwrap();

    assert_eq!(opening, Opening::legacy_circle("puck-1", 3.5, 3.5, 1.5));
    assert!(opening.is_legacy());
    assert_eq!(opening.aabb(), Aabb::new(2.0, 2.0, 5.0, 5.0));

    let back: Opening = serde_json::from_str(&serde_json::to_string(&opening).unwrap()).unwrap();
    assert_eq!(back, opening);
}

#[test]
fn bounding_form_omits_radii() {
    let opening = Opening::legacy_oval("o", 5.0, 4.0, 2.0, 1.0).to_bounding_form();
    let json = serde_json::to_string(&opening).unwrap();
    assert!(!json.contains("\"rx\""), "{json}");
    assert!(!json.contains("\"ry\""), "{json}");

    let back: Opening = serde_json::from_str(&json).unwrap();
    assert_eq!(back.aabb(), Aabb::new(3.0, 3.0, 7.0, 5.0));
}

#[test]
fn decorative_shape_names_its_motif() {
    let opening = Opening::new("d", Shape::Decorative(Motif::Club), 1.0, 1.0, 2.0, 2.0);
    let json = serde_json::to_string(&opening).unwrap();
    assert!(json.contains("\"decorative\":\"club\""), "{json}");
    let back: Opening = serde_json::from_str(&json).unwrap();
    assert_eq!(back, opening);
}

// ---- Boards ----

#[test]
fn saved_board_validates_after_loading() {
    let board = Board::new(20.0, 16.0)
        .with_opening(Opening::rect("photo", 0.75, 0.75, 5.0, 5.0))
        .with_opening(Opening::legacy_circle("puck", 9.0, 2.25, 1.5));
    let json = serde_json::to_string(&board).unwrap();
    let loaded: Board = serde_json::from_str(&json).unwrap();

    assert_eq!(loaded, board);
    assert!(check_board(&loaded, &Rules::default()).is_empty());
}

#[test]
fn rules_round_trip() {
    let rules = Rules::single_mat().grid_step(0.125);
    let json = serde_json::to_string(&rules).unwrap();
    assert_eq!(serde_json::from_str::<Rules>(&json).unwrap(), rules);
}

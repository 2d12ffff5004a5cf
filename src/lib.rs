//! Opening placement, spacing constraints, and sizing rules for custom mat
//! boards.
//!
//! Pure geometry in inches: no rendering, no I/O, `no_std` compatible with
//! `alloc`. Every call is a plain function over values the caller owns.
//!
//! # Modules
//!
//! - [`geometry`]: Openings, bounding boxes, boards, and the [`Rules`] thresholds
//! - [`validate`]: No-cut zone and spacing checks
//! - [`placement`]: First free position for a new opening, recentering
//! - [`snap`]: Center and edge-alignment guides for drags
//! - [`quantize`]: Rounding to the 1/8" cutting grid
//! - [`sizing`]: Minimum interior, required mat border, frame dimensions
//! - [`preview`]: Scaling a framed piece into an on-screen container
//! - [`units`]: Fraction parsing and display
//! - [`catalog`]: Generated puck and ticket layouts
//!
//! # Example
//!
//! ```
//! use matlayout::{Board, Opening, Rules, Size};
//! use matlayout::placement::first_free_placement_on;
//! use matlayout::validate::check_board;
//!
//! let rules = Rules::default();
//! let mut board = Board::new(20.0, 16.0)
//!     .with_opening(Opening::rect("photo", 0.75, 0.75, 5.0, 5.0));
//!
//! let pos = first_free_placement_on(&board, Size::new(3.0, 3.0), &rules).unwrap();
//! board.openings.push(Opening::rect("stub", pos.x, pos.y, 3.0, 3.0));
//! assert!(check_board(&board, &rules).is_empty());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod catalog;
pub mod geometry;
pub mod placement;
pub mod preview;
pub mod quantize;
pub mod sizing;
pub mod snap;
pub mod units;
pub mod validate;

#[cfg(feature = "svg")]
pub mod svg;

// Re-exports: core data model
pub use geometry::{
    Aabb, Board, GRID_STEP, MIN_SPACING, MIN_SPACING_SINGLE_MAT, Motif, NO_CUT_INSET, Opening,
    OpeningError, Position, Rules, SNAP_TOLERANCE, Shape, Size,
};
pub use placement::{first_free_placement, recenter_after_size_change};
pub use preview::{PreviewLayout, PreviewRequest, compute_preview_layout};
pub use quantize::{QUANTIZE_STEP, quantize};
pub use sizing::{
    FrameLayout, MIN_ART, MIN_INTERIOR, MatBorders, MatLayerConfig, required_mat_border,
    validate_minimum_interior,
};
pub use snap::{Axis, Snap, snap_to_align, snap_to_center};
pub use units::{ParseLengthError, format_dimension, parse_fraction};
pub use validate::{Violation, check_board, violates_no_cut_zone, violates_spacing};

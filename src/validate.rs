//! Manufacturability checks: the no-cut edge zone and opening spacing.
//!
//! Both checks are plain predicates over bounding boxes. They never move an
//! opening; the caller decides whether to reject the edit, snap, or just
//! highlight the problem.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::geometry::{Board, Opening, OpeningError, Rules};
use crate::units::format_dimension;

/// A board edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    pub const fn name(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
        }
    }
}

/// Set of board edges an opening encroaches on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeSet {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl EdgeSet {
    pub fn is_empty(&self) -> bool {
        !(self.top || self.right || self.bottom || self.left)
    }

    pub fn contains(&self, edge: Edge) -> bool {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    /// Edges in clockwise order starting at the top.
    pub fn iter(&self) -> impl Iterator<Item = Edge> {
        let set = *self;
        Edge::ALL.into_iter().filter(move |&e| set.contains(e))
    }
}

/// Which edges' no-cut bands the opening's bounding box reaches into.
pub fn no_cut_violations(
    opening: &Opening,
    board_w: f64,
    board_h: f64,
    rules: &Rules,
) -> EdgeSet {
    let b = opening.aabb();
    let inset = rules.no_cut_inset;
    EdgeSet {
        top: b.y1 < inset,
        right: b.x2 > board_w - inset,
        bottom: b.y2 > board_h - inset,
        left: b.x1 < inset,
    }
}

/// Whether the opening cuts into the clearance band along any board edge.
///
/// ```
/// use matlayout::{Opening, Rules};
/// use matlayout::validate::violates_no_cut_zone;
///
/// let rules = Rules::default();
/// let inside = Opening::rect("a", 0.75, 0.75, 5.0, 5.0);
/// let too_close = Opening::rect("b", 0.5, 0.75, 5.0, 5.0);
/// assert!(!violates_no_cut_zone(&inside, 20.0, 16.0, &rules));
/// assert!(violates_no_cut_zone(&too_close, 20.0, 16.0, &rules));
/// ```
pub fn violates_no_cut_zone(opening: &Opening, board_w: f64, board_h: f64, rules: &Rules) -> bool {
    !no_cut_violations(opening, board_w, board_h, rules).is_empty()
}

/// Ids of the openings in `others` that sit closer than `min_spacing`.
///
/// The opening's own id is skipped, so `others` may be the full board.
pub fn spacing_conflicts<'a>(
    opening: &Opening,
    others: &'a [Opening],
    min_spacing: f64,
) -> Vec<&'a str> {
    let expanded = opening.aabb().expand(min_spacing);
    others
        .iter()
        .filter(|other| other.id != opening.id)
        .filter(|other| expanded.intersects(&other.aabb()))
        .map(|other| other.id.as_str())
        .collect()
}

/// Whether any other opening lies within `min_spacing` of this one.
pub fn violates_spacing(opening: &Opening, others: &[Opening], min_spacing: f64) -> bool {
    let expanded = opening.aabb().expand(min_spacing);
    others
        .iter()
        .filter(|other| other.id != opening.id)
        .any(|other| expanded.intersects(&other.aabb()))
}

/// A problem with one opening on a board.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Violation {
    /// The opening's data is unusable; geometric checks were skipped.
    Malformed { id: String, error: OpeningError },
    /// The opening reaches into the no-cut band.
    NoCutZone { id: String, edges: EdgeSet, inset: f64 },
    /// The opening is too close to others.
    Spacing {
        id: String,
        conflicts: Vec<String>,
        min_spacing: f64,
    },
}

impl Violation {
    /// Id of the offending opening.
    pub fn id(&self) -> &str {
        match self {
            Self::Malformed { id, .. } | Self::NoCutZone { id, .. } | Self::Spacing { id, .. } => {
                id
            }
        }
    }

    /// User-facing description.
    pub fn message(&self) -> String {
        match self {
            Self::Malformed { id, error } => format!("Opening \"{id}\": {error}."),
            Self::NoCutZone { id, edges, inset } => {
                let names: Vec<&str> = edges.iter().map(Edge::name).collect();
                format!(
                    "Opening \"{id}\" must stay at least {}\" from the {} {}.",
                    format_dimension(*inset),
                    join_words(&names),
                    if names.len() == 1 { "edge" } else { "edges" }
                )
            }
            Self::Spacing {
                id,
                conflicts,
                min_spacing,
            } => {
                let quoted: Vec<String> = conflicts.iter().map(|c| format!("\"{c}\"")).collect();
                let quoted: Vec<&str> = quoted.iter().map(String::as_str).collect();
                format!(
                    "Opening \"{id}\" must be at least {}\" away from {}.",
                    format_dimension(*min_spacing),
                    join_words(&quoted)
                )
            }
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

fn join_words(words: &[&str]) -> String {
    match words {
        [] => String::new(),
        [one] => String::from(*one),
        [a, b] => format!("{a} and {b}"),
        [head @ .., last] => format!("{}, and {last}", head.join(", ")),
    }
}

/// Check every opening on the board.
///
/// Malformed openings are reported once and left out of every spacing
/// check. An empty result means the layout can be cut.
pub fn check_board(board: &Board, rules: &Rules) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut valid = Vec::with_capacity(board.openings.len());

    for opening in &board.openings {
        match opening.validate() {
            Ok(()) => valid.push(opening.clone()),
            Err(error) => violations.push(Violation::Malformed {
                id: opening.id.clone(),
                error,
            }),
        }
    }

    for opening in &valid {
        let edges = no_cut_violations(opening, board.width, board.height, rules);
        if !edges.is_empty() {
            violations.push(Violation::NoCutZone {
                id: opening.id.clone(),
                edges,
                inset: rules.no_cut_inset,
            });
        }
        let conflicts = spacing_conflicts(opening, &valid, rules.min_spacing);
        if !conflicts.is_empty() {
            violations.push(Violation::Spacing {
                id: opening.id.clone(),
                conflicts: conflicts.into_iter().map(String::from).collect(),
                min_spacing: rules.min_spacing,
            });
        }
    }

    if !violations.is_empty() {
        log::debug!(
            "board {}x{}: {} violation(s) across {} opening(s)",
            board.width,
            board.height,
            violations.len(),
            board.openings.len()
        );
    }
    violations
}

//! Snap guides for dragging and resizing openings.
//!
//! Each function works on one axis and returns a corrected start coordinate
//! plus whether a guide captured it. Snapping does not re-check spacing or
//! the no-cut zone; run the validator on the result.

use num_traits::Float;

use crate::geometry::{Opening, Rules};

/// Which coordinate a snap applies to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Axis {
    X,
    Y,
}

/// Outcome of a snap query.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snap {
    /// Start coordinate to use, snapped or not.
    pub snapped: f64,
    pub is_snapped: bool,
}

impl Snap {
    const fn unchanged(position: f64) -> Self {
        Self {
            snapped: position,
            is_snapped: false,
        }
    }

    const fn to(position: f64) -> Self {
        Self {
            snapped: position,
            is_snapped: true,
        }
    }
}

/// Center an opening in its container when it is already nearly centered.
///
/// `position` and `size` describe the opening along one axis; `container` is
/// the board length on that axis.
///
/// ```
/// use matlayout::Rules;
/// use matlayout::snap::snap_to_center;
///
/// let s = snap_to_center(3.9, 2.0, 10.0, &Rules::default());
/// assert!(s.is_snapped);
/// assert_eq!(s.snapped, 4.0);
/// ```
pub fn snap_to_center(position: f64, size: f64, container: f64, rules: &Rules) -> Snap {
    let center = position + size / 2.0;
    let container_center = container / 2.0;
    if Float::abs(center - container_center) < rules.snap_tolerance {
        Snap::to(container_center - size / 2.0)
    } else {
        Snap::unchanged(position)
    }
}

/// Align an edge of the opening with an edge of a neighbor.
///
/// Both edges of the moving opening (`position` and `position + size`) are
/// compared with both edges of each neighbor along `axis`. The first pair
/// within tolerance wins, walking `others` in order, then the neighbor's
/// start and end edge, then the moving opening's start and end edge. The
/// opening keeps its size.
pub fn snap_to_align(
    position: f64,
    size: f64,
    others: &[Opening],
    axis: Axis,
    rules: &Rules,
) -> Snap {
    let edges = [position, position + size];

    for other in others {
        let b = other.aabb();
        let other_edges = match axis {
            Axis::X => [b.x1, b.x2],
            Axis::Y => [b.y1, b.y2],
        };
        for other_edge in other_edges {
            for (i, edge) in edges.iter().enumerate() {
                if Float::abs(edge - other_edge) < rules.snap_tolerance {
                    let snapped = if i == 0 { other_edge } else { other_edge - size };
                    return Snap::to(snapped);
                }
            }
        }
    }

    Snap::unchanged(position)
}

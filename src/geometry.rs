//! Openings, boards, and axis-aligned bounding boxes.
//!
//! All lengths are inches, measured from the board's top-left corner with
//! y growing downward. Every opening, whatever its shape, is positioned by
//! the top-left corner of its bounding rectangle. Circles and ovals saved
//! before that convention carry a center and radii instead; [`Opening::aabb`]
//! still understands them.
//!
//! # Example
//!
//! ```
//! use matlayout::{Aabb, Opening};
//!
//! let photo = Opening::rect("photo", 2.0, 2.0, 8.0, 10.0);
//! assert_eq!(photo.aabb(), Aabb::new(2.0, 2.0, 10.0, 12.0));
//!
//! // Legacy puck opening: center (3.5, 3.5), radius 1.5.
//! let puck = Opening::legacy_circle("puck", 3.5, 3.5, 1.5);
//! assert_eq!(puck.aabb(), Aabb::new(2.0, 2.0, 5.0, 5.0));
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Minimum clearance between any opening and the board edge, in inches.
pub const NO_CUT_INSET: f64 = 0.75;

/// Default minimum gap between openings. Wide enough for a double mat.
pub const MIN_SPACING: f64 = 0.75;

/// Relaxed gap for boards that will only ever be cut as a single mat.
pub const MIN_SPACING_SINGLE_MAT: f64 = 0.25;

/// Distance within which a dragged opening snaps to a guide.
pub const SNAP_TOLERANCE: f64 = 0.25;

/// Step of the placement solver's raster scan.
pub const GRID_STEP: f64 = 0.25;

/// Decorative cut-out motifs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Motif {
    Diamond,
    Club,
    Spade,
}

/// Shape of the window cut into the mat.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Shape {
    #[default]
    Rectangle,
    Circle,
    Oval,
    /// A motif inscribed in the bounding rectangle.
    Decorative(Motif),
}

/// A point in board coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width × height in inches.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned bounding box. `(x1, y1)` is top-left, `(x2, y2)` bottom-right.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Aabb {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Box of the given size with its top-left corner at `(x, y)`.
    pub fn from_origin(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Box spanning `rx`/`ry` either side of a center point.
    pub fn around(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self::new(cx - rx, cy - ry, cx + rx, cy + ry)
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Grow outward by `margin` on all four sides.
    pub fn expand(&self, margin: f64) -> Self {
        Self::new(
            self.x1 - margin,
            self.y1 - margin,
            self.x2 + margin,
            self.y2 + margin,
        )
    }

    /// Separating-axis test. Boxes that merely touch count as intersecting.
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(self.x2 < other.x1 || self.x1 > other.x2 || self.y2 < other.y1 || self.y1 > other.y2)
    }
}

/// One window cut into a mat or shadowbox face.
///
/// `x`/`y` are the top-left of the bounding rectangle and `width`/`height`
/// its size. The legacy radius fields are only honored for circles and ovals
/// whose width is zero; in that case `x`/`y` are read as the center.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Opening {
    /// Unique within a board.
    pub id: String,
    pub shape: Shape,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Legacy horizontal radius.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub rx: Option<f64>,
    /// Legacy vertical radius (ovals only).
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub ry: Option<f64>,
}

impl Opening {
    /// Opening of any shape, positioned by its bounding rectangle.
    pub fn new(
        id: impl Into<String>,
        shape: Shape,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            id: id.into(),
            shape,
            x,
            y,
            width,
            height,
            rx: None,
            ry: None,
        }
    }

    /// Rectangular opening.
    pub fn rect(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(id, Shape::Rectangle, x, y, width, height)
    }

    /// Circle stored the pre-bounding-box way: center plus radius.
    pub fn legacy_circle(id: impl Into<String>, cx: f64, cy: f64, radius: f64) -> Self {
        Self {
            rx: Some(radius),
            ..Self::new(id, Shape::Circle, cx, cy, 0.0, 0.0)
        }
    }

    /// Oval stored the pre-bounding-box way: center plus two radii.
    pub fn legacy_oval(id: impl Into<String>, cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self {
            rx: Some(rx),
            ry: Some(ry),
            ..Self::new(id, Shape::Oval, cx, cy, 0.0, 0.0)
        }
    }

    /// Same opening moved so its bounding box starts at `pos`.
    pub fn at(&self, pos: Position) -> Self {
        let mut moved = self.to_bounding_form();
        moved.x = pos.x;
        moved.y = pos.y;
        moved
    }

    /// Radius that puts this opening on the legacy center-based path.
    fn legacy_rx(&self) -> Option<f64> {
        self.rx.filter(|&rx| rx > 0.0 && self.width == 0.0)
    }

    /// Bounding box in board coordinates.
    pub fn aabb(&self) -> Aabb {
        match (self.shape, self.legacy_rx()) {
            (Shape::Circle, Some(rx)) => Aabb::around(self.x, self.y, rx, rx),
            (Shape::Oval, Some(rx)) => {
                let ry = self.ry.filter(|&ry| ry > 0.0).unwrap_or(rx);
                Aabb::around(self.x, self.y, rx, ry)
            }
            (Shape::Rectangle | Shape::Circle | Shape::Oval | Shape::Decorative(_), _) => {
                Aabb::from_origin(self.x, self.y, self.width, self.height)
            }
        }
    }

    /// Size of the bounding box.
    pub fn size(&self) -> Size {
        let b = self.aabb();
        Size::new(b.width(), b.height())
    }

    /// Whether this opening still uses center + radius storage.
    pub fn is_legacy(&self) -> bool {
        matches!(self.shape, Shape::Circle | Shape::Oval) && self.legacy_rx().is_some()
    }

    /// Convert legacy center + radius storage to top-left + size.
    ///
    /// Openings already in bounding form are returned unchanged. The
    /// bounding box is identical before and after.
    pub fn to_bounding_form(&self) -> Self {
        if !self.is_legacy() {
            return self.clone();
        }
        let b = self.aabb();
        Self::new(self.id.clone(), self.shape, b.x1, b.y1, b.width(), b.height())
    }

    /// Reject values that would make geometry meaningless.
    pub fn validate(&self) -> Result<(), OpeningError> {
        let coords = [self.x, self.y, self.width, self.height];
        let radii = [self.rx, self.ry];
        if coords.iter().chain(radii.iter().flatten()).any(|v| !v.is_finite()) {
            return Err(OpeningError::NonFinite);
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(OpeningError::NegativeSize);
        }
        if radii.iter().flatten().any(|&r| r < 0.0) {
            return Err(OpeningError::NegativeRadius);
        }
        if self.shape == Shape::Circle
            && self.is_legacy()
            && let (Some(rx), Some(ry)) = (self.rx, self.ry)
            && rx != ry
        {
            return Err(OpeningError::UnequalCircleRadii);
        }
        Ok(())
    }
}

/// Malformed opening data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpeningError {
    /// A coordinate, size, or radius is NaN or infinite.
    NonFinite,
    /// Width or height is negative.
    NegativeSize,
    /// A legacy radius is negative.
    NegativeRadius,
    /// A legacy circle with different horizontal and vertical radii.
    UnequalCircleRadii,
}

impl fmt::Display for OpeningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::NonFinite => "opening has a non-numeric dimension",
            Self::NegativeSize => "opening width and height cannot be negative",
            Self::NegativeRadius => "opening radius cannot be negative",
            Self::UnequalCircleRadii => "a circle must have equal radii; use an oval",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for OpeningError {}

/// The mat or shadowbox face being designed.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    /// Outer width in inches.
    pub width: f64,
    /// Outer height in inches.
    pub height: f64,
    /// In display order.
    pub openings: Vec<Opening>,
}

impl Board {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            openings: Vec::new(),
        }
    }

    /// Append an opening.
    pub fn with_opening(mut self, opening: Opening) -> Self {
        self.openings.push(opening);
        self
    }

    /// Look up an opening by id.
    pub fn opening(&self, id: &str) -> Option<&Opening> {
        self.openings.iter().find(|o| o.id == id)
    }
}

/// Thresholds the constraint engine works with.
///
/// Passed by value into every operation so callers can relax or tighten a
/// single threshold without touching global state.
///
/// ```
/// use matlayout::Rules;
///
/// let rules = Rules::single_mat();
/// assert_eq!(rules.min_spacing, 0.25);
/// assert_eq!(rules.no_cut_inset, 0.75);
///
/// let coarse = Rules::default().grid_step(0.5);
/// assert_eq!(coarse.snap_tolerance, 0.25);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rules {
    /// Clearance required between openings and the board edge.
    pub no_cut_inset: f64,
    /// Gap required between any two openings.
    pub min_spacing: f64,
    /// Manufacturing increment for stored coordinates.
    pub quantize_step: f64,
    /// Snap guide capture distance.
    pub snap_tolerance: f64,
    /// Raster step of the placement solver.
    pub grid_step: f64,
}

impl Rules {
    /// Production thresholds (double-mat compatible spacing).
    pub const fn new() -> Self {
        Self {
            no_cut_inset: NO_CUT_INSET,
            min_spacing: MIN_SPACING,
            quantize_step: crate::quantize::QUANTIZE_STEP,
            snap_tolerance: SNAP_TOLERANCE,
            grid_step: GRID_STEP,
        }
    }

    /// Production thresholds with the relaxed single-mat spacing.
    pub const fn single_mat() -> Self {
        Self::new().min_spacing(MIN_SPACING_SINGLE_MAT)
    }

    pub const fn no_cut_inset(mut self, inset: f64) -> Self {
        self.no_cut_inset = inset;
        self
    }

    pub const fn min_spacing(mut self, spacing: f64) -> Self {
        self.min_spacing = spacing;
        self
    }

    pub const fn quantize_step(mut self, step: f64) -> Self {
        self.quantize_step = step;
        self
    }

    pub const fn snap_tolerance(mut self, tolerance: f64) -> Self {
        self.snap_tolerance = tolerance;
        self
    }

    pub const fn grid_step(mut self, step: f64) -> Self {
        self.grid_step = step;
        self
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}

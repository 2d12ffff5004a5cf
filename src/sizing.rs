//! Minimum sizes, mat borders, and outer frame dimensions.
//!
//! The shop will not cut an interior (the window the customer sees through)
//! smaller than [`MIN_INTERIOR`] on either side. Small artwork therefore
//! needs a mat border wide enough to make up the difference. These functions
//! are advisory: they report what is needed and leave the decision to apply
//! it to the caller.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::geometry::Size;
use crate::quantize::{QUANTIZE_STEP, quantize_up};
use crate::units::format_dimension;

/// Smallest interior dimension the shop will build, in inches.
pub const MIN_INTERIOR: f64 = 4.0;

/// Smallest artwork dimension accepted without a mat, in inches.
pub const MIN_ART: f64 = 4.0;

/// Short side of a standard mat board sheet.
pub const STANDARD_SHEET_WIDTH: f64 = 32.0;

/// Long side of a standard mat board sheet.
pub const STANDARD_SHEET_HEIGHT: f64 = 40.0;

/// Moulding face width assumed when a frame style does not specify one.
pub const DEFAULT_FRAME_FACE: f64 = 0.75;

/// Float slack on minimum-size comparisons.
const EPSILON: f64 = 1e-9;

fn is_length(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

/// Mat border, applied on every side, that brings `art` up to the minimum
/// interior.
///
/// Rounded up to the next 1/8" so the interior never falls short. Artwork
/// already at or above the minimum needs no border. Lengths must be finite
/// and non-negative: NaN, negative, or infinite input yields 0, which
/// [`validate_minimum_interior`] then rejects.
///
/// ```
/// use matlayout::sizing::required_mat_border;
///
/// assert_eq!(required_mat_border(1.0, 1.0), 1.5);
/// assert_eq!(required_mat_border(3.0, 4.0), 0.5);
/// assert_eq!(required_mat_border(4.0, 4.0), 0.0);
/// ```
pub fn required_mat_border(art_w: f64, art_h: f64) -> f64 {
    if !is_length(art_w) || !is_length(art_h) {
        return 0.0;
    }
    let deficit = (MIN_INTERIOR - art_w).max(MIN_INTERIOR - art_h).max(0.0);
    quantize_up(deficit / 2.0, QUANTIZE_STEP)
}

/// Result of [`validate_artwork_size`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArtworkCheck {
    pub valid: bool,
    pub width_ok: bool,
    pub height_ok: bool,
    /// Why the artwork was rejected. `None` when valid.
    pub message: Option<String>,
}

/// Whether artwork meets [`MIN_ART`] on both axes.
///
/// The message names the failing axis or axes and the offending values.
pub fn validate_artwork_size(art_w: f64, art_h: f64) -> ArtworkCheck {
    if !is_length(art_w) || !is_length(art_h) {
        return ArtworkCheck {
            valid: false,
            width_ok: is_length(art_w) && art_w >= MIN_ART,
            height_ok: is_length(art_h) && art_h >= MIN_ART,
            message: Some(String::from(
                "Artwork width and height must be positive numbers.",
            )),
        };
    }

    let width_ok = art_w >= MIN_ART;
    let height_ok = art_h >= MIN_ART;
    let min = format_dimension(MIN_ART);
    let message = match (width_ok, height_ok) {
        (true, true) => None,
        (false, false) => Some(format!(
            "Artwork must be at least {min}×{min} inches. Current: {}×{}\"",
            format_dimension(art_w),
            format_dimension(art_h)
        )),
        (false, true) => Some(format!(
            "Width must be at least {min} inches. Current: {}\"",
            format_dimension(art_w)
        )),
        (true, false) => Some(format!(
            "Height must be at least {min} inches. Current: {}\"",
            format_dimension(art_h)
        )),
    };

    ArtworkCheck {
        valid: width_ok && height_ok,
        width_ok,
        height_ok,
        message,
    }
}

/// Result of [`validate_minimum_interior`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteriorCheck {
    pub valid: bool,
    pub interior_width: f64,
    pub interior_height: f64,
    /// Per-side border that would satisfy the minimum. Set only on failure.
    pub required_mat_border: Option<f64>,
    /// How much wider the given border must get. Set only on failure.
    pub additional_border: Option<f64>,
    pub message: String,
}

/// Interior produced by `art` plus `border` on every side, checked against
/// [`MIN_INTERIOR`].
///
/// Every argument must be a finite, non-negative length. NaN, negative, or
/// infinite input comes back invalid with no border suggestion.
///
/// ```
/// use matlayout::sizing::validate_minimum_interior;
///
/// let ok = validate_minimum_interior(2.0, 2.0, 1.0);
/// assert!(ok.valid);
/// assert_eq!(ok.interior_width, 4.0);
///
/// let short = validate_minimum_interior(3.0, 3.0, 0.0);
/// assert!(!short.valid);
/// assert_eq!(short.required_mat_border, Some(0.5));
/// ```
pub fn validate_minimum_interior(art_w: f64, art_h: f64, border: f64) -> InteriorCheck {
    if !is_length(art_w) || !is_length(art_h) || !is_length(border) {
        return InteriorCheck {
            valid: false,
            interior_width: 0.0,
            interior_height: 0.0,
            required_mat_border: None,
            additional_border: None,
            message: String::from("Artwork size and mat border must be non-negative numbers."),
        };
    }

    let interior_width = art_w + border * 2.0;
    let interior_height = art_h + border * 2.0;
    let valid =
        interior_width + EPSILON >= MIN_INTERIOR && interior_height + EPSILON >= MIN_INTERIOR;

    if valid {
        return InteriorCheck {
            valid,
            interior_width,
            interior_height,
            required_mat_border: None,
            additional_border: None,
            message: format!(
                "Interior size: {}×{}\"",
                format_dimension(interior_width),
                format_dimension(interior_height)
            ),
        };
    }

    let required = required_mat_border(art_w, art_h);
    let additional = (required - border).max(0.0);
    let min = format_dimension(MIN_INTERIOR);
    InteriorCheck {
        valid,
        interior_width,
        interior_height,
        required_mat_border: Some(required),
        additional_border: Some(additional),
        message: format!(
            "Interior must be at least {min}×{min}\". Use a {}\" mat border ({}\" more).",
            format_dimension(required),
            format_dimension(additional)
        ),
    }
}

/// Whether a mat of this size must be cut from an oversize sheet.
///
/// Orientation does not matter: the short side is compared with the
/// standard sheet's short side and the long side with its long side.
pub fn is_oversize_mat(width: f64, height: f64) -> bool {
    let (short, long) = if width <= height {
        (width, height)
    } else {
        (height, width)
    };
    short > STANDARD_SHEET_WIDTH || long > STANDARD_SHEET_HEIGHT
}

/// Border width on each side of an opening.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sides {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Sides {
    pub const fn uniform(width: f64) -> Self {
        Self {
            top: width,
            right: width,
            bottom: width,
            left: width,
        }
    }

    /// `left + right`.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// `top + bottom`.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Mat border widths: one width for all sides, or one per side
/// (e.g. a bottom-weighted mat).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MatBorders {
    Uniform(f64),
    PerSide(Sides),
}

impl Default for MatBorders {
    fn default() -> Self {
        Self::Uniform(0.0)
    }
}

impl MatBorders {
    pub fn sides(&self) -> Sides {
        match *self {
            Self::Uniform(w) => Sides::uniform(w),
            Self::PerSide(sides) => sides,
        }
    }
}

/// Mat and moulding around an interior.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatLayerConfig {
    pub borders: MatBorders,
    /// Visible lip of the lower mat in a double mat. 0 for a single mat.
    pub reveal: f64,
    /// Moulding face width.
    pub frame_face: f64,
}

impl Default for MatLayerConfig {
    fn default() -> Self {
        Self {
            borders: MatBorders::default(),
            reveal: 0.0,
            frame_face: DEFAULT_FRAME_FACE,
        }
    }
}

impl MatLayerConfig {
    pub fn new(borders: MatBorders) -> Self {
        Self {
            borders,
            ..Self::default()
        }
    }

    /// Stacked shadowbox mats: each layer's border adds to the total.
    pub fn from_layers(layer_borders: &[f64], frame_face: f64) -> Self {
        Self {
            borders: MatBorders::Uniform(layer_borders.iter().sum()),
            reveal: 0.0,
            frame_face,
        }
    }

    pub fn reveal(mut self, reveal: f64) -> Self {
        self.reveal = reveal;
        self
    }

    pub fn frame_face(mut self, frame_face: f64) -> Self {
        self.frame_face = frame_face;
        self
    }

    /// Inch dimensions of the framed piece around `interior`.
    pub fn layout(&self, interior: Size) -> FrameLayout {
        let borders = self.borders.sides();
        let glass = Size::new(
            interior.width + borders.horizontal(),
            interior.height + borders.vertical(),
        );
        let extra = 2.0 * self.frame_face + 2.0 * self.reveal;
        FrameLayout {
            interior,
            glass,
            outer: Size::new(glass.width + extra, glass.height + extra),
            borders,
            reveal: self.reveal,
            frame_face: self.frame_face,
        }
    }
}

/// Inch dimensions derived from a [`MatLayerConfig`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameLayout {
    /// The window the artwork shows through.
    pub interior: Size,
    /// Interior plus mat borders: the glass and mat board size.
    pub glass: Size,
    /// Overall framed size including moulding.
    pub outer: Size,
    pub borders: Sides,
    pub reveal: f64,
    pub frame_face: f64,
}

/// Shadowbox sizing: stacked mats of `mat_layers` border widths inside a
/// moulding of face width `moulding`.
///
/// ```
/// use matlayout::sizing::frame_layout;
///
/// let layout = frame_layout(12.0, 12.0, &[2.0, 0.5], 0.75);
/// assert_eq!(layout.outer.width, 18.5);
/// assert_eq!(layout.interior.width, 12.0);
/// ```
pub fn frame_layout(
    interior_w: f64,
    interior_h: f64,
    mat_layers: &[f64],
    moulding: f64,
) -> FrameLayout {
    MatLayerConfig::from_layers(mat_layers, moulding).layout(Size::new(interior_w, interior_h))
}

impl FrameLayout {
    /// Whether the mat board needs an oversize sheet.
    pub fn needs_oversize_sheet(&self) -> bool {
        is_oversize_mat(self.glass.width, self.glass.height)
    }
}

impl fmt::Display for FrameLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}×{}\" interior, {}×{}\" mat, {}×{}\" framed",
            format_dimension(self.interior.width),
            format_dimension(self.interior.height),
            format_dimension(self.glass.width),
            format_dimension(self.glass.height),
            format_dimension(self.outer.width),
            format_dimension(self.outer.height)
        )
    }
}

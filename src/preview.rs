//! On-screen preview geometry.
//!
//! Maps the inch dimensions of a framed piece to pixels for a container of
//! a given size. One scale factor is applied to every dimension, so the
//! nested rectangles (moulding, mat, opening) keep their proportions and the
//! whole frame fits inside the container.

use crate::geometry::Size;
use crate::sizing::{DEFAULT_FRAME_FACE, FrameLayout, MatBorders, MatLayerConfig, Sides};

/// Default container padding, in pixels.
pub const DEFAULT_PADDING: f64 = 12.0;

/// Smallest interior dimension the preview will draw, in inches.
const MIN_PREVIEW_INTERIOR: f64 = 1.0;

/// Smallest available drawing length, in pixels.
const MIN_AVAILABLE: f64 = 1.0;

/// Inputs to [`compute_preview_layout`].
///
/// ```
/// use matlayout::preview::{PreviewRequest, compute_preview_layout};
///
/// let req = PreviewRequest::new(16.0, 20.0, 600.0, 500.0).uniform_border(2.5);
/// let layout = compute_preview_layout(&req);
/// assert!(layout.outer.height <= 500.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreviewRequest {
    /// Interior (artwork window) in inches.
    pub interior: Size,
    pub borders: MatBorders,
    pub mat_reveal: f64,
    pub frame_face: f64,
    /// Container in pixels.
    pub container: Size,
    /// Pixels kept clear on each side of the container.
    pub padding: f64,
}

impl PreviewRequest {
    pub fn new(interior_w: f64, interior_h: f64, container_w: f64, container_h: f64) -> Self {
        Self {
            interior: Size::new(interior_w, interior_h),
            borders: MatBorders::default(),
            mat_reveal: 0.0,
            frame_face: DEFAULT_FRAME_FACE,
            container: Size::new(container_w, container_h),
            padding: DEFAULT_PADDING,
        }
    }

    pub fn borders(mut self, borders: MatBorders) -> Self {
        self.borders = borders;
        self
    }

    pub fn uniform_border(self, width: f64) -> Self {
        self.borders(MatBorders::Uniform(width))
    }

    /// Independent border per side. Replaces any uniform border.
    pub fn per_side(self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.borders(MatBorders::PerSide(Sides {
            top,
            right,
            bottom,
            left,
        }))
    }

    pub fn mat_reveal(mut self, reveal: f64) -> Self {
        self.mat_reveal = reveal;
        self
    }

    pub fn frame_face(mut self, face: f64) -> Self {
        self.frame_face = face;
        self
    }

    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }
}

/// Pixel dimensions of a framed piece, ready to draw as nested rectangles.
///
/// Every field except `scale` and `padding` is the matching inch value times
/// `scale`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreviewLayout {
    /// Pixels per inch.
    pub scale: f64,
    pub padding: f64,
    /// Moulding outer edge.
    pub outer: Size,
    /// Glass and mat board.
    pub glass: Size,
    /// The cut window.
    pub opening: Size,
    pub frame_face: f64,
    /// Uniform border, or the top border when borders are per side.
    pub mat: f64,
    pub mat_sides: Sides,
    pub mat_reveal: f64,
}

/// Scale the framed piece described by `req` to fit its container.
///
/// Never fails. Interiors under 1" are drawn as 1", and a container with no
/// room left after padding is treated as 1px across.
///
/// ```
/// use matlayout::preview::{PreviewRequest, compute_preview_layout};
///
/// let req = PreviewRequest::new(16.0, 20.0, 600.0, 500.0).uniform_border(2.5);
/// let layout = compute_preview_layout(&req);
/// let expected = f64::min(576.0 / 22.5, 476.0 / 26.5);
/// assert_eq!(layout.scale, expected);
/// assert_eq!(layout.opening.width, 16.0 * expected);
/// ```
pub fn compute_preview_layout(req: &PreviewRequest) -> PreviewLayout {
    let interior = Size::new(
        req.interior.width.max(MIN_PREVIEW_INTERIOR),
        req.interior.height.max(MIN_PREVIEW_INTERIOR),
    );
    let inches = MatLayerConfig::new(req.borders)
        .reveal(req.mat_reveal)
        .frame_face(req.frame_face)
        .layout(interior);

    let avail_w = (req.container.width - 2.0 * req.padding).max(MIN_AVAILABLE);
    let avail_h = (req.container.height - 2.0 * req.padding).max(MIN_AVAILABLE);
    let mut scale = (avail_w / inches.outer.width).min(avail_h / inches.outer.height);
    if !(scale.is_finite() && scale > 0.0) {
        log::debug!(
            "preview scale {scale} unusable for {}x{} frame, drawing nothing",
            inches.outer.width,
            inches.outer.height
        );
        scale = 0.0;
    }

    scaled(&inches, req, scale)
}

fn scaled(inches: &FrameLayout, req: &PreviewRequest, scale: f64) -> PreviewLayout {
    let px = |s: Size| Size::new(s.width * scale, s.height * scale);
    let sides = inches.borders;
    let mat = match req.borders {
        MatBorders::Uniform(w) => w,
        MatBorders::PerSide(s) => s.top,
    };
    PreviewLayout {
        scale,
        padding: req.padding,
        outer: px(inches.outer),
        glass: px(inches.glass),
        opening: px(inches.interior),
        frame_face: inches.frame_face * scale,
        mat: mat * scale,
        mat_sides: Sides {
            top: sides.top * scale,
            right: sides.right * scale,
            bottom: sides.bottom * scale,
            left: sides.left * scale,
        },
        mat_reveal: inches.reveal * scale,
    }
}

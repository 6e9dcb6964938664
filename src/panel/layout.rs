//! Nine-slice layout
//!
//! Cuts a texture into nine regions with four margins and places each region
//! inside a panel of arbitrary size:
//!
//! ```text
//!  +----+-------------+----+
//!  | TL |     Top     | TR |   corners: never scaled
//!  +----+-------------+----+
//!  |    |             |    |   left/right: stretched vertically
//!  | L  |   Center    | R  |   top/bottom: stretched horizontally
//!  |    |             |    |   center: stretched both ways
//!  +----+-------------+----+
//!  | BL |   Bottom    | BR |
//!  +----+-------------+----+
//! ```
//!
//! All destinations are in panel-local, unrotated coordinates with the origin
//! at the panel's top-left corner. Rotation about the panel center is applied
//! by the renderer through [`super::PanelTransform`].

use tracing::trace;

use super::error::PanelError;
use super::geometry::{Margins, Rect};

/// One of the nine regions of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Center,
    Right,
    TopRight,
    Top,
    TopLeft,
    Left,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Piece {
    /// Draw order of the pieces: the center first, then the border clockwise
    /// starting from the right edge
    pub const ALL: [Piece; 9] = [
        Piece::Center,
        Piece::Right,
        Piece::TopRight,
        Piece::Top,
        Piece::TopLeft,
        Piece::Left,
        Piece::BottomLeft,
        Piece::Bottom,
        Piece::BottomRight,
    ];

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Piece::TopRight | Piece::TopLeft | Piece::BottomLeft | Piece::BottomRight
        )
    }

    fn index(self) -> usize {
        match self {
            Piece::Center => 0,
            Piece::Right => 1,
            Piece::TopRight => 2,
            Piece::Top => 3,
            Piece::TopLeft => 4,
            Piece::Left => 5,
            Piece::BottomLeft => 6,
            Piece::Bottom => 7,
            Piece::BottomRight => 8,
        }
    }
}

/// A single region draw: where to sample and where to put it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub piece: Piece,
    /// Region of the texture, always within the texture bounds
    pub source: Rect,
    /// Placement in panel-local coordinates
    pub dest: Rect,
    /// Clip rectangle in panel-local coordinates (corners only)
    pub clip: Option<Rect>,
}

impl Slice {
    fn stretched(piece: Piece, source: Rect, dest: Rect) -> Self {
        Self {
            piece,
            source,
            dest,
            clip: None,
        }
    }

    fn masked(piece: Piece, source: Rect, dest: Rect, clip: Rect) -> Self {
        Self {
            piece,
            source,
            dest,
            clip: Some(clip),
        }
    }

    /// A zero-area slice contributes nothing to the final image
    pub fn is_empty(&self) -> bool {
        self.source.is_empty() || self.dest.is_empty()
    }
}

/// Computes the nine slices for a texture, margins and target size.
///
/// Negative or non-finite target dimensions are treated as zero. The result
/// is ordered as [`Piece::ALL`].
pub fn compute_slices(texture_size: [f32; 2], margins: Margins, target: [f32; 2]) -> [Slice; 9] {
    let [tex_w, tex_h] = texture_size;
    let Margins {
        top,
        right,
        bottom,
        left,
    } = margins;
    let width = sanitize_extent(target[0]);
    let height = sanitize_extent(target[1]);

    let source = |x: f32, y: f32, w: f32, h: f32| Rect::new(x, y, w, h).clamp_within(tex_w, tex_h);
    let tex_inner_w = tex_w - left - right;
    let tex_inner_h = tex_h - top - bottom;

    let inner_w = (width - left - right).max(0.0);
    let inner_h = (height - top - bottom).max(0.0);
    let mid_x = (width - left - right) / 2.0 + left;
    let mid_y = (height - top - bottom) / 2.0 + top;

    let center = Slice::stretched(
        Piece::Center,
        source(left, top, tex_inner_w, tex_inner_h),
        Rect::from_center([mid_x, mid_y], [inner_w, inner_h]),
    );
    let right_edge = Slice::stretched(
        Piece::Right,
        source(tex_w - right, top, right, tex_inner_h),
        Rect::from_center([width - right / 2.0, mid_y], [right, inner_h]),
    );
    let top_edge = Slice::stretched(
        Piece::Top,
        source(left, 0.0, tex_inner_w, top),
        Rect::from_center([mid_x, top / 2.0], [inner_w, top]),
    );
    let left_edge = Slice::stretched(
        Piece::Left,
        source(0.0, top, left, tex_inner_h),
        Rect::from_center([left / 2.0, mid_y], [left, inner_h]),
    );
    let bottom_edge = Slice::stretched(
        Piece::Bottom,
        source(left, tex_h - bottom, tex_inner_w, bottom),
        Rect::from_center([mid_x, height - bottom / 2.0], [inner_w, bottom]),
    );

    // Corners keep their texture size and sit flush in the panel corner.
    let top_right_src = source(tex_w - right, 0.0, right, top);
    let top_right = Slice::masked(
        Piece::TopRight,
        top_right_src,
        Rect::new(
            width - top_right_src.width,
            0.0,
            top_right_src.width,
            top_right_src.height,
        ),
        Rect::new(width - right, 0.0, right, top),
    );

    let top_left_src = source(0.0, 0.0, left, top);
    let top_left = Slice::masked(
        Piece::TopLeft,
        top_left_src,
        Rect::new(0.0, 0.0, top_left_src.width, top_left_src.height),
        Rect::new(0.0, 0.0, left, top),
    );

    let bottom_left_src = source(0.0, tex_h - bottom, left, bottom);
    let bottom_left = Slice::masked(
        Piece::BottomLeft,
        bottom_left_src,
        Rect::new(
            0.0,
            height - bottom_left_src.height,
            bottom_left_src.width,
            bottom_left_src.height,
        ),
        Rect::new(0.0, height - bottom, left, bottom),
    );

    let bottom_right_src = source(tex_w - right, tex_h - bottom, right, bottom);
    let bottom_right = Slice::masked(
        Piece::BottomRight,
        bottom_right_src,
        Rect::new(
            width - bottom_right_src.width,
            height - bottom_right_src.height,
            bottom_right_src.width,
            bottom_right_src.height,
        ),
        Rect::new(width - right, height - bottom, right, bottom),
    );

    [
        center,
        right_edge,
        top_right,
        top_edge,
        top_left,
        left_edge,
        bottom_left,
        bottom_edge,
        bottom_right,
    ]
}

fn sanitize_extent(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

fn validate(texture_size: [f32; 2], margins: &Margins) -> Result<(), PanelError> {
    if let Some(side) = margins.first_invalid_side() {
        return Err(PanelError::InvalidConfiguration(format!(
            "{side} margin must be a finite, non-negative value"
        )));
    }
    if texture_size.iter().any(|v| !v.is_finite() || *v < 0.0) {
        return Err(PanelError::InvalidConfiguration(format!(
            "texture size {}x{} must be finite and non-negative",
            texture_size[0], texture_size[1]
        )));
    }
    Ok(())
}

/// Stateful nine-slice layout that caches the slices for the current inputs
#[derive(Debug, Clone)]
pub struct NineSliceLayout {
    texture_size: [f32; 2],
    margins: Margins,
    target_size: [f32; 2],
    slices: [Slice; 9],
}

impl NineSliceLayout {
    /// Creates a layout and computes its slices for the given target size
    pub fn new(
        texture_size: [f32; 2],
        margins: Margins,
        target_size: [f32; 2],
    ) -> Result<Self, PanelError> {
        validate(texture_size, &margins)?;
        let target_size = [
            sanitize_extent(target_size[0]),
            sanitize_extent(target_size[1]),
        ];
        Ok(Self {
            texture_size,
            margins,
            target_size,
            slices: compute_slices(texture_size, margins, target_size),
        })
    }

    /// Recomputes all nine slices for a new target size
    pub fn recompute(&mut self, target_width: f32, target_height: f32) -> &[Slice; 9] {
        self.target_size = [sanitize_extent(target_width), sanitize_extent(target_height)];
        self.slices = compute_slices(self.texture_size, self.margins, self.target_size);
        trace!(
            width = self.target_size[0],
            height = self.target_size[1],
            "Recomputed nine-slice layout"
        );
        &self.slices
    }

    /// Replaces the margins and re-slices
    pub fn set_margins(&mut self, margins: Margins) -> Result<(), PanelError> {
        validate(self.texture_size, &margins)?;
        self.margins = margins;
        self.refresh();
        Ok(())
    }

    /// Replaces the texture dimensions and re-slices
    pub fn set_texture_size(&mut self, texture_size: [f32; 2]) -> Result<(), PanelError> {
        validate(texture_size, &self.margins)?;
        self.texture_size = texture_size;
        self.refresh();
        Ok(())
    }

    fn refresh(&mut self) {
        let [w, h] = self.target_size;
        self.recompute(w, h);
    }

    pub fn slices(&self) -> &[Slice; 9] {
        &self.slices
    }

    pub fn slice(&self, piece: Piece) -> &Slice {
        &self.slices[piece.index()]
    }

    pub fn texture_size(&self) -> [f32; 2] {
        self.texture_size
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn target_size(&self) -> [f32; 2] {
        self.target_size
    }
}

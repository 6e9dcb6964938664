//! Rectangle and size primitives shared by the layout and draw commands

/// Axis-aligned rectangle in texture or panel-local pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle of the given size around a center point
    pub fn from_center(center: [f32; 2], size: [f32; 2]) -> Self {
        Self::new(
            center[0] - size[0] / 2.0,
            center[1] - size[1] / 2.0,
            size[0],
            size[1],
        )
    }

    /// Get the center point of the rectangle
    pub fn center(&self) -> [f32; 2] {
        [self.x + self.width / 2.0, self.y + self.height / 2.0]
    }

    pub fn size(&self) -> [f32; 2] {
        [self.width, self.height]
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// True when nothing would be drawn for this rectangle
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, pos: [f32; 2]) -> bool {
        pos[0] >= self.x && pos[0] <= self.right() && pos[1] >= self.y && pos[1] <= self.bottom()
    }

    /// Clip the rectangle so it lies within `[0, bounds_width] x [0, bounds_height]`.
    ///
    /// Negative extents become zero, the origin is clamped into the bounds and
    /// the extent is cut at the far edge. The result never has a negative size.
    pub fn clamp_within(self, bounds_width: f32, bounds_height: f32) -> Self {
        let bounds_width = bounds_width.max(0.0);
        let bounds_height = bounds_height.max(0.0);

        let x = self.x.clamp(0.0, bounds_width);
        let y = self.y.clamp(0.0, bounds_height);
        let width = self.width.max(0.0).min(bounds_width - x);
        let height = self.height.max(0.0).min(bounds_height - y);

        Self::new(x, y, width, height)
    }
}

/// Border thickness on each side of a nine-slice texture, in texture pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same thickness on all four sides
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Sum of left and right margins
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of top and bottom margins
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Returns the name of the first side that is negative or not finite
    pub(crate) fn first_invalid_side(&self) -> Option<&'static str> {
        [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite() || *v < 0.0)
        .map(|(side, _)| side)
    }
}

/// Placement of a panel's local coordinate space in the world.
///
/// A local point `p` maps to `position + rotate(p - pivot, rotation)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelTransform {
    pub position: [f32; 2],
    pub pivot: [f32; 2],
    /// Rotation in radians, clockwise in a y-down space
    pub rotation: f32,
}

impl PanelTransform {
    /// Maps a panel-local point into world space
    pub fn local_to_world(&self, local: [f32; 2]) -> [f32; 2] {
        let dx = local[0] - self.pivot[0];
        let dy = local[1] - self.pivot[1];
        let (sin, cos) = self.rotation.sin_cos();
        [
            self.position[0] + dx * cos - dy * sin,
            self.position[1] + dx * sin + dy * cos,
        ]
    }
}

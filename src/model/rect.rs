//! Axis-aligned bounding rectangle.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in XYWH form, matching the read-only rectangle
/// shape of the detection interface.
///
/// Detection never derives this from the corner points: every record carries
/// the empty placeholder returned by [`BoundingBox::default`]. Callers that
/// need real extents should compute them from `corner_points`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Creates a rectangle from its origin and size.
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The smaller of the two vertical edges.
    ///
    /// Width and height may be negative, so each edge takes the min/max of
    /// the origin and the far side.
    #[inline]
    pub fn top(&self) -> f64 {
        self.y.min(self.y + self.height)
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x.max(self.x + self.width)
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y.max(self.y + self.height)
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.x.min(self.x + self.width)
    }

    /// Returns true if the rectangle has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

//! Bounding box type for annotated regions.
//!
//! Coordinates are percentages of the video frame, nominally `[0.0, 100.0]`
//! on each axis. Values outside that range are legal and place the box
//! partially off-frame; nothing here clamps them.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by two opposite corners.
///
/// `(x1, y1)` is not required to be the top-left corner. Use [`xmin`],
/// [`ymin`], [`width`] and [`height`] when drawing.
///
/// [`xmin`]: BoundingBox::xmin
/// [`ymin`]: BoundingBox::ymin
/// [`width`]: BoundingBox::width
/// [`height`]: BoundingBox::height
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BoundingBox {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        (self.x1 - self.x2).abs()
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        (self.y1 - self.y2).abs()
    }

    /// Left edge.
    pub fn xmin(&self) -> f64 {
        self.x1.min(self.x2)
    }

    /// Top edge.
    pub fn ymin(&self) -> f64 {
        self.y1.min(self.y2)
    }

    /// Right edge.
    pub fn xmax(&self) -> f64 {
        self.x1.max(self.x2)
    }

    /// Bottom edge.
    pub fn ymax(&self) -> f64 {
        self.y1.max(self.y2)
    }

    /// The same rectangle with `(x1, y1)` as the top-left corner.
    pub fn normalized(&self) -> Self {
        Self {
            x1: self.xmin(),
            y1: self.ymin(),
            x2: self.xmax(),
            y2: self.ymax(),
        }
    }

    /// Check if a point lies within the box, edges included.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.xmin() && x <= self.xmax() && y >= self.ymin() && y <= self.ymax()
    }

    /// Whether all four coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x1.is_finite() && self.y1.is_finite() && self.x2.is_finite() && self.y2.is_finite()
    }
}

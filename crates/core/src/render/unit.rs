use crate::util::range::NumRange;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A 2D point in **pixel space**, i.e. the coordinate space of whatever
/// canvas the map is being drawn onto. `(0, 0)` is the top-left of the canvas.
#[derive(
    Copy, Clone, Debug, Default, Display, PartialEq, Serialize, Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangle on the canvas that the full map image is drawn into, in pixel
/// space.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Horizontal extent of the viewport on the canvas
    pub fn x_range(&self) -> NumRange {
        NumRange::from_start(self.x, self.width)
    }

    /// Vertical extent of the viewport on the canvas
    pub fn y_range(&self) -> NumRange {
        NumRange::from_start(self.y, self.height)
    }
}

/// An axis-aligned ellipse. Circles are just ellipses with equal radii.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Ellipse {
    pub center: PixelPoint,
    pub radius_x: f64,
    pub radius_y: f64,
}

/// A straight line between two points
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub from: PixelPoint,
    pub to: PixelPoint,
}

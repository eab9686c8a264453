//! Integer pixel geometry shared by the hover resolver and its collaborators.

use serde::{Deserialize, Serialize};

/// A cursor position in the chat container's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub struct Point {
    /// Horizontal pixel coordinate.
    pub x: i32,
    /// Vertical pixel coordinate.
    pub y: i32,
}

impl Point {
    /// Create a point from raw pixel coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned pixel rectangle.
///
/// Containment is half-open: the left and top edges are inside, the right
/// and bottom edges are not. A rectangle with zero or negative extent
/// contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub struct Bounds {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Bounds {
    /// Create bounds from position and size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check whether `point` lies inside these bounds.
    pub fn contains(&self, point: Point) -> bool {
        if self.width <= 0 || self.height <= 0 {
            return false;
        }

        let (px, py) = (i64::from(point.x), i64::from(point.y));
        let (x, y) = (i64::from(self.x), i64::from(self.y));

        px >= x && py >= y && px < x + i64::from(self.width) && py < y + i64::from(self.height)
    }
}

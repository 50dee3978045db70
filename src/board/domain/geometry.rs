//! Integer screen geometry.
//!
//! Coordinates are whole pixels. Centres are compared in doubled coordinates
//! so that equidistance is exact and tie-breaks are reproducible.

use serde::{Deserialize, Serialize};

/// A pointer position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns `true` when `point` lies inside the half-open bounds.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let (px, py) = (i64::from(point.x), i64::from(point.y));
        let (left, top) = (i64::from(self.x), i64::from(self.y));
        px >= left
            && py >= top
            && px < left + i64::from(self.width)
            && py < top + i64::from(self.height)
    }

    /// Returns the area in square pixels.
    #[must_use]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Returns the centre scaled by two on both axes.
    #[must_use]
    pub fn doubled_center(&self) -> (i64, i64) {
        (
            2 * i64::from(self.x) + i64::from(self.width),
            2 * i64::from(self.y) + i64::from(self.height),
        )
    }

    /// Returns the squared distance between the doubled centres of two
    /// rectangles. Only meaningful for comparisons.
    #[must_use]
    pub fn center_distance_sq(&self, other: &Self) -> i128 {
        let (ax, ay) = self.doubled_center();
        let (bx, by) = other.doubled_center();
        let dx = i128::from(ax - bx);
        let dy = i128::from(ay - by);
        dx * dx + dy * dy
    }

    /// Returns this rectangle translated so its top-left corner is `origin`.
    #[must_use]
    pub const fn at(self, origin: Point) -> Self {
        Self::new(origin.x, origin.y, self.width, self.height)
    }
}

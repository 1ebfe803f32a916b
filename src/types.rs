//! Geometry primitives shared by the input and output models.
//!
//! All coordinates are in renderer pixels (the DOT unit scale of 72 px per
//! length unit is applied at the accessor boundary, so nothing downstream
//! needs to care about unit conversion).

use glam::DVec2;

/// A point in 2D renderer space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn from_vec(v: DVec2) -> Self {
        Point { x: v.x, y: v.y }
    }

    /// Midpoint between two points.
    pub fn midpoint(self, other: Point) -> Point {
        Point::from_vec((self.to_vec() + other.to_vec()) / 2.0)
    }
}

/// A 2D extent (width × height).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub fn new(w: f64, h: f64) -> Self {
        Size { w, h }
    }

    /// Element-wise maximum of two sizes.
    pub fn max(self, other: Size) -> Size {
        Size {
            w: self.w.max(other.w),
            h: self.h.max(other.h),
        }
    }
}

/// Axis-aligned rectangle, top-left anchored.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Rect { x, y, w, h }
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }
}

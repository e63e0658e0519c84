//! Rectangles.

use cgmath::{Point2, Vector2};

/// An axis-aligned rectangle.
///
/// `left`/`top` are inclusive, `right`/`bottom` exclusive. Positive y points down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    /// Creates a new rectangle from its edges.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Rect {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a new rectangle from an origin and a size.
    pub fn from_origin_size(origin: Point2<f64>, size: Vector2<f64>) -> Rect {
        Rect {
            left: origin.x,
            top: origin.y,
            right: origin.x + size.x,
            bottom: origin.y + size.y,
        }
    }

    /// Returns a zero-sized rectangle at the origin.
    pub fn zero() -> Rect {
        Rect::default()
    }

    /// The top left corner.
    pub fn origin(&self) -> Point2<f64> {
        Point2::new(self.left, self.top)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Vector2<f64> {
        Vector2::new(self.width(), self.height())
    }

    /// Returns true if the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0. || self.height() <= 0.
    }

    /// Returns true if the point is inside the rectangle.
    pub fn contains(&self, point: Point2<f64>) -> bool {
        point.x >= self.left && point.y >= self.top && point.x < self.right && point.y < self.bottom
    }

    /// Returns true if the two rectangles overlap.
    pub fn intersects(&self, rect: Rect) -> bool {
        self.left < rect.right
            && self.top < rect.bottom
            && rect.left < self.right
            && rect.top < self.bottom
    }

    /// Returns the intersection rectangle.
    pub fn intersect(&self, rect: Rect) -> Option<Rect> {
        if !self.intersects(rect) {
            return None;
        }

        Some(Rect {
            left: self.left.max(rect.left),
            top: self.top.max(rect.top),
            right: self.right.min(rect.right),
            bottom: self.bottom.min(rect.bottom),
        })
    }

    /// Returns the smallest rectangle containing both rectangles.
    ///
    /// Empty rectangles don’t contribute.
    pub fn union(&self, rect: Rect) -> Rect {
        if rect.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return rect;
        }
        Rect {
            left: self.left.min(rect.left),
            top: self.top.min(rect.top),
            right: self.right.max(rect.right),
            bottom: self.bottom.max(rect.bottom),
        }
    }

    /// Returns a new rectangle moved by the given offset.
    pub fn offset(&self, by: Vector2<f64>) -> Rect {
        Rect {
            left: self.left + by.x,
            top: self.top + by.y,
            right: self.right + by.x,
            bottom: self.bottom + by.y,
        }
    }

    /// Returns a new rectangle inset by the specified amount.
    pub fn inset(&self, horiz: f64, vert: f64) -> Rect {
        Rect {
            left: self.left + horiz,
            top: self.top + vert,
            right: self.right - horiz,
            bottom: self.bottom - vert,
        }
    }

    /// Returns a new rectangle with the same origin and the given size.
    pub fn with_size(&self, width: f64, height: f64) -> Rect {
        Rect {
            left: self.left,
            top: self.top,
            right: self.left + width,
            bottom: self.top + height,
        }
    }
}

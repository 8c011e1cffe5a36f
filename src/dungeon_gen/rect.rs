use serde::{Deserialize, Serialize};

/// A rectangle representing a room or region.
///
/// Cells covered are `x..x + width` by `y..y + height`. A rectangle with a
/// non-positive width or height stands for "absent".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const EMPTY: Rect = Rect { x: 0, y: 0, width: 0, height: 0 };

    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// One past the last column.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// One past the last row.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// True when the two rectangles share at least one cell.
    /// Rectangles that merely touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        other.right() > self.x
            && other.x < self.right()
            && other.bottom() > self.y
            && other.y < self.bottom()
    }

    /// True when every cell lies inside a `width` x `height` grid.
    /// Computed in `i64` so rectangles near the `i32` limits are rejected
    /// rather than overflowing.
    pub fn fits_within(&self, width: i32, height: i32) -> bool {
        let right = self.x as i64 + self.width as i64;
        let bottom = self.y as i64 + self.height as i64;
        self.x >= 0 && self.y >= 0 && right <= width as i64 && bottom <= height as i64
    }

    /// The rectangle shrunk by one cell on every side.
    pub fn interior(&self) -> Rect {
        Rect::new(self.x + 1, self.y + 1, self.width - 2, self.height - 2)
    }
}

/// Squared straight-line distance between two grid points.
pub fn distance_sq(a: (i32, i32), b: (i32, i32)) -> i64 {
    let dx = (a.0 - b.0) as i64;
    let dy = (a.1 - b.1) as i64;
    dx * dx + dy * dy
}

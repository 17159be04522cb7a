//! Grid points.
//!
//! A [`Point`] is one sensor cell's representative: its grid address, its
//! cell bounding box in canvas coordinates, and a highlight flag. Points are
//! owned exclusively by [`Grid`](super::Grid) and never reallocated after
//! construction; the highlight flag is the only mutable state and only the
//! highlight module touches it.

use super::Rect;

/// One grid cell's point.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Column index, 0 at the left edge.
    pub col: u16,
    /// Row index, 0 at the bottom edge.
    pub row: u16,
    bbox: Rect,
    highlighted: bool,
}

impl Point {
    pub(crate) fn new(col: u16, row: u16, bbox: Rect) -> Self {
        Self {
            col,
            row,
            bbox,
            highlighted: false,
        }
    }

    /// The cell's bounding box. This is the collision boundary: a full
    /// cell-spacing square, regardless of how large the point is drawn.
    pub fn bbox(&self) -> &Rect {
        &self.bbox
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub(crate) fn set_highlighted(&mut self, on: bool) {
        self.highlighted = on;
    }

    /// The `(col, row)` address.
    pub fn coord(&self) -> (u16, u16) {
        (self.col, self.row)
    }
}

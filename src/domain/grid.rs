//! The sensor grid.
//!
//! A [`Grid`] owns a dense `cols x rows` array of [`Point`]s whose cell
//! bounding boxes exactly tile the canvas `[0, cols*spacing] x
//! [0, rows*spacing]` with no gaps or overlaps. It is constructed once at
//! startup and immutable afterwards except for per-point highlight flags.
//!
//! Addressing convention: row 0 is at the *bottom* and row indices grow
//! upward, while the internal storage is laid out top row first. The flip
//! between the two lives only in [`Grid::index_of`] and is a fixed invariant
//! of the addressing function.

use super::{Point, Rect, Side};
use crate::error::GeometryError;

/// A fixed grid of sensor points.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cols: u16,
    rows: u16,
    cell_spacing: f64,
    point_coverage: f64,
    points: Vec<Point>,
}

impl Grid {
    /// Build a grid with the given dimensions.
    ///
    /// Callers are expected to pass validated parameters (`cols, rows >= 1`,
    /// `cell_spacing > 0`, `point_coverage` in `(0, 1]`); the config layer
    /// enforces this before a grid is ever constructed.
    pub fn new(cols: u16, rows: u16, cell_spacing: f64, point_coverage: f64) -> Self {
        debug_assert!(cols >= 1 && rows >= 1);
        debug_assert!(cell_spacing > 0.0);
        debug_assert!(point_coverage > 0.0 && point_coverage <= 1.0);

        let mut points = Vec::with_capacity(cols as usize * rows as usize);
        // Storage order is top row first; see index_of.
        for row in (0..rows).rev() {
            for col in 0..cols {
                let bbox = cell_rect(col, row, cell_spacing);
                points.push(Point::new(col, row, bbox));
            }
        }
        Self {
            cols,
            rows,
            cell_spacing,
            point_coverage,
            points,
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cell_spacing(&self) -> f64 {
        self.cell_spacing
    }

    /// Linear scaling of the rendered point footprint. Rendering only;
    /// collision geometry always uses the full cell bbox.
    pub fn point_coverage(&self) -> f64 {
        self.point_coverage
    }

    /// Storage index for `(col, row)`, performing the row flip.
    fn index_of(&self, col: u16, row: u16) -> usize {
        (self.rows - 1 - row) as usize * self.cols as usize + col as usize
    }

    /// The point at `(col, row)`.
    ///
    /// Fails with [`GeometryError::OutOfBounds`] outside the grid; addresses
    /// are never clamped.
    pub fn at(&self, col: u16, row: u16) -> Result<&Point, GeometryError> {
        if col >= self.cols || row >= self.rows {
            return Err(GeometryError::OutOfBounds {
                col,
                row,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(&self.points[self.index_of(col, row)])
    }

    pub(crate) fn at_mut(&mut self, col: u16, row: u16) -> Result<&mut Point, GeometryError> {
        if col >= self.cols || row >= self.rows {
            return Err(GeometryError::OutOfBounds {
                col,
                row,
                cols: self.cols,
                rows: self.rows,
            });
        }
        let idx = self.index_of(col, row);
        Ok(&mut self.points[idx])
    }

    /// The point one cell away in the direction of `side`, or `None` at the
    /// grid edge.
    pub fn neighbor(&self, col: u16, row: u16, side: Side) -> Option<&Point> {
        let (ncol, nrow) = match side {
            Side::Right => (col.checked_add(1)?, row),
            Side::Left => (col.checked_sub(1)?, row),
            Side::Top => (col, row.checked_add(1)?),
            Side::Bottom => (col, row.checked_sub(1)?),
        };
        self.at(ncol, nrow).ok()
    }

    /// The canvas rect covered by the whole grid.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            0.0,
            self.cols as f64 * self.cell_spacing,
            0.0,
            self.rows as f64 * self.cell_spacing,
        )
    }

    /// The column whose half-open span `[left, right)` contains `x`, or
    /// `None` when `x` falls outside every column.
    pub fn column_of(&self, x: f64) -> Option<u16> {
        if !x.is_finite() {
            return None;
        }
        for col in 0..self.cols {
            let span = cell_rect(col, 0, self.cell_spacing);
            if span.span_x_contains(x) {
                return Some(col);
            }
        }
        None
    }

    /// All points, in storage order.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    pub(crate) fn points_mut(&mut self) -> impl Iterator<Item = &mut Point> {
        self.points.iter_mut()
    }
}

fn cell_rect(col: u16, row: u16, spacing: f64) -> Rect {
    let left = col as f64 * spacing;
    let bottom = row as f64 * spacing;
    Rect::new(left, left + spacing, bottom, bottom + spacing)
}

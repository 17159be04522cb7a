//! Highlight application.
//!
//! The one place that mutates point state: clear every highlight, then set
//! exactly the traced points. The transition is all-or-nothing - addresses
//! are validated before anything is cleared, so a bad input leaves the
//! grid's highlight state exactly as it was.

use crate::domain::Grid;
use crate::error::GeometryError;

/// Replace the grid's highlight state with exactly the given points.
///
/// Fails with [`GeometryError::OutOfBounds`] (and changes nothing) if any
/// address falls outside the grid.
pub fn apply(grid: &mut Grid, points: &[(u16, u16)]) -> Result<(), GeometryError> {
    // Validate first; only then commit.
    for (col, row) in points {
        grid.at(*col, *row)?;
    }

    for point in grid.points_mut() {
        point.set_highlighted(false);
    }
    for (col, row) in points {
        grid.at_mut(*col, *row)?.set_highlighted(true);
    }
    Ok(())
}

/// Count of highlighted points, mostly for status display and tests.
pub fn highlighted_count(grid: &Grid) -> usize {
    grid.points().filter(|p| p.is_highlighted()).count()
}

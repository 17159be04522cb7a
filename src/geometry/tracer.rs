//! Circumference tracing.
//!
//! Walks the grid cells the circle's circumference passes through, in
//! clockwise order, producing an ordered trace of `(col, row)` addresses.
//! The walk is deterministic: the same circle over the same grid always
//! yields the same starting point and the same traversal order.
//!
//! Termination is guaranteed: a closed walk stops when it is about to
//! re-enter its starting point, a clipped walk stops at the grid edge (or
//! when a cell offers no exit), and a defensive step budget of
//! `4 * cols * rows` turns any remaining logic defect into an error instead
//! of an infinite loop.

use crate::domain::{Circle, Grid, Side};
use crate::error::GeometryError;
use crate::geometry::collision::{collide_point, SideCrossings};

/// An ordered trace of grid points along the circumference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Trace {
    /// Visited `(col, row)` addresses in walk order, each exactly once.
    pub points: Vec<(u16, u16)>,
    /// True when the walk returned to its starting point (a full cycle);
    /// false for a path clipped at the grid edge or a dead end.
    pub closed: bool,
}

impl Trace {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// Trace the circle's circumference over the grid.
///
/// Returns an empty trace (no error) when the circle is not admissible:
/// zero radius, a bounded circle not fully inside the grid, a bounding
/// square that misses the grid entirely, or a circumference that crosses no
/// cell side. Degenerate geometry and internal invariant violations are
/// errors; the caller must leave highlight state untouched for those.
pub fn trace_circumference(grid: &Grid, circle: &Circle) -> Result<Trace, GeometryError> {
    if !circle.is_well_formed() {
        return Err(GeometryError::DegenerateGeometry {
            cx: circle.cx,
            cy: circle.cy,
            radius: circle.radius,
        });
    }
    if circle.radius == 0.0 {
        tracing::debug!("trace rejected: zero radius");
        return Ok(Trace::default());
    }
    if circle.is_bounded && !circle.is_in_bounds(&grid.bounds()) {
        tracing::debug!(
            cx = circle.cx,
            cy = circle.cy,
            radius = circle.radius,
            "trace rejected: bounded circle not fully inside the grid"
        );
        return Ok(Trace::default());
    }
    if !circle.bounding_square().overlaps(&grid.bounds()) {
        tracing::debug!("trace rejected: circle does not reach the grid");
        return Ok(Trace::default());
    }

    let Some(start) = top_entry_point(grid, circle)? else {
        tracing::debug!("trace empty: circumference crosses no cell side");
        return Ok(Trace::default());
    };

    let step_cap = 4 * grid.cols() as usize * grid.rows() as usize;
    let mut points = vec![start];
    let mut current = start;
    let mut entry = Side::Top;

    loop {
        if points.len() > step_cap {
            return Err(GeometryError::StepBudgetExceeded {
                cap: step_cap,
                cols: grid.cols(),
                rows: grid.rows(),
            });
        }

        let crossings = collide_point(grid.at(current.0, current.1)?.bbox(), circle)?;
        let Some(exit) = exit_side(crossings, entry) else {
            // Dead end: the only crossed side is the one we entered through
            // (or none at all for the seeded start). The walk is a path.
            return Ok(Trace {
                points,
                closed: false,
            });
        };

        match grid.neighbor(current.0, current.1, exit) {
            Some(next) => {
                let next = next.coord();
                if next == start {
                    // Back at the seed, entering through the same side the
                    // walk was seeded with: the cycle is complete.
                    return Ok(Trace {
                        points,
                        closed: true,
                    });
                }
                entry = exit.opposite();
                points.push(next);
                current = next;
            }
            None if circle.is_bounded => {
                // The admission check above keeps bounded circles away from
                // the grid edge; reaching it anyway is a logic defect.
                return Err(GeometryError::WalkEscapedGrid {
                    col: current.0,
                    row: current.1,
                    side: exit,
                });
            }
            None => {
                // Unbounded circle clipped by the grid edge: open path.
                return Ok(Trace {
                    points,
                    closed: false,
                });
            }
        }
    }
}

/// The canonical starting point of the walk.
///
/// Scans the column whose span contains the circle's center x, from the
/// topmost row downward, and returns the first point whose circumference
/// crossings are non-empty. Seeding the walk at the topmost crossed cell of
/// the center column makes the traversal order repeatable for a given
/// circle.
fn top_entry_point(grid: &Grid, circle: &Circle) -> Result<Option<(u16, u16)>, GeometryError> {
    let Some(col) = grid.column_of(circle.cx) else {
        return Ok(None);
    };
    for row in (0..grid.rows()).rev() {
        let point = grid.at(col, row)?;
        if !collide_point(point.bbox(), circle)?.is_empty() {
            return Ok(Some((col, row)));
        }
    }
    Ok(None)
}

/// The exit side: the first crossed side in clockwise order after `entry`.
///
/// A cell with two crossed sides besides the entry (a circle tighter than
/// one cell) resolves to whichever comes first clockwise - the tie-break
/// that keeps the walk turning in a consistent direction.
fn exit_side(crossings: SideCrossings, entry: Side) -> Option<Side> {
    entry
        .clockwise_after()
        .into_iter()
        .find(|side| crossings.crossed(*side))
}

//! Geometry errors.
//!
//! These abort only the trace attempt that raised them. The last two
//! variants are internal invariant violations: they indicate a logic defect
//! in the walk and are surfaced instead of looping forever.

use crate::domain::Side;
use thiserror::Error;

/// Errors raised by grid addressing, collision testing, and tracing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A grid address outside `[0,cols) x [0,rows)` was requested.
    ///
    /// This is a programming-level violation; addresses are never clamped.
    #[error("grid address ({col}, {row}) outside {cols}x{rows} grid")]
    OutOfBounds {
        col: u16,
        row: u16,
        cols: u16,
        rows: u16,
    },

    /// Non-finite coordinates or a negative radius reached the collision
    /// tester. Rejected before any geometric computation runs.
    #[error("degenerate circle geometry: center ({cx}, {cy}), radius {radius}")]
    DegenerateGeometry { cx: f64, cy: f64, radius: f64 },

    /// The circumference walk exceeded its defensive step budget.
    #[error("circumference walk exceeded {cap} steps on a {cols}x{rows} grid")]
    StepBudgetExceeded { cap: usize, cols: u16, rows: u16 },

    /// A bounded circle's walk reached a missing neighbor. The in-bounds
    /// admission check makes this unreachable for correct input.
    #[error("bounded circle walked off the grid at ({col}, {row}) toward {side:?}")]
    WalkEscapedGrid { col: u16, row: u16, side: Side },
}

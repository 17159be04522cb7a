//! Analysis hand-off.
//!
//! A completed trace is packaged as an [`AnalysisRequest`] and sent over a
//! channel to the downstream consumer, together with the final circle
//! parameters and the grid's highlight state. The geometry core knows
//! nothing about where requests go.

use crate::domain::{Circle, Grid};
use crate::geometry::Trace;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use uuid::Uuid;

/// One trace's worth of data for the analysis consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Unique id for correlating log lines and downstream results.
    pub id: Uuid,
    /// When the trace completed.
    pub requested_at: DateTime<Utc>,
    /// Final circle center.
    pub center: [f64; 2],
    /// Final circle radius.
    pub radius: f64,
    /// Ordered trace, `[col, row]` pairs.
    pub trace: Vec<[u16; 2]>,
    /// Whether the trace closed into a cycle.
    pub closed: bool,
    /// Per-point highlight state, row 0 first, columns left to right.
    pub highlighted: Vec<bool>,
}

impl AnalysisRequest {
    /// Snapshot the completed trace and the grid's highlight state.
    pub fn new(circle: &Circle, trace: &Trace, grid: &Grid) -> Self {
        // Re-order from storage order into row 0 first.
        let cols = grid.cols() as usize;
        let rows = grid.rows() as usize;
        let mut highlighted = vec![false; cols * rows];
        for point in grid.points() {
            highlighted[point.row as usize * cols + point.col as usize] = point.is_highlighted();
        }
        Self {
            id: Uuid::new_v4(),
            requested_at: Utc::now(),
            center: [circle.cx, circle.cy],
            radius: circle.radius,
            trace: trace.points.iter().map(|(c, r)| [*c, *r]).collect(),
            closed: trace.closed,
            highlighted,
        }
    }
}

/// Sender half of the analysis channel, held by the app.
pub type AnalysisSender = mpsc::UnboundedSender<AnalysisRequest>;

/// Receiver half, drained by the event loop.
pub type AnalysisReceiver = mpsc::UnboundedReceiver<AnalysisRequest>;

/// Create the analysis channel.
pub fn channel() -> (AnalysisSender, AnalysisReceiver) {
    mpsc::unbounded_channel()
}

//! Application state and the gesture state machine.
//!
//! [`App`] owns the grid, the configuration, and the gesture in progress.
//! Pointer events drive it: press creates the circle, drag updates its
//! radius, release runs trace -> highlight -> analysis. Exactly one gesture
//! and one trace are ever in flight - the event loop is serial - and all
//! gesture state is per-instance.

use crate::analysis::{AnalysisRequest, AnalysisSender};
use crate::config::Config;
use crate::domain::{Circle, Grid};
use crate::events::PointerEvent;
use crate::geometry::{trace_circumference, Trace};
use crate::highlight;
use ratatui::layout::Rect;

/// Top-level application state.
#[derive(Debug)]
pub struct App {
    /// Validated configuration the app was started with.
    pub config: Config,
    /// The sensor grid; lives for the whole process.
    pub grid: Grid,
    /// Circle of the gesture in progress, if any.
    pub gesture: Option<Circle>,
    /// Result of the most recent successful trace.
    pub last_trace: Option<Trace>,
    /// Where completed traces are announced.
    pub analysis_tx: AnalysisSender,
    /// Terminal rect the grid was last rendered into; set by the ui layer
    /// each frame and read when mapping mouse coordinates.
    pub grid_area: Rect,
    /// True when the next loop iteration should redraw.
    pub needs_redraw: bool,
    /// True once the user asked to quit.
    pub should_quit: bool,
    /// Tick counter for animations and tests.
    pub tick_count: u64,
}

impl App {
    /// Build the application from a validated config.
    pub fn new(config: Config, analysis_tx: AnalysisSender) -> Self {
        let grid = Grid::new(
            config.grid.cols,
            config.grid.rows,
            config.grid.cell_spacing,
            config.grid.point_coverage,
        );
        Self {
            config,
            grid,
            gesture: None,
            last_trace: None,
            analysis_tx,
            grid_area: Rect::default(),
            needs_redraw: true,
            should_quit: false,
            tick_count: 0,
        }
    }

    /// Feed one pointer event into the gesture state machine.
    pub fn on_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => self.on_pointer_down(x, y),
            PointerEvent::Move { x, y } => self.on_pointer_move(x, y),
            PointerEvent::Up => self.on_pointer_up(),
        }
    }

    fn on_pointer_down(&mut self, x: f64, y: f64) {
        if self.gesture.is_some() {
            // The event source serializes gestures; a second press while one
            // is active is dropped rather than restarting the circle.
            tracing::debug!("pointer down ignored: gesture already active");
            return;
        }
        let circle = Circle::new(x, y, self.config.start_radius(), self.config.circle.is_bounded);
        tracing::debug!(cx = x, cy = y, radius = circle.radius, "gesture started");
        self.gesture = Some(circle);
        self.mark_dirty();
    }

    fn on_pointer_move(&mut self, x: f64, y: f64) {
        if let Some(circle) = self.gesture.as_mut() {
            circle.set_radius_toward(x, y);
            self.mark_dirty();
        }
    }

    fn on_pointer_up(&mut self) {
        let Some(circle) = self.gesture.take() else {
            return;
        };
        self.mark_dirty();

        match trace_circumference(&self.grid, &circle) {
            Ok(trace) if !trace.is_empty() => {
                if let Err(error) = highlight::apply(&mut self.grid, &trace.points) {
                    // Trace output is grid-valid by construction; this is
                    // surfaced rather than partially applied.
                    tracing::error!(%error, "highlight application failed");
                    return;
                }
                tracing::info!(
                    points = trace.len(),
                    closed = trace.closed,
                    radius = circle.radius,
                    "trace complete"
                );
                let request = AnalysisRequest::new(&circle, &trace, &self.grid);
                if self.analysis_tx.send(request).is_err() {
                    tracing::warn!("analysis channel closed; request dropped");
                }
                self.last_trace = Some(trace);
            }
            Ok(_) => {
                // Rejected or side-less circle: no highlight change at all.
                tracing::debug!(radius = circle.radius, "trace empty; highlights untouched");
            }
            Err(error) => {
                // The attempt aborts; highlight state stays as it was.
                tracing::warn!(%error, "trace attempt failed; highlights untouched");
            }
        }
    }

    pub fn tick(&mut self) {
        self.tick_count += 1;
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

//! Common test utilities for integration tests.
//!
//! Provides the shared 5x5 fixture grid (spacing 40, canvas 200x200) and
//! helpers for driving pointer gestures against a full [`App`].

#![allow(dead_code)]

use digitizer::analysis::AnalysisReceiver;
use digitizer::app::App;
use digitizer::config::Config;
use digitizer::events::PointerEvent;
use digitizer::{analysis, domain::Grid};

/// The 5x5, spacing-40 configuration used across the geometry fixtures.
pub fn fixture_config() -> Config {
    let mut config = Config::default();
    config.grid.cols = 5;
    config.grid.rows = 5;
    config.grid.cell_spacing = 40.0;
    config.grid.point_coverage = 0.5;
    config.circle.is_bounded = false;
    config
}

/// The fixture grid on its own, for tests below the app layer.
pub fn fixture_grid() -> Grid {
    Grid::new(5, 5, 40.0, 0.5)
}

/// A full app over the fixture grid plus the analysis receiver.
pub fn fixture_app() -> (App, AnalysisReceiver) {
    let (tx, rx) = analysis::channel();
    (App::new(fixture_config(), tx), rx)
}

/// Drive one complete press-drag-release gesture.
pub fn draw_circle(app: &mut App, center: (f64, f64), edge: (f64, f64)) {
    app.on_pointer(PointerEvent::Down {
        x: center.0,
        y: center.1,
    });
    app.on_pointer(PointerEvent::Move {
        x: edge.0,
        y: edge.1,
    });
    app.on_pointer(PointerEvent::Up);
}

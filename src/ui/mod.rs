//! Rendering.
//!
//! Thin presentation layer: draws the grid points with their configured
//! on/off colors, shows the active gesture in a status line, and owns the
//! mapping between terminal cells and canvas coordinates. No geometry
//! decisions are made here.

use crate::app::App;
use crate::domain::Grid;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Terminal columns per grid cell. Two columns per row keeps cells roughly
/// square in most terminal fonts.
pub const POINT_CELL_WIDTH: u16 = 2;
/// Terminal rows per grid cell.
pub const POINT_CELL_HEIGHT: u16 = 1;

/// Render the whole screen and remember the grid area for mouse mapping.
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    let area = grid_area(chunks[0], &app.grid);
    app.grid_area = area;

    render_grid(frame, app, area);
    render_status(frame, app, chunks[1]);
}

/// The centered sub-rect of `available` the grid is drawn into.
pub fn grid_area(available: Rect, grid: &Grid) -> Rect {
    let want_width = grid.cols() * POINT_CELL_WIDTH;
    let want_height = grid.rows() * POINT_CELL_HEIGHT;
    let width = want_width.min(available.width);
    let height = want_height.min(available.height);
    Rect::new(
        available.x + (available.width - width) / 2,
        available.y + (available.height - height) / 2,
        width,
        height,
    )
}

/// Canvas position at the center of the given terminal cell.
///
/// The terminal's row axis grows downward while the canvas's y axis grows
/// upward; the flip happens here and nowhere else in the presentation
/// layer. Positions outside the grid area extrapolate past the canvas
/// bounds, which is what dragging beyond the grid edge needs.
pub fn canvas_position(grid_area: Rect, grid: &Grid, column: u16, row: u16) -> (f64, f64) {
    let spacing = grid.cell_spacing();
    let dx = column as i32 - grid_area.x as i32;
    let bottom_row = grid_area.y as i32 + grid_area.height as i32 - 1;
    let dy = bottom_row - row as i32;
    let x = (dx as f64 + 0.5) / POINT_CELL_WIDTH as f64 * spacing;
    let y = (dy as f64 + 0.5) / POINT_CELL_HEIGHT as f64 * spacing;
    (x, y)
}

/// Glyph for one point, scaled by the configured coverage ratio.
pub fn point_glyph(coverage: f64) -> &'static str {
    if coverage > 0.75 {
        "██"
    } else if coverage > 0.4 {
        "● "
    } else {
        "· "
    }
}

fn render_grid(frame: &mut Frame, app: &App, area: Rect) {
    let glyph = point_glyph(app.grid.point_coverage());
    let on = rgb(app.config.grid.color_on);
    let off = rgb(app.config.grid.color_off);
    let buffer = frame.buffer_mut();

    for point in app.grid.points() {
        let x = area.x + point.col * POINT_CELL_WIDTH;
        // Row 0 renders at the bottom of the area.
        let flipped = app.grid.rows() - 1 - point.row;
        let y = area.y + flipped * POINT_CELL_HEIGHT;
        if x + POINT_CELL_WIDTH > area.x + area.width || y >= area.y + area.height {
            continue;
        }
        let style = Style::default().fg(if point.is_highlighted() { on } else { off });
        buffer.set_string(x, y, glyph, style);
    }
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let circle_color = rgb(app.config.circle.color);
    let text = match &app.gesture {
        Some(circle) => format!(
            "circle: center ({:.1}, {:.1})  radius {:.1}  [release to trace]",
            circle.cx, circle.cy, circle.radius
        ),
        None => match &app.last_trace {
            Some(trace) if !trace.is_empty() => format!(
                "trace: {} points ({})  |  drag to draw, q to quit",
                trace.len(),
                if trace.closed { "closed" } else { "clipped" }
            ),
            _ => "drag to draw a circle, q to quit".to_string(),
        },
    };
    let paragraph =
        Paragraph::new(Line::from(text)).style(Style::default().fg(circle_color));
    frame.render_widget(paragraph, area);
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}

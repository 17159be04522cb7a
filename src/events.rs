//! Pointer events.
//!
//! Terminal mouse events become [`PointerEvent`]s in canvas coordinates -
//! the only form the gesture state machine understands. Press starts a
//! gesture, drag grows the radius, release commits the trace.

use crate::domain::Grid;
use crate::ui;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// A pointer event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed at a canvas position; begins a gesture.
    Down { x: f64, y: f64 },
    /// Pointer dragged to a canvas position; updates the radius.
    Move { x: f64, y: f64 },
    /// Pointer released; commits the gesture.
    Up,
}

/// Translate a terminal mouse event into a pointer event.
///
/// Presses are accepted only inside the rendered grid area. Drags are
/// translated unconditionally so the radius can follow the pointer past the
/// grid edge; releases carry no position.
pub fn from_mouse(event: &MouseEvent, grid_area: Rect, grid: &Grid) -> Option<PointerEvent> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if !within(grid_area, event.column, event.row) {
                return None;
            }
            let (x, y) = ui::canvas_position(grid_area, grid, event.column, event.row);
            Some(PointerEvent::Down { x, y })
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let (x, y) = ui::canvas_position(grid_area, grid, event.column, event.row);
            Some(PointerEvent::Move { x, y })
        }
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Up),
        _ => None,
    }
}

fn within(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}

//! The circle being drawn.
//!
//! One [`Circle`] exists per gesture: created on pointer-down, its radius
//! follows the pointer during the drag, and it is consumed when the trace
//! runs on pointer-up. All state is per-instance; nothing about the active
//! gesture is shared or global.

use super::Rect;

/// A user-drawn circle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center x.
    pub cx: f64,
    /// Center y.
    pub cy: f64,
    /// Radius, `>= 0` for well-formed circles.
    pub radius: f64,
    /// When true the circle may only be traced while fully inside the grid.
    pub is_bounded: bool,
}

impl Circle {
    pub fn new(cx: f64, cy: f64, radius: f64, is_bounded: bool) -> Self {
        Self {
            cx,
            cy,
            radius,
            is_bounded,
        }
    }

    /// Grow or shrink the radius to reach the given pointer position.
    pub fn set_radius_toward(&mut self, x: f64, y: f64) {
        let dx = x - self.cx;
        let dy = y - self.cy;
        self.radius = (dx * dx + dy * dy).sqrt();
    }

    /// The square `(cx-r, cy-r)..(cx+r, cy+r)` enclosing the circle.
    pub fn bounding_square(&self) -> Rect {
        Rect::new(
            self.cx - self.radius,
            self.cx + self.radius,
            self.cy - self.radius,
            self.cy + self.radius,
        )
    }

    /// True when the circle's bounding square lies strictly inside the
    /// canvas rect on both axes. Touching the boundary is out.
    pub fn is_in_bounds(&self, canvas: &Rect) -> bool {
        canvas.contains_strict(&self.bounding_square())
    }

    /// True when center and radius are finite and the radius is
    /// non-negative. Anything else is degenerate geometry and must be
    /// rejected before collision math runs.
    pub fn is_well_formed(&self) -> bool {
        self.cx.is_finite() && self.cy.is_finite() && self.radius.is_finite() && self.radius >= 0.0
    }
}

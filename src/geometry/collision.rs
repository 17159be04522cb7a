//! Point/circle collision testing.
//!
//! For a cell bounding box and a circle, determine which of the four cell
//! sides the circumference actually passes through - not merely which
//! supporting lines the circle reaches.
//!
//! For each side the circle's chord on that side's supporting line runs
//! between `center_along_axis - h` and `center_along_axis + h` with
//! `h = sqrt(r^2 - d^2)`. The side is crossed iff at least one of those two
//! intersection points lies strictly within the side's open span. That rule
//! excludes the two non-crossing overlap cases: a chord entirely outside the
//! span, and a chord that swallows the span whole (both cell corners inside
//! the circle, circumference never touching the side). Tangency (`d == r`,
//! a single intersection point) counts when the tangent point is within the
//! span; an intersection exactly on a cell corner is on neither adjacent
//! side's open span and crosses neither.

use crate::domain::{Circle, Rect, Side};
use crate::error::GeometryError;

/// Which sides of one cell the circumference crosses.
///
/// The all-false value is the no-intersection result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SideCrossings {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl SideCrossings {
    /// No side crossed.
    pub const NONE: SideCrossings = SideCrossings {
        top: false,
        right: false,
        bottom: false,
        left: false,
    };

    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }

    pub fn crossed(self, side: Side) -> bool {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    /// Number of crossed sides.
    pub fn count(self) -> usize {
        Side::ALL.iter().filter(|s| self.crossed(**s)).count()
    }
}

/// Compute which sides of `bbox` the circle's circumference crosses.
///
/// Degenerate circles (non-finite center/radius, negative radius) fail with
/// [`GeometryError::DegenerateGeometry`] before any geometric computation.
/// A zero radius crosses nothing.
pub fn collide_point(bbox: &Rect, circle: &Circle) -> Result<SideCrossings, GeometryError> {
    if !circle.is_well_formed() {
        return Err(GeometryError::DegenerateGeometry {
            cx: circle.cx,
            cy: circle.cy,
            radius: circle.radius,
        });
    }
    if circle.radius == 0.0 {
        return Ok(SideCrossings::NONE);
    }
    // Quick reject on bounding squares. Touching counts as overlap so that
    // tangent circles reach the exact per-side tests below.
    if !bbox.overlaps(&circle.bounding_square()) {
        return Ok(SideCrossings::NONE);
    }

    Ok(SideCrossings {
        top: crosses_horizontal(bbox.top, bbox.left, bbox.right, circle),
        right: crosses_vertical(bbox.right, bbox.bottom, bbox.top, circle),
        bottom: crosses_horizontal(bbox.bottom, bbox.left, bbox.right, circle),
        left: crosses_vertical(bbox.left, bbox.bottom, bbox.top, circle),
    })
}

/// Crossing test for a horizontal side at height `line_y` spanning
/// `(span_start, span_end)` in x.
fn crosses_horizontal(line_y: f64, span_start: f64, span_end: f64, circle: &Circle) -> bool {
    let d = (line_y - circle.cy).abs();
    if d > circle.radius {
        return false;
    }
    let h = (circle.radius * circle.radius - d * d).sqrt();
    within_open(circle.cx - h, span_start, span_end) || within_open(circle.cx + h, span_start, span_end)
}

/// Crossing test for a vertical side at `line_x` spanning
/// `(span_start, span_end)` in y.
fn crosses_vertical(line_x: f64, span_start: f64, span_end: f64, circle: &Circle) -> bool {
    let d = (line_x - circle.cx).abs();
    if d > circle.radius {
        return false;
    }
    let h = (circle.radius * circle.radius - d * d).sqrt();
    within_open(circle.cy - h, span_start, span_end) || within_open(circle.cy + h, span_start, span_end)
}

fn within_open(v: f64, start: f64, end: f64) -> bool {
    start < v && v < end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(col: u16, row: u16) -> Rect {
        let left = col as f64 * 40.0;
        let bottom = row as f64 * 40.0;
        Rect::new(left, left + 40.0, bottom, bottom + 40.0)
    }

    /// The 5x5/spacing-40 fixture circle: centered on the middle cell,
    /// radius just under one cell spacing.
    fn fixture_circle() -> Circle {
        Circle::new(100.0, 100.0, 35.0, false)
    }

    fn crossings(x: &[Side]) -> SideCrossings {
        SideCrossings {
            top: x.contains(&Side::Top),
            right: x.contains(&Side::Right),
            bottom: x.contains(&Side::Bottom),
            left: x.contains(&Side::Left),
        }
    }

    #[test]
    fn test_zero_radius_crosses_nothing() {
        let c = Circle::new(100.0, 100.0, 0.0, false);
        assert_eq!(collide_point(&cell(2, 2), &c).unwrap(), SideCrossings::NONE);
    }

    #[test]
    fn test_distant_cell_quick_rejected() {
        assert_eq!(
            collide_point(&cell(0, 4), &fixture_circle()).unwrap(),
            SideCrossings::NONE
        );
    }

    #[test]
    fn test_nan_center_is_degenerate() {
        let c = Circle::new(f64::NAN, 100.0, 35.0, false);
        assert!(matches!(
            collide_point(&cell(2, 2), &c),
            Err(GeometryError::DegenerateGeometry { .. })
        ));
    }

    #[test]
    fn test_negative_radius_is_degenerate() {
        let c = Circle::new(100.0, 100.0, -5.0, false);
        assert!(collide_point(&cell(2, 2), &c).is_err());
    }

    #[test]
    fn test_center_cell_is_not_crossed() {
        // The circumference passes around the cell containing the center:
        // every chord swallows the cell's spans whole, so no side is
        // crossed even though the circle overlaps the cell.
        assert_eq!(
            collide_point(&cell(2, 2), &fixture_circle()).unwrap(),
            SideCrossings::NONE
        );
    }

    #[test]
    fn test_ring_cells_of_the_fixture() {
        let c = fixture_circle();
        let expected = [
            ((1, 1), crossings(&[Side::Top, Side::Right])),
            ((2, 1), crossings(&[Side::Left, Side::Right])),
            ((3, 1), crossings(&[Side::Top, Side::Left])),
            ((1, 2), crossings(&[Side::Top, Side::Bottom])),
            ((3, 2), crossings(&[Side::Top, Side::Bottom])),
            ((1, 3), crossings(&[Side::Right, Side::Bottom])),
            ((2, 3), crossings(&[Side::Left, Side::Right])),
            ((3, 3), crossings(&[Side::Bottom, Side::Left])),
        ];
        for ((col, row), want) in expected {
            let got = collide_point(&cell(col, row), &c).unwrap();
            assert_eq!(got, want, "cell ({col}, {row})");
        }
    }

    #[test]
    fn test_tangency_is_inclusive() {
        // Radius exactly reaches the cell's top side; the single tangent
        // point at x = cx is strictly within the span, so it crosses.
        let c = Circle::new(100.0, 100.0, 20.0, false);
        let got = collide_point(&cell(2, 2), &c).unwrap();
        assert!(got.top && got.right && got.bottom && got.left);
        // The neighbor above sees the same tangent line on its bottom side.
        let above = collide_point(&cell(2, 3), &c).unwrap();
        assert_eq!(above, crossings(&[Side::Bottom]));
    }

    #[test]
    fn test_corner_intersection_crosses_neither_side() {
        // 3-4-5 construction: center (80, 90), radius 50 passes exactly
        // through the corner (120, 120). Both sides adjacent to that corner
        // in cell (2, 2) see the intersection on their span boundary, which
        // is outside the open span - neither is crossed there.
        let c = Circle::new(80.0, 90.0, 50.0, false);
        let got = collide_point(&cell(2, 2), &c).unwrap();
        assert!(!got.top, "corner hit must not cross the top side");
        assert!(!got.right, "corner hit must not cross the right side");
    }

    #[test]
    fn test_rotation_symmetry_law() {
        // collide_point is invariant under rotating both bbox and circle
        // 180 degrees about the circle center: top<->bottom, left<->right.
        let c = fixture_circle();
        for col in 0..5u16 {
            for row in 0..5u16 {
                let bbox = cell(col, row);
                let rotated = Rect::new(
                    2.0 * c.cx - bbox.right,
                    2.0 * c.cx - bbox.left,
                    2.0 * c.cy - bbox.top,
                    2.0 * c.cy - bbox.bottom,
                );
                let a = collide_point(&bbox, &c).unwrap();
                let b = collide_point(&rotated, &c).unwrap();
                assert_eq!(a.top, b.bottom, "cell ({col}, {row})");
                assert_eq!(a.bottom, b.top, "cell ({col}, {row})");
                assert_eq!(a.left, b.right, "cell ({col}, {row})");
                assert_eq!(a.right, b.left, "cell ({col}, {row})");
            }
        }
    }

    #[test]
    fn test_crossings_count_and_lookup() {
        let x = crossings(&[Side::Top, Side::Left]);
        assert_eq!(x.count(), 2);
        assert!(x.crossed(Side::Top));
        assert!(!x.crossed(Side::Right));
        assert!(!SideCrossings::NONE.crossed(Side::Bottom));
        assert!(SideCrossings::NONE.is_empty());
    }
}

//! Corridor and doorway carving.
//!
//! Every connection in a pass is an axis-aligned L: a horizontal run along
//! the first point's row, then a vertical run along the second point's
//! column. Rooms are convex and nothing but wall stands in the way, so no
//! pathfinding is needed.

use super::rect::Rect;
use crate::grid::Grid;

/// One of the four edges of a rectangle. `Top` is the edge with the
/// largest y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Bottom,
    Top,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Bottom, Side::Top];

    /// Unit step pointing away from the rectangle
    pub fn outward(&self) -> (i32, i32) {
        match self {
            Side::Left => (-1, 0),
            Side::Right => (1, 0),
            Side::Bottom => (0, -1),
            Side::Top => (0, 1),
        }
    }

    /// Midpoint of this edge, on the rectangle's outermost cells
    pub fn midpoint(&self, rect: &Rect) -> (i32, i32) {
        let mid_x = (rect.x + rect.right()) / 2;
        let mid_y = (rect.y + rect.bottom()) / 2;
        match self {
            Side::Left => (rect.x, mid_y),
            Side::Right => (rect.right() - 1, mid_y),
            Side::Bottom => (mid_x, rect.y),
            Side::Top => (mid_x, rect.bottom() - 1),
        }
    }
}

/// Dig an L-shaped corridor `2 * half_width + 1` cells thick from `a` to `b`.
/// Cells outside the grid are skipped.
pub fn dig_corridor(grid: &mut Grid, a: (i32, i32), b: (i32, i32), half_width: i32) {
    let (x0, x1) = (a.0.min(b.0), a.0.max(b.0));
    for x in x0..=x1 {
        for w in -half_width..=half_width {
            grid.set_floor(x, a.1 + w);
        }
    }

    let (y0, y1) = (a.1.min(b.1), a.1.max(b.1));
    for y in y0..=y1 {
        for w in -half_width..=half_width {
            grid.set_floor(b.0 + w, y);
        }
    }
}

/// Open a gap through a room wall at `point`: a band `2 * half_width + 1`
/// cells wide running along the wall, on the wall itself and one step
/// outward.
pub fn carve_opening(grid: &mut Grid, point: (i32, i32), side: Side, half_width: i32) {
    let (dx, dy) = side.outward();
    for w in -half_width..=half_width {
        // Spread along the wall, perpendicular to the outward step
        let (ox, oy) = if dx == 0 { (w, 0) } else { (0, w) };
        grid.set_floor(point.0 + ox, point.1 + oy);
        grid.set_floor(point.0 + ox + dx, point.1 + oy + dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corridor_is_l_shaped() {
        let mut grid = Grid::new(30, 30);
        dig_corridor(&mut grid, (5, 5), (20, 15), 0);

        // Horizontal leg along y = 5, vertical leg along x = 20
        for x in 5..=20 {
            assert!(grid.is_floor(x, 5));
        }
        for y in 5..=15 {
            assert!(grid.is_floor(20, y));
        }
        assert!(!grid.is_floor(5, 15));
        assert_eq!(grid.floor_count(), 16 + 10);
    }

    #[test]
    fn test_corridor_width() {
        let mut grid = Grid::new(30, 30);
        dig_corridor(&mut grid, (5, 10), (15, 10), 2);
        for y in 8..=12 {
            assert!(grid.is_floor(10, y));
        }
        assert!(!grid.is_floor(10, 7));
        assert!(!grid.is_floor(10, 13));
    }

    #[test]
    fn test_corridor_reversed_points() {
        let mut grid = Grid::new(30, 30);
        dig_corridor(&mut grid, (20, 15), (5, 5), 1);
        // Horizontal run on the first point's row, vertical on the second point's column
        assert!(grid.is_floor(5, 15));
        assert!(grid.is_floor(5, 5));
        assert!(!grid.is_floor(20, 5));
    }

    #[test]
    fn test_corridor_clipped_at_edges() {
        let mut grid = Grid::new(10, 10);
        dig_corridor(&mut grid, (0, 0), (9, 9), 3);
        assert!(grid.is_floor(0, 0));
        assert!(grid.is_floor(9, 9));
        assert!(!grid.is_floor(-1, 0));
    }

    #[test]
    fn test_side_midpoints() {
        let rect = Rect::new(36, 36, 28, 28);
        assert_eq!(Side::Left.midpoint(&rect), (36, 50));
        assert_eq!(Side::Right.midpoint(&rect), (63, 50));
        assert_eq!(Side::Bottom.midpoint(&rect), (50, 36));
        assert_eq!(Side::Top.midpoint(&rect), (50, 63));
    }

    #[test]
    fn test_opening_spans_wall_and_step_outward() {
        let mut grid = Grid::new(20, 20);
        carve_opening(&mut grid, (10, 10), Side::Top, 1);
        for x in 9..=11 {
            assert!(grid.is_floor(x, 10));
            assert!(grid.is_floor(x, 11));
        }
        assert_eq!(grid.floor_count(), 6);

        let mut grid = Grid::new(20, 20);
        carve_opening(&mut grid, (10, 10), Side::Left, 1);
        for y in 9..=11 {
            assert!(grid.is_floor(10, y));
            assert!(grid.is_floor(9, y));
        }
    }
}

use crate::dungeon_gen::Rect;
use crate::tile::Cell;

/// Fixed-size occupancy grid. Every cell outside `[0, width) x [0, height)`
/// reads as non-floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-wall grid. Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![Cell::Wall; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Reset every cell to wall.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Wall);
    }

    fn get_index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.get_index(x, y).map(|idx| self.cells[idx])
    }

    pub fn is_floor(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(|cell| cell.is_floor())
    }

    /// Carve a single cell. Out-of-bounds writes are skipped.
    pub fn set_floor(&mut self, x: i32, y: i32) {
        if let Some(idx) = self.get_index(x, y) {
            self.cells[idx] = Cell::Floor;
        }
    }

    /// Carve every cell of `rect`.
    pub fn carve_rect(&mut self, rect: &Rect) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set_floor(x, y);
            }
        }
    }

    /// Carve the open interior of `rect`, leaving its outermost ring as wall.
    pub fn carve_interior(&mut self, rect: &Rect) {
        self.carve_rect(&rect.interior());
    }

    pub fn floor_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_floor()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_wall() {
        let grid = Grid::new(20, 10);
        assert_eq!(grid.floor_count(), 0);
        assert_eq!(grid.get(19, 9), Some(Cell::Wall));
    }

    #[test]
    fn test_out_of_bounds_is_not_floor() {
        let mut grid = Grid::new(5, 5);
        grid.carve_rect(&Rect::new(0, 0, 5, 5));
        assert!(grid.is_floor(0, 0));
        assert!(!grid.is_floor(-1, 0));
        assert!(!grid.is_floor(0, 5));
        assert!(!grid.is_floor(5, 4));
        assert_eq!(grid.get(7, 7), None);
    }

    #[test]
    fn test_set_floor_skips_out_of_bounds() {
        let mut grid = Grid::new(5, 5);
        grid.set_floor(-3, 2);
        grid.set_floor(2, 99);
        assert_eq!(grid.floor_count(), 0);
    }

    #[test]
    fn test_carve_interior_keeps_ring() {
        let mut grid = Grid::new(10, 10);
        let rect = Rect::new(2, 2, 5, 5);
        grid.carve_interior(&rect);
        assert_eq!(grid.floor_count(), 9);
        assert!(!grid.is_floor(2, 2));
        assert!(!grid.is_floor(6, 4));
        assert!(grid.is_floor(3, 3));
        assert!(grid.is_floor(5, 5));
    }

    #[test]
    fn test_carve_rect_clips_to_grid() {
        let mut grid = Grid::new(4, 4);
        grid.carve_rect(&Rect::new(2, 2, 10, 10));
        assert_eq!(grid.floor_count(), 4);
    }

    #[test]
    fn test_reset_restores_walls() {
        let mut grid = Grid::new(6, 6);
        grid.carve_rect(&Rect::new(0, 0, 6, 6));
        grid.reset();
        assert_eq!(grid.floor_count(), 0);
    }
}

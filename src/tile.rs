use crate::constants::{GLYPH_FLOOR, GLYPH_WALL};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    Floor,
    #[default]
    Wall,
}

impl Cell {
    pub fn is_floor(&self) -> bool {
        matches!(self, Cell::Floor)
    }

    /// Numeric code used by map consumers (FLOOR=0, WALL=1)
    pub fn code(&self) -> u8 {
        match self {
            Cell::Floor => 0,
            Cell::Wall => 1,
        }
    }

    /// Character used for this cell in ASCII output
    pub fn glyph(&self) -> char {
        match self {
            Cell::Floor => GLYPH_FLOOR,
            Cell::Wall => GLYPH_WALL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cell_is_wall() {
        assert_eq!(Cell::default(), Cell::Wall);
        assert!(!Cell::default().is_floor());
    }

    #[test]
    fn test_cell_codes() {
        assert_eq!(Cell::Floor.code(), 0);
        assert_eq!(Cell::Wall.code(), 1);
    }
}

//! Text rendering of a finished map.
//!
//! The top line of output is the row with the largest y, so "up" on screen
//! matches the `Side::Top` edge of rooms.

use crate::constants::*;
use crate::query::DungeonMap;
use crate::tile::Cell;

/// Render the map as one line per row, ending every line with `\n`.
pub fn render_ascii<M: DungeonMap + ?Sized>(map: &M) -> String {
    puffin::profile_function!();

    let width = map.width().max(0);
    let height = map.height().max(0);
    let start = map.start_room().center();
    let boss = map.boss_room().map(|rect| rect.center());
    let exit = map.exit_location();

    let mut out = String::with_capacity((width as usize + 1) * height as usize);
    for y in (0..height).rev() {
        for x in 0..width {
            let pos = Some((x, y));
            let glyph = if pos == exit {
                GLYPH_EXIT
            } else if pos == boss {
                GLYPH_BOSS
            } else if (x, y) == start {
                GLYPH_START
            } else if map.is_floor(x, y) {
                Cell::Floor.glyph()
            } else {
                Cell::Wall.glyph()
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

/// Render the map as numeric cell codes (FLOOR=0, WALL=1), one row per
/// line in the same top-down order as `render_ascii`. No markers.
pub fn render_codes<M: DungeonMap + ?Sized>(map: &M) -> String {
    puffin::profile_function!();

    let width = map.width().max(0);
    let height = map.height().max(0);
    let mut out = String::with_capacity((width as usize + 1) * height as usize);
    for y in (0..height).rev() {
        for x in 0..width {
            let cell = if map.is_floor(x, y) { Cell::Floor } else { Cell::Wall };
            out.push(char::from(b'0' + cell.code()));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DungeonConfig, PassOptions};
    use crate::dungeon_gen::{DungeonGenerator, Rect};

    fn small_generator() -> DungeonGenerator {
        DungeonGenerator::new(DungeonConfig {
            width: 40,
            height: 30,
            start_room: Rect::new(2, 2, 8, 8),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_render_dimensions() {
        let mut gen = small_generator();
        gen.generate(PassOptions::seeded(1));
        let text = render_ascii(&gen);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 30);
        assert!(lines.iter().all(|line| line.chars().count() == 40));
    }

    #[test]
    fn test_render_markers() {
        let mut gen = small_generator();
        gen.generate(PassOptions::seeded(3).with_boss(true));
        let text = render_ascii(&gen);
        assert_eq!(text.matches(GLYPH_START).count(), 1);
        assert_eq!(text.matches(GLYPH_BOSS).count(), 1);
        assert_eq!(
            text.matches(GLYPH_EXIT).count(),
            usize::from(gen.exit_location().is_some())
        );
    }

    #[test]
    fn test_render_flips_rows() {
        let gen = small_generator();
        let text = render_ascii(&gen);
        let lines: Vec<&str> = text.lines().collect();
        // Start center (6, 6) sits on row 6 from the bottom
        let row = lines[30 - 1 - 6];
        assert_eq!(row.chars().nth(6), Some(GLYPH_START));
    }

    #[test]
    fn test_render_codes_match_grid() {
        let mut gen = small_generator();
        gen.generate(PassOptions::seeded(4).with_boss(true));
        let text = render_codes(&gen);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 30);
        assert_eq!(text.matches('0').count(), gen.grid().floor_count());
        assert_eq!(text.matches('1').count(), 40 * 30 - gen.grid().floor_count());

        let (x, y) = gen.start_room().center();
        assert_eq!(lines[(29 - y) as usize].chars().nth(x as usize), Some('0'));
        // Bottom-left corner is border wall
        assert_eq!(lines[29].chars().next(), Some('1'));
    }

    #[test]
    fn test_render_floor_and_wall() {
        let mut gen = small_generator();
        gen.generate(PassOptions::seeded(4));
        let text = render_ascii(&gen);
        let floor_glyphs = text.matches(GLYPH_FLOOR).count();
        // Markers sit on floor cells and replace their glyph
        let markers = text.matches(GLYPH_START).count() + text.matches(GLYPH_EXIT).count();
        assert_eq!(floor_glyphs + markers, gen.grid().floor_count());
    }
}

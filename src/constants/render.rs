//! ASCII rendering glyphs.

pub const GLYPH_WALL: char = '#';
pub const GLYPH_FLOOR: char = '.';
/// Center of the start room
pub const GLYPH_START: char = '@';
/// Center of the boss room
pub const GLYPH_BOSS: char = 'B';
/// Exit location
pub const GLYPH_EXIT: char = '>';

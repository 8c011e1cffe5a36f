//! Dungeon generation constants.

/// Default dungeon width
pub const DUNGEON_DEFAULT_WIDTH: i32 = 100;
/// Default dungeon height
pub const DUNGEON_DEFAULT_HEIGHT: i32 = 100;
/// Smallest grid either axis may be configured to
pub const DUNGEON_MIN_GRID_SIZE: i32 = 8;
/// Largest grid either axis may be configured to
pub const DUNGEON_MAX_GRID_SIZE: i32 = 4096;

/// Minimum size of a BSP leaf node
pub const DUNGEON_MIN_LEAF_SIZE: i32 = 10;
/// Maximum BSP recursion depth
pub const DUNGEON_MAX_DEPTH: u32 = 6;
/// Lower bound of the split offset, as a fraction of the split axis
pub const DUNGEON_MIN_SPLIT_RATIO: f32 = 0.45;
/// Upper bound of the split offset, as a fraction of the split axis
pub const DUNGEON_MAX_SPLIT_RATIO: f32 = 0.55;

/// Minimum room size within a leaf
pub const DUNGEON_MIN_ROOM_SIZE: i32 = 4;
/// Maximum room size within a leaf
pub const DUNGEON_MAX_ROOM_SIZE: i32 = 24;
/// Margin around rooms within their leaf
pub const DUNGEON_ROOM_MARGIN: i32 = 1;

/// Corridor half-width; carved thickness is `2 * half + 1`
pub const CORRIDOR_HALF_WIDTH: i32 = 2;

/// Player spawn area, anchored near the origin
pub const START_ROOM_X: i32 = 2;
pub const START_ROOM_Y: i32 = 2;
pub const START_ROOM_WIDTH: i32 = 25;
pub const START_ROOM_HEIGHT: i32 = 25;

/// Boss room size before clamping to the grid
pub const BOSS_ROOM_WIDTH: i32 = 28;
pub const BOSS_ROOM_HEIGHT: i32 = 28;
/// Space kept free between the boss room and the grid edge (both sides combined)
pub const BOSS_ROOM_GRID_MARGIN: i32 = 4;

//! Read-only view of a finished map.
//!
//! Collaborators (player placement, enemy spawning, rendering) hold a
//! `&dyn DungeonMap` or a generic `M: DungeonMap` instead of reaching into the
//! generator's state.

use crate::dungeon_gen::Rect;

pub trait DungeonMap {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    /// False for any coordinate outside the grid.
    fn is_floor(&self, x: i32, y: i32) -> bool;

    /// Carved normal rooms in carving order, excluding any that overlap the
    /// boss room.
    fn rooms(&self) -> Vec<Rect>;

    /// `None` unless the last pass was a boss pass.
    fn boss_room(&self) -> Option<Rect>;

    fn start_room(&self) -> Rect;

    fn exit_location(&self) -> Option<(i32, i32)>;
}

use super::bsp::BspNode;
use super::corridor::{carve_opening, dig_corridor, Side};
use super::rect::{distance_sq, Rect};
use crate::grid::Grid;

/// A corridor dug from the first point to the second
pub type Corridor = ((i32, i32), (i32, i32));

/// Room whose center is closest to `point`. The first of several equally
/// close rooms wins.
pub fn nearest_room(rooms: &[Rect], point: (i32, i32)) -> Option<Rect> {
    let mut best: Option<(i64, Rect)> = None;
    for room in rooms {
        let d = distance_sq(point, room.center());
        if best.map_or(true, |(best_d, _)| d < best_d) {
            best = Some((d, *room));
        }
    }
    best.map(|(_, room)| room)
}

/// Open the start room's top wall and dig from there to the nearest room.
/// Does nothing when there are no rooms.
pub fn connect_start_to_nearest(
    grid: &mut Grid,
    start: &Rect,
    rooms: &[Rect],
    half_width: i32,
) -> Option<Corridor> {
    let nearest = nearest_room(rooms, start.center())?;

    let doorway = Side::Top.midpoint(start);
    carve_opening(grid, doorway, Side::Top, half_width);

    let target = nearest.center();
    dig_corridor(grid, doorway, target, half_width);
    Some((doorway, target))
}

/// Join the two children of every internal node, parent first. Anchors are
/// each child's room center, which may belong to a discarded room.
pub fn connect_tree(grid: &mut Grid, node: &BspNode, half_width: i32, dug: &mut Vec<Corridor>) {
    let Some((left, right)) = node.children() else {
        return;
    };

    let (a, b) = (left.center(), right.center());
    dig_corridor(grid, a, b, half_width);
    dug.push((a, b));

    connect_tree(grid, left, half_width, dug);
    connect_tree(grid, right, half_width, dug);
}

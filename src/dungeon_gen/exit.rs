use super::rect::{distance_sq, Rect};

/// Room farthest in a straight line from the start room's center, ignoring
/// rooms that overlap the start room. The first of several equally distant
/// rooms wins.
pub fn farthest_room(rooms: &[Rect], start: &Rect) -> Option<Rect> {
    let origin = start.center();
    let mut best: Option<(i64, Rect)> = None;
    for room in rooms.iter().filter(|room| !room.overlaps(start)) {
        let d = distance_sq(origin, room.center());
        if best.map_or(true, |(best_d, _)| d > best_d) {
            best = Some((d, *room));
        }
    }
    best.map(|(_, room)| room)
}

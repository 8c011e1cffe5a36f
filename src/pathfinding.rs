//! Reachability checks over a finished map.
//!
//! Generation never pathfinds; these are diagnostics for callers and tests:
//! which cells the start room can walk to, which rooms it cannot, and how
//! long the walk to a given cell actually is.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, VecDeque};

use crate::dungeon_gen::Rect;
use crate::query::DungeonMap;

const NEIGHBORS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Cells reached by a 4-connected flood fill over floor.
#[derive(Debug, Clone)]
pub struct Reachability {
    width: i32,
    height: i32,
    visited: Vec<bool>,
    count: usize,
}

impl Reachability {
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|idx| self.visited[idx])
    }

    /// Number of reached cells
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Flood fill from `origin`. A non-floor origin reaches nothing.
pub fn flood_fill<M: DungeonMap + ?Sized>(map: &M, origin: (i32, i32)) -> Reachability {
    let width = map.width().max(0);
    let height = map.height().max(0);
    let mut reach = Reachability {
        width,
        height,
        visited: vec![false; width as usize * height as usize],
        count: 0,
    };

    if !map.is_floor(origin.0, origin.1) {
        return reach;
    }

    let mut queue = VecDeque::new();
    if let Some(idx) = reach.index(origin.0, origin.1) {
        reach.visited[idx] = true;
        reach.count = 1;
        queue.push_back(origin);
    }

    while let Some((x, y)) = queue.pop_front() {
        for (dx, dy) in NEIGHBORS {
            let (nx, ny) = (x + dx, y + dy);
            if !map.is_floor(nx, ny) {
                continue;
            }
            let Some(idx) = reach.index(nx, ny) else {
                continue;
            };
            if !reach.visited[idx] {
                reach.visited[idx] = true;
                reach.count += 1;
                queue.push_back((nx, ny));
            }
        }
    }

    reach
}

/// Rooms whose center cannot be reached from the start room's center.
pub fn unreachable_rooms<M: DungeonMap + ?Sized>(map: &M) -> Vec<Rect> {
    let reach = flood_fill(map, map.start_room().center());
    map.rooms()
        .into_iter()
        .filter(|room| {
            let (x, y) = room.center();
            !reach.contains(x, y)
        })
        .collect()
}

/// True when the boss room (if any) can be reached from the start room.
pub fn boss_room_reachable<M: DungeonMap + ?Sized>(map: &M) -> Option<bool> {
    let boss = map.boss_room()?;
    let (x, y) = boss.center();
    Some(flood_fill(map, map.start_room().center()).contains(x, y))
}

#[derive(Clone, Copy, PartialEq, Eq)]
struct ScoredNode {
    pos: (i32, i32),
    f_score: i32, // g_score + heuristic
}

// BinaryHeap is a max-heap, so we reverse the ordering for min-heap behavior
impl Ord for ScoredNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f_score.cmp(&self.f_score)
    }
}

impl PartialOrd for ScoredNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a path from start to goal over floor cells using A*.
/// Returns the path excluding the start position, or None if no path exists.
pub fn find_path<M: DungeonMap + ?Sized>(
    map: &M,
    start: (i32, i32),
    goal: (i32, i32),
) -> Option<Vec<(i32, i32)>> {
    if !map.is_floor(start.0, start.1) || !map.is_floor(goal.0, goal.1) {
        return None;
    }

    let mut open_set = BinaryHeap::new();
    let mut came_from: HashMap<(i32, i32), (i32, i32)> = HashMap::new();
    let mut g_score: HashMap<(i32, i32), i32> = HashMap::new();

    g_score.insert(start, 0);
    open_set.push(ScoredNode {
        pos: start,
        f_score: heuristic(start, goal),
    });

    while let Some(current) = open_set.pop() {
        if current.pos == goal {
            return Some(reconstruct_path(&came_from, current.pos));
        }

        let current_g = *g_score.get(&current.pos).unwrap_or(&i32::MAX);

        for (dx, dy) in NEIGHBORS {
            let neighbor = (current.pos.0 + dx, current.pos.1 + dy);
            if !map.is_floor(neighbor.0, neighbor.1) {
                continue;
            }

            let tentative_g = current_g + 1;
            let neighbor_g = *g_score.get(&neighbor).unwrap_or(&i32::MAX);

            if tentative_g < neighbor_g {
                came_from.insert(neighbor, current.pos);
                g_score.insert(neighbor, tentative_g);
                open_set.push(ScoredNode {
                    pos: neighbor,
                    f_score: tentative_g + heuristic(neighbor, goal),
                });
            }
        }
    }

    None
}

/// Manhattan distance heuristic
fn heuristic(a: (i32, i32), b: (i32, i32)) -> i32 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

fn reconstruct_path(
    came_from: &HashMap<(i32, i32), (i32, i32)>,
    mut current: (i32, i32),
) -> Vec<(i32, i32)> {
    let mut path = vec![current];
    while let Some(&prev) = came_from.get(&current) {
        current = prev;
        path.push(current);
    }
    path.reverse();
    // Remove start position
    path.remove(0);
    path
}

use super::connect::{nearest_room, Corridor};
use super::corridor::{carve_opening, dig_corridor, Side};
use super::rect::{distance_sq, Rect};
use crate::config::DungeonConfig;
use crate::constants::BOSS_ROOM_GRID_MARGIN;
use crate::grid::Grid;

/// Boss room centered on the grid, its size clamped so a margin remains
/// between it and the grid edge.
pub fn boss_rect(config: &DungeonConfig) -> Rect {
    let max_w = (config.width - BOSS_ROOM_GRID_MARGIN).max(1);
    let max_h = (config.height - BOSS_ROOM_GRID_MARGIN).max(1);
    let width = config.boss_room_width.max(config.min_room_size).min(max_w);
    let height = config.boss_room_height.max(config.min_room_size).min(max_h);
    Rect::new(
        (config.width - width) / 2,
        (config.height - height) / 2,
        width,
        height,
    )
}

/// Carve the whole boss room, overriding whatever the partition put there.
pub fn carve_boss_room(grid: &mut Grid, config: &DungeonConfig) -> Rect {
    let rect = boss_rect(config);
    grid.carve_rect(&rect);
    rect
}

/// Open each edge midpoint of the boss room and dig to the closest normal
/// room center. Without normal rooms, fall back to one corridor from the
/// boss room's center to the closest of `fallback` rooms; without those
/// either, the boss room stays isolated.
pub fn connect_boss_room(
    grid: &mut Grid,
    boss: &Rect,
    normal_centers: &[(i32, i32)],
    fallback: &[Rect],
    half_width: i32,
) -> Vec<Corridor> {
    let mut dug = Vec::new();

    for side in Side::ALL {
        let edge = side.midpoint(boss);
        let Some(target) = nearest_point(normal_centers, edge) else {
            break;
        };
        carve_opening(grid, edge, side, half_width);
        dig_corridor(grid, edge, target, half_width);
        dug.push((edge, target));
    }

    if dug.is_empty() {
        let center = boss.center();
        if let Some(room) = nearest_room(fallback, center) {
            let target = room.center();
            dig_corridor(grid, center, target, half_width);
            dug.push((center, target));
        }
    }

    dug
}

fn nearest_point(points: &[(i32, i32)], from: (i32, i32)) -> Option<(i32, i32)> {
    let mut best: Option<(i64, (i32, i32))> = None;
    for &p in points {
        let d = distance_sq(from, p);
        if best.map_or(true, |(best_d, _)| d < best_d) {
            best = Some((d, p));
        }
    }
    best.map(|(_, p)| p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_boss_room_is_centered() {
        let rect = boss_rect(&DungeonConfig::default());
        assert_eq!(rect, Rect::new(36, 36, 28, 28));
    }

    #[test]
    fn test_boss_room_clamped_to_grid() {
        let config = DungeonConfig {
            width: 30,
            height: 30,
            start_room: Rect::new(1, 1, 5, 5),
            boss_room_width: 50,
            boss_room_height: 10,
            ..Default::default()
        };
        let rect = boss_rect(&config);
        assert_eq!(rect.width, 26);
        assert_eq!(rect.height, 10);
        assert!(rect.fits_within(30, 30));
        assert_eq!(rect.x, 2);
    }

    #[test]
    fn test_boss_room_respects_min_room_size() {
        let config = DungeonConfig { boss_room_width: 2, ..Default::default() };
        assert_eq!(boss_rect(&config).width, config.min_room_size);
    }

    #[test]
    fn test_carve_boss_room_is_solid() {
        let config = DungeonConfig::default();
        let mut grid = Grid::new(config.width, config.height);
        let rect = carve_boss_room(&mut grid, &config);
        assert_eq!(grid.floor_count(), (rect.width * rect.height) as usize);
    }

    #[test]
    fn test_four_entrances_when_rooms_exist() {
        let config = DungeonConfig::default();
        let mut grid = Grid::new(100, 100);
        let boss = carve_boss_room(&mut grid, &config);
        let centers = [(10, 50), (90, 50), (50, 90)];

        let dug = connect_boss_room(&mut grid, &boss, &centers, &[], 2);
        assert_eq!(dug.len(), 4);
        assert_eq!(dug[0], ((36, 50), (10, 50)));
        assert_eq!(dug[1], ((63, 50), (90, 50)));
        // Bottom edge has no closer room than the left one
        assert_eq!(dug[2].0, (50, 36));
        assert_eq!(dug[3], ((50, 63), (50, 90)));
        for &(_, target) in &dug {
            assert!(grid.is_floor(target.0, target.1));
        }
    }

    #[test]
    fn test_fallback_corridor_from_center() {
        let config = DungeonConfig::default();
        let mut grid = Grid::new(100, 100);
        let boss = carve_boss_room(&mut grid, &config);
        let inside = Rect::new(40, 40, 6, 6);

        let dug = connect_boss_room(&mut grid, &boss, &[], &[inside], 2);
        assert_eq!(dug, vec![((50, 50), (43, 43))]);
    }

    #[test]
    fn test_isolated_without_any_rooms() {
        let config = DungeonConfig::default();
        let mut grid = Grid::new(100, 100);
        let boss = carve_boss_room(&mut grid, &config);
        let before = grid.floor_count();

        assert!(connect_boss_room(&mut grid, &boss, &[], &[], 2).is_empty());
        assert_eq!(grid.floor_count(), before);
    }
}

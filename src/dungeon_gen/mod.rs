//! BSP dungeon generation.
//!
//! One pass runs, in order: reset the grid to wall, carve the start room,
//! partition the grid, carve a room per leaf (discarding any that touch the
//! start room), carve the boss room on boss passes, connect the start room to
//! its nearest room, connect sibling subtrees along the partition tree,
//! connect the boss room's four edges, then place the exit in the room
//! farthest from the start.

mod boss;
mod bsp;
mod connect;
mod corridor;
mod exit;
mod rect;

pub use boss::boss_rect;
pub use bsp::BspNode;
pub use connect::Corridor;
pub use corridor::{dig_corridor, Side};
pub use rect::{distance_sq, Rect};

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::config::{DungeonConfig, PassOptions};
use crate::error::ConfigError;
use crate::events::{EventQueue, GenerationEvent};
use crate::grid::Grid;
use crate::query::DungeonMap;

/// Outcome of one generation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Seed the pass ran with; replaying it reproduces the map
    pub seed: u64,
    pub boss_pass: bool,
    pub leaf_count: usize,
    /// Depth of the partition tree; 0 when the root stayed a leaf
    pub tree_depth: u32,
    pub rooms_carved: usize,
    /// Leaves whose room overlapped the start room and was left as wall
    pub rooms_discarded: usize,
    pub corridors_dug: usize,
    pub boss_room: Option<Rect>,
    pub exit: Option<(i32, i32)>,
}

/// Owns the grid and every piece of pass-scoped state. Each call to
/// `generate` discards the previous pass entirely.
#[derive(Debug)]
pub struct DungeonGenerator {
    config: DungeonConfig,
    grid: Grid,
    rooms: Vec<Rect>,
    start_room: Rect,
    /// `Rect::EMPTY` when the last pass had no boss room
    boss_room: Rect,
    exit: Option<(i32, i32)>,
    events: EventQueue,
}

impl DungeonGenerator {
    pub fn new(config: DungeonConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            grid: Grid::new(config.width, config.height),
            rooms: Vec::new(),
            start_room: config.start_room,
            boss_room: Rect::EMPTY,
            exit: None,
            events: EventQueue::new(),
            config,
        })
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Events pushed by the last pass, oldest first
    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = GenerationEvent> + '_ {
        self.events.drain()
    }

    fn reset(&mut self) {
        self.grid.reset();
        self.rooms.clear();
        self.start_room = self.config.start_room;
        self.boss_room = Rect::EMPTY;
        self.exit = None;
        self.events.clear();
    }

    /// Run a full pass, then hand the finished map to `on_complete` exactly once.
    pub fn generate_with<F>(&mut self, pass: PassOptions, on_complete: F) -> GenerationReport
    where
        F: FnOnce(&DungeonGenerator, &GenerationReport),
    {
        let report = self.generate(pass);
        on_complete(self, &report);
        report
    }

    /// Regenerate the map from scratch.
    pub fn generate(&mut self, pass: PassOptions) -> GenerationReport {
        puffin::profile_function!();

        let seed = pass.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut report = GenerationReport {
            seed,
            boss_pass: pass.boss,
            ..Default::default()
        };

        self.reset();
        self.grid.carve_interior(&self.start_room);

        // Partition everything inside the one-cell border
        let root_region = Rect::new(1, 1, self.config.width - 2, self.config.height - 2);
        let mut root = BspNode::new(root_region);
        {
            puffin::profile_scope!("partition");
            root.split(0, &self.config, &mut rng);
            root.create_rooms(&self.config, &mut rng);
        }
        report.leaf_count = root.leaf_count();
        report.tree_depth = root.depth();
        self.carve_leaf_rooms(&root, &mut report);

        if pass.boss {
            self.boss_room = boss::carve_boss_room(&mut self.grid, &self.config);
            self.events.push(GenerationEvent::BossRoomCarved { rect: self.boss_room });
        }

        self.connect(&root, &mut report);
        drop(root);

        self.place_exit();

        report.boss_room = self.boss_room();
        report.exit = self.exit;
        info!(
            "generated {}x{} map: seed={} depth={} leaves={} rooms={} discarded={} corridors={} boss={:?} exit={:?}",
            self.config.width,
            self.config.height,
            seed,
            report.tree_depth,
            report.leaf_count,
            report.rooms_carved,
            report.rooms_discarded,
            report.corridors_dug,
            report.boss_room,
            report.exit,
        );
        self.events.push(GenerationEvent::MapGenerated { seed, boss: pass.boss });
        report
    }

    fn carve_leaf_rooms(&mut self, root: &BspNode, report: &mut GenerationReport) {
        puffin::profile_function!();

        let mut leaves = Vec::with_capacity(report.leaf_count);
        root.collect_leaves(&mut leaves);

        for (leaf, room) in leaves {
            if room.overlaps(&self.start_room) {
                debug!("discarding room {:?} in leaf {:?}: overlaps start room", room, leaf);
                report.rooms_discarded += 1;
                self.events.push(GenerationEvent::RoomDiscarded { leaf, rect: room });
                continue;
            }
            self.grid.carve_rect(&room);
            self.rooms.push(room);
            report.rooms_carved += 1;
            self.events.push(GenerationEvent::RoomCarved { rect: room });
        }
    }

    fn connect(&mut self, root: &BspNode, report: &mut GenerationReport) {
        puffin::profile_function!();
        let half = self.config.corridor_half_width;
        let mut dug = Vec::new();

        match connect::connect_start_to_nearest(&mut self.grid, &self.start_room, &self.rooms, half) {
            Some(corridor) => dug.push(corridor),
            None => debug!("no rooms carved; start room left unconnected"),
        }

        connect::connect_tree(&mut self.grid, root, half, &mut dug);

        if !self.boss_room.is_empty() {
            let start = self.start_room;
            let boss = self.boss_room;
            let normal_centers: Vec<(i32, i32)> = self
                .rooms
                .iter()
                .filter(|room| !room.overlaps(&start) && !room.overlaps(&boss))
                .map(Rect::center)
                .collect();
            let boss_dug =
                boss::connect_boss_room(&mut self.grid, &boss, &normal_centers, &self.rooms, half);
            if boss_dug.is_empty() {
                debug!("no rooms to reach; boss room {:?} left isolated", boss);
            }
            dug.extend(boss_dug);
        }

        report.corridors_dug = dug.len();
        for (from, to) in dug {
            self.events.push(GenerationEvent::CorridorDug { from, to });
        }
    }

    fn place_exit(&mut self) {
        self.exit = exit::farthest_room(&self.rooms(), &self.start_room).map(|room| room.center());
        if let Some(position) = self.exit {
            self.events.push(GenerationEvent::ExitPlaced { position });
        }
    }
}

impl DungeonMap for DungeonGenerator {
    fn width(&self) -> i32 {
        self.grid.width()
    }

    fn height(&self) -> i32 {
        self.grid.height()
    }

    fn is_floor(&self, x: i32, y: i32) -> bool {
        self.grid.is_floor(x, y)
    }

    fn rooms(&self) -> Vec<Rect> {
        if self.boss_room.is_empty() {
            return self.rooms.clone();
        }
        self.rooms
            .iter()
            .filter(|room| !room.overlaps(&self.boss_room))
            .copied()
            .collect()
    }

    fn boss_room(&self) -> Option<Rect> {
        (!self.boss_room.is_empty()).then_some(self.boss_room)
    }

    fn start_room(&self) -> Rect {
        self.start_room
    }

    fn exit_location(&self) -> Option<(i32, i32)> {
        self.exit
    }
}

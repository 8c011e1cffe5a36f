//! Procedural dungeon generation on a fixed-size grid.
//!
//! A pass partitions the grid with a BSP tree, carves one room per leaf,
//! joins everything to a fixed start room with L-shaped corridors, carves a
//! central boss room on boss passes, and marks the room farthest from the
//! start as the exit. Collaborators read the result through [`DungeonMap`].
//!
//! ```
//! use bsp_dungeon::{DungeonConfig, DungeonGenerator, DungeonMap, PassOptions};
//!
//! let mut gen = DungeonGenerator::new(DungeonConfig::default()).unwrap();
//! let report = gen.generate(PassOptions::seeded(7).with_boss(true));
//! assert_eq!(report.seed, 7);
//! assert!(gen.boss_room().is_some());
//! ```

pub mod config;
pub mod constants;
pub mod dungeon_gen;
pub mod error;
pub mod events;
pub mod grid;
pub mod pathfinding;
pub mod query;
pub mod render;
pub mod tile;

pub use config::{DungeonConfig, PassOptions};
pub use dungeon_gen::{DungeonGenerator, GenerationReport, Rect};
pub use error::{ConfigError, DungeonError};
pub use events::{EventQueue, GenerationEvent};
pub use grid::Grid;
pub use query::DungeonMap;
pub use tile::Cell;

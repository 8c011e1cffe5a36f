//! Generator configuration.
//!
//! `DungeonConfig` carries the sizes the engine is built with; `PassOptions`
//! carries what changes from one pass to the next (boss flag, seed). Both are
//! passed in explicitly, so the engine never looks up stage state on its own.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::dungeon_gen::Rect;
use crate::error::{ConfigError, DungeonError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    pub width: i32,
    pub height: i32,
    /// Fixed player spawn area; its outer ring stays wall
    pub start_room: Rect,
    pub min_leaf_size: i32,
    pub max_depth: u32,
    pub min_split_ratio: f32,
    pub max_split_ratio: f32,
    pub corridor_half_width: i32,
    pub min_room_size: i32,
    pub max_room_size: i32,
    pub boss_room_width: i32,
    pub boss_room_height: i32,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            width: DUNGEON_DEFAULT_WIDTH,
            height: DUNGEON_DEFAULT_HEIGHT,
            start_room: Rect::new(START_ROOM_X, START_ROOM_Y, START_ROOM_WIDTH, START_ROOM_HEIGHT),
            min_leaf_size: DUNGEON_MIN_LEAF_SIZE,
            max_depth: DUNGEON_MAX_DEPTH,
            min_split_ratio: DUNGEON_MIN_SPLIT_RATIO,
            max_split_ratio: DUNGEON_MAX_SPLIT_RATIO,
            corridor_half_width: CORRIDOR_HALF_WIDTH,
            min_room_size: DUNGEON_MIN_ROOM_SIZE,
            max_room_size: DUNGEON_MAX_ROOM_SIZE,
            boss_room_width: BOSS_ROOM_WIDTH,
            boss_room_height: BOSS_ROOM_HEIGHT,
        }
    }
}

impl DungeonConfig {
    /// Parse a (possibly partial) JSON config. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, DungeonError> {
        let config: DungeonConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, DungeonError> {
        let json = std::fs::read_to_string(path).map_err(|source| DungeonError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < DUNGEON_MIN_GRID_SIZE || self.height < DUNGEON_MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                width: self.width,
                height: self.height,
                min: DUNGEON_MIN_GRID_SIZE,
            });
        }
        if self.width > DUNGEON_MAX_GRID_SIZE || self.height > DUNGEON_MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
                max: DUNGEON_MAX_GRID_SIZE,
            });
        }
        if self.min_leaf_size < 1 || self.min_leaf_size > self.width.max(self.height) {
            return Err(ConfigError::InvalidLeafSize(self.min_leaf_size));
        }
        let ratios_ok = self.min_split_ratio > 0.0
            && self.max_split_ratio < 1.0
            && self.min_split_ratio <= self.max_split_ratio;
        if !ratios_ok {
            return Err(ConfigError::InvalidSplitRatio {
                min: self.min_split_ratio,
                max: self.max_split_ratio,
            });
        }
        // Corridor band must fit across the narrower axis
        let max_half_width = self.width.min(self.height) / 2;
        if self.corridor_half_width < 0 || self.corridor_half_width > max_half_width {
            return Err(ConfigError::InvalidCorridorWidth(self.corridor_half_width));
        }
        if self.min_room_size < 1 || self.max_room_size < self.min_room_size {
            return Err(ConfigError::InvalidRoomSize {
                min: self.min_room_size,
                max: self.max_room_size,
            });
        }
        if self.boss_room_width <= 0 || self.boss_room_height <= 0 {
            return Err(ConfigError::InvalidBossRoom {
                width: self.boss_room_width,
                height: self.boss_room_height,
            });
        }
        let start = self.start_room;
        if start.width < 3 || start.height < 3 || !start.fits_within(self.width, self.height) {
            return Err(ConfigError::StartRoomOutOfBounds {
                rect: start,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Per-pass inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassOptions {
    /// Carve and connect a boss room this pass
    pub boss: bool,
    /// Seed for this pass; `None` draws a fresh one
    pub seed: Option<u64>,
}

impl PassOptions {
    pub fn seeded(seed: u64) -> Self {
        Self { boss: false, seed: Some(seed) }
    }

    pub fn with_boss(mut self, boss: bool) -> Self {
        self.boss = boss;
        self
    }
}

//! Error types for configuration and config-file loading.
//!
//! Generation itself never fails; every degenerate layout is reported
//! through the pass report instead.

use std::path::PathBuf;
use thiserror::Error;

use crate::dungeon_gen::Rect;

/// A configuration value the generator cannot work with
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid {width}x{height} is smaller than the minimum {min}x{min}")]
    GridTooSmall { width: i32, height: i32, min: i32 },

    #[error("grid {width}x{height} is larger than the maximum {max}x{max}")]
    GridTooLarge { width: i32, height: i32, max: i32 },

    #[error("minimum leaf size must be between 1 and the grid size, got {0}")]
    InvalidLeafSize(i32),

    #[error("split ratios must satisfy 0 < min <= max < 1, got {min}..{max}")]
    InvalidSplitRatio { min: f32, max: f32 },

    #[error("corridor half-width must be non-negative and fit inside the grid, got {0}")]
    InvalidCorridorWidth(i32),

    #[error("room size range {min}..{max} is invalid")]
    InvalidRoomSize { min: i32, max: i32 },

    #[error("boss room size {width}x{height} must be positive")]
    InvalidBossRoom { width: i32, height: i32 },

    #[error("start room {rect:?} must be at least 3x3 and lie inside the {width}x{height} grid")]
    StartRoomOutOfBounds { rect: Rect, width: i32, height: i32 },
}

/// Failures loading a configuration file
#[derive(Error, Debug)]
pub enum DungeonError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

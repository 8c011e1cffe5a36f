//! Generator constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.

mod dungeon;
mod render;

pub use dungeon::*;
pub use render::*;

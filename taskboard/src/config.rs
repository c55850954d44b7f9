//! Board configuration
//!
//! The library only defines the shape and the defaults. Layering (files,
//! environment) is the embedding application's job.

use crate::error::Result;
use crate::types::{Board, ColumnId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default inactivity window before a drag is considered abandoned
pub const DEFAULT_DRAG_TIMEOUT_MS: u64 = 10_000;

/// A column the board starts with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSeed {
    pub id: ColumnId,
    pub title: String,
}

/// Settings for a board session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Columns of a fresh board, left to right
    pub default_columns: Vec<ColumnSeed>,
    /// Milliseconds without pointer activity before a drag is abandoned
    pub drag_timeout_ms: u64,
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_columns: Board::default_columns()
                .into_iter()
                .map(|(id, title)| ColumnSeed { id, title })
                .collect(),
            drag_timeout_ms: DEFAULT_DRAG_TIMEOUT_MS,
            log_level: "info".to_string(),
        }
    }
}

impl BoardConfig {
    pub fn drag_timeout(&self) -> Duration {
        Duration::from_millis(self.drag_timeout_ms)
    }

    /// Build the starting board. Fails on blank or duplicate titles and ids.
    pub fn seed_board(&self) -> Result<Board> {
        Board::with_columns(
            self.default_columns
                .iter()
                .map(|seed| (seed.id.clone(), seed.title.as_str())),
        )
    }
}

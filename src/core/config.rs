//! Session configuration types.
//!
//! - `TableConfig`: board dimensions for a table.
//! - `BotConfig`: seed and probing order for the random bot.
//! - `SessionConfig`: limits for a driven bot session.
//!
//! All three are plain builders. The catalog defaults per game live on
//! [`GameKind::default_config`](crate::rules::GameKind::default_config).

use serde::{Deserialize, Serialize};

use super::board::BoardSize;

/// Board dimensions for one table.
///
/// Dimensions are fixed once the table opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub rows: usize,
    pub cols: usize,
}

impl TableConfig {
    /// A `rows x cols` board.
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Override the board dimensions.
    #[must_use]
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    #[must_use]
    pub const fn size(&self) -> BoardSize {
        BoardSize::new(self.rows, self.cols)
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(3, 3)
    }
}

/// How a drag-move bot walks the eight candidate offsets of a piece.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeOrder {
    /// Shuffle the offsets for every piece.
    #[default]
    Shuffled,
    /// Jumps first, then single steps, always in the same order.
    Fixed,
}

/// Random bot configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    pub seed: u64,
    pub probe_order: ProbeOrder,
}

impl BotConfig {
    /// A bot seeded with `seed`, shuffled probing.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
            probe_order: ProbeOrder::Shuffled,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_probe_order(mut self, order: ProbeOrder) -> Self {
        self.probe_order = order;
        self
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Limits for a bot-driven session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Bot moves allowed per `run_until_idle` call.
    pub max_bot_moves: usize,
}

impl SessionConfig {
    #[must_use]
    pub fn with_max_bot_moves(mut self, max: usize) -> Self {
        self.max_bot_moves = max;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_bot_moves: 10_000,
        }
    }
}

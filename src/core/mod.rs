//! Core engine types: board, cells, players, turn order, errors, RNG, configuration.
//!
//! Everything here is game-agnostic. Rule variants give meaning to cell
//! contents; the table composes these pieces into a playable session.

pub mod board;
pub mod cell;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;
pub mod turn_queue;

pub use board::{Board, BoardSize};
pub use cell::{Cell, Coord, Move, PieceType};
pub use config::{BotConfig, ProbeOrder, SessionConfig, TableConfig};
pub use error::{EngineError, Result};
pub use player::{Player, PlayerId, PlayerSlot, MAX_SLOTS};
pub use rng::GameRng;
pub use state::GameState;
pub use turn_queue::TurnQueue;

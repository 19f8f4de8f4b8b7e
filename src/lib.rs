//! # gamecenter-engine
//!
//! A turn-based board-game engine: grid state, pluggable rule variants,
//! turn rotation, a table orchestrator with an event bus, and bots.
//!
//! ## Design Principles
//!
//! 1. **Rules Decide, The Table Orchestrates**: The table never interprets
//!    game-specific concepts. It builds a candidate successor state and asks
//!    the installed `RulesEngine` whether the step is legal.
//!
//! 2. **Candidate States, Not Move Lists**: A move is validated by comparing
//!    the state before and after. Rules may rewrite the candidate (captures,
//!    promotion) before it is committed.
//!
//! 3. **Bots Run Between Calls**: Bots react to drained table events, never
//!    from inside a table call, so every decision sees a committed state.
//!
//! ## Architecture
//!
//! - **Persistent Boards**: `Board<T>` is backed by `im::Vector`, so cloning
//!   a board for a candidate or a bot probe is cheap.
//!
//! - **Closed Rule Catalog**: `Rules` is an enum over the shipped variants,
//!   usable anywhere a `dyn RulesEngine` is.
//!
//! ## Modules
//!
//! - `core`: Board, cells, coordinates, players, turn queue, RNG, configuration
//! - `rules`: RulesEngine trait, board diffs, violations, rule catalog
//! - `games`: Tic-Tac-Toe, Checkers and Go
//! - `table`: TableGame orchestrator and event bus
//! - `bots`: BotStrategy, RandomBot and the event-driven BotDriver

pub mod core;
pub mod rules;
pub mod games;
pub mod table;
pub mod bots;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardSize, EngineError,
    Cell, Coord, Move, PieceType,
    Player, PlayerId, PlayerSlot, MAX_SLOTS,
    GameRng,
    TableConfig, BotConfig, ProbeOrder, SessionConfig,
    GameState, TurnQueue,
};

pub use crate::rules::{GameKind, Rules, RulesEngine, RuleViolation, BoardDiff, CellChange};

pub use crate::games::{CheckersRules, GoRules, TicTacToeRules};

pub use crate::table::{
    EventBus, SubscriberId, TableEvent,
    MoveRejection, Seat, TableError, TableGame, TableStatus,
};

pub use crate::bots::{BotContext, BotDriver, BotStrategy, DriveReport, RandomBot};

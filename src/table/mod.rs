//! The table game orchestrator.
//!
//! A [`TableGame`] composes a board, a turn queue and one installed rules
//! engine into a playable session, and publishes [`TableEvent`]s for every
//! observable change.

pub mod events;
pub mod game;

pub use events::{EventBus, SubscriberId, TableEvent};
pub use game::{MoveRejection, Seat, TableError, TableGame, TableStatus};

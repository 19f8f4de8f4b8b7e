//! Bot players.
//!
//! - `BotStrategy`: the move-source contract
//! - `RandomBot`: the shipped uniform-random strategy
//! - `BotDriver`: runs bots in reaction to table events, one move at a time

pub mod driver;
pub mod random;
pub mod strategy;

pub use driver::{BotDriver, DriveReport};
pub use random::{RandomBot, DRAG_OFFSETS};
pub use strategy::{BotContext, BotStrategy};

//! Rules engine trait and the shipped rule catalog.
//!
//! Games implement `RulesEngine` to define:
//! - Player counts and whether moves relocate or place pieces
//! - The starting layout
//! - Which candidate successor states are legal
//! - Win and terminal conditions
//!
//! The table calls into `RulesEngine` but never interprets game-specific
//! concepts directly.

pub mod catalog;
pub mod diff;
pub mod engine;
pub mod violation;

pub use catalog::{GameKind, Rules};
pub use diff::{classify, BoardDiff, CellChange};
pub use engine::RulesEngine;
pub use violation::RuleViolation;

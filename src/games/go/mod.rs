//! Go on an `N x M` board.
//!
//! ## Play
//!
//! Each move places one stone on an empty point. Enemy groups left without
//! a liberty are captured. A placement that leaves the mover's own group
//! without a liberty after captures is suicide and is refused.
//!
//! ## Scoring
//!
//! There is no territory or area count: `check_win` always reports
//! `Unknown` and the game ends when the board is full.

mod groups;
mod rules;

pub use groups::{capture_dead_groups, group_at, Group};
pub use rules::GoRules;

//! Checkers (draughts) on an `N x M` board.
//!
//! ## Layout
//!
//! Pieces sit on the dark squares (`(row + col)` odd). Player1 fills the
//! first three rows and moves towards higher rows; Player2 fills the last
//! three rows and moves towards row 0.
//!
//! ## Moves
//!
//! A move relocates one piece:
//! - a single diagonal step onto an empty square, or
//! - a diagonal jump of two squares over an enemy piece, which is removed.
//!
//! Men only move forward, kings move either way. A piece ending its move
//! on the far row is crowned.

mod rules;

pub use rules::CheckersRules;

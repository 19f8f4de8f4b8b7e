//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Who may sit down (`min_players`, `max_players`)
//! - The starting layout
//! - Whether a candidate state is an acceptable successor
//! - Win and terminal conditions
//!
//! The table never interprets game-specific concepts directly. It builds a
//! candidate by relocating one piece and hands it to `validate_move`, which
//! may finish the transition in place (captures, promotions) before
//! accepting it.

use super::violation::RuleViolation;
use crate::core::{BoardSize, GameState, PlayerSlot};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate_move` may have edited `after` even when it returns `Err`;
///   callers discard rejected candidates.
/// - `check_win` returns `PlayerSlot::Unknown` while there is no winner.
/// - `is_game_over` may be true with no winner (a draw).
pub trait RulesEngine {
    /// Display name of the game.
    fn game_name(&self) -> &'static str;

    /// Players required before the table can open.
    fn min_players(&self) -> usize;

    /// Seats available at the table.
    fn max_players(&self) -> usize;

    /// True if a move relocates an existing piece rather than placing one.
    fn is_drag_enabled(&self) -> bool;

    /// The starting layout for a board of `size`.
    fn init_state(&self, size: BoardSize) -> GameState;

    /// Check that `after` is a legal successor of `before` for `player`.
    ///
    /// On success `after` holds the committed form of the move, including
    /// any side effects the rules apply.
    fn validate_move(
        &self,
        before: &GameState,
        after: &mut GameState,
        player: PlayerSlot,
    ) -> Result<(), RuleViolation>;

    /// The winner, `Unknown` if there is none.
    fn check_win(&self, state: &GameState) -> PlayerSlot;

    /// True once no further play is meaningful.
    fn is_game_over(&self, state: &GameState) -> bool;

    // === Convenience Methods ===

    /// Boolean form of [`validate_move`](Self::validate_move).
    fn is_move_valid(&self, before: &GameState, after: &mut GameState, player: PlayerSlot) -> bool {
        self.validate_move(before, after, player).is_ok()
    }

    /// `Some(winner)` once the game is over, `None` while it continues.
    ///
    /// The winner is `Unknown` for a draw.
    fn outcome(&self, state: &GameState) -> Option<PlayerSlot> {
        self.is_game_over(state).then(|| self.check_win(state))
    }
}

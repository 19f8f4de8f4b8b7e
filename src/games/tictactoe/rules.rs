//! Tic-Tac-Toe rules engine.

use serde::{Deserialize, Serialize};

use super::lines::winner;
use crate::core::{BoardSize, Cell, GameState, PlayerSlot};
use crate::rules::{classify, RuleViolation, RulesEngine};

/// Placement-only rules: claim one empty cell per turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeRules;

impl TicTacToeRules {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// True if claiming `state`'s empty cells one at a time could give
    /// Player1 or Player2 an immediate line.
    fn any_immediate_win(&self, state: &GameState) -> bool {
        state.empty_cells().any(|at| {
            [PlayerSlot::Player1, PlayerSlot::Player2]
                .into_iter()
                .any(|player| {
                    let mut simulated = state.clone();
                    simulated.set(at, Cell::owned_by(player)).is_ok() && winner(&simulated) == player
                })
        })
    }
}

impl RulesEngine for TicTacToeRules {
    fn game_name(&self) -> &'static str {
        "TicTacToe"
    }

    fn min_players(&self) -> usize {
        2
    }

    fn max_players(&self) -> usize {
        2
    }

    fn is_drag_enabled(&self) -> bool {
        false
    }

    fn init_state(&self, size: BoardSize) -> GameState {
        GameState::with_size(size, Cell::EMPTY)
    }

    fn validate_move(
        &self,
        before: &GameState,
        after: &mut GameState,
        player: PlayerSlot,
    ) -> Result<(), RuleViolation> {
        classify(before, after, player)?.single_placement()?;
        Ok(())
    }

    fn check_win(&self, state: &GameState) -> PlayerSlot {
        winner(state)
    }

    fn is_game_over(&self, state: &GameState) -> bool {
        if winner(state).is_seat() {
            return true;
        }
        if self.any_immediate_win(state) {
            return false;
        }
        !state.has_empty_cell()
    }
}

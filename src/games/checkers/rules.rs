//! Checkers rules engine.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{BoardSize, Cell, Coord, GameState, PieceType, PlayerSlot};
use crate::rules::{classify, RuleViolation, RulesEngine};

/// Rows of men each side starts with.
const HOME_ROWS: usize = 3;

/// Relocation rules with diagonal capture and promotion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckersRules;

impl CheckersRules {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Row delta of a forward step for `player`.
    #[must_use]
    pub fn forward(player: PlayerSlot) -> i32 {
        if player == PlayerSlot::Player1 {
            1
        } else {
            -1
        }
    }

    /// The row on which `player`'s men are crowned.
    #[must_use]
    pub fn crowning_row(player: PlayerSlot, rows: usize) -> i32 {
        if player == PlayerSlot::Player1 {
            rows as i32 - 1
        } else {
            0
        }
    }
}

impl RulesEngine for CheckersRules {
    fn game_name(&self) -> &'static str {
        "Checkers"
    }

    fn min_players(&self) -> usize {
        2
    }

    fn max_players(&self) -> usize {
        2
    }

    fn is_drag_enabled(&self) -> bool {
        true
    }

    fn init_state(&self, size: BoardSize) -> GameState {
        let mut state = GameState::with_size(size, Cell::EMPTY);
        let coords: Vec<Coord> = state.coords().collect();
        for at in coords {
            if (at.row + at.col) % 2 != 1 {
                continue;
            }
            let row = at.row as usize;
            let owner = if row < HOME_ROWS {
                PlayerSlot::Player1
            } else if row + HOME_ROWS >= size.rows {
                PlayerSlot::Player2
            } else {
                continue;
            };
            if let Ok(cell) = state.at_mut(at) {
                *cell = Cell::new(owner, PieceType::MAN);
            }
        }
        state
    }

    fn validate_move(
        &self,
        before: &GameState,
        after: &mut GameState,
        player: PlayerSlot,
    ) -> Result<(), RuleViolation> {
        let (from, to) = classify(before, after, player)?.single_relocation()?;

        if !to.before.is_empty() {
            return Err(RuleViolation::OccupiedDestination { at: to.at });
        }

        let d_row = to.at.row - from.at.row;
        let d_col = to.at.col - from.at.col;
        let king = from.before.piece.is_king();
        let forward = Self::forward(player);

        match (d_row.abs(), d_col.abs()) {
            (1, 1) => {
                if !king && d_row != forward {
                    return Err(RuleViolation::WrongDirection {
                        from: from.at,
                        to: to.at,
                    });
                }
            }
            (2, 2) => {
                if !king && d_row / 2 != forward {
                    return Err(RuleViolation::WrongDirection {
                        from: from.at,
                        to: to.at,
                    });
                }
                let over = from.at.midpoint(to.at);
                let jumped = before.owner(over);
                if !jumped.is_seat() || jumped == player {
                    return Err(RuleViolation::NothingToCapture { at: over });
                }
                if let Ok(cell) = after.at_mut(over) {
                    *cell = Cell::EMPTY;
                }
                trace!(%player, %over, captured = %jumped, "jump");
            }
            _ => {
                return Err(RuleViolation::NotDiagonal {
                    from: from.at,
                    to: to.at,
                })
            }
        }

        if to.at.row == Self::crowning_row(player, before.rows()) {
            if let Ok(cell) = after.at_mut(to.at) {
                cell.piece = PieceType::KING;
            }
        }
        Ok(())
    }

    fn check_win(&self, state: &GameState) -> PlayerSlot {
        if state.count_owned(PlayerSlot::Player1) == 0 {
            PlayerSlot::Player2
        } else if state.count_owned(PlayerSlot::Player2) == 0 {
            PlayerSlot::Player1
        } else {
            PlayerSlot::Unknown
        }
    }

    fn is_game_over(&self, state: &GameState) -> bool {
        self.check_win(state).is_seat()
    }
}

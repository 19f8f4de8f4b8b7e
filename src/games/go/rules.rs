//! Go rules engine.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::groups::{capture_dead_groups, group_at};
use crate::core::{BoardSize, Cell, GameState, PlayerSlot};
use crate::rules::{classify, RuleViolation, RulesEngine};

/// Placement rules with capture and suicide detection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoRules;

impl GoRules {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RulesEngine for GoRules {
    fn game_name(&self) -> &'static str {
        "Go"
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
        let placed = classify(before, after, player)?.single_placement()?.at;

        let mut resolved = after.clone();
        let captured = capture_dead_groups(&mut resolved, player);

        let alive = group_at(&resolved, placed).is_some_and(|group| !group.is_dead());
        if !alive {
            return Err(RuleViolation::Suicide { at: placed });
        }

        if captured > 0 {
            trace!(%player, %placed, captured, "captured stones");
        }
        *after = resolved;
        Ok(())
    }

    fn check_win(&self, _state: &GameState) -> PlayerSlot {
        PlayerSlot::Unknown
    }

    fn is_game_over(&self, state: &GameState) -> bool {
        !state.has_empty_cell()
    }
}

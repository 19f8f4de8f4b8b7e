//! The bot contract.

use crate::core::{GameState, Move, PlayerSlot};
use crate::rules::RulesEngine;

/// What a bot gets to look at when asked for a move.
pub struct BotContext<'a> {
    pub rules: &'a dyn RulesEngine,
    pub state: &'a GameState,
    /// The seat the bot is playing.
    pub slot: PlayerSlot,
}

impl<'a> BotContext<'a> {
    #[must_use]
    pub fn new(rules: &'a dyn RulesEngine, state: &'a GameState, slot: PlayerSlot) -> Self {
        Self { rules, state, slot }
    }

    /// True if the rules would accept `mv` from this seat right now.
    ///
    /// Builds the candidate the same way the table does, on a throwaway copy.
    #[must_use]
    pub fn accepts(&self, mv: Move) -> bool {
        match self.state.with_move(mv, self.slot) {
            Ok(mut candidate) => self.rules.is_move_valid(self.state, &mut candidate, self.slot),
            Err(_) => false,
        }
    }
}

/// A move source for a non-human seat.
pub trait BotStrategy {
    /// Choose a move, or `None` if the bot has nothing to play.
    fn play(&mut self, ctx: &BotContext<'_>) -> Option<Move>;
}

//! The closed set of shipped rule variants.
//!
//! [`Rules`] is what a table installs: one enum dispatching to the concrete
//! variant, so the table stays a plain value with no trait objects.
//! [`GameKind`] is the user-facing catalog entry that builds it.

use serde::{Deserialize, Serialize};

use super::engine::RulesEngine;
use super::violation::RuleViolation;
use crate::core::{BoardSize, GameState, PlayerSlot, TableConfig};
use crate::games::{CheckersRules, GoRules, TicTacToeRules};

/// Catalog of playable games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    Go,
    TicTacToe,
    Checkers,
}

impl GameKind {
    /// Every game, in catalog order.
    pub const ALL: [GameKind; 3] = [GameKind::Go, GameKind::TicTacToe, GameKind::Checkers];

    /// Catalog label.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            GameKind::Go => "Go",
            GameKind::TicTacToe => "Tic Tac Toe",
            GameKind::Checkers => "Checkers",
        }
    }

    /// Board dimensions the game is normally played on.
    #[must_use]
    pub fn default_config(self) -> TableConfig {
        match self {
            GameKind::Go => TableConfig::new(9, 9),
            GameKind::TicTacToe => TableConfig::new(4, 4),
            GameKind::Checkers => TableConfig::new(8, 8),
        }
    }

    /// A fresh rules engine for this game.
    #[must_use]
    pub fn rules(self) -> Rules {
        match self {
            GameKind::Go => Rules::Go(GoRules),
            GameKind::TicTacToe => Rules::TicTacToe(TicTacToeRules),
            GameKind::Checkers => Rules::Checkers(CheckersRules),
        }
    }

    /// Look a game up by catalog label or engine name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| {
            kind.name().eq_ignore_ascii_case(name) || kind.rules().game_name().eq_ignore_ascii_case(name)
        })
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An installed rules engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rules {
    TicTacToe(TicTacToeRules),
    Checkers(CheckersRules),
    Go(GoRules),
}

impl Rules {
    /// The catalog entry for this engine.
    #[must_use]
    pub fn kind(&self) -> GameKind {
        match self {
            Rules::TicTacToe(_) => GameKind::TicTacToe,
            Rules::Checkers(_) => GameKind::Checkers,
            Rules::Go(_) => GameKind::Go,
        }
    }

    fn engine(&self) -> &dyn RulesEngine {
        match self {
            Rules::TicTacToe(rules) => rules,
            Rules::Checkers(rules) => rules,
            Rules::Go(rules) => rules,
        }
    }
}

impl From<GameKind> for Rules {
    fn from(kind: GameKind) -> Self {
        kind.rules()
    }
}

impl RulesEngine for Rules {
    fn game_name(&self) -> &'static str {
        self.engine().game_name()
    }

    fn min_players(&self) -> usize {
        self.engine().min_players()
    }

    fn max_players(&self) -> usize {
        self.engine().max_players()
    }

    fn is_drag_enabled(&self) -> bool {
        self.engine().is_drag_enabled()
    }

    fn init_state(&self, size: BoardSize) -> GameState {
        self.engine().init_state(size)
    }

    fn validate_move(
        &self,
        before: &GameState,
        after: &mut GameState,
        player: PlayerSlot,
    ) -> Result<(), RuleViolation> {
        self.engine().validate_move(before, after, player)
    }

    fn check_win(&self, state: &GameState) -> PlayerSlot {
        self.engine().check_win(state)
    }

    fn is_game_over(&self, state: &GameState) -> bool {
        self.engine().is_game_over(state)
    }
}

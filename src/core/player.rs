//! Player identity and seating.
//!
//! ## PlayerSlot
//!
//! The seat a player occupies at a table, `Player1`..`Player5`, plus
//! `Unknown` for "nobody" (an empty cell, a draw, an unseated player).
//!
//! ## PlayerId / Player
//!
//! Players are created and owned by the room/lobby layer. The table only
//! keeps the [`PlayerId`] and the slot it assigned.

use serde::{Deserialize, Serialize};

/// Maximum number of seats a table can hand out.
pub const MAX_SLOTS: usize = 5;

/// A seat at the table, or `Unknown` for no player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerSlot {
    Player1,
    Player2,
    Player3,
    Player4,
    Player5,
    #[default]
    Unknown,
}

impl PlayerSlot {
    /// All assignable slots in join order.
    pub const SEATS: [PlayerSlot; MAX_SLOTS] = [
        PlayerSlot::Player1,
        PlayerSlot::Player2,
        PlayerSlot::Player3,
        PlayerSlot::Player4,
        PlayerSlot::Player5,
    ];

    /// The slot assigned to the `index`-th joining player.
    ///
    /// Returns `Unknown` past the last seat.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::SEATS.get(index).copied().unwrap_or(PlayerSlot::Unknown)
    }

    /// 0-based seat index, `None` for `Unknown`.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        Self::SEATS.iter().position(|&s| s == self)
    }

    /// True for any real seat.
    #[must_use]
    pub fn is_seat(self) -> bool {
        self != PlayerSlot::Unknown
    }
}

impl std::fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.index() {
            Some(i) => write!(f, "Player{}", i + 1),
            None => write!(f, "Unknown"),
        }
    }
}

/// Stable identifier of an externally owned player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A participant as seen by the room layer.
///
/// `position` is written by the table when the player is seated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub display_name: String,
    pub position: PlayerSlot,
    pub managed_locally: bool,
    pub games_played: u32,
    pub games_won: u32,
}

impl Player {
    /// Create an unseated player.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(id),
            display_name: display_name.into(),
            position: PlayerSlot::Unknown,
            managed_locally: false,
            games_played: 0,
            games_won: 0,
        }
    }

    /// Record the outcome of a finished game for this player.
    pub fn record_result(&mut self, winner: PlayerSlot) {
        self.games_played += 1;
        if winner.is_seat() && winner == self.position {
            self.games_won += 1;
        }
    }

    /// Fraction of played games that were won, 0.0 before any game.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.games_won) / f64::from(self.games_played)
    }
}

//! The table: one installed rules engine, its board and its players.
//!
//! ## Lifecycle
//!
//! ```text
//! Unopened --start_game--> Open --game over--> Closed
//!     ^                                          |
//!     +------------- install_rules               | start_game (restart)
//!                                                v
//!                                               Open
//! ```
//!
//! ## Move pipeline
//!
//! `play_move` checks, in order: the table is open, both coordinates are on
//! the board, the player is seated, and it is their turn. It then builds a
//! candidate by relocating the piece at `from` onto `to` and hands it to the
//! rules. Only an accepted candidate is committed. Every refusal is both
//! returned and published as [`TableEvent::InvalidMove`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, instrument};

use super::events::{EventBus, SubscriberId, TableEvent};
use crate::core::{
    Cell, Coord, GameState, Move, Player, PlayerId, PlayerSlot, TableConfig, TurnQueue,
};
use crate::rules::{GameKind, RuleViolation, Rules, RulesEngine};

/// Where the table is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableStatus {
    #[default]
    Unopened,
    Open,
    Closed,
}

impl std::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableStatus::Unopened => write!(f, "unopened"),
            TableStatus::Open => write!(f, "open"),
            TableStatus::Closed => write!(f, "closed"),
        }
    }
}

/// A seated player as the table sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: PlayerId,
    pub slot: PlayerSlot,
    pub managed_locally: bool,
}

/// Why a move request was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRejection {
    #[error("the table is {status}")]
    GameNotOpen { status: TableStatus },

    #[error("{at} is off the board")]
    OutOfBounds { at: Coord },

    #[error("player is not seated at this table")]
    UnknownPlayer,

    #[error("it is not this player's turn")]
    NotYourTurn,

    #[error("a placement must start and end on the same cell, got {from} -> {to}")]
    SplitPlacement { from: Coord, to: Coord },

    #[error(transparent)]
    Rules(#[from] RuleViolation),
}

/// Recoverable table failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("invalid move by {player}: {reason}")]
    InvalidMove {
        player: PlayerId,
        reason: MoveRejection,
    },

    #[error("{missing} more player(s) needed to start")]
    MissingPlayers { missing: usize },

    #[error("the table is full ({max} players)")]
    TableFull { max: usize },
}

/// Convenience Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// A playable session.
#[derive(Debug)]
pub struct TableGame {
    rules: Rules,
    config: TableConfig,
    state: GameState,
    seats: Vec<Seat>,
    turns: TurnQueue<PlayerId>,
    status: TableStatus,
    move_count: u32,
    winner: PlayerSlot,
    events: EventBus,
}

impl TableGame {
    /// A table with `rules` installed and a board of `config`'s size.
    pub fn new(rules: impl Into<Rules>, config: TableConfig) -> Self {
        let rules = rules.into();
        info!(game = rules.game_name(), rows = config.rows, cols = config.cols, "table created");
        Self {
            rules,
            config,
            state: GameState::with_size(config.size(), Cell::EMPTY),
            seats: Vec::new(),
            turns: TurnQueue::new(),
            status: TableStatus::Unopened,
            move_count: 0,
            winner: PlayerSlot::Unknown,
            events: EventBus::new(),
        }
    }

    /// A table for a catalog game on its default board.
    pub fn for_kind(kind: GameKind) -> Self {
        Self::new(kind.rules(), kind.default_config())
    }

    /// Swap the rules engine and return to `Unopened`.
    ///
    /// Seats are kept. The board is cleared to the configured size.
    pub fn install_rules(&mut self, rules: impl Into<Rules>) {
        let was_open = self.is_open();
        self.rules = rules.into();
        self.state = GameState::with_size(self.config.size(), Cell::EMPTY);
        self.status = TableStatus::Unopened;
        self.move_count = 0;
        self.winner = PlayerSlot::Unknown;
        self.turns.rewind();
        info!(game = self.rules.game_name(), "rules installed");
        if was_open {
            self.events.publish(TableEvent::GameOpenChanged { open: false });
        }
    }

    /// Change the board size. Only allowed while the table is not open.
    pub fn set_config(&mut self, config: TableConfig) -> bool {
        if self.is_open() {
            return false;
        }
        self.config = config;
        self.state = GameState::with_size(config.size(), Cell::EMPTY);
        true
    }

    /// Seat `player` in the next free slot.
    ///
    /// A full table refuses even players already seated. Re-adding a
    /// seated player is otherwise a no-op returning their slot.
    pub fn add_player(&mut self, player: &mut Player) -> Result<PlayerSlot> {
        let max = self.rules.max_players();
        if self.seats.len() >= max {
            debug!(player = %player.id, max, "table full");
            self.events.publish(TableEvent::MaxPlayersReached { max });
            return Err(TableError::TableFull { max });
        }

        if let Some(seat) = self.seat(&player.id) {
            player.position = seat.slot;
            return Ok(seat.slot);
        }

        let slot = PlayerSlot::from_index(self.seats.len());
        player.position = slot;
        self.seats.push(Seat {
            id: player.id.clone(),
            slot,
            managed_locally: false,
        });
        self.turns.append(player.id.clone());
        info!(player = %player.id, %slot, "player seated");
        Ok(slot)
    }

    /// Seat `player` and mark them as driven from this process.
    pub fn manage_player(&mut self, player: &mut Player) -> Result<PlayerSlot> {
        let slot = self.add_player(player)?;
        if let Some(seat) = self.seats.iter_mut().find(|s| s.id == player.id) {
            seat.managed_locally = true;
        }
        player.managed_locally = true;
        Ok(slot)
    }

    /// Open the table, or restart a closed one.
    #[instrument(skip(self), fields(game = self.rules.game_name()))]
    pub fn start_game(&mut self) -> Result<()> {
        let needed = self.rules.min_players();
        if self.seats.len() < needed {
            let missing = needed - self.seats.len();
            debug!(missing, "not enough players");
            self.events.publish(TableEvent::MissingPlayers { missing });
            return Err(TableError::MissingPlayers { missing });
        }

        self.state = self.rules.init_state(self.config.size());
        self.move_count = 0;
        self.winner = PlayerSlot::Unknown;
        self.turns.rewind();
        self.status = TableStatus::Open;
        info!(players = self.seats.len(), "game opened");
        self.events.publish(TableEvent::GameOpenChanged { open: true });
        Ok(())
    }

    /// Ask to move the piece at `from` onto `to` on behalf of `player`.
    ///
    /// Placement games pass the same coordinate twice.
    #[instrument(skip(self), fields(game = self.rules.game_name()))]
    pub fn play_move(&mut self, player: &PlayerId, from: Coord, to: Coord) -> Result<()> {
        match self.try_move(player, Move::new(from, to)) {
            Ok(slot) => {
                self.commit(player, slot, from, to);
                Ok(())
            }
            Err(reason) => {
                debug!(%reason, "move rejected");
                self.events.publish(TableEvent::InvalidMove {
                    player: player.clone(),
                    reason: reason.clone(),
                });
                Err(TableError::InvalidMove {
                    player: player.clone(),
                    reason,
                })
            }
        }
    }

    /// Validate a request and stash the accepted candidate in `self.state`.
    fn try_move(&mut self, player: &PlayerId, mv: Move) -> std::result::Result<PlayerSlot, MoveRejection> {
        if !self.is_open() {
            return Err(MoveRejection::GameNotOpen {
                status: self.status,
            });
        }
        for at in [mv.from, mv.to] {
            if !self.state.is_valid(at) {
                return Err(MoveRejection::OutOfBounds { at });
            }
        }
        if !self.rules.is_drag_enabled() && mv.from != mv.to {
            return Err(MoveRejection::SplitPlacement {
                from: mv.from,
                to: mv.to,
            });
        }
        let slot = self
            .seat(player)
            .map(|seat| seat.slot)
            .ok_or(MoveRejection::UnknownPlayer)?;
        if self.current_player() != Some(player) {
            return Err(MoveRejection::NotYourTurn);
        }

        let mut candidate = self
            .state
            .with_move(mv, slot)
            .map_err(|_| MoveRejection::OutOfBounds { at: mv.to })?;
        self.rules.validate_move(&self.state, &mut candidate, slot)?;
        self.state = candidate;
        Ok(slot)
    }

    fn commit(&mut self, player: &PlayerId, slot: PlayerSlot, from: Coord, to: Coord) {
        self.move_count += 1;
        let _ = self.turns.next();
        debug!(%slot, %from, %to, moves = self.move_count, "move committed");
        self.events.publish(TableEvent::PlayerMoved {
            player: player.clone(),
            slot,
            from,
            to,
        });

        self.winner = self.rules.check_win(&self.state);
        if self.rules.is_game_over(&self.state) {
            self.status = TableStatus::Closed;
            info!(winner = %self.winner, moves = self.move_count, "game over");
            self.events.publish(TableEvent::GameOpenChanged { open: false });
            self.events.publish(TableEvent::GameOver {
                winner: self.winner,
            });
        }
    }

    // === Accessors ===

    /// The installed rules engine.
    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    #[must_use]
    pub fn config(&self) -> TableConfig {
        self.config
    }

    /// The committed board.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> TableStatus {
        self.status
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status == TableStatus::Open
    }

    /// Moves committed since the game was (re)started.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// The winner as of the last committed move.
    #[must_use]
    pub fn winner(&self) -> PlayerSlot {
        self.winner
    }

    /// Whose turn it is, `None` while nobody is seated.
    #[must_use]
    pub fn current_player(&self) -> Option<&PlayerId> {
        self.turns.current().ok()
    }

    /// The seat of the player on turn.
    #[must_use]
    pub fn current_seat(&self) -> Option<&Seat> {
        self.current_player().and_then(|id| self.seat(id))
    }

    /// Seats in join order.
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    #[must_use]
    pub fn seat(&self, id: &PlayerId) -> Option<&Seat> {
        self.seats.iter().find(|s| &s.id == id)
    }

    #[must_use]
    pub fn turn_order(&self) -> &TurnQueue<PlayerId> {
        &self.turns
    }

    #[must_use]
    pub fn is_managed_locally(&self, id: &PlayerId) -> bool {
        self.seat(id).is_some_and(|s| s.managed_locally)
    }

    /// Seats flagged by [`manage_player`](Self::manage_player).
    pub fn managed_players(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter().filter(|s| s.managed_locally)
    }

    // === Events ===

    /// Register a synchronous listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&TableEvent) + 'static) -> SubscriberId {
        self.events.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.events.unsubscribe(id)
    }

    /// The event bus, for draining the outbox.
    pub fn events(&mut self) -> &mut EventBus {
        &mut self.events
    }
}

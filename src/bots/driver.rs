//! Deferred bot invocation.
//!
//! A [`BotDriver`] owns a table and the bots sitting at it. Bots never run
//! inside a table call: the driver waits for the call to return, drains the
//! outbox, and only then, if an event may have handed the turn to a bot,
//! asks that bot for a move and submits it. One move is in flight at a time
//! and every bot sees a fully committed state.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::strategy::{BotContext, BotStrategy};
use crate::core::{Player, PlayerId, PlayerSlot, SessionConfig};
use crate::table::{self, TableEvent, TableGame};

/// What one `run_until_idle` call did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DriveReport {
    /// Bot moves submitted (accepted or not).
    pub bot_moves: usize,
    /// Every event drained from the table, oldest first.
    pub events: Vec<TableEvent>,
    /// True if the run stopped because `max_bot_moves` was hit.
    pub limit_reached: bool,
}

/// A table plus the strategies playing its bot seats.
pub struct BotDriver {
    table: TableGame,
    bots: FxHashMap<PlayerId, Box<dyn BotStrategy>>,
    config: SessionConfig,
}

impl BotDriver {
    #[must_use]
    pub fn new(table: TableGame, config: SessionConfig) -> Self {
        Self {
            table,
            bots: FxHashMap::default(),
            config,
        }
    }

    /// Seat `player` and let `bot` play for them.
    pub fn seat_bot(
        &mut self,
        player: &mut Player,
        bot: impl BotStrategy + 'static,
    ) -> table::game::Result<PlayerSlot> {
        let slot = self.table.add_player(player)?;
        self.bots.insert(player.id.clone(), Box::new(bot));
        Ok(slot)
    }

    /// True if a bot plays for `id`.
    #[must_use]
    pub fn is_bot(&self, id: &PlayerId) -> bool {
        self.bots.contains_key(id)
    }

    #[must_use]
    pub fn table(&self) -> &TableGame {
        &self.table
    }

    /// Direct access for human input and lifecycle calls.
    ///
    /// Follow up with [`run_until_idle`](Self::run_until_idle) to let bots
    /// react.
    pub fn table_mut(&mut self) -> &mut TableGame {
        &mut self.table
    }

    #[must_use]
    pub fn into_table(self) -> TableGame {
        self.table
    }

    /// React to queued events until no bot has anything left to do.
    ///
    /// Stops when the table is closed, a human is on turn, the bot on turn
    /// has no move, or `max_bot_moves` is reached.
    pub fn run_until_idle(&mut self) -> DriveReport {
        let mut report = DriveReport::default();

        loop {
            let drained: Vec<TableEvent> = self.table.events().drain().collect();
            let wake = drained.iter().any(TableEvent::changes_turn);
            report.events.extend(drained);

            if !wake || !self.table.is_open() {
                break;
            }
            let Some(current) = self.table.current_player().cloned() else {
                break;
            };
            let Some(slot) = self.table.seat(&current).map(|seat| seat.slot) else {
                break;
            };
            let Some(bot) = self.bots.get_mut(&current) else {
                break;
            };
            if report.bot_moves >= self.config.max_bot_moves {
                warn!(limit = self.config.max_bot_moves, "bot move limit reached");
                report.limit_reached = true;
                break;
            }

            let ctx = BotContext::new(self.table.rules(), self.table.state(), slot);
            let Some(mv) = bot.play(&ctx) else {
                debug!(player = %current, "bot has no move");
                break;
            };

            report.bot_moves += 1;
            if let Err(err) = self.table.play_move(&current, mv.from, mv.to) {
                warn!(%err, "bot move refused");
            }
        }

        report
    }
}

impl std::fmt::Debug for BotDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut bots: Vec<&PlayerId> = self.bots.keys().collect();
        bots.sort();
        f.debug_struct("BotDriver")
            .field("table", &self.table)
            .field("bots", &bots)
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bots::RandomBot;
    use crate::core::{BotConfig, Coord, Move};
    use crate::rules::GameKind;
    use crate::table::TableStatus;

    /// A bot that never finds a move.
    struct Stuck;

    impl BotStrategy for Stuck {
        fn play(&mut self, _ctx: &BotContext<'_>) -> Option<Move> {
            None
        }
    }

    #[test]
    fn test_idle_without_events() {
        let mut driver = BotDriver::new(TableGame::for_kind(GameKind::Go), SessionConfig::default());
        let report = driver.run_until_idle();
        assert_eq!(report, DriveReport::default());
    }

    #[test]
    fn test_bot_vs_bot_tictactoe_finishes() {
        let mut driver = BotDriver::new(
            TableGame::for_kind(GameKind::TicTacToe),
            SessionConfig::default(),
        );
        let mut a = Player::new("a", "A");
        let mut b = Player::new("b", "B");
        for player in [&mut a, &mut b] {
            let bot = RandomBot::for_player(BotConfig::new(1), &player.id);
            driver.seat_bot(player, bot).unwrap();
        }

        driver.table_mut().start_game().unwrap();
        let report = driver.run_until_idle();

        assert_eq!(driver.table().status(), TableStatus::Closed);
        assert_eq!(report.bot_moves as u32, driver.table().move_count());
        assert!(matches!(
            report.events.last(),
            Some(TableEvent::GameOver { .. })
        ));
        assert!(!report.limit_reached);
    }

    #[test]
    fn test_bot_waits_for_human() {
        let mut driver = BotDriver::new(TableGame::for_kind(GameKind::Go), SessionConfig::default());
        let mut human = Player::new("human", "Human");
        let mut bot = Player::new("bot", "Bot");
        driver.table_mut().manage_player(&mut human).unwrap();
        driver.seat_bot(&mut bot, RandomBot::default()).unwrap();

        driver.table_mut().start_game().unwrap();
        let report = driver.run_until_idle();
        assert_eq!(report.bot_moves, 0);
        assert_eq!(driver.table().current_player(), Some(&human.id));

        let at = Coord::new(4, 4);
        driver.table_mut().play_move(&human.id, at, at).unwrap();
        let report = driver.run_until_idle();
        assert_eq!(report.bot_moves, 1);
        assert_eq!(driver.table().move_count(), 2);
        assert_eq!(driver.table().current_player(), Some(&human.id));
    }

    #[test]
    fn test_stuck_bot_leaves_session_idle() {
        let mut driver = BotDriver::new(TableGame::for_kind(GameKind::Go), SessionConfig::default());
        let mut a = Player::new("a", "A");
        let mut b = Player::new("b", "B");
        driver.seat_bot(&mut a, Stuck).unwrap();
        driver.seat_bot(&mut b, Stuck).unwrap();

        driver.table_mut().start_game().unwrap();
        let report = driver.run_until_idle();
        assert_eq!(report.bot_moves, 0);
        assert!(driver.table().is_open());
    }

    #[test]
    fn test_move_limit() {
        let mut driver = BotDriver::new(
            TableGame::for_kind(GameKind::Go),
            SessionConfig::default().with_max_bot_moves(3),
        );
        let mut a = Player::new("a", "A");
        let mut b = Player::new("b", "B");
        driver.seat_bot(&mut a, RandomBot::new(BotConfig::new(1))).unwrap();
        driver.seat_bot(&mut b, RandomBot::new(BotConfig::new(2))).unwrap();

        driver.table_mut().start_game().unwrap();
        let report = driver.run_until_idle();
        assert_eq!(report.bot_moves, 3);
        assert!(report.limit_reached);
        assert_eq!(driver.table().move_count(), 3);
        assert!(driver.is_bot(&a.id));
    }
}

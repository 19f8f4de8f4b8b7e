//! Bots playing through a driver: full games, mixed tables, determinism.

use gamecenter_engine::bots::{BotContext, BotDriver, RandomBot};
use gamecenter_engine::core::{
    BotConfig, Coord, Move, Player, PlayerSlot, ProbeOrder, SessionConfig, TableConfig,
};
use gamecenter_engine::rules::GameKind;
use gamecenter_engine::table::{TableEvent, TableGame, TableStatus};

fn bot_match(kind: GameKind, config: TableConfig, seed: u64, probe: ProbeOrder) -> BotDriver {
    let mut driver = BotDriver::new(
        TableGame::new(kind, config),
        SessionConfig::default().with_max_bot_moves(500),
    );
    let bot_config = BotConfig::new(seed).with_probe_order(probe);
    for name in ["north", "south"] {
        let mut player = Player::new(name, name);
        let bot = RandomBot::for_player(bot_config, &player.id);
        driver.seat_bot(&mut player, bot).unwrap();
    }
    driver.table_mut().start_game().unwrap();
    driver
}

#[test]
fn test_random_tictactoe_games_always_finish() {
    for seed in 0..20 {
        let mut driver = bot_match(GameKind::TicTacToe, TableConfig::new(3, 3), seed, ProbeOrder::Shuffled);
        let report = driver.run_until_idle();

        let table = driver.table();
        assert_eq!(table.status(), TableStatus::Closed, "seed {seed}");
        assert!(table.move_count() <= 9);
        assert!(!report.limit_reached);
        assert!(report
            .events
            .iter()
            .all(|event| !matches!(event, TableEvent::InvalidMove { .. })));
    }
}

#[test]
fn test_checkers_bots_only_make_legal_moves() {
    for probe in [ProbeOrder::Shuffled, ProbeOrder::Fixed] {
        let mut driver = BotDriver::new(
            TableGame::for_kind(GameKind::Checkers),
            SessionConfig::default().with_max_bot_moves(200),
        );
        for name in ["red", "black"] {
            let mut player = Player::new(name, name);
            let bot = RandomBot::for_player(BotConfig::new(9).with_probe_order(probe), &player.id);
            driver.seat_bot(&mut player, bot).unwrap();
        }
        driver.table_mut().start_game().unwrap();
        let report = driver.run_until_idle();

        assert!(report.bot_moves > 0);
        assert_eq!(report.bot_moves as u32, driver.table().move_count());
        assert!(report
            .events
            .iter()
            .all(|event| !matches!(event, TableEvent::InvalidMove { .. })));

        let state = driver.table().state();
        assert!(state.count_owned(PlayerSlot::Player1) <= 12);
        assert!(state.count_owned(PlayerSlot::Player2) <= 12);
    }
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let mut driver = bot_match(GameKind::Go, TableConfig::new(5, 5), seed, ProbeOrder::Shuffled);
        driver.run_until_idle();
        driver.into_table().state().clone()
    };
    assert_eq!(play(3), play(3));
}

#[test]
fn test_bot_answers_every_human_move() {
    let mut driver = BotDriver::new(
        TableGame::new(GameKind::Go, TableConfig::new(5, 5)),
        SessionConfig::default(),
    );
    let mut human = Player::new("human", "Human");
    let mut bot = Player::new("bot", "Bot");
    driver.table_mut().manage_player(&mut human).unwrap();
    driver.seat_bot(&mut bot, RandomBot::new(BotConfig::new(4))).unwrap();
    driver.table_mut().start_game().unwrap();
    driver.run_until_idle();

    for _ in 0..3 {
        let table = driver.table();
        let ctx = BotContext::new(table.rules(), table.state(), PlayerSlot::Player1);
        let at = table
            .state()
            .empty_cells()
            .find(|&at| ctx.accepts(Move::place(at)))
            .unwrap();

        let moves_before = table.move_count();
        driver.table_mut().play_move(&human.id, at, at).unwrap();
        let report = driver.run_until_idle();

        assert_eq!(report.bot_moves, 1);
        assert_eq!(driver.table().move_count(), moves_before + 2);
        assert_eq!(driver.table().current_player(), Some(&human.id));
    }
    assert!(driver.table().is_managed_locally(&human.id));
    assert!(!driver.table().is_managed_locally(&bot.id));
}

#[test]
fn test_rejected_human_move_does_not_wake_bot() {
    let mut driver = BotDriver::new(TableGame::for_kind(GameKind::TicTacToe), SessionConfig::default());
    let mut human = Player::new("human", "Human");
    let mut bot = Player::new("bot", "Bot");
    driver.table_mut().manage_player(&mut human).unwrap();
    driver.seat_bot(&mut bot, RandomBot::default()).unwrap();
    driver.table_mut().start_game().unwrap();
    driver.run_until_idle();

    let off = Coord::new(7, 7);
    assert!(driver.table_mut().play_move(&human.id, off, off).is_err());
    let report = driver.run_until_idle();

    assert_eq!(report.bot_moves, 0);
    assert_eq!(report.events.len(), 1);
    assert_eq!(driver.table().move_count(), 0);
}

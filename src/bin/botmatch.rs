//! Bot-vs-bot match runner.
//!
//! Plays a series of games between two random bots and prints each final
//! board plus a win tally. Set `RUST_LOG=gamecenter_engine=debug` to watch
//! rejected probes and lifecycle events.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gamecenter_engine::{
    BotConfig, BotDriver, GameKind, GameRng, Player, PlayerSlot, ProbeOrder, RandomBot,
    SessionConfig, TableGame,
};

/// Run random bots against each other.
#[derive(Parser, Debug)]
#[command(name = "botmatch")]
#[command(about = "Play random bots against each other on a gamecenter table")]
struct Cli {
    /// Game to play ("go", "tictactoe", "tic tac toe", "checkers").
    #[arg(default_value = "tictactoe")]
    game: String,

    /// Number of games to play.
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Base seed; each game and each bot derive their own stream from it.
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Board rows, overriding the game's default.
    #[arg(long)]
    rows: Option<usize>,

    /// Board columns, overriding the game's default.
    #[arg(long)]
    cols: Option<usize>,

    /// How drag bots walk candidate offsets.
    #[arg(long, value_enum, default_value = "shuffled")]
    probe: ProbeArg,

    /// Bot moves allowed per game before it is abandoned.
    #[arg(long, default_value = "10000")]
    max_moves: usize,

    /// Only print the tally.
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ProbeArg {
    Shuffled,
    Fixed,
}

impl From<ProbeArg> for ProbeOrder {
    fn from(arg: ProbeArg) -> Self {
        match arg {
            ProbeArg::Shuffled => ProbeOrder::Shuffled,
            ProbeArg::Fixed => ProbeOrder::Fixed,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let Some(kind) = GameKind::from_name(&cli.game) else {
        let known: Vec<&str> = GameKind::ALL.iter().map(|kind| kind.name()).collect();
        eprintln!("unknown game '{}', expected one of: {}", cli.game, known.join(", "));
        return ExitCode::FAILURE;
    };

    let default = kind.default_config();
    let config = default.with_size(
        cli.rows.unwrap_or(default.rows),
        cli.cols.unwrap_or(default.cols),
    );
    let session = SessionConfig::default().with_max_bot_moves(cli.max_moves);

    let mut rounds = GameRng::new(cli.seed);
    let mut players = [Player::new("bot-1", "Bot 1"), Player::new("bot-2", "Bot 2")];
    let mut draws = 0u32;
    let mut unfinished = 0u32;

    info!(game = %kind, size = %config.size(), games = cli.games, "starting match");

    for round in 0..cli.games {
        let mut driver = BotDriver::new(TableGame::new(kind, config), session);
        let bot_config =
            BotConfig::new(rounds.fork().seed()).with_probe_order(cli.probe.into());

        for player in players.iter_mut() {
            let bot = RandomBot::for_player(bot_config, &player.id);
            if let Err(err) = driver.seat_bot(player, bot) {
                eprintln!("could not seat {}: {err}", player.display_name);
                return ExitCode::FAILURE;
            }
        }
        if let Err(err) = driver.table_mut().start_game() {
            eprintln!("could not start game: {err}");
            return ExitCode::FAILURE;
        }

        let report = driver.run_until_idle();
        let table = driver.table();

        if table.is_open() {
            unfinished += 1;
            warn!(
                round,
                moves = table.move_count(),
                limit_reached = report.limit_reached,
                "game did not finish"
            );
        } else {
            let winner = table.winner();
            if winner == PlayerSlot::Unknown {
                draws += 1;
            }
            for player in players.iter_mut() {
                player.record_result(winner);
            }
        }

        if !cli.quiet {
            println!("game {} ({} moves, winner: {})", round + 1, table.move_count(), table.winner());
            println!("{}", table.state());
        }
    }

    println!("{kind} on {}:", config.size());
    for player in &players {
        println!(
            "  {:<8} {:>4} won / {:>4} played ({:.1}%)",
            player.display_name,
            player.games_won,
            player.games_played,
            player.win_rate() * 100.0
        );
    }
    println!("  draws    {draws:>4}");
    if unfinished > 0 {
        println!("  unfinished {unfinished}");
    }

    ExitCode::SUCCESS
}

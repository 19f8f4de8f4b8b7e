//! Uniform-random bot.
//!
//! ## Placement games
//!
//! Draws empty cells uniformly without replacement and plays the first one
//! the rules accept.
//!
//! ## Drag games
//!
//! Shuffles its own pieces, then for each piece probes the eight diagonal
//! destinations (four jumps, four steps) and plays the first accepted
//! relocation. The offsets are shuffled per piece or walked in a fixed
//! jumps-first order, per [`ProbeOrder`].

use tracing::trace;

use super::strategy::{BotContext, BotStrategy};
use crate::core::{BotConfig, Coord, GameRng, Move, PlayerId, ProbeOrder};

/// Relative destinations probed for a drag move, jumps first.
pub const DRAG_OFFSETS: [(i32, i32); 8] = [
    (-2, -2),
    (-2, 2),
    (2, -2),
    (2, 2),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Plays a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomBot {
    rng: GameRng,
    probe_order: ProbeOrder,
}

impl RandomBot {
    /// A bot seeded from `config`.
    #[must_use]
    pub fn new(config: BotConfig) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            probe_order: config.probe_order,
        }
    }

    /// A bot with its own stream derived from `config.seed` and `player`.
    ///
    /// Two seats sharing one config still play independently.
    #[must_use]
    pub fn for_player(config: BotConfig, player: &PlayerId) -> Self {
        Self {
            rng: GameRng::new(config.seed).for_context(player.as_str()),
            probe_order: config.probe_order,
        }
    }

    /// A bot drawing from an existing generator.
    #[must_use]
    pub fn with_rng(rng: GameRng, probe_order: ProbeOrder) -> Self {
        Self { rng, probe_order }
    }

    fn play_placement(&mut self, ctx: &BotContext<'_>) -> Option<Move> {
        let mut candidates: Vec<Coord> = ctx.state.empty_cells().collect();
        while !candidates.is_empty() {
            let pick = self.rng.gen_range_usize(0..candidates.len());
            let mv = Move::place(candidates.swap_remove(pick));
            if ctx.accepts(mv) {
                return Some(mv);
            }
            trace!(%mv, "placement refused, resampling");
        }
        None
    }

    fn play_drag(&mut self, ctx: &BotContext<'_>) -> Option<Move> {
        let mut pieces: Vec<Coord> = ctx.state.cells_owned_by(ctx.slot).collect();
        self.rng.shuffle(&mut pieces);

        for from in pieces {
            let mut offsets = DRAG_OFFSETS;
            if self.probe_order == ProbeOrder::Shuffled {
                self.rng.shuffle(&mut offsets);
            }
            for (d_row, d_col) in offsets {
                let to = from.offset(d_row, d_col);
                if !ctx.state.is_valid(to) {
                    continue;
                }
                let mv = Move::new(from, to);
                if ctx.accepts(mv) {
                    return Some(mv);
                }
                trace!(%mv, "probe refused");
            }
        }
        None
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new(BotConfig::default())
    }
}

impl BotStrategy for RandomBot {
    fn play(&mut self, ctx: &BotContext<'_>) -> Option<Move> {
        if ctx.rules.is_drag_enabled() {
            self.play_drag(ctx)
        } else {
            self.play_placement(ctx)
        }
    }
}

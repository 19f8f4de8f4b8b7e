//! Deterministic random number generation for bots.
//!
//! Every source of randomness in the engine (bot cell picks, probe order
//! shuffles) draws from a [`GameRng`]. Seeding one root generator and
//! handing each bot a fork makes a whole bot-vs-bot match replayable.
//!
//! ## Example
//!
//! ```
//! use gamecenter_engine::core::GameRng;
//!
//! let mut root = GameRng::new(42);
//! let mut first = root.fork();
//! let mut second = root.fork();
//!
//! // Sibling forks draw from different streams...
//! let a: Vec<_> = (0..8).map(|_| first.gen_range_usize(0..100)).collect();
//! let b: Vec<_> = (0..8).map(|_| second.gen_range_usize(0..100)).collect();
//! assert_ne!(a, b);
//!
//! // ...but the same seed always forks the same way.
//! let mut again = GameRng::new(42).fork();
//! let c: Vec<_> = (0..8).map(|_| again.gen_range_usize(0..100)).collect();
//! assert_eq!(a, c);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Seeded ChaCha8 generator with deterministic forking.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Split off an independent generator.
    ///
    /// The n-th fork of a given seed is always the same stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// A stream keyed by `context`, independent of how far `self` has advanced.
    ///
    /// Used to give each seated bot its own stream derived from its player id.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Uniform integer in `range`.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

//! Deterministic random target generation.
//!
//! Trainer targets come from a seeded ChaCha8 stream so that a session is
//! reproducible: the same seed always produces the same target sequence.
//! State capture is O(1) via the ChaCha word position.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::board::Coord;

/// Deterministic RNG for trainer target selection.
#[derive(Clone, Debug)]
pub struct TrainerRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl TrainerRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Draw a uniformly random coordinate on a `size`×`size` board.
    pub fn gen_coord(&mut self, size: usize) -> Coord {
        Coord::new(
            self.inner.gen_range(0..size),
            self.inner.gen_range(0..size),
        )
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> TrainerRngState {
        TrainerRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &TrainerRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

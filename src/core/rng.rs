//! Random sources for shuffling and drawing.
//!
//! All randomness in a game flows through [`RandomSource`]: the initial
//! shuffle, the per-player color split of a four-player deal, and the
//! random pick when drawing a card of a chosen color. Games are generic
//! over the source so tests can inject a scripted one.
//!
//! ## GameRng
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Backed by `rand`**: shuffles and picks go through `SliceRandom`
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use davinci_code::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.gen_index(24), b.gen_index(24));
//! ```

use rand::seq::{IteratorRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of randomness for a game.
pub trait RandomSource {
    /// Uniform index in `0..bound`. Callers guarantee `bound > 0`.
    fn gen_index(&mut self, bound: usize) -> usize;

    /// `true` with the given probability.
    fn gen_bool(&mut self, probability: f64) -> bool;

    /// Uniform in-place permutation (Fisher-Yates).
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index(i + 1);
            slice.swap(i, j);
        }
    }

    /// Uniform index into a collection of `len` items, `None` when empty.
    fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.gen_index(len))
    }
}

impl<R: RandomSource> RandomSource for &mut R {
    fn gen_index(&mut self, bound: usize) -> usize {
        (**self).gen_index(bound)
    }

    fn gen_bool(&mut self, probability: f64) -> bool {
        (**self).gen_bool(probability)
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        (**self).shuffle(slice);
    }

    fn choose_index(&mut self, len: usize) -> Option<usize> {
        (**self).choose_index(len)
    }
}

/// Deterministic seedable RNG.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn gen_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        SliceRandom::shuffle(slice, &mut self.inner);
    }

    fn choose_index(&mut self, len: usize) -> Option<usize> {
        IteratorRandom::choose(0..len, &mut self.inner)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

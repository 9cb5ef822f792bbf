//! Deterministic random number generation for dice draws and stop rolls.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Create an independent stream for every turn
//! - **Serializable**: O(1) state capture and restore
//! - **Context streams**: Separate sequences for dice and risk rolls
//!
//! ## Turn Usage
//!
//! ```
//! use zonk_ai::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork a stream for one turn, then split it by purpose
//! let turn_rng = rng.fork();
//! let mut dice = turn_rng.for_context("dice");
//! let mut risk = turn_rng.for_context("risk");
//!
//! let face = dice.roll_face();
//! assert!((1..=6).contains(&face));
//! let _stop = risk.gen_bool(0.25);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::dice::Face;

/// Deterministic RNG used for every random decision an opponent makes.
///
/// Uses ChaCha8 for speed while keeping high quality randomness.
/// No global generator exists: every opponent and every turn owns one.
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

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
            fork_counter: 0,
        }
    }

    /// Roll a single six-sided die.
    pub fn roll_face(&mut self) -> Face {
        self.inner.gen_range(1..=6)
    }

    /// Generate a random integer in the inclusive range.
    pub fn gen_range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }
        self.inner.gen_range(low..=high)
    }

    /// Bernoulli draw with the given probability of `true`.
    ///
    /// The probability is clamped to `[0, 1]`; NaN counts as zero.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        let p = if probability.is_nan() { 0.0 } else { probability.clamp(0.0, 1.0) };
        self.inner.gen_bool(p)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
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
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state for checkpointing an opponent between sessions.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_face(), rng2.roll_face());
        }
    }

    #[test]
    fn test_faces_in_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let face = rng.roll_face();
            assert!((1..=6).contains(&face), "face {face} out of range");
        }
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..20).map(|_| rng.roll_face()).collect();
        let seq2: Vec<_> = (0..20).map(|_| forked.roll_face()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed, forked2.seed);
    }

    #[test]
    fn test_context_streams_differ() {
        let rng = GameRng::new(42);
        let mut dice = rng.for_context("dice");
        let mut risk = rng.for_context("risk");

        let seq1: Vec<_> = (0..20).map(|_| dice.roll_face()).collect();
        let seq2: Vec<_> = (0..20).map(|_| risk.roll_face()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_gen_bool_extremes() {
        let mut rng = GameRng::new(3);
        for _ in 0..50 {
            assert!(!rng.gen_bool(0.0));
            assert!(rng.gen_bool(1.0));
            assert!(!rng.gen_bool(-0.5));
            assert!(rng.gen_bool(1.5));
            assert!(!rng.gen_bool(f64::NAN));
        }
    }

    #[test]
    fn test_gen_range_inclusive_degenerate() {
        let mut rng = GameRng::new(9);
        assert_eq!(rng.gen_range_inclusive(500, 500), 500);
        assert_eq!(rng.gen_range_inclusive(700, 300), 700);
        let v = rng.gen_range_inclusive(300, 500);
        assert!((300..=500).contains(&v));
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.roll_face();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.roll_face()).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.roll_face()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
            fork_counter: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}

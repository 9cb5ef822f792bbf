//! Core building blocks: RNG, dice, configuration, errors.
//!
//! Nothing here knows about strategy. The `ai` module composes these.

pub mod rng;
pub mod dice;
pub mod config;
pub mod error;

pub use rng::{GameRng, GameRngState};
pub use dice::{face_counts, Dice, DiceSource, Face, ScriptedDice, FACES};
pub use config::{AiConfig, CapPolicy};
pub use error::{ConfigError, Result};

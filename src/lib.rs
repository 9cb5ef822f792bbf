//! # zonk-ai
//!
//! Decision core for a computer opponent in Zonk-style dice games.
//!
//! ## Design Principles
//!
//! 1. **Injected Randomness**: Every random draw comes from a `GameRng` or
//!    `DiceSource` the caller passes in. No global generator.
//!
//! 2. **External Rules**: Scoring is a `PatternValidator` supplied by the
//!    host, shared with the human player. The core only ranks and picks.
//!
//! 3. **Events, Not Callbacks**: A turn returns an ordered event list and a
//!    final score. Cumulative scores are never mutated.
//!
//! ## Architecture
//!
//! - **Two Modes**: Aggressive when trailing past a shrinking buffer,
//!   Passive when leading past it, previous mode in between.
//!
//! - **Dual Stop Model**: Independent momentum and cap chances, each drawn
//!   separately; either one ends the turn once the cap is reached.
//!
//! ## Modules
//!
//! - `core`: RNG, dice, configuration, errors
//! - `patterns`: Pattern kinds, tiers, validator boundary, threshold search
//! - `rules`: Standard Zonk scoring table
//! - `ai`: Mode analysis, risk, decisions, strategy, turn executor
//! - `sim`: Batch statistics and AI-vs-AI matches

pub mod core;
pub mod patterns;
pub mod rules;
pub mod ai;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    AiConfig, CapPolicy, ConfigError,
    Dice, DiceSource, Face, ScriptedDice,
    GameRng, GameRngState,
};

pub use crate::patterns::{PatternKind, PatternMatch, PatternValidator, Tier};

pub use crate::rules::StandardRules;

pub use crate::ai::{
    AiOpponent, AiTurnState, BehaviorMode, StopChances, StopReason,
    TurnContext, TurnEvent, TurnExecutor, TurnOutcome, TurnResult, Verdict,
};

pub use crate::sim::{play_match, simulate_turns, MatchResult, SimulationStats};

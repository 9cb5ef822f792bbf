//! Adaptive opponent decision core.
//!
//! ## Overview
//!
//! - **Mode**: Aggressive or Passive from the score gap, with hysteresis
//! - **Strategy**: tiered pattern selection per mode and dice left
//! - **Risk**: independent momentum and cap stop chances
//! - **Decision**: ordered stop rules on top of the risk draws
//! - **Executor**: the turn state machine tying them together
//!
//! ## Usage
//!
//! ```rust
//! use zonk_ai::ai::{TurnContext, TurnExecutor};
//! use zonk_ai::core::{AiConfig, GameRng};
//! use zonk_ai::rules::StandardRules;
//!
//! let executor = TurnExecutor::new(AiConfig::default(), StandardRules).unwrap();
//! let mut dice = GameRng::new(1);
//! let mut risk = GameRng::new(2);
//!
//! let result = executor.run_turn(&TurnContext::new(0, 1500, 3), &mut dice, &mut risk);
//! println!("banked {} over {} iterations", result.final_score, result.iterations);
//! ```

pub mod mode;
pub mod risk;
pub mod decision;
pub mod strategy;
pub mod state;
pub mod events;
pub mod executor;
pub mod opponent;

pub use mode::{
    buffer_for_round, determine_mode, points_cap, select_mode, BehaviorMode, ModeDecision,
};
pub use risk::{
    cap_chance, clamp_probability, combine, compute_stop_chances, momentum_chance, roll, RiskRoll,
    StopChances,
};
pub use decision::{evaluate_rules, should_continue, zonk_risk, StopReason, Verdict};
pub use strategy::{select_pattern, Selection, SelectionRule};
pub use state::{AiTurnState, TurnContext, TurnPhase};
pub use events::{TurnEvent, TurnOutcome, TurnResult};
pub use executor::TurnExecutor;
pub use opponent::AiOpponent;

//! Behavior mode selection from the score differential.
//!
//! The opponent plays Aggressive while trailing by more than the buffer,
//! Passive while leading by more than it, and keeps its previous mode in
//! between. The buffer shrinks as rounds complete, so late in a game small
//! leads already flip the mode.

use serde::{Deserialize, Serialize};

use crate::core::{AiConfig, CapPolicy, GameRng};

/// Opponent behavior mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BehaviorMode {
    /// Trailing: higher cap, more tolerant of risk.
    Aggressive,
    /// Leading or even: lower cap, banks early.
    #[default]
    Passive,
}

impl std::fmt::Display for BehaviorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BehaviorMode::Aggressive => f.write_str("Aggressive"),
            BehaviorMode::Passive => f.write_str("Passive"),
        }
    }
}

/// Mode and cap chosen at the start of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeDecision {
    pub mode: BehaviorMode,
    /// Target turn score.
    pub cap: u32,
    /// Buffer that was in effect.
    pub buffer: u32,
}

/// Buffer after `completed_rounds`, never below the configured floor.
#[must_use]
pub fn buffer_for_round(completed_rounds: u32, config: &AiConfig) -> u32 {
    let steps = completed_rounds / config.rounds_per_reduction.max(1);
    let reduction = steps.saturating_mul(config.buffer_reduction_per_round);
    config
        .initial_buffer_cap
        .saturating_sub(reduction)
        .max(config.minimum_buffer_cap)
}

/// Mode for a score differential, with hysteresis inside the buffer.
#[must_use]
pub fn select_mode(
    own_score: u32,
    rival_score: u32,
    buffer: u32,
    previous: BehaviorMode,
) -> BehaviorMode {
    let diff = i64::from(own_score) - i64::from(rival_score);
    let buffer = i64::from(buffer);
    if diff < -buffer {
        BehaviorMode::Aggressive
    } else if diff > buffer {
        BehaviorMode::Passive
    } else {
        previous
    }
}

/// Cap for a mode under the configured policy.
///
/// `Midpoint` never touches the RNG.
pub fn points_cap(mode: BehaviorMode, config: &AiConfig, rng: &mut GameRng) -> u32 {
    let (min, max) = config.cap_range(mode);
    match config.cap_policy {
        CapPolicy::Midpoint => min + (max.saturating_sub(min)) / 2,
        CapPolicy::Uniform => rng.gen_range_inclusive(min, max),
    }
}

/// Pick the turn's mode and cap.
///
/// `previous` is the mode of the opponent's last turn; `None` on the first
/// turn, which defaults to Passive.
pub fn determine_mode(
    own_score: u32,
    rival_score: u32,
    completed_rounds: u32,
    previous: Option<BehaviorMode>,
    config: &AiConfig,
    rng: &mut GameRng,
) -> ModeDecision {
    let buffer = buffer_for_round(completed_rounds, config);
    let mode = select_mode(own_score, rival_score, buffer, previous.unwrap_or_default());
    let cap = points_cap(mode, config, rng);
    ModeDecision { mode, cap, buffer }
}

//! Stop probabilities.
//!
//! Two independent chances are computed every decision:
//!
//! - **Momentum**: loop protection. A mode base scaled by how many patterns
//!   were banked this turn, how few dice remain, and how many rerolls have
//!   already happened.
//! - **Cap**: zero below the turn's cap, then grows linearly with the points
//!   banked past it.
//!
//! Each chance gets its own Bernoulli draw; the turn stops if either fires.
//! The union `1 - (1 - m)(1 - c)` is reported alongside for observability.

use serde::{Deserialize, Serialize};

use crate::core::{AiConfig, GameRng};

use super::mode::BehaviorMode;

/// Clamp to `[0, 1]`. NaN becomes 0.
#[must_use]
pub fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Stop probabilities for one decision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StopChances {
    pub momentum: f64,
    pub cap: f64,
    pub combined: f64,
}

/// Outcome of the two independent draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRoll {
    pub momentum_fired: bool,
    pub cap_fired: bool,
}

impl RiskRoll {
    /// Did either draw fire?
    #[must_use]
    pub fn fired(self) -> bool {
        self.momentum_fired || self.cap_fired
    }
}

/// `max(1 - successes * reduction, floor)`.
#[must_use]
pub fn momentum_reduction_factor(success_count: u32, config: &AiConfig) -> f64 {
    let raw = 1.0 - f64::from(success_count) * config.momentum_reduction_per_success;
    raw.max(config.minimum_momentum_multiplier)
}

/// `1 + multiplier * (3 - remaining)^exponent` for two dice or fewer, else 1.
#[must_use]
pub fn dice_risk_factor(remaining_dice: usize, config: &AiConfig) -> f64 {
    if remaining_dice > 2 {
        return 1.0;
    }
    let missing = (3 - remaining_dice) as f64;
    1.0 + config.dice_risk_multiplier * missing.powf(config.dice_risk_exponent)
}

/// `1 + increase * max(iteration - 2, 0)`.
#[must_use]
pub fn iteration_pressure_factor(iteration: u32, config: &AiConfig) -> f64 {
    1.0 + config.iteration_pressure_increase * f64::from(iteration.saturating_sub(2))
}

/// Momentum stop chance, clamped to `[0, max_momentum_stop_chance]`.
#[must_use]
pub fn momentum_chance(
    iteration: u32,
    remaining_dice: usize,
    success_count: u32,
    mode: BehaviorMode,
    config: &AiConfig,
) -> f64 {
    let base = clamp_probability(config.base_multiplier(mode));
    let chance = base
        * momentum_reduction_factor(success_count, config)
        * dice_risk_factor(remaining_dice, config)
        * iteration_pressure_factor(iteration, config);
    clamp_probability(chance.min(config.max_momentum_stop_chance))
}

/// Cap stop chance, clamped to `[0, max_cap_stop_chance]`.
#[must_use]
pub fn cap_chance(turn_score: u32, cap: u32, mode: BehaviorMode, config: &AiConfig) -> f64 {
    if turn_score < cap {
        return 0.0;
    }
    let over = f64::from(turn_score - cap);
    let chance = config.base_cap_stop_chance
        + over / config.cap_growth_interval * config.cap_growth_rate(mode);
    clamp_probability(chance.min(config.max_cap_stop_chance))
}

/// Union of two independent events.
#[must_use]
pub fn combine(momentum: f64, cap: f64) -> f64 {
    clamp_probability(1.0 - (1.0 - momentum) * (1.0 - cap))
}

/// Both chances and their union.
#[must_use]
pub fn compute_stop_chances(
    iteration: u32,
    remaining_dice: usize,
    success_count: u32,
    turn_score: u32,
    cap: u32,
    mode: BehaviorMode,
    config: &AiConfig,
) -> StopChances {
    let momentum = momentum_chance(iteration, remaining_dice, success_count, mode, config);
    let cap = cap_chance(turn_score, cap, mode, config);
    StopChances {
        momentum,
        cap,
        combined: combine(momentum, cap),
    }
}

/// Draw once against each chance. Momentum is drawn first.
pub fn roll(chances: &StopChances, rng: &mut GameRng) -> RiskRoll {
    let momentum_fired = rng.gen_bool(chances.momentum);
    let cap_fired = rng.gen_bool(chances.cap);
    RiskRoll { momentum_fired, cap_fired }
}

//! Opponent tuning parameters.
//!
//! Every number the decision core uses lives in `AiConfig`. The config is
//! read-only during a turn; `validate` rejects bad values up front so a turn
//! never has to recover from them.

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, Result};
use crate::ai::BehaviorMode;

/// How the per-turn cap is picked from the mode's configured range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapPolicy {
    /// Midpoint of `[min, max]`, rounded down. Fully deterministic.
    #[default]
    Midpoint,
    /// Uniform in `[min, max]`, drawn from the turn's injected RNG.
    Uniform,
}

/// Opponent configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Dice in a full draw (hot streak redraws this many).
    pub max_dice: usize,

    // --- Points caps per mode ---
    pub points_cap_aggressive_min: u32,
    pub points_cap_aggressive_max: u32,
    pub points_cap_passive_min: u32,
    pub points_cap_passive_max: u32,
    pub cap_policy: CapPolicy,

    // --- Dynamic buffer ---
    /// Score gap separating the modes at the start of a game.
    pub initial_buffer_cap: u32,
    /// Completed rounds per buffer reduction step.
    pub rounds_per_reduction: u32,
    pub buffer_reduction_per_round: u32,
    /// The buffer never shrinks below this.
    pub minimum_buffer_cap: u32,

    // --- Momentum ---
    pub aggressive_base_multiplier: f64,
    pub passive_base_multiplier: f64,
    pub momentum_reduction_per_success: f64,
    /// Floor for the momentum reduction factor. Keeps stop pressure above zero.
    pub minimum_momentum_multiplier: f64,

    // --- Dice risk ---
    pub dice_risk_multiplier: f64,
    pub dice_risk_exponent: f64,

    // --- Iteration pressure ---
    pub iteration_pressure_increase: f64,
    pub max_momentum_stop_chance: f64,

    // --- Cap probability ---
    pub base_cap_stop_chance: f64,
    /// Points over the cap per growth step.
    pub cap_growth_interval: f64,
    pub aggressive_cap_growth_rate: f64,
    pub passive_cap_growth_rate: f64,
    pub max_cap_stop_chance: f64,

    // --- Iteration limits ---
    pub max_iterations_aggressive: u32,
    pub max_iterations_passive: u32,
    /// Absolute bound on rolls per turn, hot streak redraws included.
    pub hard_roll_limit: u32,

    /// Minimum points per die for an aggressive pick that clears every die.
    pub hot_streak_min_points_per_die: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            max_dice: 6,
            points_cap_aggressive_min: 600,
            points_cap_aggressive_max: 1000,
            points_cap_passive_min: 300,
            points_cap_passive_max: 500,
            cap_policy: CapPolicy::Midpoint,
            initial_buffer_cap: 1000,
            rounds_per_reduction: 2,
            buffer_reduction_per_round: 100,
            minimum_buffer_cap: 200,
            aggressive_base_multiplier: 0.10,
            passive_base_multiplier: 0.25,
            momentum_reduction_per_success: 0.12,
            minimum_momentum_multiplier: 0.25,
            dice_risk_multiplier: 0.5,
            dice_risk_exponent: 2.0,
            iteration_pressure_increase: 0.15,
            max_momentum_stop_chance: 0.95,
            base_cap_stop_chance: 0.30,
            cap_growth_interval: 50.0,
            aggressive_cap_growth_rate: 0.10,
            passive_cap_growth_rate: 0.20,
            max_cap_stop_chance: 0.95,
            max_iterations_aggressive: 5,
            max_iterations_passive: 2,
            hard_roll_limit: 32,
            hot_streak_min_points_per_die: 100,
        }
    }
}

impl AiConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cap range for aggressive mode.
    #[must_use]
    pub fn with_aggressive_cap(mut self, min: u32, max: u32) -> Self {
        self.points_cap_aggressive_min = min;
        self.points_cap_aggressive_max = max;
        self
    }

    /// Set the cap range for passive mode.
    #[must_use]
    pub fn with_passive_cap(mut self, min: u32, max: u32) -> Self {
        self.points_cap_passive_min = min;
        self.points_cap_passive_max = max;
        self
    }

    /// Set the cap sampling policy.
    #[must_use]
    pub fn with_cap_policy(mut self, policy: CapPolicy) -> Self {
        self.cap_policy = policy;
        self
    }

    /// Set buffer parameters: initial value, reduction step, rounds per step, floor.
    #[must_use]
    pub fn with_buffer(
        mut self,
        initial: u32,
        reduction: u32,
        rounds_per_reduction: u32,
        floor: u32,
    ) -> Self {
        self.initial_buffer_cap = initial;
        self.buffer_reduction_per_round = reduction;
        self.rounds_per_reduction = rounds_per_reduction;
        self.minimum_buffer_cap = floor;
        self
    }

    /// Set per-mode iteration limits.
    #[must_use]
    pub fn with_max_iterations(mut self, aggressive: u32, passive: u32) -> Self {
        self.max_iterations_aggressive = aggressive;
        self.max_iterations_passive = passive;
        self
    }

    /// Set the absolute roll bound per turn.
    #[must_use]
    pub fn with_hard_roll_limit(mut self, limit: u32) -> Self {
        self.hard_roll_limit = limit;
        self
    }

    /// Cap range `(min, max)` for a mode.
    #[must_use]
    pub fn cap_range(&self, mode: BehaviorMode) -> (u32, u32) {
        match mode {
            BehaviorMode::Aggressive => {
                (self.points_cap_aggressive_min, self.points_cap_aggressive_max)
            }
            BehaviorMode::Passive => (self.points_cap_passive_min, self.points_cap_passive_max),
        }
    }

    /// Momentum base stop chance for a mode.
    #[must_use]
    pub fn base_multiplier(&self, mode: BehaviorMode) -> f64 {
        match mode {
            BehaviorMode::Aggressive => self.aggressive_base_multiplier,
            BehaviorMode::Passive => self.passive_base_multiplier,
        }
    }

    /// Cap stop chance growth per interval for a mode.
    #[must_use]
    pub fn cap_growth_rate(&self, mode: BehaviorMode) -> f64 {
        match mode {
            BehaviorMode::Aggressive => self.aggressive_cap_growth_rate,
            BehaviorMode::Passive => self.passive_cap_growth_rate,
        }
    }

    /// Iteration limit for a mode.
    #[must_use]
    pub fn max_iterations(&self, mode: BehaviorMode) -> u32 {
        match mode {
            BehaviorMode::Aggressive => self.max_iterations_aggressive,
            BehaviorMode::Passive => self.max_iterations_passive,
        }
    }

    /// Check every tunable. Called before any turn runs.
    pub fn validate(&self) -> Result<()> {
        if self.max_dice == 0 || self.max_dice > 6 {
            return Err(ConfigError::InvalidDiceCount(self.max_dice));
        }

        check_range(
            "aggressive points cap",
            self.points_cap_aggressive_min,
            self.points_cap_aggressive_max,
        )?;
        check_range(
            "passive points cap",
            self.points_cap_passive_min,
            self.points_cap_passive_max,
        )?;

        if self.rounds_per_reduction == 0 {
            return Err(ConfigError::ZeroValue { field: "rounds_per_reduction" });
        }
        if self.minimum_buffer_cap > self.initial_buffer_cap {
            return Err(ConfigError::InvalidRange {
                field: "buffer cap",
                min: self.minimum_buffer_cap,
                max: self.initial_buffer_cap,
            });
        }

        for (field, value) in [
            ("aggressive_base_multiplier", self.aggressive_base_multiplier),
            ("passive_base_multiplier", self.passive_base_multiplier),
            ("minimum_momentum_multiplier", self.minimum_momentum_multiplier),
            ("max_momentum_stop_chance", self.max_momentum_stop_chance),
            ("base_cap_stop_chance", self.base_cap_stop_chance),
            ("max_cap_stop_chance", self.max_cap_stop_chance),
        ] {
            check_probability(field, value)?;
        }

        for (field, value) in [
            ("momentum_reduction_per_success", self.momentum_reduction_per_success),
            ("dice_risk_multiplier", self.dice_risk_multiplier),
            ("dice_risk_exponent", self.dice_risk_exponent),
            ("iteration_pressure_increase", self.iteration_pressure_increase),
            ("aggressive_cap_growth_rate", self.aggressive_cap_growth_rate),
            ("passive_cap_growth_rate", self.passive_cap_growth_rate),
        ] {
            check_non_negative(field, value)?;
        }

        if !(self.cap_growth_interval > 0.0) {
            return Err(ConfigError::ZeroValue { field: "cap_growth_interval" });
        }
        if self.max_iterations_aggressive == 0 {
            return Err(ConfigError::ZeroValue { field: "max_iterations_aggressive" });
        }
        if self.max_iterations_passive == 0 {
            return Err(ConfigError::ZeroValue { field: "max_iterations_passive" });
        }
        if self.hard_roll_limit == 0 {
            return Err(ConfigError::ZeroValue { field: "hard_roll_limit" });
        }

        Ok(())
    }
}

fn check_range(field: &'static str, min: u32, max: u32) -> Result<()> {
    if min > max {
        return Err(ConfigError::InvalidRange { field, min, max });
    }
    Ok(())
}

fn check_probability(field: &'static str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::ProbabilityOutOfRange { field, value });
    }
    Ok(())
}

fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    // NaN fails this comparison too
    if !(value >= 0.0) {
        return Err(ConfigError::NegativeValue { field, value });
    }
    Ok(())
}

//! Continue/stop verdicts.
//!
//! Rules are checked in order and the first match wins. Structural limits
//! come before probabilistic ones so a lucky roll never overrides them.
//!
//! 1. At or over the cap and the risk roll fired
//! 2. Iteration limit for the mode reached
//! 3. Zonk risk of the next roll above 0.8
//! 4. Zonk risk above 0.6 in Passive mode
//! 5. One die or fewer in Passive mode
//! 6. Otherwise continue

use serde::{Deserialize, Serialize};

use crate::core::AiConfig;

use super::mode::BehaviorMode;
use super::state::AiTurnState;

/// Zonk risk above which every mode stops.
pub const CRITICAL_ZONK_RISK: f64 = 0.8;
/// Zonk risk above which Passive mode stops.
pub const HIGH_ZONK_RISK: f64 = 0.6;

/// Chance that rolling `n` dice yields nothing scorable, indexed by `n`.
///
/// Index 0 never gets rolled (an empty hand is redrawn in full).
const ZONK_RISK: [f64; 7] = [
    0.0,
    4.0 / 6.0,
    16.0 / 36.0,
    60.0 / 216.0,
    204.0 / 1296.0,
    600.0 / 7776.0,
    144.0 / 46656.0,
];

/// Probability that the next roll of `remaining_dice` dice is a zonk.
#[must_use]
pub fn zonk_risk(remaining_dice: usize) -> f64 {
    ZONK_RISK.get(remaining_dice).copied().unwrap_or(ZONK_RISK[6])
}

/// Why a turn stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StopReason {
    CapReached,
    IterationLimit,
    ZonkRiskCritical,
    ZonkRiskHigh,
    LowDice,
    /// Hard roll bound hit, independent of mode.
    SafetyLimit,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            StopReason::CapReached => "cap reached + probability roll",
            StopReason::IterationLimit => "iteration limit",
            StopReason::ZonkRiskCritical => "zonk risk critical",
            StopReason::ZonkRiskHigh => "zonk risk high, conservative mode",
            StopReason::LowDice => "low dice, conservative mode",
            StopReason::SafetyLimit => "safety roll limit",
        };
        f.write_str(text)
    }
}

/// Outcome of a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Continue,
    Stop(StopReason),
}

impl Verdict {
    #[must_use]
    pub fn should_continue(self) -> bool {
        matches!(self, Verdict::Continue)
    }

    /// Stop reason, if stopping.
    #[must_use]
    pub fn reason(self) -> Option<StopReason> {
        match self {
            Verdict::Continue => None,
            Verdict::Stop(reason) => Some(reason),
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Continue => f.write_str("continue"),
            Verdict::Stop(reason) => write!(f, "stop: {reason}"),
        }
    }
}

/// Decide whether the turn goes on, using the risk roll stored on `state`.
#[must_use]
pub fn should_continue(state: &AiTurnState, config: &AiConfig) -> Verdict {
    evaluate_rules(state, zonk_risk(state.remaining_dice), config)
}

/// Rule evaluation against an explicit zonk risk.
#[must_use]
pub fn evaluate_rules(state: &AiTurnState, zonk_risk: f64, config: &AiConfig) -> Verdict {
    let passive = state.mode == BehaviorMode::Passive;

    if state.at_cap() && state.last_roll.fired() {
        Verdict::Stop(StopReason::CapReached)
    } else if state.iteration >= config.max_iterations(state.mode) {
        Verdict::Stop(StopReason::IterationLimit)
    } else if zonk_risk > CRITICAL_ZONK_RISK {
        Verdict::Stop(StopReason::ZonkRiskCritical)
    } else if zonk_risk > HIGH_ZONK_RISK && passive {
        Verdict::Stop(StopReason::ZonkRiskHigh)
    } else if state.remaining_dice <= 1 && passive {
        Verdict::Stop(StopReason::LowDice)
    } else {
        Verdict::Continue
    }
}

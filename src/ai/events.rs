//! Turn events and the final turn result.
//!
//! The executor records events in order instead of notifying subscribers.
//! The host replays them (animation, logs) and applies `final_score`.

use serde::{Deserialize, Serialize};

use crate::core::Dice;
use crate::patterns::PatternKind;

use super::decision::{StopReason, Verdict};
use super::mode::BehaviorMode;

/// Something that happened during a turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TurnEvent {
    TurnStarted {
        mode: BehaviorMode,
        cap: u32,
        buffer: u32,
    },
    DiceRolled {
        faces: Dice,
    },
    PatternSelected {
        kind: PatternKind,
        points: u32,
        dice_cost: usize,
        turn_score: u32,
    },
    /// Every die was banked; a full hand is redrawn without a decision.
    HotStreak {
        turn_score: u32,
    },
    DecisionMade {
        verdict: Verdict,
        momentum_chance: f64,
        cap_chance: f64,
        combined_chance: f64,
    },
    /// No scorable pattern: unbanked points are lost.
    Zonked {
        lost_points: u32,
    },
    TurnCompleted {
        final_score: u32,
        iterations: u32,
        success_count: u32,
    },
}

/// How a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    Stopped(StopReason),
    Zonked,
}

/// Output of one turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnResult {
    pub events: Vec<TurnEvent>,
    /// Points to add to the opponent's total. Zero after a zonk.
    pub final_score: u32,
    pub iterations: u32,
    pub success_count: u32,
    /// Mode used; feed back as the next turn's previous mode.
    pub mode: BehaviorMode,
    pub cap: u32,
    pub outcome: TurnOutcome,
}

impl TurnResult {
    #[must_use]
    pub fn zonked(&self) -> bool {
        self.outcome == TurnOutcome::Zonked
    }

    /// Patterns selected, in order.
    pub fn selected_patterns(&self) -> impl Iterator<Item = (PatternKind, u32)> + '_ {
        self.events.iter().filter_map(|e| match e {
            TurnEvent::PatternSelected { kind, points, .. } => Some((*kind, *points)),
            _ => None,
        })
    }

    /// Number of hot streak redraws.
    #[must_use]
    pub fn hot_streaks(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, TurnEvent::HotStreak { .. }))
            .count()
    }
}

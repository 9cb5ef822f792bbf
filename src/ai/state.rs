//! Per-turn input and mutable state.

use serde::{Deserialize, Serialize};

use crate::core::Dice;

use super::mode::BehaviorMode;
use super::risk::{RiskRoll, StopChances};

/// Immutable input for one turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnContext {
    /// Opponent's cumulative score before this turn.
    pub own_score: u32,
    /// Rival's cumulative score.
    pub rival_score: u32,
    /// Rounds completed so far in the game.
    pub completed_rounds: u32,
    /// Mode used on the opponent's previous turn. `None` on the first turn.
    pub previous_mode: Option<BehaviorMode>,
}

impl TurnContext {
    pub fn new(own_score: u32, rival_score: u32, completed_rounds: u32) -> Self {
        Self {
            own_score,
            rival_score,
            completed_rounds,
            previous_mode: None,
        }
    }

    /// Set the previous turn's mode (builder pattern).
    #[must_use]
    pub fn with_previous_mode(mut self, mode: BehaviorMode) -> Self {
        self.previous_mode = Some(mode);
        self
    }
}

/// Turn state machine phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    Start,
    RollAwaitingEvaluation,
    SelectingPattern,
    DecidingContinuation,
    Zonked,
    Stopped,
}

impl TurnPhase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, TurnPhase::Zonked | TurnPhase::Stopped)
    }
}

/// Mutable state for one turn. Owned by the executor and dropped at turn end.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiTurnState {
    pub phase: TurnPhase,
    pub mode: BehaviorMode,
    pub cap: u32,
    /// Points banked so far this turn.
    pub turn_score: u32,
    /// Dice still available to roll.
    pub remaining_dice: usize,
    /// Current roll.
    pub dice: Dice,
    /// Completed continue/stop decisions.
    pub iteration: u32,
    /// Successful pattern selections this turn.
    pub success_count: u32,
    /// Every roll made, hot streak redraws included.
    pub rolls: u32,
    /// Last computed stop chances (observability only).
    pub last_chances: StopChances,
    /// Last risk draws (observability only).
    pub last_roll: RiskRoll,
}

impl AiTurnState {
    /// Fresh state at the start of a turn.
    pub fn new(mode: BehaviorMode, cap: u32, max_dice: usize) -> Self {
        Self {
            phase: TurnPhase::Start,
            mode,
            cap,
            turn_score: 0,
            remaining_dice: max_dice,
            dice: Dice::new(),
            iteration: 0,
            success_count: 0,
            rolls: 0,
            last_chances: StopChances::default(),
            last_roll: RiskRoll::default(),
        }
    }

    /// Has the turn score reached the cap?
    #[must_use]
    pub fn at_cap(&self) -> bool {
        self.turn_score >= self.cap
    }
}

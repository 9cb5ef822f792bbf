//! A computer opponent that persists across turns.
//!
//! Carries the two things that outlive a single turn: the mode of the last
//! turn (for hysteresis) and the opponent's own random stream. Each turn
//! forks that stream and splits it into independent dice and risk streams.

use crate::core::{AiConfig, DiceSource, GameRng, GameRngState, Result};
use crate::patterns::PatternValidator;

use super::events::TurnResult;
use super::executor::TurnExecutor;
use super::mode::BehaviorMode;
use super::state::TurnContext;

/// Computer opponent.
#[derive(Clone, Debug)]
pub struct AiOpponent<V: PatternValidator> {
    executor: TurnExecutor<V>,
    rng: GameRng,
    previous_mode: Option<BehaviorMode>,
}

impl<V: PatternValidator> AiOpponent<V> {
    /// Create an opponent with its own seeded stream.
    pub fn new(config: AiConfig, validator: V, seed: u64) -> Result<Self> {
        Ok(Self {
            executor: TurnExecutor::new(config, validator)?,
            rng: GameRng::new(seed),
            previous_mode: None,
        })
    }

    /// Mode used on the last turn, if any turn has been played.
    pub fn previous_mode(&self) -> Option<BehaviorMode> {
        self.previous_mode
    }

    pub fn executor(&self) -> &TurnExecutor<V> {
        &self.executor
    }

    fn context(&self, own_score: u32, rival_score: u32, completed_rounds: u32) -> TurnContext {
        TurnContext {
            own_score,
            rival_score,
            completed_rounds,
            previous_mode: self.previous_mode,
        }
    }

    /// Play a turn with dice from the opponent's own stream.
    pub fn take_turn(
        &mut self,
        own_score: u32,
        rival_score: u32,
        completed_rounds: u32,
    ) -> TurnResult {
        let turn_rng = self.rng.fork();
        let mut dice = turn_rng.for_context("dice");
        let mut risk = turn_rng.for_context("risk");

        let context = self.context(own_score, rival_score, completed_rounds);
        let result = self.executor.run_turn(&context, &mut dice, &mut risk);
        self.previous_mode = Some(result.mode);
        result
    }

    /// Play a turn with dice supplied by the host.
    pub fn take_turn_with<D: DiceSource + ?Sized>(
        &mut self,
        own_score: u32,
        rival_score: u32,
        completed_rounds: u32,
        dice: &mut D,
    ) -> TurnResult {
        let mut risk = self.rng.fork().for_context("risk");

        let context = self.context(own_score, rival_score, completed_rounds);
        let result = self.executor.run_turn(&context, dice, &mut risk);
        self.previous_mode = Some(result.mode);
        result
    }

    /// Checkpoint the random stream.
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Restore a checkpointed stream and previous mode.
    pub fn restore(&mut self, state: &GameRngState, previous_mode: Option<BehaviorMode>) {
        self.rng = GameRng::from_state(state);
        self.previous_mode = previous_mode;
    }
}

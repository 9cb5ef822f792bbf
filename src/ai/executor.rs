//! Turn executor: runs one opponent turn to completion.
//!
//! ## State machine
//!
//! ```text
//! Start -> RollAwaitingEvaluation -> SelectingPattern -> DecidingContinuation
//!              ^        |                  |                 |        |
//!              |        v                  | hot streak      |        v
//!              |     Zonked                v                 |     Stopped
//!              +---------------------- (redraw) <------------+ continue
//! ```
//!
//! A hot streak redraws a full hand without a decision. Every draw counts
//! against `hard_roll_limit`, which ends the turn no matter the mode.

use tracing::{debug, debug_span, trace};

use crate::core::{AiConfig, DiceSource, GameRng, Result};
use crate::patterns::PatternValidator;

use super::decision::{should_continue, StopReason, Verdict};
use super::events::{TurnEvent, TurnOutcome, TurnResult};
use super::mode::determine_mode;
use super::risk::{compute_stop_chances, roll};
use super::state::{AiTurnState, TurnContext, TurnPhase};
use super::strategy::select_pattern;

/// Runs opponent turns against a pattern validator.
///
/// Holds only read-only data, so one executor can serve many concurrent
/// turns as long as each brings its own dice source and RNG.
#[derive(Clone, Debug)]
pub struct TurnExecutor<V: PatternValidator> {
    config: AiConfig,
    validator: V,
}

impl<V: PatternValidator> TurnExecutor<V> {
    /// Create an executor. Fails if the configuration is invalid.
    pub fn new(config: AiConfig, validator: V) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, validator })
    }

    /// Get the configuration.
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Get the validator.
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Play one turn.
    ///
    /// `dice` supplies every roll; `rng` drives the cap policy and the stop
    /// draws. The returned result is the only output: cumulative scores are
    /// never touched.
    pub fn run_turn<D: DiceSource + ?Sized>(
        &self,
        context: &TurnContext,
        dice: &mut D,
        rng: &mut GameRng,
    ) -> TurnResult {
        let decision = determine_mode(
            context.own_score,
            context.rival_score,
            context.completed_rounds,
            context.previous_mode,
            &self.config,
            rng,
        );

        let span = debug_span!("ai_turn", mode = %decision.mode, cap = decision.cap);
        let _guard = span.enter();

        let mut state = AiTurnState::new(decision.mode, decision.cap, self.config.max_dice);
        let mut events = vec![TurnEvent::TurnStarted {
            mode: decision.mode,
            cap: decision.cap,
            buffer: decision.buffer,
        }];
        let mut outcome = TurnOutcome::Stopped(StopReason::SafetyLimit);

        self.draw(&mut state, dice, &mut events);

        while !state.phase.is_terminal() {
            match state.phase {
                TurnPhase::RollAwaitingEvaluation => {
                    if self.validator.any_pattern(&state.dice) {
                        state.phase = TurnPhase::SelectingPattern;
                    } else {
                        outcome = Self::zonk(&mut state, &mut events);
                    }
                }
                TurnPhase::SelectingPattern => {
                    // Validator claimed a pattern but none survived sanitizing
                    let Some(selection) =
                        select_pattern(&self.validator, &state.dice, state.mode, &self.config)
                    else {
                        outcome = Self::zonk(&mut state, &mut events);
                        continue;
                    };

                    let pattern = selection.pattern;
                    debug_assert!(pattern.dice_cost <= state.remaining_dice);

                    state.turn_score = state.turn_score.saturating_add(pattern.points);
                    state.remaining_dice = state.remaining_dice.saturating_sub(pattern.dice_cost);
                    state.success_count += 1;

                    debug!(
                        kind = %pattern.kind,
                        points = pattern.points,
                        rule = ?selection.rule,
                        threshold = %selection.threshold,
                        turn_score = state.turn_score,
                        remaining = state.remaining_dice,
                        "pattern selected"
                    );
                    events.push(TurnEvent::PatternSelected {
                        kind: pattern.kind,
                        points: pattern.points,
                        dice_cost: pattern.dice_cost,
                        turn_score: state.turn_score,
                    });

                    if state.remaining_dice == 0 {
                        events.push(TurnEvent::HotStreak { turn_score: state.turn_score });
                        if self.roll_limit_reached(&state) {
                            outcome = Self::stop(&mut state, StopReason::SafetyLimit);
                        } else {
                            state.remaining_dice = self.config.max_dice;
                            self.draw(&mut state, dice, &mut events);
                        }
                    } else {
                        state.phase = TurnPhase::DecidingContinuation;
                    }
                }
                TurnPhase::DecidingContinuation => {
                    let previous = state.iteration;
                    state.iteration += 1;
                    // One decision per draw at most
                    debug_assert!(state.iteration > previous && state.iteration <= state.rolls);

                    state.last_chances = compute_stop_chances(
                        state.iteration,
                        state.remaining_dice,
                        state.success_count,
                        state.turn_score,
                        state.cap,
                        state.mode,
                        &self.config,
                    );
                    state.last_roll = roll(&state.last_chances, rng);

                    let mut verdict = should_continue(&state, &self.config);
                    if verdict.should_continue() && self.roll_limit_reached(&state) {
                        verdict = Verdict::Stop(StopReason::SafetyLimit);
                    }

                    debug!(
                        iteration = state.iteration,
                        momentum = state.last_chances.momentum,
                        cap_chance = state.last_chances.cap,
                        %verdict,
                        "decision made"
                    );
                    events.push(TurnEvent::DecisionMade {
                        verdict,
                        momentum_chance: state.last_chances.momentum,
                        cap_chance: state.last_chances.cap,
                        combined_chance: state.last_chances.combined,
                    });

                    match verdict {
                        Verdict::Continue => self.draw(&mut state, dice, &mut events),
                        Verdict::Stop(reason) => outcome = Self::stop(&mut state, reason),
                    }
                }
                // The opening draw happens before the loop
                TurnPhase::Start | TurnPhase::Zonked | TurnPhase::Stopped => {}
            }
        }

        events.push(TurnEvent::TurnCompleted {
            final_score: state.turn_score,
            iterations: state.iteration,
            success_count: state.success_count,
        });
        debug!(
            final_score = state.turn_score,
            iterations = state.iteration,
            ?outcome,
            "turn finished"
        );

        TurnResult {
            events,
            final_score: state.turn_score,
            iterations: state.iteration,
            success_count: state.success_count,
            mode: state.mode,
            cap: state.cap,
            outcome,
        }
    }

    fn roll_limit_reached(&self, state: &AiTurnState) -> bool {
        state.rolls >= self.config.hard_roll_limit
    }

    fn draw<D: DiceSource + ?Sized>(
        &self,
        state: &mut AiTurnState,
        dice: &mut D,
        events: &mut Vec<TurnEvent>,
    ) {
        debug_assert!(state.remaining_dice <= self.config.max_dice);
        state.dice = dice.draw(state.remaining_dice);
        state.rolls += 1;
        state.phase = TurnPhase::RollAwaitingEvaluation;
        trace!(faces = ?state.dice, "dice rolled");
        events.push(TurnEvent::DiceRolled { faces: state.dice.clone() });
    }

    fn zonk(state: &mut AiTurnState, events: &mut Vec<TurnEvent>) -> TurnOutcome {
        debug!(lost = state.turn_score, faces = ?state.dice, "zonk");
        events.push(TurnEvent::Zonked { lost_points: state.turn_score });
        state.turn_score = 0;
        state.phase = TurnPhase::Zonked;
        TurnOutcome::Zonked
    }

    fn stop(state: &mut AiTurnState, reason: StopReason) -> TurnOutcome {
        state.phase = TurnPhase::Stopped;
        TurnOutcome::Stopped(reason)
    }
}

//! Batch simulation for tuning opponent configurations.
//!
//! Runs many turns (or whole AI-vs-AI matches) from a fixed seed and
//! collects aggregate statistics. Same seed, same numbers.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::ai::{AiOpponent, StopReason, TurnContext, TurnExecutor, TurnOutcome, TurnResult};
use crate::core::{AiConfig, GameRng, Result};
use crate::patterns::{PatternKind, PatternValidator};

/// Aggregate statistics over simulated turns.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SimulationStats {
    pub turns: u32,
    pub zonks: u32,
    pub total_score: u64,
    pub max_score: u32,
    pub total_iterations: u64,
    pub hot_streaks: u64,
    /// Times each pattern kind was banked.
    pub pattern_counts: FxHashMap<PatternKind, u32>,
    /// Times each stop reason ended a turn.
    pub stop_reasons: FxHashMap<StopReason, u32>,
}

impl SimulationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one turn into the totals.
    pub fn record(&mut self, result: &TurnResult) {
        self.turns += 1;
        self.total_score += u64::from(result.final_score);
        self.max_score = self.max_score.max(result.final_score);
        self.total_iterations += u64::from(result.iterations);
        self.hot_streaks += result.hot_streaks() as u64;

        match result.outcome {
            TurnOutcome::Zonked => self.zonks += 1,
            TurnOutcome::Stopped(reason) => *self.stop_reasons.entry(reason).or_default() += 1,
        }
        for (kind, _) in result.selected_patterns() {
            *self.pattern_counts.entry(kind).or_default() += 1;
        }
    }

    #[must_use]
    pub fn mean_score(&self) -> f64 {
        if self.turns == 0 {
            0.0
        } else {
            self.total_score as f64 / f64::from(self.turns)
        }
    }

    #[must_use]
    pub fn zonk_rate(&self) -> f64 {
        if self.turns == 0 {
            0.0
        } else {
            f64::from(self.zonks) / f64::from(self.turns)
        }
    }

    #[must_use]
    pub fn mean_iterations(&self) -> f64 {
        if self.turns == 0 {
            0.0
        } else {
            self.total_iterations as f64 / f64::from(self.turns)
        }
    }
}

/// Run `turns` independent turns from the same context.
pub fn simulate_turns<V: PatternValidator>(
    executor: &TurnExecutor<V>,
    context: &TurnContext,
    turns: u32,
    seed: u64,
) -> SimulationStats {
    let mut root = GameRng::new(seed);
    let mut stats = SimulationStats::new();

    for _ in 0..turns {
        let turn_rng = root.fork();
        let mut dice = turn_rng.for_context("dice");
        let mut risk = turn_rng.for_context("risk");
        stats.record(&executor.run_turn(context, &mut dice, &mut risk));
    }

    stats
}

/// Result of an AI-vs-AI match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Index of the winner (0 moves first).
    pub winner: usize,
    pub scores: [u32; 2],
    pub rounds: u32,
}

/// Play two opponents against each other until one reaches `target`.
///
/// Stops after `max_rounds` and awards the higher score (ties to seat 0).
pub fn play_match<V: PatternValidator + Clone>(
    configs: [AiConfig; 2],
    validator: V,
    target: u32,
    max_rounds: u32,
    seed: u64,
) -> Result<MatchResult> {
    let [first, second] = configs;
    let mut players = [
        AiOpponent::new(first, validator.clone(), seed)?,
        AiOpponent::new(second, validator, seed.wrapping_add(1))?,
    ];
    let mut scores = [0u32; 2];

    for round in 0..max_rounds {
        for seat in 0..2 {
            let rival = scores[1 - seat];
            let result = players[seat].take_turn(scores[seat], rival, round);
            scores[seat] = scores[seat].saturating_add(result.final_score);
            if scores[seat] >= target {
                return Ok(MatchResult { winner: seat, scores, rounds: round + 1 });
            }
        }
    }

    let winner = usize::from(scores[1] > scores[0]);
    Ok(MatchResult { winner, scores, rounds: max_rounds })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::StandardRules;

    fn executor() -> TurnExecutor<StandardRules> {
        TurnExecutor::new(AiConfig::default(), StandardRules).unwrap()
    }

    #[test]
    fn test_stats_empty() {
        let stats = SimulationStats::new();
        assert_eq!(stats.mean_score(), 0.0);
        assert_eq!(stats.zonk_rate(), 0.0);
        assert_eq!(stats.mean_iterations(), 0.0);
    }

    #[test]
    fn test_simulation_totals_are_consistent() {
        let stats = simulate_turns(&executor(), &TurnContext::default(), 200, 42);
        assert_eq!(stats.turns, 200);

        let stopped: u32 = stats.stop_reasons.values().sum();
        assert_eq!(stopped + stats.zonks, 200);
        assert!(stats.zonk_rate() <= 1.0);
        assert!(stats.mean_score() <= f64::from(stats.max_score));
        assert!(!stats.pattern_counts.is_empty());
    }

    #[test]
    fn test_simulation_is_deterministic() {
        let a = simulate_turns(&executor(), &TurnContext::default(), 100, 7);
        let b = simulate_turns(&executor(), &TurnContext::default(), 100, 7);
        assert_eq!(a.total_score, b.total_score);
        assert_eq!(a.zonks, b.zonks);
        assert_eq!(a.pattern_counts, b.pattern_counts);
    }

    #[test]
    fn test_passive_iterations_bounded() {
        // Leading by far: passive, never more than two decisions
        let context = TurnContext::new(5000, 0, 0);
        let stats = simulate_turns(&executor(), &context, 200, 3);
        assert!(stats.mean_iterations() <= 2.0);
    }

    #[test]
    fn test_match_finishes() {
        let configs = [AiConfig::default(), AiConfig::default()];
        let result = play_match(configs, StandardRules, 3000, 500, 9).unwrap();
        assert!(result.winner < 2);
        assert!(result.rounds >= 1);
        assert!(result.scores[result.winner] >= result.scores[1 - result.winner]);
    }

    #[test]
    fn test_match_rejects_bad_config() {
        let bad = AiConfig { hard_roll_limit: 0, ..AiConfig::default() };
        assert!(play_match([AiConfig::default(), bad], StandardRules, 1000, 10, 1).is_err());
    }
}

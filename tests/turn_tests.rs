//! Turn executor integration tests using scripted dice.

use zonk_ai::ai::{TurnContext, TurnEvent, TurnExecutor, TurnOutcome, Verdict};
use zonk_ai::core::{AiConfig, Face, GameRng, ScriptedDice};
use zonk_ai::patterns::{PatternKind, PatternMatch, PatternValidator};
use zonk_ai::rules::StandardRules;
use zonk_ai::{BehaviorMode, StopReason};

fn executor(config: AiConfig) -> TurnExecutor<StandardRules> {
    TurnExecutor::new(config, StandardRules).unwrap()
}

/// Trailing far behind: Aggressive, cap 800.
fn aggressive() -> TurnContext {
    TurnContext::new(0, 5000, 0)
}

/// Leading far ahead: Passive, cap 400.
fn passive() -> TurnContext {
    TurnContext::new(5000, 0, 0)
}

fn run(config: AiConfig, context: TurnContext, rolls: Vec<Vec<Face>>) -> zonk_ai::TurnResult {
    let mut dice = ScriptedDice::new(rolls, 0);
    let mut risk = GameRng::new(1);
    executor(config).run_turn(&context, &mut dice, &mut risk)
}

// =============================================================================
// Zonk Tests
// =============================================================================

#[test]
fn test_first_draw_zonk_scores_nothing() {
    let result = run(AiConfig::default(), aggressive(), vec![vec![2, 3, 4, 6, 2, 3]]);

    assert_eq!(result.outcome, TurnOutcome::Zonked);
    assert_eq!(result.final_score, 0);
    assert_eq!(result.iterations, 0);
    assert_eq!(result.success_count, 0);
    assert!(result.events.contains(&TurnEvent::Zonked { lost_points: 0 }));
}

#[test]
fn test_zonk_on_four_dice_loses_turn_points() {
    let result = run(
        AiConfig::default(),
        aggressive(),
        vec![vec![1, 5, 2, 2, 3, 6], vec![5, 2, 2, 3, 3], vec![2, 3, 4, 6]],
    );

    assert!(result.zonked());
    assert_eq!(result.final_score, 0);
    assert_eq!(result.iterations, 2);
    assert_eq!(result.success_count, 2);
    assert!(result.events.contains(&TurnEvent::Zonked { lost_points: 150 }));

    let picked: Vec<_> = result.selected_patterns().collect();
    assert_eq!(picked, vec![(PatternKind::SingleOne, 100), (PatternKind::SingleFive, 50)]);
}

#[test]
fn test_malformed_validator_output_counts_as_zonk() {
    struct Liar;

    impl PatternValidator for Liar {
        fn matches(&self, _faces: &[Face]) -> Vec<PatternMatch> {
            vec![PatternMatch::new(PatternKind::Straight, 1500, &[1, 2, 3, 4, 5, 6])]
        }
    }

    let executor = TurnExecutor::new(AiConfig::default(), Liar).unwrap();
    let mut dice = ScriptedDice::new([vec![2, 2, 3, 3, 4, 4]], 0);
    let mut risk = GameRng::new(1);
    let result = executor.run_turn(&aggressive(), &mut dice, &mut risk);

    assert!(result.zonked());
    assert_eq!(result.final_score, 0);
}

// =============================================================================
// Hot Streak Tests
// =============================================================================

#[test]
fn test_three_pairs_triggers_hot_streak_without_decision() {
    let result = run(
        AiConfig::default(),
        aggressive(),
        vec![vec![2, 2, 4, 4, 6, 6], vec![2, 3, 4, 6, 2, 3]],
    );

    assert_eq!(result.mode, BehaviorMode::Aggressive);
    assert_eq!(
        result.events[..5],
        [
            TurnEvent::TurnStarted { mode: BehaviorMode::Aggressive, cap: 800, buffer: 1000 },
            TurnEvent::DiceRolled { faces: [2, 2, 4, 4, 6, 6].into_iter().collect() },
            TurnEvent::PatternSelected {
                kind: PatternKind::ThreePairs,
                points: 750,
                dice_cost: 6,
                turn_score: 750,
            },
            TurnEvent::HotStreak { turn_score: 750 },
            TurnEvent::DiceRolled { faces: [2, 3, 4, 6, 2, 3].into_iter().collect() },
        ]
    );
    assert!(!result.events.iter().any(|e| matches!(e, TurnEvent::DecisionMade { .. })));
    assert!(result.zonked());
    assert_eq!(result.hot_streaks(), 1);
}

#[test]
fn test_hot_streak_redraws_full_hand() {
    let config = AiConfig::default().with_aggressive_cap(5000, 5000);
    let result = run(
        config,
        aggressive(),
        vec![vec![2, 2, 4, 4, 6, 6], vec![1, 2, 3, 4, 6, 6], vec![2, 3, 4, 6, 2]],
    );

    let rolls: Vec<usize> = result
        .events
        .iter()
        .filter_map(|e| match e {
            TurnEvent::DiceRolled { faces } => Some(faces.len()),
            _ => None,
        })
        .collect();
    assert_eq!(rolls, vec![6, 6, 5]);
    assert_eq!(result.iterations, 1);
}

// =============================================================================
// Stop Rule Tests
// =============================================================================

#[test]
fn test_passive_stops_at_iteration_limit() {
    let result = run(
        AiConfig::default(),
        passive(),
        vec![vec![1, 2, 2, 3, 4, 6], vec![1, 2, 3, 3, 4]],
    );

    assert_eq!(result.mode, BehaviorMode::Passive);
    assert_eq!(result.cap, 400);
    assert_eq!(result.outcome, TurnOutcome::Stopped(StopReason::IterationLimit));
    assert_eq!(result.final_score, 200);
    assert_eq!(result.iterations, 2);
    assert!(matches!(
        result.events.last(),
        Some(TurnEvent::TurnCompleted { final_score: 200, iterations: 2, success_count: 2 })
    ));
}

#[test]
fn test_cap_reached_with_certain_roll() {
    let config = AiConfig {
        base_cap_stop_chance: 1.0,
        max_cap_stop_chance: 1.0,
        ..AiConfig::default()
    }
    .with_aggressive_cap(100, 100);

    let result = run(config, aggressive(), vec![vec![1, 2, 2, 3, 4, 6]]);

    assert_eq!(result.outcome, TurnOutcome::Stopped(StopReason::CapReached));
    assert_eq!(result.final_score, 100);
    let decision = result.events.iter().find_map(|e| match e {
        TurnEvent::DecisionMade { verdict, cap_chance, .. } => Some((*verdict, *cap_chance)),
        _ => None,
    });
    assert_eq!(decision, Some((Verdict::Stop(StopReason::CapReached), 1.0)));
}

#[test]
fn test_passive_stops_on_high_zonk_risk() {
    let config = AiConfig::default().with_passive_cap(5000, 5000);
    let result = run(config, passive(), vec![vec![5, 5, 5, 5, 5, 1]]);

    assert_eq!(result.outcome, TurnOutcome::Stopped(StopReason::ZonkRiskHigh));
    assert_eq!(result.final_score, 1500);
}

#[test]
fn test_aggressive_keeps_rolling_on_one_die() {
    let config = AiConfig::default()
        .with_aggressive_cap(5000, 5000)
        .with_max_iterations(10, 2);
    let result = run(
        config,
        aggressive(),
        vec![
            vec![1, 2, 2, 3, 4, 6],
            vec![1, 2, 2, 3, 4],
            vec![1, 2, 2, 3],
            vec![1, 2, 3],
            vec![1, 2],
            vec![1],
            vec![2, 3, 4, 6, 2, 3],
        ],
    );

    // Singles walk the hand down to one die; the last 1 clears it
    let picked: Vec<_> = result.selected_patterns().map(|(k, _)| k).collect();
    assert_eq!(picked, vec![PatternKind::SingleOne; 6]);
    assert_eq!(result.iterations, 5);
    assert_eq!(result.hot_streaks(), 1);
    assert!(result.events.contains(&TurnEvent::Zonked { lost_points: 600 }));
}

#[test]
fn test_safety_limit_after_hot_streak() {
    let config = AiConfig::default().with_hard_roll_limit(1);
    let result = run(config, aggressive(), vec![vec![2, 2, 4, 4, 6, 6]]);

    assert_eq!(result.outcome, TurnOutcome::Stopped(StopReason::SafetyLimit));
    assert_eq!(result.final_score, 750);
    assert_eq!(result.iterations, 0);
}

#[test]
fn test_safety_limit_overrides_continue() {
    let config = AiConfig::default().with_hard_roll_limit(1);
    let result = run(config, aggressive(), vec![vec![1, 2, 2, 3, 4, 6]]);

    assert_eq!(result.outcome, TurnOutcome::Stopped(StopReason::SafetyLimit));
    assert_eq!(result.final_score, 100);
    assert!(result.events.iter().any(|e| matches!(
        e,
        TurnEvent::DecisionMade { verdict: Verdict::Stop(StopReason::SafetyLimit), .. }
    )));
}

// =============================================================================
// Invariant Tests
// =============================================================================

#[test]
fn test_random_turns_respect_bounds() {
    let executor = executor(AiConfig::default());
    let mut root = GameRng::new(2024);

    for round in 0..300 {
        let mut turn = root.fork();
        let mut risk = turn.fork();
        let context = if round % 2 == 0 { aggressive() } else { passive() };
        let result = executor.run_turn(&context, &mut turn, &mut risk);

        let limit = executor.config().max_iterations(result.mode);
        assert!(result.iterations <= limit, "iterations {} > {limit}", result.iterations);

        for event in &result.events {
            match event {
                TurnEvent::DiceRolled { faces } => {
                    assert!(!faces.is_empty() && faces.len() <= 6);
                    assert!(faces.iter().all(|f| (1..=6).contains(f)));
                }
                TurnEvent::DecisionMade { momentum_chance, cap_chance, combined_chance, .. } => {
                    for p in [momentum_chance, cap_chance, combined_chance] {
                        assert!((0.0..=1.0).contains(p));
                    }
                }
                _ => {}
            }
        }

        if result.zonked() {
            assert_eq!(result.final_score, 0);
        }
        assert!(matches!(result.events.first(), Some(TurnEvent::TurnStarted { .. })));
        assert!(matches!(result.events.last(), Some(TurnEvent::TurnCompleted { .. })));
    }
}

#[test]
fn test_one_decision_per_draw_at_most() {
    let executor = executor(AiConfig::default().with_max_iterations(10, 10));
    let mut root = GameRng::new(31);

    for round in 0..200 {
        let mut turn = root.fork();
        let mut risk = turn.fork();
        let context = if round % 2 == 0 { aggressive() } else { passive() };
        let result = executor.run_turn(&context, &mut turn, &mut risk);

        let draws = result
            .events
            .iter()
            .filter(|e| matches!(e, TurnEvent::DiceRolled { .. }))
            .count() as u32;
        let decisions = result
            .events
            .iter()
            .filter(|e| matches!(e, TurnEvent::DecisionMade { .. }))
            .count() as u32;

        assert_eq!(decisions, result.iterations);
        assert!(result.iterations <= draws, "{} decisions over {draws} draws", result.iterations);
    }
}

#[test]
fn test_turns_are_reproducible() {
    let executor = executor(AiConfig::default());
    let play = || {
        let mut dice = GameRng::new(5);
        let mut risk = GameRng::new(6);
        executor.run_turn(&aggressive(), &mut dice, &mut risk)
    };
    assert_eq!(play(), play());
}

#[test]
fn test_previous_mode_is_retained_inside_buffer() {
    let context = TurnContext::new(1000, 1200, 0).with_previous_mode(BehaviorMode::Aggressive);
    let result = run(AiConfig::default(), context, vec![vec![2, 3, 4, 6, 2, 3]]);
    assert_eq!(result.mode, BehaviorMode::Aggressive);
    assert_eq!(result.cap, 800);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = AiConfig { cap_growth_interval: -5.0, ..AiConfig::default() };
    assert!(TurnExecutor::new(config, StandardRules).is_err());
}

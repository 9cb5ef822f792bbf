//! Tier lookup and threshold search over validator output.
//!
//! ## Threshold percentages
//!
//! Each mode starts at a percentage with a full hand and loses a fixed step
//! for every die missing from it:
//!
//! | Mode       | Start | Step |
//! |------------|-------|------|
//! | Aggressive | 80%   | 20   |
//! | Passive    | 40%   | 10   |
//!
//! Percentages floor at zero and map to the worst accepted tier:
//!
//! | Percent | Accepted tiers |
//! |---------|----------------|
//! | >= 80   | 1              |
//! | >= 60   | 1-2            |
//! | >= 40   | 1-3            |
//! | >= 20   | 1-4            |
//! | < 20    | 1-5            |

use crate::ai::BehaviorMode;
use crate::core::Face;

use super::kind::{PatternKind, PatternMatch, Tier};
use super::validator::{valid_matches, PatternValidator};

/// Fixed tier of a pattern kind.
#[must_use]
pub fn tier_of(kind: PatternKind) -> Tier {
    kind.tier()
}

/// Threshold percentage for a mode with `remaining` of `max_dice` dice.
#[must_use]
pub fn threshold_percent(mode: BehaviorMode, remaining: usize, max_dice: usize) -> u32 {
    let (start, step) = match mode {
        BehaviorMode::Aggressive => (80u32, 20u32),
        BehaviorMode::Passive => (40, 10),
    };
    let missing = max_dice.saturating_sub(remaining) as u32;
    start.saturating_sub(step.saturating_mul(missing))
}

/// Worst tier accepted at a threshold percentage.
#[must_use]
pub fn tier_for_percent(percent: u32) -> Tier {
    let rank = if percent >= 80 {
        1
    } else if percent >= 60 {
        2
    } else if percent >= 40 {
        3
    } else if percent >= 20 {
        4
    } else {
        5
    };
    Tier::new(rank).unwrap_or(Tier::WORST)
}

/// Worst tier a mode accepts with `remaining` dice.
#[must_use]
pub fn threshold_tier(mode: BehaviorMode, remaining: usize, max_dice: usize) -> Tier {
    tier_for_percent(threshold_percent(mode, remaining, max_dice))
}

/// Order candidates best tier first, higher points first within a tier.
pub fn rank_candidates(candidates: &mut [PatternMatch]) {
    candidates.sort_by(|a, b| {
        tier_of(a.kind)
            .cmp(&tier_of(b.kind))
            .then(b.points.cmp(&a.points))
    });
}

/// First candidate, scanning from Tier 1 down, whose tier is within `threshold`.
#[must_use]
pub fn first_within_threshold(
    candidates: &[PatternMatch],
    threshold: Tier,
) -> Option<PatternMatch> {
    let mut ranked = candidates.to_vec();
    rank_candidates(&mut ranked);
    ranked.into_iter().find(|m| tier_of(m.kind) <= threshold)
}

/// Ask the validator for every pattern in `faces` and return the best one
/// within `threshold`. Malformed matches never qualify.
#[must_use]
pub fn search_above_threshold<V: PatternValidator + ?Sized>(
    validator: &V,
    faces: &[Face],
    threshold: Tier,
) -> Option<PatternMatch> {
    first_within_threshold(&valid_matches(validator, faces), threshold)
}

/// Candidate consuming the fewest dice. Ties go to higher points.
#[must_use]
pub fn fewest_dice(candidates: &[PatternMatch]) -> Option<PatternMatch> {
    candidates
        .iter()
        .min_by(|a, b| a.dice_cost.cmp(&b.dice_cost).then(b.points.cmp(&a.points)))
        .cloned()
}

/// Candidate with the most points. Ties go to fewer dice.
#[must_use]
pub fn highest_points(candidates: &[PatternMatch]) -> Option<PatternMatch> {
    candidates
        .iter()
        .max_by(|a, b| a.points.cmp(&b.points).then(b.dice_cost.cmp(&a.dice_cost)))
        .cloned()
}

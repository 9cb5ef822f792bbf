//! Pattern selection for a roll.
//!
//! Aggressive play looks only at the best tiers while the hand is full and
//! prefers keeping dice to reroll. Passive play accepts broader tiers and
//! otherwise banks the most points available.

use serde::{Deserialize, Serialize};

use crate::core::{AiConfig, Face};
use crate::patterns::{
    fewest_dice, highest_points, is_valid_match, search_above_threshold, threshold_tier,
    valid_matches, PatternMatch, PatternValidator, Tier,
};

use super::mode::BehaviorMode;

/// Which rule produced a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionRule {
    /// First match within the threshold tier.
    Threshold,
    /// Aggressive fallback: fewest dice consumed.
    FewestDice,
    /// Passive fallback: most points.
    BestPoints,
}

/// A chosen pattern and how it was chosen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub pattern: PatternMatch,
    pub rule: SelectionRule,
    pub threshold: Tier,
}

/// Aggressive efficiency check for a threshold match.
///
/// Accepted when it leaves a die to reroll, or when it clears the hand at
/// or above the hot streak points-per-die floor.
#[must_use]
pub fn aggressive_accepts(candidate: &PatternMatch, rolled: usize, config: &AiConfig) -> bool {
    candidate.dice_cost < rolled
        || candidate.points_per_die() >= config.hot_streak_min_points_per_die
}

/// Choose a pattern to bank from `faces`. `None` means nothing scorable.
pub fn select_pattern<V: PatternValidator + ?Sized>(
    validator: &V,
    faces: &[Face],
    mode: BehaviorMode,
    config: &AiConfig,
) -> Option<Selection> {
    let candidates = valid_matches(validator, faces);
    if candidates.is_empty() {
        return None;
    }

    let threshold = threshold_tier(mode, faces.len(), config.max_dice);
    let within = search_above_threshold(validator, faces, threshold);

    let (pattern, rule) = match mode {
        BehaviorMode::Aggressive => match within {
            Some(m) if aggressive_accepts(&m, faces.len(), config) => {
                (m, SelectionRule::Threshold)
            }
            _ => (fewest_dice(&candidates)?, SelectionRule::FewestDice),
        },
        BehaviorMode::Passive => match within {
            Some(m) => (m, SelectionRule::Threshold),
            None => {
                let best = validator
                    .best_pattern(faces)
                    .filter(|m| is_valid_match(faces, m))
                    .or_else(|| highest_points(&candidates))?;
                (best, SelectionRule::BestPoints)
            }
        },
    };

    Some(Selection { pattern, rule, threshold })
}

//! Scorable patterns: kinds, tiers, the validator boundary, and threshold search.

pub mod kind;
pub mod validator;
pub mod classifier;

pub use kind::{PatternKind, PatternMatch, Tier};
pub use validator::{is_valid_match, sanitize, valid_matches, PatternValidator};
pub use classifier::{
    fewest_dice, first_within_threshold, highest_points, rank_candidates, search_above_threshold,
    threshold_percent, threshold_tier, tier_for_percent, tier_of,
};

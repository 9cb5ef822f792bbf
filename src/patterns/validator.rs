//! Boundary to the external pattern rule table.
//!
//! Hosts implement `PatternValidator` with the same rule table the human
//! player is scored with. The core only consumes its output, and filters
//! anything malformed through `sanitize` before acting on it.

use tracing::warn;

use crate::core::{face_counts, Face};

use super::kind::PatternMatch;

/// Pattern validator trait.
///
/// ## Implementation Notes
///
/// - `matches`: report every scorable pattern present, in any order
/// - `best_pattern`: single highest-value match
/// - `any_pattern`: `false` means the roll is a zonk
pub trait PatternValidator {
    /// Every scorable pattern present in `faces`.
    fn matches(&self, faces: &[Face]) -> Vec<PatternMatch>;

    /// Single best-value match.
    fn best_pattern(&self, faces: &[Face]) -> Option<PatternMatch> {
        self.matches(faces).into_iter().max_by_key(|m| m.points)
    }

    /// Does any scorable pattern exist?
    fn any_pattern(&self, faces: &[Face]) -> bool {
        !self.matches(faces).is_empty()
    }
}

/// Check that a reported match is internally consistent and fits the roll.
#[must_use]
pub fn is_valid_match(faces: &[Face], candidate: &PatternMatch) -> bool {
    if candidate.dice_cost == 0 || candidate.dice_cost > faces.len() {
        return false;
    }
    if candidate.points == 0 || candidate.faces.len() != candidate.dice_cost {
        return false;
    }
    if candidate.faces.iter().any(|f| !(1..=6).contains(f)) {
        return false;
    }

    let available = face_counts(faces);
    let used = face_counts(&candidate.faces);
    used.iter().zip(available.iter()).all(|(u, a)| u <= a)
}

/// Drop malformed matches. A dropped match counts as "no pattern".
#[must_use]
pub fn sanitize(faces: &[Face], matches: Vec<PatternMatch>) -> Vec<PatternMatch> {
    matches
        .into_iter()
        .filter(|m| {
            let valid = is_valid_match(faces, m);
            if !valid {
                warn!(
                    kind = %m.kind,
                    points = m.points,
                    dice_cost = m.dice_cost,
                    ?faces,
                    "discarding malformed pattern match"
                );
            }
            valid
        })
        .collect()
}

/// Validated matches for a roll.
#[must_use]
pub fn valid_matches<V: PatternValidator + ?Sized>(
    validator: &V,
    faces: &[Face],
) -> Vec<PatternMatch> {
    sanitize(faces, validator.matches(faces))
}

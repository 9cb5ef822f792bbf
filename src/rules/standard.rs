//! Standard Zonk scoring table.
//!
//! | Pattern         | Dice | Points                        |
//! |-----------------|------|-------------------------------|
//! | Straight 1-6    | 6    | 1500                          |
//! | Three pairs     | 6    | 750                           |
//! | Three of a kind | 3    | face x 100 (ones: 1000)       |
//! | Four of a kind  | 4    | 2 x three of a kind           |
//! | Five of a kind  | 5    | 3 x three of a kind           |
//! | Six of a kind   | 6    | 4 x three of a kind           |
//! | Single 1        | 1    | 100                           |
//! | Single 5        | 1    | 50                            |

use crate::core::{face_counts, Face, FACES};
use crate::patterns::{PatternKind, PatternMatch, PatternValidator};

/// Points for a straight.
pub const STRAIGHT_POINTS: u32 = 1500;
/// Points for three pairs.
pub const THREE_PAIRS_POINTS: u32 = 750;
/// Points for a single 1.
pub const SINGLE_ONE_POINTS: u32 = 100;
/// Points for a single 5.
pub const SINGLE_FIVE_POINTS: u32 = 50;

/// Standard rule table. Stateless.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardRules;

impl StandardRules {
    pub fn new() -> Self {
        Self
    }

    /// Points for three of `face`.
    #[must_use]
    pub fn three_of_a_kind_points(face: Face) -> u32 {
        if face == 1 {
            1000
        } else {
            face as u32 * 100
        }
    }

    /// Points for `count` (3..=6) of `face`.
    #[must_use]
    pub fn of_a_kind_points(face: Face, count: u8) -> u32 {
        let multiplier = count.saturating_sub(2) as u32;
        Self::three_of_a_kind_points(face) * multiplier
    }
}

impl PatternValidator for StandardRules {
    fn matches(&self, faces: &[Face]) -> Vec<PatternMatch> {
        let counts = face_counts(faces);
        let mut out = Vec::new();

        if faces.len() == FACES {
            if counts.iter().all(|&c| c == 1) {
                out.push(PatternMatch::new(
                    PatternKind::Straight,
                    STRAIGHT_POINTS,
                    &[1, 2, 3, 4, 5, 6],
                ));
            }
            if counts.iter().filter(|&&c| c == 2).count() == 3 {
                out.push(PatternMatch::new(PatternKind::ThreePairs, THREE_PAIRS_POINTS, faces));
            }
        }

        for (idx, &count) in counts.iter().enumerate() {
            let face = idx as Face + 1;
            let kind = match count {
                3 => PatternKind::ThreeOfAKind,
                4 => PatternKind::FourOfAKind,
                5 => PatternKind::FiveOfAKind,
                6 => PatternKind::SixOfAKind,
                _ => continue,
            };
            let used = vec![face; count as usize];
            out.push(PatternMatch::new(kind, Self::of_a_kind_points(face, count), &used));
        }

        if counts[0] > 0 {
            out.push(PatternMatch::new(PatternKind::SingleOne, SINGLE_ONE_POINTS, &[1]));
        }
        if counts[4] > 0 {
            out.push(PatternMatch::new(PatternKind::SingleFive, SINGLE_FIVE_POINTS, &[5]));
        }

        out
    }
}

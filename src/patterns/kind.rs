//! Pattern kinds, strategic tiers, and matches.

use serde::{Deserialize, Serialize};

use crate::core::Dice;

/// A scorable pattern kind.
///
/// The rule table that decides which kinds exist in a roll, and what they
/// score, lives behind `PatternValidator`. Each kind carries a fixed tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PatternKind {
    /// 1-2-3-4-5-6.
    Straight,
    SixOfAKind,
    /// Three distinct pairs.
    ThreePairs,
    FiveOfAKind,
    FourOfAKind,
    ThreeOfAKind,
    SingleOne,
    SingleFive,
}

impl PatternKind {
    /// Every kind, best tier first.
    pub const ALL: [PatternKind; 8] = [
        PatternKind::Straight,
        PatternKind::SixOfAKind,
        PatternKind::ThreePairs,
        PatternKind::FiveOfAKind,
        PatternKind::FourOfAKind,
        PatternKind::ThreeOfAKind,
        PatternKind::SingleOne,
        PatternKind::SingleFive,
    ];

    /// Strategic tier of this kind.
    #[must_use]
    pub const fn tier(self) -> Tier {
        match self {
            PatternKind::Straight | PatternKind::SixOfAKind => Tier(1),
            PatternKind::ThreePairs | PatternKind::FiveOfAKind => Tier(2),
            PatternKind::FourOfAKind => Tier(3),
            PatternKind::ThreeOfAKind => Tier(4),
            PatternKind::SingleOne | PatternKind::SingleFive => Tier(5),
        }
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PatternKind::Straight => "Straight",
            PatternKind::SixOfAKind => "Six of a Kind",
            PatternKind::ThreePairs => "Three Pairs",
            PatternKind::FiveOfAKind => "Five of a Kind",
            PatternKind::FourOfAKind => "Four of a Kind",
            PatternKind::ThreeOfAKind => "Three of a Kind",
            PatternKind::SingleOne => "Single 1",
            PatternKind::SingleFive => "Single 5",
        };
        f.write_str(name)
    }
}

/// Ordinal rank of a pattern kind, 1 (best) to 5.
///
/// Independent of literal point value: a six of twos scores less than
/// three ones but still ranks Tier 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tier(u8);

impl Tier {
    pub const BEST: Tier = Tier(1);
    pub const WORST: Tier = Tier(5);

    /// Create a tier. Returns `None` outside `1..=5`.
    #[must_use]
    pub const fn new(rank: u8) -> Option<Self> {
        if rank >= 1 && rank <= 5 {
            Some(Self(rank))
        } else {
            None
        }
    }

    /// Get the raw rank.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tier {}", self.0)
    }
}

/// A pattern found in a roll, as reported by a validator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMatch {
    pub kind: PatternKind,
    pub points: u32,
    /// Dice the pattern consumes when banked.
    pub dice_cost: usize,
    /// The consumed faces. Length equals `dice_cost`.
    pub faces: Dice,
}

impl PatternMatch {
    /// Create a match that consumes exactly `faces`.
    pub fn new(kind: PatternKind, points: u32, faces: &[u8]) -> Self {
        Self {
            kind,
            points,
            dice_cost: faces.len(),
            faces: Dice::from_slice(faces),
        }
    }

    /// Tier of the matched kind.
    #[must_use]
    pub fn tier(&self) -> Tier {
        self.kind.tier()
    }

    /// Points per consumed die. Zero for a zero-cost match.
    #[must_use]
    pub fn points_per_die(&self) -> u32 {
        if self.dice_cost == 0 {
            0
        } else {
            self.points / self.dice_cost as u32
        }
    }
}

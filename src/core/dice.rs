//! Dice values and the sources that produce them.
//!
//! The decision core never simulates physical dice. It asks a `DiceSource`
//! for `count` uniform faces and works on the returned values.

use std::collections::VecDeque;

use smallvec::SmallVec;

use super::rng::GameRng;

/// A single die face, always in `1..=6`.
pub type Face = u8;

/// Number of faces on a die.
pub const FACES: usize = 6;

/// A set of rolled dice.
///
/// SmallVec keeps a full six-dice hand on the stack.
pub type Dice = SmallVec<[Face; 6]>;

/// Count occurrences of each face. Index 0 is face 1.
///
/// Values outside `1..=6` are ignored.
#[must_use]
pub fn face_counts(faces: &[Face]) -> [u8; FACES] {
    let mut counts = [0u8; FACES];
    for &face in faces {
        if (1..=FACES as Face).contains(&face) {
            counts[(face - 1) as usize] += 1;
        }
    }
    counts
}

/// Produces uniformly random die faces.
pub trait DiceSource {
    /// Draw `count` dice, each in `1..=6`.
    fn draw(&mut self, count: usize) -> Dice;
}

impl DiceSource for GameRng {
    fn draw(&mut self, count: usize) -> Dice {
        (0..count).map(|_| self.roll_face()).collect()
    }
}

/// Dice source that replays predefined rolls before falling back to an RNG.
///
/// Used to reproduce exact table situations. A scripted roll longer than the
/// requested count is truncated; a shorter one is padded from the fallback.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    rolls: VecDeque<Dice>,
    fallback: GameRng,
}

impl ScriptedDice {
    /// Create a source that replays `rolls` in order, then draws from `seed`.
    pub fn new<I, R>(rolls: I, seed: u64) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[Face]>,
    {
        Self {
            rolls: rolls.into_iter().map(|r| Dice::from_slice(r.as_ref())).collect(),
            fallback: GameRng::new(seed),
        }
    }

    /// Number of scripted rolls not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl DiceSource for ScriptedDice {
    fn draw(&mut self, count: usize) -> Dice {
        let mut dice = self.rolls.pop_front().unwrap_or_default();
        dice.truncate(count);
        while dice.len() < count {
            dice.push(self.fallback.roll_face());
        }
        dice
    }
}

//! Dice and hands.
//!
//! A `Die` is a face value in `1..=6`. A `Hand` is the ordered run of dice a
//! single player holds. Hands only ever shrink (`remove`) or get rerolled to
//! the same length; nothing grows them after creation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{GameError, Result};

/// Highest face a die can show.
pub const MAX_FACE: u8 = 6;

/// A single die showing a face in `1..=MAX_FACE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Die(u8);

impl Die {
    /// Create a die, rejecting faces outside `1..=6`.
    pub fn new(face: u8) -> Result<Self> {
        if (1..=MAX_FACE).contains(&face) {
            Ok(Self(face))
        } else {
            Err(GameError::InvalidArgument(format!(
                "die face {face} outside 1..={MAX_FACE}"
            )))
        }
    }

    /// Wrap a face produced by a roller that already honors the bounds.
    pub(crate) fn from_roll(face: u8) -> Self {
        debug_assert!((1..=MAX_FACE).contains(&face), "rolled face {face}");
        Self(face)
    }

    /// Get the face value.
    #[must_use]
    pub const fn face(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Die {
    type Error = GameError;

    fn try_from(face: u8) -> Result<Self> {
        Self::new(face)
    }
}

impl From<Die> for u8 {
    fn from(die: Die) -> u8 {
        die.0
    }
}

/// The dice held by one player.
///
/// Backed by a `SmallVec` sized for the usual starting hand so that rerolls
/// don't allocate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    dice: SmallVec<[Die; 8]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from raw face values.
    ///
    /// ```
    /// use liars_dice::core::Hand;
    ///
    /// let hand = Hand::from_faces(&[1, 1, 6]).unwrap();
    /// assert_eq!(hand.len(), 3);
    /// assert_eq!(hand.count_face(1), 2);
    /// assert!(Hand::from_faces(&[0]).is_err());
    /// ```
    pub fn from_faces(faces: &[u8]) -> Result<Self> {
        faces.iter().map(|&f| Die::new(f)).collect()
    }

    /// Number of dice held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// True when no dice are left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// The dice, in roll order.
    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Iterate over raw face values.
    pub fn faces(&self) -> impl Iterator<Item = u8> + '_ {
        self.dice.iter().map(|d| d.face())
    }

    /// Count the dice showing `face`.
    #[must_use]
    pub fn count_face(&self, face: u8) -> usize {
        self.dice.iter().filter(|d| d.face() == face).count()
    }

    /// Drop `n` dice from the end of the hand, stopping at empty.
    ///
    /// Returns how many dice were actually removed.
    pub(crate) fn remove(&mut self, n: usize) -> usize {
        let removed = n.min(self.dice.len());
        self.dice.truncate(self.dice.len() - removed);
        removed
    }
}

impl FromIterator<Die> for Hand {
    fn from_iter<I: IntoIterator<Item = Die>>(iter: I) -> Self {
        Self {
            dice: iter.into_iter().collect(),
        }
    }
}

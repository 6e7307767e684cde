//! Bids: "at least COUNT dice showing FACE across all hands".

use serde::{Deserialize, Serialize};

use super::dice::MAX_FACE;
use crate::error::{GameError, Result};

/// A claim about the dice on the table.
///
/// Constructed through `Bid::new`, so a `Bid` always has a face in `1..=6`
/// and a positive count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBid")]
pub struct Bid {
    face: u8,
    count: u32,
}

#[derive(Deserialize)]
struct RawBid {
    face: u8,
    count: u32,
}

impl TryFrom<RawBid> for Bid {
    type Error = GameError;

    fn try_from(raw: RawBid) -> Result<Self> {
        Self::new(raw.face, raw.count)
    }
}

impl Bid {
    /// The bid every round starts composing from: one die showing 1.
    pub const INITIAL: Bid = Bid { face: 1, count: 1 };

    /// Create a bid, validating face and count.
    ///
    /// ```
    /// use liars_dice::core::Bid;
    ///
    /// let bid = Bid::new(6, 2).unwrap();
    /// assert_eq!((bid.face(), bid.count()), (6, 2));
    /// assert!(Bid::new(7, 1).is_err());
    /// assert!(Bid::new(3, 0).is_err());
    /// ```
    pub fn new(face: u8, count: u32) -> Result<Self> {
        if !(1..=MAX_FACE).contains(&face) {
            return Err(GameError::InvalidArgument(format!(
                "bid face {face} outside 1..={MAX_FACE}"
            )));
        }
        if count == 0 {
            return Err(GameError::InvalidArgument("bid count must be at least 1".into()));
        }
        Ok(Self { face, count })
    }

    /// The face being bid on.
    #[must_use]
    pub const fn face(self) -> u8 {
        self.face
    }

    /// The claimed minimum number of dice showing the face.
    #[must_use]
    pub const fn count(self) -> u32 {
        self.count
    }
}

impl Default for Bid {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl std::fmt::Display for Bid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.count, self.face)
    }
}

//! Game configuration.
//!
//! The only rule a host tunes is the starting hand size. `FaceBound` picks
//! how many faces a rolled die can show; see its variants.

use serde::{Deserialize, Serialize};

use super::dice::MAX_FACE;
use crate::error::{GameError, Result};

/// Dice each player holds when created.
pub const DEFAULT_STARTING_HAND_COUNT: u32 = 5;

/// How the highest rollable face is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceBound {
    /// Upper face is the hand size plus one, capped at 6.
    ///
    /// A full five-die hand rolls 1-6; a two-die hand rolls 1-3.
    #[default]
    HandSizePlusOne,
    /// Every die rolls 1-6 regardless of hand size.
    Standard,
}

impl FaceBound {
    /// Highest face a die may show when rolling a hand of `hand_size`.
    #[must_use]
    pub fn upper_for(self, hand_size: usize) -> u8 {
        match self {
            FaceBound::HandSizePlusOne => hand_size.saturating_add(1).min(MAX_FACE as usize) as u8,
            FaceBound::Standard => MAX_FACE,
        }
    }
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiceConfig {
    /// Dice dealt to every new player.
    pub starting_hand_count: u32,
    /// Face range used when rolling.
    pub face_bound: FaceBound,
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self {
            starting_hand_count: DEFAULT_STARTING_HAND_COUNT,
            face_bound: FaceBound::default(),
        }
    }
}

impl DiceConfig {
    /// Create a config with the given starting hand size.
    #[must_use]
    pub fn with_starting_hand_count(count: u32) -> Self {
        Self {
            starting_hand_count: count,
            ..Self::default()
        }
    }

    /// Check the config describes a playable game.
    pub fn validate(&self) -> Result<()> {
        if self.starting_hand_count == 0 {
            return Err(GameError::InvalidArgument(
                "starting_hand_count must be positive".into(),
            ));
        }
        Ok(())
    }
}

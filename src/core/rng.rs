//! Dice rolling: a deterministic RNG and the pluggable roller seam.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Resumable**: `DiceRngState` captures the stream position in O(1)
//! - **Pluggable**: sessions roll through the `DiceRoller` trait, so hosts
//!   and tests can substitute their own source of dice
//!
//! ```
//! use liars_dice::core::{DiceRoller, FaceBound, RandomDiceRoller};
//!
//! let mut roller = RandomDiceRoller::new(42, FaceBound::Standard);
//! let hand = roller.roll(5);
//! assert_eq!(hand.len(), 5);
//! assert!(hand.faces().all(|f| (1..=6).contains(&f)));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::config::FaceBound;
use super::dice::{Die, Hand, MAX_FACE};
use crate::error::{GameError, Result};

/// Seedable uniform source for die faces.
///
/// Uses ChaCha8 for speed while keeping a reproducible stream per seed.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll one face uniformly in `1..=upper`. `upper` must be at least 1.
    pub(crate) fn roll_face(&mut self, upper: u8) -> u8 {
        debug_assert!(upper >= 1, "face bound must be at least 1");
        self.inner.gen_range(1..=upper)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DiceRngState {
        DiceRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DiceRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Produces fresh hands of dice.
///
/// Implementations must return exactly `hand_size` dice.
pub trait DiceRoller {
    /// Roll a hand of `hand_size` dice.
    fn roll(&mut self, hand_size: usize) -> Hand;
}

/// The default roller: uniform faces from a `DiceRng`, bounded by a `FaceBound`.
#[derive(Clone, Debug)]
pub struct RandomDiceRoller {
    rng: DiceRng,
    face_bound: FaceBound,
}

impl RandomDiceRoller {
    /// Create a roller from a seed.
    #[must_use]
    pub fn new(seed: u64, face_bound: FaceBound) -> Self {
        Self::from_rng(DiceRng::new(seed), face_bound)
    }

    /// Create a roller around an existing RNG (e.g. one restored from state).
    #[must_use]
    pub fn from_rng(rng: DiceRng, face_bound: FaceBound) -> Self {
        Self { rng, face_bound }
    }

    /// The underlying RNG.
    #[must_use]
    pub fn rng(&self) -> &DiceRng {
        &self.rng
    }

    /// The face bound applied by `roll`.
    #[must_use]
    pub fn face_bound(&self) -> FaceBound {
        self.face_bound
    }

    /// Roll `hand_size` dice with faces in `1..=upper`.
    pub fn roll_bounded(&mut self, hand_size: usize, upper: u8) -> Result<Hand> {
        if !(1..=MAX_FACE).contains(&upper) {
            return Err(GameError::InvalidArgument(format!(
                "face upper bound {upper} outside 1..={MAX_FACE}"
            )));
        }
        Ok((0..hand_size)
            .map(|_| Die::from_roll(self.rng.roll_face(upper)))
            .collect())
    }
}

impl DiceRoller for RandomDiceRoller {
    fn roll(&mut self, hand_size: usize) -> Hand {
        let upper = self.face_bound.upper_for(hand_size);
        (0..hand_size)
            .map(|_| Die::from_roll(self.rng.roll_face(upper)))
            .collect()
    }
}

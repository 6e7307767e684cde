//! Game session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Bid, DiceConfig, FaceBound, Phase, PlayerId};
use crate::game::{BidAxis, Game, GameBuilder};
use crate::rules::ChallengeOutcome;

use super::py_core::{PyBid, PyPlayer};

/// Python view of a resolved challenge.
#[pyclass(name = "ChallengeOutcome")]
#[derive(Clone, Debug)]
pub struct PyChallengeOutcome(pub ChallengeOutcome);

#[pymethods]
impl PyChallengeOutcome {
    #[getter]
    fn bid(&self) -> PyBid {
        PyBid(self.0.bid)
    }

    #[getter]
    fn bidder(&self) -> u32 {
        self.0.bidder.raw()
    }

    #[getter]
    fn challenger(&self) -> u32 {
        self.0.challenger.raw()
    }

    #[getter]
    fn dice_count(&self) -> u32 {
        self.0.dice_count
    }

    #[getter]
    fn delta(&self) -> u32 {
        self.0.delta
    }

    /// One of "bid_too_high", "exact", "bid_too_low".
    #[getter]
    fn verdict(&self) -> &'static str {
        use crate::rules::Verdict;
        match self.0.verdict {
            Verdict::BidTooHigh => "bid_too_high",
            Verdict::Exact => "exact",
            Verdict::BidTooLow => "bid_too_low",
        }
    }

    /// List of (player id, dice lost).
    #[getter]
    fn losses(&self) -> Vec<(u32, u32)> {
        self.0.losses.iter().map(|l| (l.player.raw(), l.dice)).collect()
    }

    /// List of (player id, faces) as revealed by the call.
    #[getter]
    fn revealed(&self) -> Vec<(u32, Vec<u8>)> {
        self.0
            .revealed
            .iter()
            .map(|r| (r.player.raw(), r.hand.faces().collect()))
            .collect()
    }

    #[getter]
    fn eliminated(&self) -> Vec<u32> {
        self.0.eliminated.iter().map(|id| id.raw()).collect()
    }

    #[getter]
    fn next_player(&self) -> Option<u32> {
        self.0.next_player.map(PlayerId::raw)
    }

    #[getter]
    fn winner(&self) -> Option<u32> {
        self.0.winner.map(PlayerId::raw)
    }

    fn __repr__(&self) -> String {
        format!(
            "ChallengeOutcome(bid={}, dice_count={}, verdict={})",
            self.0.bid,
            self.0.dice_count,
            self.verdict()
        )
    }
}

/// Python wrapper for a game session.
#[pyclass(name = "LiarsDice")]
pub struct PyLiarsDice {
    game: Game,
}

#[pymethods]
impl PyLiarsDice {
    /// Create a new game in setup.
    ///
    /// # Arguments
    /// - starting_hand_count: Dice per player (default 5)
    /// - standard_faces: Roll 1-6 regardless of hand size
    /// - seed: RNG seed for reproducible games
    #[new]
    #[pyo3(signature = (starting_hand_count = 5, standard_faces = false, seed = None))]
    fn new(starting_hand_count: u32, standard_faces: bool, seed: Option<u64>) -> PyResult<Self> {
        let face_bound = if standard_faces {
            FaceBound::Standard
        } else {
            FaceBound::HandSizePlusOne
        };
        let mut builder = GameBuilder::new().config(DiceConfig {
            starting_hand_count,
            face_bound,
        });
        if let Some(seed) = seed {
            builder = builder.seed(seed);
        }
        Ok(Self {
            game: builder.build()?,
        })
    }

    /// Add a player; returns the new player's id.
    #[pyo3(signature = (name = None))]
    fn add_player(&mut self, name: Option<String>) -> PyResult<u32> {
        Ok(self.game.add_player(name.as_deref())?.raw())
    }

    fn remove_player(&mut self, id: u32) -> PyResult<()> {
        Ok(self.game.remove_player(PlayerId::new(id))?)
    }

    fn start(&mut self) -> PyResult<()> {
        Ok(self.game.start()?)
    }

    /// Selector values for "face" or "count".
    #[pyo3(signature = (axis, filter_face = None))]
    fn bid_range(&self, axis: &str, filter_face: Option<u8>) -> PyResult<Vec<u32>> {
        let axis = match axis {
            "face" => BidAxis::Face,
            "count" => BidAxis::Count,
            other => {
                return Err(PyValueError::new_err(format!(
                    "axis must be 'face' or 'count', got {other:?}"
                )))
            }
        };
        Ok(self.game.bid_range(axis, filter_face))
    }

    fn set_pending_bid(&mut self, face: u8, count: u32) -> PyResult<()> {
        Ok(self.game.set_pending_bid(Bid::new(face, count)?)?)
    }

    fn submit_bid(&mut self, face: u8, count: u32) -> PyResult<()> {
        Ok(self.game.submit_bid(Bid::new(face, count)?)?)
    }

    fn submit_pending_bid(&mut self) -> PyResult<()> {
        Ok(self.game.submit_pending_bid()?)
    }

    fn challenge(&mut self) -> PyResult<PyChallengeOutcome> {
        Ok(PyChallengeOutcome(self.game.challenge()?))
    }

    /// One of "setup", "in_progress", "finished".
    #[getter]
    fn phase(&self) -> &'static str {
        match self.game.phase() {
            Phase::Setup => "setup",
            Phase::InProgress => "in_progress",
            Phase::Finished => "finished",
        }
    }

    #[getter]
    fn players(&self) -> Vec<PyPlayer> {
        self.game.players().map(PyPlayer::from).collect()
    }

    #[getter]
    fn current_player(&self) -> Option<PyPlayer> {
        self.game.current_player().map(PyPlayer::from)
    }

    #[getter]
    fn current_bid(&self) -> Option<PyBid> {
        self.game.current_bid().map(PyBid)
    }

    #[getter]
    fn pending_bid(&self) -> PyBid {
        PyBid(self.game.pending_bid())
    }

    #[getter]
    fn winner(&self) -> Option<PyPlayer> {
        self.game.winner().map(PyPlayer::from)
    }

    #[getter]
    fn round(&self) -> u32 {
        self.game.round()
    }

    #[getter]
    fn total_dice(&self) -> u32 {
        self.game.total_dice()
    }

    fn __repr__(&self) -> String {
        format!(
            "LiarsDice(phase={}, players={}, round={})",
            self.phase(),
            self.game.players().count(),
            self.game.round()
        )
    }
}

//! Core type bindings for Python.

use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{Bid, Player};
use crate::error::GameError;

impl From<GameError> for PyErr {
    fn from(err: GameError) -> Self {
        match err {
            GameError::InvalidArgument(_) | GameError::InvalidBid { .. } => {
                PyValueError::new_err(err.to_string())
            }
            GameError::InvalidState { .. } => PyRuntimeError::new_err(err.to_string()),
            GameError::NotFound(_) => PyKeyError::new_err(err.to_string()),
        }
    }
}

/// Python wrapper for Bid.
#[pyclass(name = "Bid")]
#[derive(Clone, Debug)]
pub struct PyBid(pub Bid);

#[pymethods]
impl PyBid {
    /// Create a bid; raises ValueError for a face outside 1-6 or a zero count.
    #[new]
    fn new(face: u8, count: u32) -> PyResult<Self> {
        Ok(Self(Bid::new(face, count)?))
    }

    #[getter]
    fn face(&self) -> u8 {
        self.0.face()
    }

    #[getter]
    fn count(&self) -> u32 {
        self.0.count()
    }

    fn __repr__(&self) -> String {
        format!("Bid(face={}, count={})", self.0.face(), self.0.count())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        (u64::from(self.0.face()) << 32) | u64::from(self.0.count())
    }
}

/// Read-only snapshot of a player.
#[pyclass(name = "Player")]
#[derive(Clone, Debug)]
pub struct PyPlayer {
    #[pyo3(get)]
    pub id: u32,
    #[pyo3(get)]
    pub name: String,
    #[pyo3(get)]
    pub dice: Vec<u8>,
}

impl From<&Player> for PyPlayer {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id().raw(),
            name: player.name().to_string(),
            dice: player.hand().faces().collect(),
        }
    }
}

#[pymethods]
impl PyPlayer {
    fn __repr__(&self) -> String {
        format!("Player(id={}, name={:?}, dice={})", self.id, self.name, self.dice.len())
    }
}

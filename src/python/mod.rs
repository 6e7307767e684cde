//! Python bindings for the Liar's Dice engine.
//!
//! Lets a Python front end drive a game session.
//!
//! # Quick Start
//!
//! ```python
//! import liars_dice
//!
//! game = liars_dice.LiarsDice(starting_hand_count=5, seed=42)
//! game.add_player()
//! game.add_player("Ann")
//! game.start()
//!
//! game.submit_bid(face=3, count=2)
//! outcome = game.challenge()
//! print(outcome.verdict, outcome.losses)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// liars_dice: rules engine for Liar's Dice.
#[pymodule]
fn liars_dice(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBid>()?;
    m.add_class::<PyPlayer>()?;
    m.add_class::<PyChallengeOutcome>()?;
    m.add_class::<PyLiarsDice>()?;

    Ok(())
}

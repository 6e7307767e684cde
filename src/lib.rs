//! # liars-dice
//!
//! Rules engine for a multiplayer Liar's Dice bidding game.
//!
//! Each player holds a hidden hand of dice. On their turn a player either
//! raises the bid ("at least COUNT dice showing FACE across every hand") or
//! challenges the previous bid. A challenge reveals the dice, costs someone
//! dice, and starts a new round; a player with no dice left is out, and the
//! last player holding dice wins.
//!
//! ## Design Principles
//!
//! 1. **Typed results**: every operation returns `Result<_, GameError>`. A
//!    failed call never changes the game.
//!
//! 2. **Session-owned state**: player numbering and the dice source belong to
//!    a `Game`, so independent games never share counters.
//!
//! 3. **Pluggable dice**: games roll through the `DiceRoller` trait; the
//!    default is a seeded ChaCha8 stream.
//!
//! ## Modules
//!
//! - `core`: Dice, hands, bids, players, configuration, RNG, actions, state
//! - `rules`: Bid validation and challenge resolution
//! - `game`: The session API a presentation layer drives

pub mod core;
pub mod rules;
pub mod game;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Die, Hand, Bid, Player, PlayerId, PlayerFactory,
    DiceRng, DiceRngState, DiceRoller, RandomDiceRoller,
    DiceConfig, FaceBound,
    Action, ActionRecord,
    GameState, Phase,
};

pub use crate::rules::{ChallengeOutcome, DiceLoss, RevealedHand, Verdict};

pub use crate::game::{BidAxis, Game, GameBuilder};

pub use crate::error::{GameError, Result};

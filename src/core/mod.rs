//! Core engine types: dice, bids, players, configuration, RNG, actions, state.
//!
//! Nothing here knows the bidding or challenge rules; those live in `rules`.

pub mod dice;
pub mod bid;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use dice::{Die, Hand, MAX_FACE};
pub use bid::Bid;
pub use player::{Player, PlayerFactory, PlayerId};
pub use rng::{DiceRng, DiceRngState, DiceRoller, RandomDiceRoller};
pub use config::{DiceConfig, FaceBound, DEFAULT_STARTING_HAND_COUNT};
pub use action::{Action, ActionRecord};
pub use state::{GameState, Phase};

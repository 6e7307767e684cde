//! Game rules: what counts as a raise, and what a challenge does.
//!
//! Both halves are plain functions over `GameState`; the `game` module
//! sequences them into a session.

pub mod bid_engine;
pub mod challenge;

pub use bid_engine::{count_choices, face_choices, is_valid_raise, legal_bids, validate_bid};
pub use challenge::{resolve_challenge, ChallengeOutcome, DiceLoss, RevealedHand, Verdict};

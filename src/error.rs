//! Typed errors returned by every fallible engine operation.
//!
//! No error is fatal: each one is reported back to the caller and leaves the
//! session exactly as it was before the call.

use thiserror::Error;

use crate::core::{Bid, PlayerId};

/// Errors produced by the rules engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Malformed input, such as a face outside 1-6 or a zero count.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A bid that does not raise the current bid.
    #[error("bid {candidate} is not a legal raise over {current:?}")]
    InvalidBid {
        candidate: Bid,
        current: Option<Bid>,
    },

    /// Operation attempted in a phase that forbids it.
    #[error("cannot {operation}: {reason}")]
    InvalidState {
        operation: &'static str,
        reason: &'static str,
    },

    /// No player with this id is on the roster.
    #[error("player {0} not found")]
    NotFound(PlayerId),
}

impl GameError {
    pub(crate) fn invalid_state(operation: &'static str, reason: &'static str) -> Self {
        Self::InvalidState { operation, reason }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::invalid_state("challenge", "no bid has been made this round");
        assert_eq!(err.to_string(), "cannot challenge: no bid has been made this round");

        let err = GameError::NotFound(PlayerId::new(7));
        assert_eq!(err.to_string(), "player #7 not found");

        let bid = Bid::new(3, 2).unwrap();
        let err = GameError::InvalidBid { candidate: bid, current: Some(bid) };
        assert!(err.to_string().starts_with("bid 2 x 3"));
    }
}

//! Player actions and the recorded history of a game.

use serde::{Deserialize, Serialize};

use super::bid::Bid;
use super::player::PlayerId;

/// Something the current player can do on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Raise the current bid.
    Bid(Bid),
    /// Call the previous player's bid.
    Challenge,
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Round the action belongs to (starts at 1).
    pub round: u32,

    /// Position in the whole game's history.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_record() {
        let bid = Bid::new(4, 2).unwrap();
        let record = ActionRecord::new(PlayerId::new(1), Action::Bid(bid), 3, 5);

        assert_eq!(record.player, PlayerId::new(1));
        assert_eq!(record.action, Action::Bid(bid));
        assert_eq!(record.round, 3);
        assert_eq!(record.sequence, 5);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(PlayerId::new(0), Action::Challenge, 2, 9);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}

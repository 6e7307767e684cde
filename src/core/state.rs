//! Game state: roster, turn pointer, bids and phase.
//!
//! ## Phases
//!
//! `Setup` → `InProgress` → `Finished`, never backward. The winner is
//! recorded exactly when the phase becomes `Finished`.
//!
//! ## Turn order
//!
//! Turn order is roster order. `next_index` and `prev_index` wrap around and
//! are inverses of each other for a fixed roster.
//!
//! The roster and history use `im` persistent vectors so the whole state
//! clones in O(1), which makes it cheap for a host to keep snapshots.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::bid::Bid;
use super::player::{Player, PlayerId};
use crate::error::{GameError, Result};

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Players are being added or removed.
    #[default]
    Setup,
    /// Bidding and challenging.
    InProgress,
    /// A winner has been found.
    Finished,
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) players: Vector<Player>,
    pub(crate) current: Option<usize>,
    pub(crate) current_bid: Option<Bid>,
    pub(crate) pending_bid: Bid,
    pub(crate) phase: Phase,
    pub(crate) winner: Option<Player>,
    pub(crate) round: u32,
    pub(crate) history: Vector<ActionRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create an empty state in `Setup`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            players: Vector::new(),
            current: None,
            current_bid: None,
            pending_bid: Bid::INITIAL,
            phase: Phase::Setup,
            winner: None,
            round: 1,
            history: Vector::new(),
        }
    }

    /// Create a `Setup` state from an existing roster.
    ///
    /// Fails with `InvalidArgument` if two players share an id.
    pub fn from_players(players: impl IntoIterator<Item = Player>) -> Result<Self> {
        let mut seen = FxHashSet::default();
        let mut state = Self::new();
        for player in players {
            if !seen.insert(player.id()) {
                return Err(GameError::InvalidArgument(format!(
                    "duplicate player id {}",
                    player.id()
                )));
            }
            state.players.push_back(player);
        }
        Ok(state)
    }

    // === Roster ===

    /// Active players in turn order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Number of active players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Roster position of a player.
    #[must_use]
    pub fn position(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id() == id)
    }

    /// Player at a roster position.
    #[must_use]
    pub fn player_at(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    // === Dice ===

    /// Dice on the table across all active players.
    #[must_use]
    pub fn total_dice(&self) -> u32 {
        self.players.iter().map(|p| p.dice_count() as u32).sum()
    }

    /// Dice showing `face` across all active players.
    #[must_use]
    pub fn count_face(&self, face: u8) -> u32 {
        self.players
            .iter()
            .map(|p| p.hand().count_face(face) as u32)
            .sum()
    }

    // === Turn order ===

    /// Roster position after `index`, wrapping.
    ///
    /// Returns `index` unchanged on an empty roster.
    #[must_use]
    pub fn next_index(&self, index: usize) -> usize {
        match self.players.len() {
            0 => index,
            len => (index + 1) % len,
        }
    }

    /// Roster position before `index`, wrapping.
    #[must_use]
    pub fn prev_index(&self, index: usize) -> usize {
        match self.players.len() {
            0 => index,
            len => (index % len + len - 1) % len,
        }
    }

    /// Roster position of the player whose turn it is.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.current.and_then(|i| self.players.get(i))
    }

    /// The player who acts after the current one.
    #[must_use]
    pub fn next_player(&self) -> Option<&Player> {
        self.current.and_then(|i| self.players.get(self.next_index(i)))
    }

    /// The player who acted before the current one.
    #[must_use]
    pub fn previous_player(&self) -> Option<&Player> {
        self.current.and_then(|i| self.players.get(self.prev_index(i)))
    }

    // === Bids and phase ===

    /// Highest bid of the round, if anyone has bid yet.
    #[must_use]
    pub fn current_bid(&self) -> Option<Bid> {
        self.current_bid
    }

    /// Bid the current player is composing.
    #[must_use]
    pub fn pending_bid(&self) -> Bid {
        self.pending_bid
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Winner, once the game is finished.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.as_ref()
    }

    /// Round number (starts at 1).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Every accepted bid and resolved challenge, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &ActionRecord> {
        self.history.iter()
    }

    // === Mutation (engine only) ===

    pub(crate) fn record(&mut self, player: PlayerId, action: Action, round: u32) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(player, action, round, sequence));
    }

    /// Clear the bids for a fresh round.
    pub(crate) fn reset_round(&mut self) {
        self.current_bid = None;
        self.pending_bid = Bid::INITIAL;
        self.round += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Hand;

    fn player(id: u32, faces: &[u8]) -> Player {
        Player::with_hand(
            PlayerId::new(id),
            format!("Player {}", id + 1),
            Hand::from_faces(faces).unwrap(),
        )
    }

    fn three_players() -> GameState {
        GameState::from_players([
            player(0, &[1, 1, 6]),
            player(1, &[6, 6, 2]),
            player(2, &[3, 3, 3]),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.phase(), Phase::Setup);
        assert_eq!(state.player_count(), 0);
        assert_eq!(state.pending_bid(), Bid::INITIAL);
        assert!(state.current_bid().is_none());
        assert!(state.current_player().is_none());
        assert!(state.winner().is_none());
        assert_eq!(state.round(), 1);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = GameState::from_players([player(0, &[1]), player(0, &[2])]);
        assert!(matches!(result, Err(GameError::InvalidArgument(_))));
    }

    #[test]
    fn test_dice_counts() {
        let state = three_players();
        assert_eq!(state.total_dice(), 9);
        assert_eq!(state.count_face(6), 3);
        assert_eq!(state.count_face(3), 3);
        assert_eq!(state.count_face(5), 0);
    }

    #[test]
    fn test_turn_order_wraps() {
        let state = three_players();
        assert_eq!(state.next_index(0), 1);
        assert_eq!(state.next_index(2), 0);
        assert_eq!(state.prev_index(0), 2);
        assert_eq!(state.prev_index(1), 0);
    }

    #[test]
    fn test_next_and_prev_are_inverse() {
        let state = three_players();
        for i in 0..state.player_count() {
            assert_eq!(state.prev_index(state.next_index(i)), i);
            assert_eq!(state.next_index(state.prev_index(i)), i);
        }
    }

    #[test]
    fn test_neighbours_of_current() {
        let mut state = three_players();
        state.current = Some(0);
        assert_eq!(state.next_player().map(Player::id), Some(PlayerId::new(1)));
        assert_eq!(state.previous_player().map(Player::id), Some(PlayerId::new(2)));
    }

    #[test]
    fn test_record_sequences() {
        let mut state = three_players();
        state.record(PlayerId::new(0), Action::Bid(Bid::INITIAL), 1);
        state.record(PlayerId::new(1), Action::Challenge, 1);

        let seqs: Vec<_> = state.history().map(|r| r.sequence).collect();
        assert_eq!(seqs, vec![0, 1]);
    }

    #[test]
    fn test_clone_is_independent() {
        let state = three_players();
        let mut snapshot = state.clone();
        snapshot.players.pop_back();
        assert_eq!(state.player_count(), 3);
        assert_eq!(snapshot.player_count(), 2);
    }
}

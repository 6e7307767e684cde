//! Players and the per-session factory that numbers them.
//!
//! ## PlayerId
//!
//! Sequential, never reused within a session: removing a player does not
//! free its id or its default-name ordinal.
//!
//! ## PlayerFactory
//!
//! Owns the numbering counter. Each session holds exactly one factory, so two
//! games running side by side never share numbering.

use serde::{Deserialize, Serialize};

use super::dice::Hand;
use super::rng::DiceRoller;

/// Player identifier, 0-based in creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A player and the dice they hold.
///
/// The hand is only changed through `reroll` and `remove_dice`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    hand: Hand,
}

impl Player {
    /// Create a player holding a specific hand.
    pub fn with_hand(id: PlayerId, name: impl Into<String>, hand: Hand) -> Self {
        Self {
            id,
            name: name.into(),
            hand,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Number of dice currently held.
    #[must_use]
    pub fn dice_count(&self) -> usize {
        self.hand.len()
    }

    /// True while the player still holds at least one die.
    #[must_use]
    pub fn has_dice(&self) -> bool {
        !self.hand.is_empty()
    }

    /// Replace the hand with fresh dice, keeping its size.
    pub fn reroll<R: DiceRoller + ?Sized>(&mut self, roller: &mut R) {
        let size = self.hand.len();
        self.hand = roller.roll(size);
        debug_assert_eq!(self.hand.len(), size, "roller changed hand size");
    }

    /// Lose `n` dice, clamped at an empty hand.
    ///
    /// Returns how many dice were actually lost.
    pub fn remove_dice(&mut self, n: usize) -> usize {
        self.hand.remove(n)
    }
}

/// Issues player ids and default names for one session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerFactory {
    issued: u32,
}

impl PlayerFactory {
    /// Create a factory that has issued nothing yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How many players this factory has created.
    #[must_use]
    pub fn issued(&self) -> u32 {
        self.issued
    }

    /// Create the next player and roll their starting hand.
    ///
    /// Without a name, or with a blank one, the player is called "Player N",
    /// N being the 1-based creation ordinal.
    pub fn create<R: DiceRoller + ?Sized>(
        &mut self,
        name: Option<&str>,
        hand_size: usize,
        roller: &mut R,
    ) -> Player {
        let id = PlayerId(self.issued);
        self.issued += 1;

        let name = match name.filter(|n| !n.trim().is_empty()) {
            Some(name) => name.to_string(),
            None => format!("Player {}", self.issued),
        };

        Player::with_hand(id, name, roller.roll(hand_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FaceBound, RandomDiceRoller};

    fn roller() -> RandomDiceRoller {
        RandomDiceRoller::new(42, FaceBound::HandSizePlusOne)
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(PlayerId::new(3).to_string(), "#3");
        assert_eq!(PlayerId::new(3).raw(), 3);
    }

    #[test]
    fn test_factory_numbering() {
        let mut factory = PlayerFactory::new();
        let mut roller = roller();

        let p1 = factory.create(None, 5, &mut roller);
        let p2 = factory.create(Some("Alice"), 5, &mut roller);
        let p3 = factory.create(None, 5, &mut roller);

        assert_eq!(p1.id(), PlayerId::new(0));
        assert_eq!(p1.name(), "Player 1");
        assert_eq!(p2.id(), PlayerId::new(1));
        assert_eq!(p2.name(), "Alice");
        assert_eq!(p3.id(), PlayerId::new(2));
        assert_eq!(p3.name(), "Player 3");
        assert_eq!(factory.issued(), 3);
    }

    #[test]
    fn test_blank_name_gets_default() {
        let mut factory = PlayerFactory::new();
        let mut roller = roller();

        let p1 = factory.create(Some(""), 5, &mut roller);
        let p2 = factory.create(Some("   "), 5, &mut roller);
        let p3 = factory.create(Some(" Bo "), 5, &mut roller);

        assert_eq!(p1.name(), "Player 1");
        assert_eq!(p2.name(), "Player 2");
        assert_eq!(p3.name(), " Bo ");
    }

    #[test]
    fn test_separate_factories_do_not_share_numbering() {
        let mut roller = roller();
        let mut a = PlayerFactory::new();
        let mut b = PlayerFactory::new();

        a.create(None, 5, &mut roller);
        a.create(None, 5, &mut roller);
        let first_of_b = b.create(None, 5, &mut roller);

        assert_eq!(first_of_b.id(), PlayerId::new(0));
        assert_eq!(first_of_b.name(), "Player 1");
    }

    #[test]
    fn test_starting_hand() {
        let mut factory = PlayerFactory::new();
        let player = factory.create(None, 5, &mut roller());
        assert_eq!(player.dice_count(), 5);
        assert!(player.has_dice());
    }

    #[test]
    fn test_reroll_keeps_size() {
        let mut roller = roller();
        let mut player = PlayerFactory::new().create(None, 5, &mut roller);

        player.remove_dice(2);
        player.reroll(&mut roller);
        assert_eq!(player.dice_count(), 3);
        assert!(player.hand().faces().all(|f| (1..=4).contains(&f)));
    }

    #[test]
    fn test_reroll_empty_stays_empty() {
        let mut roller = roller();
        let mut player = Player::with_hand(PlayerId::new(0), "Empty", Hand::new());
        player.reroll(&mut roller);
        assert!(!player.has_dice());
    }

    #[test]
    fn test_remove_dice() {
        let hand = Hand::from_faces(&[1, 2, 3]).unwrap();
        let mut player = Player::with_hand(PlayerId::new(0), "P", hand);

        assert_eq!(player.remove_dice(1), 1);
        assert_eq!(player.dice_count(), 2);
        assert_eq!(player.remove_dice(10), 2);
        assert!(!player.has_dice());
    }
}

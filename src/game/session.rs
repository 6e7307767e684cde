//! A single game session.

use tracing::{debug, info, warn};

use crate::core::{
    Action, ActionRecord, Bid, DiceConfig, DiceRng, DiceRoller, FaceBound, GameState, Phase,
    Player, PlayerFactory, PlayerId, RandomDiceRoller,
};
use crate::error::{GameError, Result};
use crate::rules::{self, ChallengeOutcome};

/// Which half of a bid a selector is choosing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BidAxis {
    Face,
    Count,
}

/// One Liar's Dice game.
///
/// Owns the rules state, the player factory (and with it the numbering
/// counter), and the dice roller. All mutation goes through the methods
/// here; a failed call leaves the game unchanged.
#[derive(Clone, Debug)]
pub struct Game<R = RandomDiceRoller> {
    config: DiceConfig,
    factory: PlayerFactory,
    roller: R,
    state: GameState,
}

/// Builder for creating a `Game` with the default roller.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: DiceConfig,
    seed: Option<u64>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole config.
    pub fn config(mut self, config: DiceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn starting_hand_count(mut self, count: u32) -> Self {
        self.config.starting_hand_count = count;
        self
    }

    pub fn face_bound(mut self, face_bound: FaceBound) -> Self {
        self.config.face_bound = face_bound;
        self
    }

    /// Seed the dice for a reproducible game.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the game in `Setup`.
    pub fn build(self) -> Result<Game> {
        let rng = match self.seed {
            Some(seed) => DiceRng::new(seed),
            None => DiceRng::from_entropy(),
        };
        let roller = RandomDiceRoller::from_rng(rng, self.config.face_bound);
        Game::with_roller(self.config, roller)
    }
}

impl Game {
    /// Create a game with randomly seeded dice.
    pub fn new(config: DiceConfig) -> Result<Self> {
        GameBuilder::new().config(config).build()
    }
}

impl<R: DiceRoller> Game<R> {
    /// Create a game that rolls through `roller`.
    pub fn with_roller(config: DiceConfig, roller: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            factory: PlayerFactory::new(),
            roller,
            state: GameState::new(),
        })
    }

    // === Setup ===

    /// Add a player with a freshly rolled starting hand.
    ///
    /// Only allowed during `Setup`.
    pub fn add_player(&mut self, name: Option<&str>) -> Result<PlayerId> {
        self.require_phase(Phase::Setup, "add player", "game has already started")?;

        let hand_size = self.config.starting_hand_count as usize;
        let player = self.factory.create(name, hand_size, &mut self.roller);
        let id = player.id();
        debug!(player = %id, name = player.name(), "player added");
        self.state.players.push_back(player);
        Ok(id)
    }

    /// Remove a player before the game starts.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<()> {
        self.require_phase(Phase::Setup, "remove player", "game has already started")?;

        let Some(index) = self.state.position(id) else {
            warn!(player = %id, "remove requested for unknown player");
            return Err(GameError::NotFound(id));
        };
        self.state.players.remove(index);
        debug!(player = %id, "player removed");
        Ok(())
    }

    /// Move from `Setup` to `InProgress`.
    ///
    /// The turn goes to the player after whoever already held it, or to the
    /// first player. Calling it again while the game is in progress is a
    /// no-op; a finished game cannot be restarted.
    ///
    /// Starting needs at least two players. This is a product rule: a running
    /// game only requires one player holding dice, but a game is never
    /// started with fewer than two.
    pub fn start(&mut self) -> Result<()> {
        match self.state.phase {
            Phase::InProgress => {
                debug!("start requested for a game already in progress");
                return Ok(());
            }
            Phase::Finished => {
                return Err(GameError::invalid_state("start", "game has already finished"));
            }
            Phase::Setup => {}
        }
        if self.state.player_count() < 2 {
            return Err(GameError::invalid_state("start", "at least two players are needed"));
        }

        let first = self.state.current.map_or(0, |i| self.state.next_index(i));
        let Some(first_id) = self.state.player_at(first).map(Player::id) else {
            return Err(GameError::invalid_state("start", "turn pointer is outside the roster"));
        };
        self.state.current = Some(first);
        self.state.phase = Phase::InProgress;
        self.state.pending_bid = Bid::INITIAL;
        info!(
            players = self.state.player_count(),
            first = %first_id,
            "game started"
        );
        Ok(())
    }

    // === Bidding ===

    /// Values to offer in a bid selector.
    ///
    /// Faces run from the current bid's face (or 1) to 6. Counts run from the
    /// current bid's count (or 1) to the dice on the table, or to the dice
    /// showing `filter_face` when given.
    #[must_use]
    pub fn bid_range(&self, axis: BidAxis, filter_face: Option<u8>) -> Vec<u32> {
        let current = self.state.current_bid;
        match axis {
            BidAxis::Face => rules::face_choices(current).map(u32::from).collect(),
            BidAxis::Count => {
                let max = match filter_face {
                    Some(face) => self.state.count_face(face),
                    None => self.state.total_dice(),
                };
                rules::count_choices(current, max).collect()
            }
        }
    }

    /// Set the bid the current player is composing.
    pub fn set_pending_bid(&mut self, bid: Bid) -> Result<()> {
        self.require_phase(Phase::InProgress, "compose bid", "game is not in progress")?;
        self.state.pending_bid = bid;
        Ok(())
    }

    /// Place a bid for the current player.
    ///
    /// On success the bid becomes the current bid and the turn passes on.
    pub fn submit_bid(&mut self, candidate: Bid) -> Result<()> {
        self.require_phase(Phase::InProgress, "bid", "game is not in progress")?;
        let current_idx = self
            .state
            .current
            .ok_or_else(|| GameError::invalid_state("bid", "no player has the turn"))?;

        if let Err(err) = rules::validate_bid(self.state.current_bid, candidate) {
            debug!(bid = %candidate, current = ?self.state.current_bid, "bid rejected");
            return Err(err);
        }

        let bidder = self
            .state
            .player_at(current_idx)
            .map(Player::id)
            .ok_or_else(|| GameError::invalid_state("bid", "turn pointer is outside the roster"))?;
        let next = self.state.next_index(current_idx);
        let next_id = self.state.player_at(next).map(Player::id);
        self.state.current_bid = Some(candidate);
        self.state.current = Some(next);
        self.state.pending_bid = Bid::INITIAL;
        self.state.record(bidder, Action::Bid(candidate), self.state.round);
        debug!(
            player = %bidder,
            bid = %candidate,
            next = ?next_id,
            "bid placed"
        );
        Ok(())
    }

    /// Submit whatever the current player has composed.
    pub fn submit_pending_bid(&mut self) -> Result<()> {
        self.submit_bid(self.state.pending_bid)
    }

    /// Call the current bid.
    pub fn challenge(&mut self) -> Result<ChallengeOutcome> {
        let outcome = rules::resolve_challenge(&mut self.state, &mut self.roller)?;
        self.state
            .record(outcome.challenger, Action::Challenge, outcome.round);
        Ok(outcome)
    }

    /// Everything the current player may do right now.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.state.phase != Phase::InProgress {
            return Vec::new();
        }

        let current = self.state.current_bid;
        let mut actions: Vec<Action> = rules::legal_bids(current, self.state.total_dice())
            .into_iter()
            .map(Action::Bid)
            .collect();
        if current.is_some() {
            actions.push(Action::Challenge);
        }
        actions
    }

    /// Apply an action for the current player.
    ///
    /// Returns the challenge outcome when the action was a challenge.
    pub fn apply(&mut self, action: Action) -> Result<Option<ChallengeOutcome>> {
        match action {
            Action::Bid(bid) => self.submit_bid(bid).map(|()| None),
            Action::Challenge => self.challenge().map(Some),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &DiceConfig {
        &self.config
    }

    /// The full rules state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The roller dice are drawn from.
    #[must_use]
    pub fn roller(&self) -> &R {
        &self.roller
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.state.players()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.state.player(id)
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.state.current_player()
    }

    #[must_use]
    pub fn previous_player(&self) -> Option<&Player> {
        self.state.previous_player()
    }

    #[must_use]
    pub fn next_player(&self) -> Option<&Player> {
        self.state.next_player()
    }

    #[must_use]
    pub fn current_bid(&self) -> Option<Bid> {
        self.state.current_bid()
    }

    #[must_use]
    pub fn pending_bid(&self) -> Bid {
        self.state.pending_bid()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.state.winner()
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.state.round()
    }

    #[must_use]
    pub fn total_dice(&self) -> u32 {
        self.state.total_dice()
    }

    #[must_use]
    pub fn count_face(&self, face: u8) -> u32 {
        self.state.count_face(face)
    }

    pub fn history(&self) -> impl Iterator<Item = &ActionRecord> {
        self.state.history()
    }

    fn require_phase(&self, phase: Phase, operation: &'static str, reason: &'static str) -> Result<()> {
        if self.state.phase == phase {
            Ok(())
        } else {
            Err(GameError::invalid_state(operation, reason))
        }
    }
}

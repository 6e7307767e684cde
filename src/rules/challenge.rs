//! Challenge resolution.
//!
//! When the current player calls, every hand is revealed and the dice
//! showing the bid face are counted. Comparing the bid count with that total
//! decides who loses dice:
//!
//! | bid count vs. dice | loser                              | dice lost |
//! |--------------------|------------------------------------|-----------|
//! | greater            | the bidder (previous player)       | delta     |
//! | equal              | everyone except the bidder         | 1 each    |
//! | less               | the challenger (current player)    | delta     |
//!
//! Afterwards the bidder takes the turn, empty hands leave the roster, and
//! either one player is left and wins, or everyone rerolls for a new round.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{Bid, DiceRoller, GameState, Hand, Phase, Player, PlayerId};
use crate::error::{GameError, Result};

/// How the bid compared with the revealed dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The bid claimed more dice than exist.
    BidTooHigh,
    /// The bid was exactly right.
    Exact,
    /// The bid was honest and the challenge was wrong.
    BidTooLow,
}

impl Verdict {
    /// Compare a bid count with the actual number of matching dice.
    #[must_use]
    pub fn of(bid_count: u32, dice_count: u32) -> Self {
        match bid_count.cmp(&dice_count) {
            Ordering::Greater => Verdict::BidTooHigh,
            Ordering::Equal => Verdict::Exact,
            Ordering::Less => Verdict::BidTooLow,
        }
    }
}

/// Dice a single player lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceLoss {
    pub player: PlayerId,
    pub dice: u32,
}

/// A hand as it was when the challenge revealed it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedHand {
    pub player: PlayerId,
    pub hand: Hand,
}

/// Everything a host needs to present a resolved challenge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeOutcome {
    /// Round the challenge ended.
    pub round: u32,
    /// The bid being challenged.
    pub bid: Bid,
    /// Who made the bid.
    pub bidder: PlayerId,
    /// Who called it.
    pub challenger: PlayerId,
    /// Hands before any dice were lost.
    pub revealed: Vec<RevealedHand>,
    /// Dice showing the bid face.
    pub dice_count: u32,
    /// `|dice_count - bid.count|`.
    pub delta: u32,
    pub verdict: Verdict,
    /// Dice actually lost, in roster order.
    pub losses: Vec<DiceLoss>,
    /// Players whose hands emptied, in roster order.
    pub eliminated: Vec<PlayerId>,
    /// Whose turn it is now; `None` once the game is over.
    pub next_player: Option<PlayerId>,
    /// Set when this challenge ended the game.
    pub winner: Option<PlayerId>,
}

/// Resolve a challenge against the current bid and apply the result.
///
/// Fails with `InvalidState`, leaving `state` untouched, unless the game is
/// in progress and a bid has been made this round.
pub fn resolve_challenge<R: DiceRoller + ?Sized>(
    state: &mut GameState,
    roller: &mut R,
) -> Result<ChallengeOutcome> {
    if state.phase != Phase::InProgress {
        return Err(GameError::invalid_state("challenge", "game is not in progress"));
    }
    let bid = state
        .current_bid
        .ok_or_else(|| GameError::invalid_state("challenge", "no bid has been made this round"))?;
    let current_idx = state
        .current
        .ok_or_else(|| GameError::invalid_state("challenge", "no player has the turn"))?;

    let challenger = state
        .players
        .get(current_idx)
        .map(Player::id)
        .ok_or_else(|| GameError::invalid_state("challenge", "turn pointer is outside the roster"))?;
    let bidder_idx = state.prev_index(current_idx);
    let bidder = state
        .players
        .get(bidder_idx)
        .map(Player::id)
        .ok_or_else(|| GameError::invalid_state("challenge", "turn pointer is outside the roster"))?;

    let revealed: Vec<RevealedHand> = state
        .players
        .iter()
        .map(|p| RevealedHand {
            player: p.id(),
            hand: p.hand().clone(),
        })
        .collect();

    let dice_count = state.count_face(bid.face());
    let delta = dice_count.abs_diff(bid.count());
    let verdict = Verdict::of(bid.count(), dice_count);

    let mut losses = Vec::new();
    for idx in 0..state.players.len() {
        let lost = match verdict {
            Verdict::BidTooHigh if idx == bidder_idx => delta,
            Verdict::Exact if idx != bidder_idx => 1,
            Verdict::BidTooLow if idx == current_idx => delta,
            _ => continue,
        };
        let player = &mut state.players[idx];
        let removed = player.remove_dice(lost as usize) as u32;
        losses.push(DiceLoss {
            player: player.id(),
            dice: removed,
        });
    }

    // The bidder takes the turn. If the bidder went out, it passes to the
    // next survivor after them in the old seating.
    let order: Vec<PlayerId> = state.players.iter().map(|p| p.id()).collect();
    state.players.retain(|p| p.has_dice());
    let eliminated: Vec<PlayerId> = order
        .iter()
        .copied()
        .filter(|&id| state.position(id).is_none())
        .collect();
    let next_idx = (0..order.len())
        .map(|k| order[(bidder_idx + k) % order.len()])
        .find_map(|id| state.position(id));

    let round = state.round;
    for &id in &eliminated {
        info!(player = %id, round, "player eliminated");
    }

    if state.players.len() <= 1 {
        let winner = state.players.front().cloned();
        debug_assert!(winner.is_some(), "challenge eliminated every player");
        let winner_id = winner.as_ref().map(|p| p.id());
        state.current = next_idx;
        state.phase = Phase::Finished;
        state.winner = winner;
        info!(winner = ?winner_id, round, "game over");

        return Ok(ChallengeOutcome {
            round,
            bid,
            bidder,
            challenger,
            revealed,
            dice_count,
            delta,
            verdict,
            losses,
            eliminated,
            next_player: None,
            winner: winner_id,
        });
    }

    for player in state.players.iter_mut() {
        player.reroll(&mut *roller);
    }
    state.current = next_idx;
    state.reset_round();

    let next_player = next_idx.map(|i| state.players[i].id());
    info!(
        round,
        bid = %bid,
        dice_count,
        ?verdict,
        bidder = %bidder,
        challenger = %challenger,
        "challenge resolved"
    );

    Ok(ChallengeOutcome {
        round,
        bid,
        bidder,
        challenger,
        revealed,
        dice_count,
        delta,
        verdict,
        losses,
        eliminated,
        next_player,
        winner: None,
    })
}

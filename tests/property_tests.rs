//! Property tests for dice, bids, turn order and termination.

use proptest::prelude::*;

use liars_dice::core::{
    Bid, DiceRoller, FaceBound, GameState, Hand, Phase, Player, PlayerId, RandomDiceRoller,
};
use liars_dice::game::GameBuilder;
use liars_dice::rules::is_valid_raise;

fn arb_bid() -> impl Strategy<Value = Bid> {
    (1u8..=6, 1u32..=30).prop_map(|(face, count)| Bid::new(face, count).unwrap())
}

fn arb_hand() -> impl Strategy<Value = Hand> {
    prop::collection::vec(1u8..=6, 0..=8).prop_map(|faces| Hand::from_faces(&faces).unwrap())
}

proptest! {
    /// Property: removing dice shrinks the hand by exactly n, or empties it.
    #[test]
    fn prop_remove_dice_clamps(hand in arb_hand(), n in 0usize..12) {
        let size = hand.len();
        let mut player = Player::with_hand(PlayerId::new(0), "P", hand);

        player.remove_dice(n);

        if n >= size {
            prop_assert_eq!(player.dice_count(), 0);
        } else {
            prop_assert_eq!(player.dice_count(), size - n);
        }
    }

    /// Property: rerolling keeps the hand size and stays inside the face bound.
    #[test]
    fn prop_reroll_keeps_size(hand in arb_hand(), seed in any::<u64>(), standard in any::<bool>()) {
        let bound = if standard { FaceBound::Standard } else { FaceBound::HandSizePlusOne };
        let mut roller = RandomDiceRoller::new(seed, bound);
        let size = hand.len();
        let mut player = Player::with_hand(PlayerId::new(0), "P", hand);

        player.reroll(&mut roller);

        prop_assert_eq!(player.dice_count(), size);
        let upper = bound.upper_for(size);
        prop_assert!(player.hand().faces().all(|f| (1..=upper).contains(&f)));
    }

    /// Property: a raise never lowers either axis and is never equal.
    #[test]
    fn prop_raise_is_strict_monotone(current in arb_bid(), candidate in arb_bid()) {
        let valid = is_valid_raise(Some(current), candidate);
        let expected = candidate.face() >= current.face()
            && candidate.count() >= current.count()
            && candidate != current;
        prop_assert_eq!(valid, expected);
    }

    /// Property: next and previous are inverses on a stable roster.
    #[test]
    fn prop_next_prev_inverse(players in 1usize..10, index in 0usize..10) {
        let roster = (0..players as u32)
            .map(|id| Player::with_hand(PlayerId::new(id), "P", Hand::from_faces(&[1]).unwrap()));
        let state = GameState::from_players(roster).unwrap();
        let index = index % players;

        prop_assert_eq!(state.prev_index(state.next_index(index)), index);
        prop_assert_eq!(state.next_index(state.prev_index(index)), index);
    }

    /// Property: a two-player game always ends with one player left.
    #[test]
    fn prop_two_player_game_terminates(seed in any::<u64>(), face in 1u8..=6) {
        let mut game = GameBuilder::new().seed(seed).build().unwrap();
        game.add_player(None).unwrap();
        game.add_player(None).unwrap();
        game.start().unwrap();

        let mut challenges = 0;
        while game.phase() == Phase::InProgress {
            game.submit_bid(Bid::new(face, 1).unwrap()).unwrap();
            game.challenge().unwrap();
            challenges += 1;
            prop_assert!(challenges <= 10, "each challenge costs at least one die");
        }

        prop_assert_eq!(game.phase(), Phase::Finished);
        prop_assert_eq!(game.players().count(), 1);
        prop_assert!(game.winner().is_some());
    }

    /// Property: ids and default names are never reused within a session.
    #[test]
    fn prop_ids_never_reused(ops in prop::collection::vec(any::<bool>(), 1..30)) {
        let mut game = GameBuilder::new().seed(0).build().unwrap();
        let mut issued = Vec::new();

        for add in ops {
            if add || issued.is_empty() {
                let id = game.add_player(None).unwrap();
                prop_assert!(!issued.contains(&id));
                prop_assert_eq!(game.player(id).unwrap().name(), format!("Player {}", id.raw() + 1));
                issued.push(id);
            } else {
                let first = game.players().next().map(|p| p.id());
                if let Some(id) = first {
                    game.remove_player(id).unwrap();
                }
            }
        }
    }

    /// Property: rolled hands have exactly the requested size.
    #[test]
    fn prop_roll_size(size in 0usize..20, seed in any::<u64>()) {
        let mut roller = RandomDiceRoller::new(seed, FaceBound::HandSizePlusOne);
        prop_assert_eq!(roller.roll(size).len(), size);
    }
}

//! Liar's Dice sessions.
//!
//! A `Game` is what a presentation layer talks to: it adds and removes
//! players, starts play, takes bids and challenges, and answers read-only
//! queries. Each game owns its own player numbering and dice source.
//!
//! ```
//! use liars_dice::core::{Bid, Phase};
//! use liars_dice::game::GameBuilder;
//!
//! let mut game = GameBuilder::new().seed(7).build().unwrap();
//! game.add_player(None).unwrap();
//! game.add_player(Some("Ann")).unwrap();
//! game.start().unwrap();
//!
//! game.submit_bid(Bid::new(3, 2).unwrap()).unwrap();
//! let outcome = game.challenge().unwrap();
//! assert_eq!(outcome.bid, Bid::new(3, 2).unwrap());
//! assert!(matches!(game.phase(), Phase::InProgress | Phase::Finished));
//! ```

mod session;

pub use session::{BidAxis, Game, GameBuilder};

//! A validation engine for append-only blackjack game chains, with optional
//! `no_std` support.
//!
//! A game is recorded as linked, immutable records: a [`GameRecord`], a bet
//! chain of [`BetRecord`]s and a turn chain of [`TurnRecord`]s. Every party
//! holds its own copy of the chain and runs the same pure validators over a
//! proposed extension, so a record is only accepted when everyone reaches the
//! same verdict independently. Cards are derived from record ids, never
//! stored, which keeps the whole engine deterministic and free of shared
//! state.
//!
//! # Example
//!
//! ```no_run
//! use bjchain::{ChainStore, GameRecord, PartyId, RecordId, validate_game_creation};
//!
//! let game = GameRecord {
//!     id: RecordId::new([1; 32]),
//!     minimal_bet: 10,
//!     participants: vec![PartyId::new([2; 32]), PartyId::new([3; 32])],
//! };
//! assert!(validate_game_creation(&game).is_ok());
//!
//! let mut store = ChainStore::new();
//! store.insert_game(game);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod cache;
pub mod card;
pub mod chain;
pub mod error;
pub mod hand;
pub mod record;
mod sync;
pub mod turn;
pub mod validate;

// Re-export main types
pub use cache::ReplayCache;
pub use card::{Card, DECK_SIZE, Suit};
pub use chain::{ChainError, ChainStore};
pub use error::{BetViolation, GameViolation, TurnViolation};
pub use hand::{BLACKJACK, DEALER_STAND_MIN, INITIAL_CARDS, Replay, score};
pub use record::{Actor, BetRecord, GameRecord, PartyId, RecordId, TurnRecord, TurnType};
pub use turn::next_actor;
pub use validate::{validate_bet_extension, validate_game_creation, validate_turn_extension};

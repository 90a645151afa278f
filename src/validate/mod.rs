//! Chain validators.
//!
//! Three independent rule sets, one per kind of chain extension. Each
//! validator receives the proposed record together with the already-resolved
//! prior records and the identities that signed the proposal, evaluates every
//! applicable rule, and returns the full list of violations on rejection.
//! The functions are pure: the same snapshot and proposal produce the same
//! verdict on every party's node.

mod bet;
mod game;
mod turn;

pub use bet::validate_bet_extension;
pub use game::validate_game_creation;
pub use turn::validate_turn_extension;

//! Violation types reported by the chain validators.
//!
//! A failed rule never raises an exception-style error: each validator
//! evaluates every rule that applies to a proposal and returns the complete
//! list of violated ones, so the proposer can fix all of them at once.

use thiserror::Error;

use crate::chain::ChainError;

/// Violations of the game-creation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameViolation {
    /// The minimal bet is zero or negative.
    #[error("the minimal bet must be positive")]
    NonPositiveMinimalBet,
    /// The minimal bet is odd.
    #[error("the minimal bet must be even")]
    OddMinimalBet,
    /// The participant list is empty.
    #[error("the game needs at least one participant")]
    EmptyParticipants,
    /// A party appears more than once in the participant list.
    #[error("each participant may appear only once")]
    DuplicateParticipant,
}

/// Violations of the bet-chain rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetViolation {
    /// The bet amount is zero or negative.
    #[error("the bet must be positive")]
    NonPositiveBet,
    /// The bet amount is odd.
    #[error("the bet must be even")]
    OddBet,
    /// The betting player did not sign the proposal.
    #[error("the betting player must be a signer")]
    WrongSigner,
    /// The bet references a different game than its predecessor or the
    /// consumed game record.
    #[error("all bets of the chain must be for the same game")]
    GameMismatch,
    /// The participant snapshot differs from the rest of the game.
    #[error("participants must remain the same during the whole game")]
    ParticipantMismatch,
    /// The player already placed a bet earlier in the chain.
    #[error("a player can place only one bet")]
    DuplicatePlayerBet,
    /// The proposed record does not link to the consumed chain head.
    #[error("the bet must extend the consumed chain head")]
    StructuralChainMismatch,
    /// The prior chain could not be reconstructed from the snapshot.
    #[error(transparent)]
    Chain(#[from] ChainError),
}

/// Violations of the turn-chain rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnViolation {
    /// The claimed actor is not the one the turn-order machine expects.
    #[error("it must be the turn of the current player")]
    OutOfTurn,
    /// A hit or stand was not signed by the acting player.
    #[error("only the current player can hit or stand")]
    WrongSigner,
    /// The consumed bet chain does not cover every participant yet.
    #[error("all players must have placed a bet before dealing")]
    BetChainIncomplete,
    /// The first turn of a chain must be a deal.
    #[error("the first turn must be a deal")]
    FirstTurnNotDeal,
    /// The acting player still needs automatic cards, so only a deal is
    /// allowed.
    #[error("only a deal is allowed until the actor holds their initial cards")]
    DealExpected,
    /// The acting player already holds their initial cards, so only a hit or
    /// stand is allowed.
    #[error("only a hit or stand is allowed once the initial cards are dealt")]
    HitOrStandExpected,
    /// The dealer already holds a card and may not be dealt another.
    #[error("only a hit is allowed for the dealer once they hold a card")]
    DealerAlreadyHolding,
    /// The dealer is mechanical and may never stand.
    #[error("the dealer cannot stand")]
    IllegalStandByDealer,
    /// The dealer already reached the standing threshold; the game is over
    /// and no turn may be appended.
    #[error("the game is finished once the dealer reaches the threshold")]
    DealerThresholdReached,
    /// The participant snapshot differs from the rest of the game.
    #[error("participants must remain the same during the whole game")]
    ParticipantMismatch,
    /// The proposed record does not link to the consumed prior records.
    #[error("the turn must extend the consumed chain head")]
    StructuralChainMismatch,
    /// The prior chain could not be reconstructed from the snapshot.
    #[error(transparent)]
    Chain(#[from] ChainError),
}

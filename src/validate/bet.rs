use alloc::vec::Vec;

use crate::chain::ChainStore;
use crate::error::BetViolation;
use crate::record::{BetRecord, GameRecord, PartyId};

/// Validates a proposed [`BetRecord`] against the chain it extends.
///
/// `previous` is the consumed head of the bet chain, or `None` when this is
/// the first bet of the game; `game` is the game record the chain was opened
/// for. `signers` are the identities that signed the proposal.
///
/// # Errors
///
/// Returns every violated bet rule: the amount must be positive and even and
/// signed by the betting player; the bet must reference the same game and
/// carry the same participant snapshot as the chain it extends; its
/// `previous` link must reference the consumed head exactly; and no player
/// may bet twice in one chain.
pub fn validate_bet_extension(
    store: &ChainStore,
    proposed: &BetRecord,
    previous: Option<&BetRecord>,
    game: &GameRecord,
    signers: &[PartyId],
) -> Result<(), Vec<BetViolation>> {
    let mut violations = Vec::new();

    if proposed.amount <= 0 {
        violations.push(BetViolation::NonPositiveBet);
    }
    if proposed.amount % 2 != 0 {
        violations.push(BetViolation::OddBet);
    }
    if !signers.contains(&proposed.player) {
        violations.push(BetViolation::WrongSigner);
    }

    match previous {
        None => {
            if proposed.game != game.id {
                violations.push(BetViolation::GameMismatch);
            }
            if proposed.participants != game.participants {
                violations.push(BetViolation::ParticipantMismatch);
            }
            if proposed.previous.is_some() {
                violations.push(BetViolation::StructuralChainMismatch);
            }
        }
        Some(prev) => {
            if proposed.game != prev.game {
                violations.push(BetViolation::GameMismatch);
            }
            if proposed.participants != prev.participants {
                violations.push(BetViolation::ParticipantMismatch);
            }
            if proposed.previous != Some(prev.id) {
                violations.push(BetViolation::StructuralChainMismatch);
            }
            match store.bet_chain(&prev.id) {
                Ok(chain) => {
                    if chain.iter().any(|bet| bet.player == proposed.player) {
                        violations.push(BetViolation::DuplicatePlayerBet);
                    }
                }
                Err(err) => violations.push(err.into()),
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

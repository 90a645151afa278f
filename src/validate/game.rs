use alloc::vec::Vec;

use crate::error::GameViolation;
use crate::record::{GameRecord, PartyId};

pub(crate) fn has_duplicate(parties: &[PartyId]) -> bool {
    parties
        .iter()
        .enumerate()
        .any(|(i, party)| parties[..i].contains(party))
}

/// Validates a proposed [`GameRecord`].
///
/// # Errors
///
/// Returns every violated game-creation rule: the minimal bet must be
/// positive and even, and the participant list must be non-empty with each
/// party seated only once.
pub fn validate_game_creation(proposed: &GameRecord) -> Result<(), Vec<GameViolation>> {
    let mut violations = Vec::new();

    if proposed.minimal_bet <= 0 {
        violations.push(GameViolation::NonPositiveMinimalBet);
    }
    if proposed.minimal_bet % 2 != 0 {
        violations.push(GameViolation::OddMinimalBet);
    }
    if proposed.participants.is_empty() {
        violations.push(GameViolation::EmptyParticipants);
    }
    if has_duplicate(&proposed.participants) {
        violations.push(GameViolation::DuplicateParticipant);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

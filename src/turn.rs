//! Turn-order state machine.

use crate::chain::{ChainError, ChainStore};
use crate::hand::Replay;
use crate::record::{Actor, PartyId, RecordId};

/// Determines whose action is expected after the turn chain ending at `head`.
///
/// With no previous turn the first participant acts. Otherwise the verdict is
/// computed from the replayed chain: see [`Replay::expected_actor`] for the
/// transition rules. `Ok(None)` means nobody may act — the round is over.
///
/// Note that a non-empty chain carries its own participant snapshot; the
/// `participants` argument decides the first actor of a fresh chain.
///
/// # Errors
///
/// Returns a [`ChainError`] when the snapshot does not contain a well-formed
/// chain ending at `head`.
pub fn next_actor(
    store: &ChainStore,
    head: Option<&RecordId>,
    participants: &[PartyId],
) -> Result<Option<Actor>, ChainError> {
    match head {
        None => Ok(participants.first().copied().map(Actor::Player)),
        Some(id) => Ok(Replay::from_chain(store, id)?.expected_actor()),
    }
}

//! Immutable record arena and chain traversal.
//!
//! The substrate resolves and authenticates records before handing them to
//! the engine; this module only materializes them into a snapshot the pure
//! validation functions can walk. Records are addressed by id and each bet or
//! turn holds the id of its predecessor, so traversal needs no ownership
//! links between records.

use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use thiserror::Error;

use crate::record::{BetRecord, GameRecord, RecordId, TurnRecord};

/// Chain integrity failures.
///
/// These are substrate-level defects, not rule violations: a well-formed
/// snapshot of an accepted chain never produces them. Traversal is bounded by
/// the snapshot size so a corrupt snapshot is reported instead of looping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChainError {
    /// A referenced record is not present in the snapshot.
    #[error("referenced record is missing from the snapshot")]
    MissingRecord(RecordId),
    /// A chain is longer than the snapshot holds records, so the predecessor
    /// references must form a cycle.
    #[error("chain traversal exceeded the snapshot size")]
    CircularChain,
    /// A turn record exists past the point where the round already finished.
    #[error("turn recorded after the round finished")]
    TurnAfterFinish,
}

/// A read-only snapshot of resolved chain records.
///
/// Validation over a snapshot is referentially transparent: the same snapshot
/// and the same proposal produce the same verdict on every party's node.
#[derive(Debug, Clone, Default)]
pub struct ChainStore {
    games: HashMap<RecordId, GameRecord>,
    bets: HashMap<RecordId, BetRecord>,
    turns: HashMap<RecordId, TurnRecord>,
}

impl ChainStore {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a game record to the snapshot.
    pub fn insert_game(&mut self, game: GameRecord) {
        self.games.insert(game.id, game);
    }

    /// Adds a bet record to the snapshot.
    pub fn insert_bet(&mut self, bet: BetRecord) {
        self.bets.insert(bet.id, bet);
    }

    /// Adds a turn record to the snapshot.
    pub fn insert_turn(&mut self, turn: TurnRecord) {
        self.turns.insert(turn.id, turn);
    }

    /// Looks up a game record.
    #[must_use]
    pub fn game(&self, id: &RecordId) -> Option<&GameRecord> {
        self.games.get(id)
    }

    /// Looks up a bet record.
    #[must_use]
    pub fn bet(&self, id: &RecordId) -> Option<&BetRecord> {
        self.bets.get(id)
    }

    /// Looks up a turn record.
    #[must_use]
    pub fn turn(&self, id: &RecordId) -> Option<&TurnRecord> {
        self.turns.get(id)
    }

    /// Walks the bet chain ending at `head` back to its root.
    ///
    /// Returns the records oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::MissingRecord`] for a dangling reference and
    /// [`ChainError::CircularChain`] if traversal visits more records than
    /// the snapshot holds.
    pub fn bet_chain(&self, head: &RecordId) -> Result<Vec<&BetRecord>, ChainError> {
        let mut chain = Vec::new();
        let mut next = Some(*head);

        while let Some(id) = next {
            let bet = self.bets.get(&id).ok_or(ChainError::MissingRecord(id))?;
            if chain.len() >= self.bets.len() {
                return Err(ChainError::CircularChain);
            }
            chain.push(bet);
            next = bet.previous;
        }

        chain.reverse();
        Ok(chain)
    }

    /// Walks the turn chain ending at `head` back to its root.
    ///
    /// Returns the records oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::MissingRecord`] for a dangling reference and
    /// [`ChainError::CircularChain`] if traversal visits more records than
    /// the snapshot holds.
    pub fn turn_chain(&self, head: &RecordId) -> Result<Vec<&TurnRecord>, ChainError> {
        let mut chain = Vec::new();
        let mut next = Some(*head);

        while let Some(id) = next {
            let turn = self.turns.get(&id).ok_or(ChainError::MissingRecord(id))?;
            if chain.len() >= self.turns.len() {
                return Err(ChainError::CircularChain);
            }
            chain.push(turn);
            next = turn.previous;
        }

        chain.reverse();
        Ok(chain)
    }
}

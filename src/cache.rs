//! Memoization of reconstructed chain state.
//!
//! Replaying a chain costs a traversal per call, so parties holding long
//! chains can keep a [`ReplayCache`] instead of recomputing from the root on
//! every validation. Records are immutable once notarized, which makes a
//! cached replay valid forever; the cache is purely an optimization and never
//! changes a verdict.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::chain::{ChainError, ChainStore};
use crate::hand::Replay;
use crate::record::RecordId;
use crate::sync::RwLock;

/// Caches [`Replay`]s keyed by the id of the turn-chain head they were built
/// from.
#[derive(Debug)]
pub struct ReplayCache {
    replays: RwLock<HashMap<RecordId, Replay>>,
}

impl ReplayCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            replays: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the replay for the chain ending at `head`, building and
    /// memoizing it on the first request.
    ///
    /// # Errors
    ///
    /// Returns a [`ChainError`] if the chain cannot be reconstructed from the
    /// snapshot; failures are not cached.
    pub fn replay(&self, store: &ChainStore, head: &RecordId) -> Result<Replay, ChainError> {
        if let Some(replay) = self.replays.read().get(head) {
            return Ok(replay.clone());
        }

        let replay = Replay::from_chain(store, head)?;
        self.replays.write().insert(*head, replay.clone());
        Ok(replay)
    }

    /// Returns the number of cached replays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.replays.read().len()
    }

    /// Returns whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.replays.read().is_empty()
    }

    /// Drops every cached replay, e.g. when a new game supersedes the old
    /// chains.
    pub fn clear(&self) {
        self.replays.write().clear();
    }
}

impl Default for ReplayCache {
    fn default() -> Self {
        Self::new()
    }
}

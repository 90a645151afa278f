//! Chain record types.
//!
//! A game is an append-only sequence of immutable records: one
//! [`GameRecord`], a bet chain of [`BetRecord`]s (one per participant) and a
//! turn chain of [`TurnRecord`]s. Each bet or turn references its predecessor
//! by id, so a chain is a singly linked list rooted at its first record.

use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

/// Opaque unique identifier of a chain record.
///
/// Assigned by the substrate when the record is notarized; the engine never
/// interprets it except to derive a [`Card`](crate::Card) from it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId([u8; 32]);

impl RecordId {
    /// Creates a record id from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes of the id.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId(")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "..)")
    }
}

/// Identity of a participating party.
///
/// Also serves as the signing identity: a proposal is considered signed by a
/// party when this id appears in the signer list handed to the validators.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartyId([u8; 32]);

impl PartyId {
    /// Creates a party id from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes of the id.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PartyId(")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "..)")
    }
}

/// The actor a turn applies to: a seated participant or the house dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    /// A seated participant.
    Player(PartyId),
    /// The house dealer.
    Dealer,
}

impl Actor {
    /// Returns whether this actor is the dealer.
    #[must_use]
    pub const fn is_dealer(&self) -> bool {
        matches!(self, Self::Dealer)
    }

    /// Returns the party id if this actor is a player.
    #[must_use]
    pub const fn player(&self) -> Option<PartyId> {
        match self {
            Self::Player(id) => Some(*id),
            Self::Dealer => None,
        }
    }
}

/// Kind of action a turn record represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnType {
    /// Automatic card issuance during the initial dealing phase.
    Deal,
    /// The actor draws another card.
    Hit,
    /// The actor keeps their hand; no card is issued.
    Stand,
}

/// The record opening a game.
///
/// Created once; never mutated. Starting a new game supersedes it with a
/// fresh record, which also invalidates any live bet or turn chains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique id of this record.
    pub id: RecordId,
    /// Smallest stake allowed at the table. Must be positive and even.
    pub minimal_bet: i64,
    /// Seated parties in seating order, which is also turn order.
    pub participants: Vec<PartyId>,
}

/// One bet in the bet chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetRecord {
    /// Unique id of this record.
    pub id: RecordId,
    /// The game this bet belongs to.
    pub game: RecordId,
    /// The party placing the bet.
    pub player: PartyId,
    /// Stake amount. Must be positive and even.
    pub amount: i64,
    /// Snapshot of the game's participant list, carried so parties can
    /// verify locally without re-fetching the game record.
    pub participants: Vec<PartyId>,
    /// The preceding bet, or `None` for the first bet of the chain.
    pub previous: Option<RecordId>,
}

/// One action in the turn chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Unique id of this record. The card issued by a `Deal` or `Hit` is
    /// derived from it.
    pub id: RecordId,
    /// The final bet of the completed bet chain this turn chain consumes.
    pub last_bet: RecordId,
    /// The action taken.
    pub kind: TurnType,
    /// The actor the proposer claims is acting. Validators check the claim
    /// against the turn-order machine; replay never trusts it.
    pub actor: Actor,
    /// Snapshot of the game's participant list.
    pub participants: Vec<PartyId>,
    /// The preceding turn, or `None` for the first turn of the chain.
    pub previous: Option<RecordId>,
}

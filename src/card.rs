//! Card model: index-based cards derived from record identifiers.
//!
//! Cards are never stored on the chain. The card issued by a turn is a pure
//! function of that turn record's unique id, so every party derives the same
//! card independently and no shuffling state exists anywhere.

use sha2::{Digest, Sha256};

use crate::record::RecordId;

/// Number of cards per deck.
pub const DECK_SIZE: u8 = 52;

/// Card suit, in the order of the unicode playing-card block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Clubs => '♣',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
        }
    }

    const fn unicode_base(self) -> u32 {
        match self {
            Self::Spades => 0x1F0A0,
            Self::Clubs => 0x1F0D0,
            Self::Hearts => 0x1F0B0,
            Self::Diamonds => 0x1F0C0,
        }
    }
}

/// A playing card, identified by its deck index in `[0, 52)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    index: u8,
}

impl Card {
    /// Creates a card from a deck index.
    ///
    /// The index is taken modulo [`DECK_SIZE`], so every input maps to a
    /// valid card.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self {
            index: index % DECK_SIZE,
        }
    }

    /// Derives the card issued by the turn record with the given id.
    ///
    /// Deterministic: the same id always yields the same card, on every
    /// party's copy of the chain.
    #[must_use]
    pub fn from_record_id(id: &RecordId) -> Self {
        let digest = Sha256::digest(id.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        Self::new((u64::from_be_bytes(prefix) % u64::from(DECK_SIZE)) as u8)
    }

    /// Returns the deck index in `[0, 52)`.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        match self.index / 13 {
            0 => Suit::Spades,
            1 => Suit::Clubs,
            2 => Suit::Hearts,
            _ => Suit::Diamonds,
        }
    }

    /// Returns the rank (1 = ace .. 13 = king).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.index % 13 + 1
    }

    /// Returns the blackjack point value: 11 for an ace, face value for
    /// 2 through 10, and 10 for court cards.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self.rank() {
            1 => 11,
            r @ 2..=10 => r as u32,
            _ => 10,
        }
    }

    /// Returns the unicode playing-card symbol.
    #[must_use]
    pub fn symbol(self) -> char {
        // The unicode block reserves a knight between jack and queen, so
        // queen and king sit one codepoint further than their rank.
        let rank = u32::from(self.rank());
        let offset = if rank >= 12 { rank + 1 } else { rank };
        char::from_u32(self.suit().unicode_base() + offset).unwrap_or('\u{1F0A0}')
    }
}

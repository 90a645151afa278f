//! Hand reconstruction and blackjack scoring.
//!
//! Hands are never stored: they are rebuilt from the turn chain. A
//! [`Replay`] folds the chain forward from its root, resolving the actor of
//! every turn with the turn-order machine and collecting the card derived
//! from each record's id. `Stand` records contribute no card.

use alloc::vec::Vec;

use crate::card::Card;
use crate::chain::{ChainError, ChainStore};
use crate::record::{Actor, PartyId, RecordId, TurnType};

/// The hand value a player tries not to exceed.
pub const BLACKJACK: u32 = 21;

/// The dealer must keep hitting until reaching this total; once reached, the
/// round is over and no further turn may extend the chain.
pub const DEALER_STAND_MIN: u32 = 17;

/// Number of cards every player receives in the forced dealing phase.
pub const INITIAL_CARDS: usize = 2;

/// Computes the blackjack total of a hand.
///
/// Non-ace cards are summed first. Each ace then counts as 11 when that still
/// fits under [`BLACKJACK`] even if every remaining ace counts as 1,
/// otherwise as 1. The dealer variant additionally counts an ace as 11
/// whenever the fixed cards already total 6 or more, reflecting house drawing
/// conventions.
///
/// Total over all inputs; an empty hand scores 0 and totals above
/// [`BLACKJACK`] denote a bust.
#[must_use]
pub fn score(cards: &[Card], dealer: bool) -> u32 {
    let mut sum: u32 = cards.iter().map(|c| c.points()).filter(|&p| p < 11).sum();
    let aces = cards.iter().filter(|c| c.points() == 11).count() as u32;

    for remaining in (0..aces).rev() {
        if sum + 11 + remaining <= BLACKJACK || (dealer && sum >= 6) {
            sum += 11;
        } else {
            sum += 1;
        }
    }

    sum
}

/// Reconstructed state of a turn chain.
///
/// Built by replaying the chain from its root. Holds every actor's hand in
/// dealing order plus the resolved actor and kind of the newest turn, which
/// is exactly what the turn-order machine and the validators need. Replaying
/// the same chain twice yields the same state.
#[derive(Debug, Clone)]
pub struct Replay {
    participants: Vec<PartyId>,
    hands: Vec<(Actor, Vec<Card>)>,
    last: Option<(Actor, TurnType)>,
    turns: usize,
}

impl Replay {
    /// Replays the turn chain ending at `head`.
    ///
    /// The participant snapshot is taken from the chain's root record; the
    /// validators guarantee it is identical on every record of an accepted
    /// chain.
    ///
    /// # Errors
    ///
    /// Returns a [`ChainError`] if the snapshot is missing an ancestor, the
    /// predecessor references form a cycle, or a record exists past the point
    /// where the round finished.
    pub fn from_chain(store: &ChainStore, head: &RecordId) -> Result<Self, ChainError> {
        let chain = store.turn_chain(head)?;
        let participants = chain
            .first()
            .map(|turn| turn.participants.clone())
            .unwrap_or_default();

        let mut replay = Self {
            participants,
            hands: Vec::new(),
            last: None,
            turns: 0,
        };

        for turn in chain {
            let actor = replay.expected_actor().ok_or(ChainError::TurnAfterFinish)?;
            if turn.kind != TurnType::Stand {
                replay.push_card(actor, Card::from_record_id(&turn.id));
            }
            replay.last = Some((actor, turn.kind));
            replay.turns += 1;
        }

        Ok(replay)
    }

    fn push_card(&mut self, actor: Actor, card: Card) {
        if let Some((_, hand)) = self.hands.iter_mut().find(|(a, _)| *a == actor) {
            hand.push(card);
        } else {
            self.hands.push((actor, alloc::vec![card]));
        }
    }

    /// Returns the actor's hand in dealing order, oldest card first.
    #[must_use]
    pub fn hand(&self, actor: &Actor) -> &[Card] {
        self.hands
            .iter()
            .find(|(a, _)| a == actor)
            .map_or(&[], |(_, hand)| hand.as_slice())
    }

    /// Returns the number of cards the actor holds.
    #[must_use]
    pub fn card_count(&self, actor: &Actor) -> usize {
        self.hand(actor).len()
    }

    /// Returns the actor's blackjack total, using the dealer variant of the
    /// scoring rules for the dealer.
    #[must_use]
    pub fn points(&self, actor: &Actor) -> u32 {
        score(self.hand(actor), actor.is_dealer())
    }

    /// Returns the number of turns replayed.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.turns
    }

    /// Returns whether the chain was empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.turns == 0
    }

    /// Returns the participant snapshot the replay used.
    #[must_use]
    pub fn participants(&self) -> &[PartyId] {
        &self.participants
    }

    /// Returns the resolved actor and kind of the newest turn.
    #[must_use]
    pub const fn last_turn(&self) -> Option<(Actor, TurnType)> {
        self.last
    }

    /// Determines whose action is expected next, or `None` once the round is
    /// over.
    ///
    /// An actor keeps acting until they stand, bust, or reach
    /// [`BLACKJACK`]: players are dealt up to [`INITIAL_CARDS`] cards and
    /// then hit or stand, the dealer is dealt one card and then only hits.
    /// When a participant finishes, the next one in seating order acts; after
    /// the last participant, the dealer. Once the dealer holds
    /// [`DEALER_STAND_MIN`] or more the round is finished and no actor
    /// follows.
    #[must_use]
    pub fn expected_actor(&self) -> Option<Actor> {
        let Some((actor, kind)) = self.last else {
            return self.participants.first().copied().map(Actor::Player);
        };

        match actor {
            Actor::Dealer => {
                if self.points(&Actor::Dealer) >= DEALER_STAND_MIN {
                    None
                } else {
                    Some(Actor::Dealer)
                }
            }
            Actor::Player(player) => {
                if kind != TurnType::Stand && self.points(&actor) < BLACKJACK {
                    return Some(actor);
                }
                // The actor is done; hand over in seating order. The player
                // is always present in the snapshot because resolved actors
                // are drawn from it.
                let seat = self.participants.iter().position(|p| *p == player)?;
                match self.participants.get(seat + 1) {
                    Some(next) => Some(Actor::Player(*next)),
                    None => Some(Actor::Dealer),
                }
            }
        }
    }
}

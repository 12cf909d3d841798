//! Grow-only set of cards detected at least once in a session.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::{CardId, Rank, Suit, TOTAL_CARDS};

const FULL_DECK: u64 = (1 << TOTAL_CARDS) - 1;

/// Set of cards that have been detected at least once.
///
/// Only grows, apart from an explicit [`EverSeen::reset`]. Backed by a
/// 52-bit mask indexed by [`CardId::index`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EverSeen {
    bits: u64,
}

impl EverSeen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `card` as seen. Returns `true` if it was not seen before.
    pub fn insert(&mut self, card: CardId) -> bool {
        let mask = 1u64 << card.index();
        let fresh = self.bits & mask == 0;
        self.bits |= mask;
        fresh
    }

    pub fn contains(&self, card: CardId) -> bool {
        self.bits & (1u64 << card.index()) != 0
    }

    /// Number of distinct cards seen.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Whether all 52 cards have been seen.
    pub fn is_complete(&self) -> bool {
        self.bits == FULL_DECK
    }

    /// Number of ranks of `suit` that have been seen.
    pub fn count_in_suit(&self, suit: Suit) -> usize {
        let shift = suit as usize * Rank::ALL.len();
        let suit_mask = ((1u64 << Rank::ALL.len()) - 1) << shift;
        (self.bits & suit_mask).count_ones() as usize
    }

    /// Seen cards in suit-major order.
    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        CardId::all().filter(move |card| self.contains(*card))
    }

    /// Forget every card. Only ever called on explicit request of the owner.
    pub fn reset(&mut self) {
        self.bits = 0;
    }
}

impl Extend<CardId> for EverSeen {
    fn extend<T: IntoIterator<Item = CardId>>(&mut self, iter: T) {
        for card in iter {
            self.insert(card);
        }
    }
}

impl FromIterator<CardId> for EverSeen {
    fn from_iter<T: IntoIterator<Item = CardId>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl fmt::Debug for EverSeen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|c| c.to_string())).finish()
    }
}

impl Serialize for EverSeen {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

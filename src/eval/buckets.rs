//! Rank and suit grouping of a card pool.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, Rank, Suit};

/// A card pool grouped by rank.
///
/// Each rank maps to the cards holding it, in the order they were seen. Ranks
/// with no cards have no entry.
#[derive(Debug, Clone, Default)]
pub struct RankBuckets {
    buckets: HashMap<Rank, Vec<Card>>,
    len: usize,
}

impl RankBuckets {
    /// Groups the given cards by rank.
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::{Card, Rank, Suit};
    /// use pkrs::eval::RankBuckets;
    ///
    /// let buckets = RankBuckets::new(&[
    ///     Card::new(Rank::King, Suit::Hearts),
    ///     Card::new(Rank::Two, Suit::Clubs),
    ///     Card::new(Rank::King, Suit::Spades),
    /// ]);
    /// assert_eq!(buckets.get(Rank::King).len(), 2);
    /// assert_eq!(buckets.get(Rank::King)[0].suit, Suit::Hearts);
    /// assert!(!buckets.contains(Rank::Ace));
    /// ```
    #[must_use]
    pub fn new(cards: &[Card]) -> Self {
        let mut buckets: HashMap<Rank, Vec<Card>> = HashMap::new();
        for &card in cards {
            buckets.entry(card.rank).or_default().push(card);
        }

        Self {
            buckets,
            len: cards.len(),
        }
    }

    /// Returns the cards at `rank`, empty if there are none.
    #[must_use]
    pub fn get(&self, rank: Rank) -> &[Card] {
        self.buckets
            .get(&rank)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns whether any card holds `rank`.
    #[must_use]
    pub fn contains(&self, rank: Rank) -> bool {
        self.buckets.contains_key(&rank)
    }

    /// Total number of cards in the pool.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the pool is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over the non-empty buckets from Ace down to Two.
    pub fn descending(&self) -> impl Iterator<Item = (Rank, &[Card])> {
        Rank::DESCENDING
            .into_iter()
            .filter_map(|rank| self.buckets.get(&rank).map(|cards| (rank, cards.as_slice())))
    }

    /// Groups the pool by suit.
    #[must_use]
    pub fn by_suit(&self) -> SuitBuckets {
        let mut suits: [Vec<Card>; 4] = Default::default();
        for (_, cards) in self.descending() {
            for &card in cards {
                suits[card.suit.index()].push(card);
            }
        }

        SuitBuckets { suits }
    }
}

/// A card pool grouped by suit, each suit's cards ordered by descending rank.
#[derive(Debug, Clone, Default)]
pub struct SuitBuckets {
    suits: [Vec<Card>; 4],
}

impl SuitBuckets {
    /// Returns the cards of `suit`, highest rank first.
    #[must_use]
    pub fn get(&self, suit: Suit) -> &[Card] {
        &self.suits[suit.index()]
    }

    /// Iterates over all suits in [`Suit::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Suit, &[Card])> {
        Suit::ALL
            .into_iter()
            .map(|suit| (suit, self.suits[suit.index()].as_slice()))
    }
}

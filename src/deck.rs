//! Seeded, shuffled deck.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, base_deck};

/// A single 52-card deck. Cards are drawn from the top (the end of the list).
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a deck shuffled with the given seed.
    ///
    /// The same seed always produces the same order.
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::Deck;
    ///
    /// let mut a = Deck::new(7);
    /// let mut b = Deck::new(7);
    /// assert_eq!(a.draw(), b.draw());
    /// assert_eq!(a.len(), 51);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self::ordered(seed);
        deck.cards.shuffle(&mut deck.rng);
        deck
    }

    /// Creates an unshuffled deck in base order, Ace of Spades drawn last.
    ///
    /// `seed` only affects later calls to [`Deck::reshuffle`].
    #[must_use]
    pub fn ordered(seed: u64) -> Self {
        Self {
            cards: base_deck().to_vec(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draws the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Discards the top card, returning whether one was available.
    pub fn burn(&mut self) -> bool {
        self.draw().is_some()
    }

    /// Restores all 52 cards and shuffles them.
    pub fn reshuffle(&mut self) {
        self.cards.clear();
        self.cards.extend_from_slice(&base_deck());
        self.cards.shuffle(&mut self.rng);
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the deck is complete.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() == DECK_SIZE
    }
}

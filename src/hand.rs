//! Player hand representation.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// A player's private cards, labelled with the player's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Player name.
    name: String,
    /// Cards in the hand, in the order they were dealt.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand for the named player.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
        }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn with_cards(name: impl Into<String>, cards: impl Into<Vec<Card>>) -> Self {
        Self {
            name: name.into(),
            cards: cards.into(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes all cards, keeping the name.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

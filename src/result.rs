//! Hand categories, evaluation results and their ordering.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use crate::card::{Card, Rank};

/// Poker hand category, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HandCategory {
    /// No made hand.
    HighCard = 1,
    /// Two cards of one rank.
    OnePair,
    /// Two cards of one rank and two of another.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// Five consecutive ranks of one suit.
    StraightFlush,
}

impl HandCategory {
    /// Numeric strength of the category (1 to 9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Display name of the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::OnePair => "Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The best hand found for a pool of cards.
///
/// `cards` holds at most five cards ordered so that index 0 is the primary
/// deciding card (for a wheel that is the Five, the Ace comes last).
/// `rank1` and `rank2` are the category's signature ranks:
///
/// | Category        | `rank1`            | `rank2`                 |
/// |-----------------|--------------------|-------------------------|
/// | Straight flush  | straight high card | -                       |
/// | Four of a kind  | quad rank          | kicker rank             |
/// | Full house      | trip rank          | pair rank               |
/// | Flush           | highest card       | -                       |
/// | Straight        | straight high card | -                       |
/// | Three of a kind | trip rank          | -                       |
/// | Two pair        | high pair rank     | low pair rank           |
/// | One pair        | pair rank          | highest kicker rank     |
/// | High card       | highest card       | second card rank        |
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandResult {
    category: HandCategory,
    cards: Vec<Card>,
    rank1: Option<Rank>,
    rank2: Option<Rank>,
}

impl HandResult {
    /// Creates a result from its parts.
    #[must_use]
    pub const fn new(
        category: HandCategory,
        cards: Vec<Card>,
        rank1: Option<Rank>,
        rank2: Option<Rank>,
    ) -> Self {
        Self {
            category,
            cards,
            rank1,
            rank2,
        }
    }

    /// The high-card result of an empty pool.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(HandCategory::HighCard, Vec::new(), None, None)
    }

    /// Returns the hand category.
    #[must_use]
    pub const fn category(&self) -> HandCategory {
        self.category
    }

    /// Returns the best cards, primary deciding card first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the primary signature rank.
    #[must_use]
    pub const fn rank1(&self) -> Option<Rank> {
        self.rank1
    }

    /// Returns the secondary signature rank.
    #[must_use]
    pub const fn rank2(&self) -> Option<Rank> {
        self.rank2
    }

    /// Compares two results by hand strength.
    ///
    /// `Greater` means `self` beats `other`, `Equal` is a tie. Suits never
    /// break a tie.
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::{evaluate, Card};
    ///
    /// let parse = |s: &str| -> Vec<Card> {
    ///     s.split(' ').map(|c| c.parse().unwrap()).collect()
    /// };
    /// let flush = evaluate(&parse("2h 4h 6h 8h 10h"));
    /// let straight = evaluate(&parse("Ah Kd Qc Js 10d"));
    /// assert!(flush.compare(&straight).is_gt());
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        compare(self, other)
    }

    fn positional(&self, other: &Self) -> Ordering {
        self.cards
            .iter()
            .map(Card::rank)
            .cmp(other.cards.iter().map(Card::rank))
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.category)?;
        for card in &self.cards {
            write!(f, " {card}")?;
        }
        Ok(())
    }
}

/// Compares two hand results.
///
/// Categories are compared first. Within a category the signature ranks decide
/// where they fully determine the winner; kicker ties fall back to comparing
/// the best cards position by position.
#[must_use]
pub fn compare(a: &HandResult, b: &HandResult) -> Ordering {
    a.category.cmp(&b.category).then_with(|| match a.category {
        HandCategory::StraightFlush | HandCategory::Straight => a.rank1.cmp(&b.rank1),
        HandCategory::FourOfAKind | HandCategory::FullHouse => a
            .rank1
            .cmp(&b.rank1)
            .then_with(|| a.rank2.cmp(&b.rank2)),
        HandCategory::TwoPair => a
            .rank1
            .cmp(&b.rank1)
            .then_with(|| a.rank2.cmp(&b.rank2))
            .then_with(|| a.positional(b)),
        HandCategory::OnePair => {
            let kicker = match (a.rank2, b.rank2) {
                (Some(x), Some(y)) => x.cmp(&y),
                _ => Ordering::Equal,
            };
            a.rank1
                .cmp(&b.rank1)
                .then(kicker)
                .then_with(|| a.positional(b))
        }
        HandCategory::Flush | HandCategory::ThreeOfAKind | HandCategory::HighCard => a
            .rank1
            .cmp(&b.rank1)
            .then_with(|| a.positional(b)),
    })
}

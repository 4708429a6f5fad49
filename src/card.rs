//! Card types and deck utilities.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
///
/// Suits carry no ordering: they never break a tie between two hands and only
/// matter for flush membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits, in the order the suit-scanning detectors visit them.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Position of the suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Hearts => 0,
            Self::Diamonds => 1,
            Self::Clubs => 2,
            Self::Spades => 3,
        }
    }

    /// The suit symbol (`♥`, `♦`, `♣`, `♠`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    const fn from_char(c: char) -> Option<Self> {
        match c {
            'h' | 'H' | '♥' => Some(Self::Hearts),
            'd' | 'D' | '♦' => Some(Self::Diamonds),
            'c' | 'C' | '♣' => Some(Self::Clubs),
            's' | 'S' | '♠' => Some(Self::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, from Two (2) to Ace (14).
///
/// Ace is the highest rank. It only plays low as the bottom card of a
/// five-high straight, which the evaluator handles on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Two.
    Two = 2,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks from Ace down to Two.
    pub const DESCENDING: [Self; 13] = [
        Self::Ace,
        Self::King,
        Self::Queen,
        Self::Jack,
        Self::Ten,
        Self::Nine,
        Self::Eight,
        Self::Seven,
        Self::Six,
        Self::Five,
        Self::Four,
        Self::Three,
        Self::Two,
    ];

    /// Numeric value of the rank (2 to 14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Short label used when formatting cards (`2`..`10`, `J`, `Q`, `K`, `A`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        let rank = match label {
            "2" => Self::Two,
            "3" => Self::Three,
            "4" => Self::Four,
            "5" => Self::Five,
            "6" => Self::Six,
            "7" => Self::Seven,
            "8" => Self::Eight,
            "9" => Self::Nine,
            "10" | "T" | "t" => Self::Ten,
            "J" | "j" => Self::Jack,
            "Q" | "q" => Self::Queen,
            "K" | "k" => Self::King,
            "A" | "a" => Self::Ace,
            _ => return None,
        };
        Some(rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::DESCENDING
            .into_iter()
            .find(|rank| rank.value() == value)
            .ok_or(CardError::InvalidRank(value))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Creates a card from a numeric rank (2 to 14, Ace high).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the rank is outside 2..=14.
    ///
    /// # Example
    ///
    /// ```
    /// use pkrs::{Card, CardError, Rank, Suit};
    ///
    /// assert_eq!(Card::from_value(14, Suit::Spades), Ok(Card::new(Rank::Ace, Suit::Spades)));
    /// assert_eq!(Card::from_value(1, Suit::Spades), Err(CardError::InvalidRank(1)));
    /// ```
    pub fn from_value(rank: u8, suit: Suit) -> Result<Self, CardError> {
        Ok(Self::new(Rank::try_from(rank)?, suit))
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses `"Ah"`, `"10h"`, `"Th"` or `"A♥"` style card strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_char = s.chars().next_back().ok_or(CardError::Malformed)?;
        let label = &s[..s.len() - suit_char.len_utf8()];
        if label.is_empty() {
            return Err(CardError::Malformed);
        }

        let rank = Rank::from_label(label).ok_or(CardError::UnknownRank)?;
        let suit = Suit::from_char(suit_char).ok_or(CardError::UnknownSuit)?;
        Ok(Self::new(rank, suit))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// The unshuffled base deck: Aces first, then descending ranks, each rank in
/// Spades, Hearts, Diamonds, Clubs order.
#[must_use]
pub fn base_deck() -> [Card; DECK_SIZE] {
    const SUIT_ORDER: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    core::array::from_fn(|i| Card::new(Rank::DESCENDING[i / 4], SUIT_ORDER[i % 4]))
}

//! Error types for card construction, evaluation and table operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when building or parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Numeric rank outside 2..=14.
    #[error("invalid rank {0}, expected 2 to 14")]
    InvalidRank(u8),
    /// Rank label not recognised.
    #[error("unknown rank label")]
    UnknownRank,
    /// Suit character not recognised.
    #[error("unknown suit")]
    UnknownSuit,
    /// Input is too short to hold a rank and a suit.
    #[error("malformed card")]
    Malformed,
}

/// Errors that can occur when validating a card pool before evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The same card appears more than once in the pool.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// The pool holds more than seven cards.
    #[error("too many cards: {0}, at most 7 allowed")]
    TooManyCards(usize),
}

/// Errors that can occur when joining a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// A round is in progress.
    #[error("cannot join while a round is in progress")]
    RoundInProgress,
    /// All seats are taken.
    #[error("table is full")]
    TableFull,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid table state for dealing.
    #[error("invalid table state for dealing")]
    InvalidState,
    /// Nobody is seated.
    #[error("no players at the table")]
    NoPlayers,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// The river has not been dealt.
    #[error("invalid table state for showdown")]
    InvalidState,
}

//! Table: seats, dealing and showdown.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DealError, JoinError, ShowdownError};
use crate::eval::evaluate_best_hand;
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::result::HandResult;

pub mod state;

pub use state::{Street, TableState};

/// A seat's hand at showdown.
#[derive(Debug, Clone)]
pub struct SeatResult {
    /// Seat index.
    pub seat: usize,
    /// Player name.
    pub name: String,
    /// Best hand from the board and the seat's hole cards.
    pub result: HandResult,
}

/// Outcome of a showdown.
#[derive(Debug, Clone)]
pub struct Showdown {
    /// Results for each seat, in seat order.
    pub seats: Vec<SeatResult>,
    /// Winning seats. More than one on a split.
    pub winners: Vec<usize>,
}

/// Returns the indices of the strongest results.
///
/// Every result that ties with the best is a winner.
///
/// # Example
///
/// ```
/// use pkrs::{evaluate, winners, Card};
///
/// let pool = |s: &str| -> Vec<Card> { s.split(' ').map(|c| c.parse().unwrap()).collect() };
/// let results = [
///     evaluate(&pool("Ah Kh 7c 4d 2s")),
///     evaluate(&pool("9s 9d 7h 4c 2h")),
///     evaluate(&pool("9c 9h 7d 4s 2d")),
/// ];
/// assert_eq!(winners(&results), vec![1, 2]);
/// ```
#[must_use]
pub fn winners(results: &[HandResult]) -> Vec<usize> {
    let Some(best) = results.iter().reduce(|best, result| {
        if result.compare(best).is_gt() {
            result
        } else {
            best
        }
    }) else {
        return Vec::new();
    };

    results
        .iter()
        .enumerate()
        .filter(|(_, result)| result.compare(best).is_eq())
        .map(|(seat, _)| seat)
        .collect()
}

/// A hold'em table that deals hole cards and the board, then resolves the
/// showdown.
///
/// The table owns the deck, the board and each seat's hand. Betting is left to
/// the caller.
///
/// # Example
///
/// ```
/// use pkrs::{Street, Table, TableOptions};
///
/// let mut table = Table::new(TableOptions::default(), 42);
/// table.join("alice").unwrap();
/// table.join("bob").unwrap();
///
/// table.deal().unwrap();
/// while table.advance().unwrap() != Street::River {}
///
/// let showdown = table.showdown().unwrap();
/// assert!(!showdown.winners.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    /// Table options.
    options: TableOptions,
    /// Remaining cards.
    deck: Deck,
    /// Shared board cards.
    board: Vec<Card>,
    /// Hands, one per seat.
    hands: Vec<Hand>,
    /// Current state.
    state: TableState,
}

impl Table {
    /// Creates a new table whose deck is shuffled with the given seed.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self {
            options,
            deck: Deck::new(seed),
            board: Vec::new(),
            hands: Vec::new(),
            state: TableState::WaitingForPlayers,
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Seats a player and returns the seat index.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or every seat is taken.
    pub fn join(&mut self, name: impl Into<String>) -> Result<usize, JoinError> {
        if self.state != TableState::WaitingForPlayers {
            return Err(JoinError::RoundInProgress);
        }
        if self.hands.len() >= usize::from(self.options.max_players) {
            return Err(JoinError::TableFull);
        }

        let hand = Hand::new(name);
        log::debug!("{} joined at seat {}", hand.name(), self.hands.len());
        self.hands.push(hand);
        Ok(self.hands.len() - 1)
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.len()
    }

    /// Returns the current table state.
    #[must_use]
    pub const fn state(&self) -> TableState {
        self.state
    }

    /// Returns the current street, `None` between rounds.
    #[must_use]
    pub const fn street(&self) -> Option<Street> {
        match self.state {
            TableState::WaitingForPlayers => None,
            TableState::Playing(street) => Some(street),
        }
    }

    /// Returns the board cards dealt so far.
    #[must_use]
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Returns the hand at `seat`.
    #[must_use]
    pub fn hand(&self, seat: usize) -> Option<&Hand> {
        self.hands.get(seat)
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Deals the hole cards, one card per seat at a time, and moves to the
    /// preflop street.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, nobody is seated, or the
    /// deck cannot cover every hole card and the full board.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != TableState::WaitingForPlayers {
            return Err(DealError::InvalidState);
        }
        if self.hands.is_empty() {
            return Err(DealError::NoPlayers);
        }

        let burns = if self.options.burn_cards { 3 } else { 0 };
        let needed = self.hands.len() * usize::from(self.options.hole_cards)
            + Street::River.board_len()
            + burns;
        if needed > self.deck.len() {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..self.options.hole_cards {
            for hand in &mut self.hands {
                let card = self.deck.draw().ok_or(DealError::NotEnoughCards)?;
                hand.add_card(card);
            }
        }

        self.state = TableState::Playing(Street::Preflop);
        log::debug!("dealt hole cards to {} players", self.hands.len());
        Ok(())
    }

    /// Deals the next street and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error before [`Table::deal`] or after the river.
    pub fn advance(&mut self) -> Result<Street, DealError> {
        let TableState::Playing(street) = self.state else {
            return Err(DealError::InvalidState);
        };
        let next = street.next().ok_or(DealError::InvalidState)?;

        if self.options.burn_cards && !self.deck.burn() {
            return Err(DealError::NotEnoughCards);
        }
        while self.board.len() < next.board_len() {
            let card = self.deck.draw().ok_or(DealError::NotEnoughCards)?;
            self.board.push(card);
        }

        self.state = TableState::Playing(next);
        log::debug!("{next:?}: board {}", self.board.len());
        Ok(next)
    }

    /// Returns the best hand for `seat` on the board dealt so far.
    ///
    /// Returns `None` if the seat is empty or no round is in progress.
    #[must_use]
    pub fn evaluate(&self, seat: usize) -> Option<HandResult> {
        if self.state == TableState::WaitingForPlayers {
            return None;
        }
        let hand = self.hands.get(seat)?;
        Some(evaluate_best_hand(&self.board, hand.cards()))
    }

    /// Evaluates every seat on the full board and picks the winners.
    ///
    /// # Errors
    ///
    /// Returns an error unless the river has been dealt.
    pub fn showdown(&self) -> Result<Showdown, ShowdownError> {
        if self.state != TableState::Playing(Street::River) {
            return Err(ShowdownError::InvalidState);
        }

        let seats: Vec<SeatResult> = self
            .hands
            .iter()
            .enumerate()
            .map(|(seat, hand)| SeatResult {
                seat,
                name: hand.name().into(),
                result: evaluate_best_hand(&self.board, hand.cards()),
            })
            .collect();
        let results: Vec<HandResult> = seats.iter().map(|seat| seat.result.clone()).collect();
        let winners = winners(&results);

        for seat in &seats {
            log::debug!("seat {} ({}): {}", seat.seat, seat.name, seat.result);
        }
        log::debug!("winners: {winners:?}");
        Ok(Showdown { seats, winners })
    }

    /// Clears the board and all hands, reshuffles the deck and returns the
    /// table to the `WaitingForPlayers` state. Players stay seated.
    pub fn clear_round(&mut self) {
        self.board.clear();
        for hand in &mut self.hands {
            hand.clear();
        }
        self.deck.reshuffle();
        self.state = TableState::WaitingForPlayers;
    }
}

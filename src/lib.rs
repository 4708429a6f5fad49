//! A Texas hold'em hand evaluator with optional `no_std` support.
//!
//! The crate finds the best five-card hand in a pool of up to seven cards
//! ([`evaluate_best_hand`]) and orders results so hands can be compared for a
//! winner ([`compare`]). A seeded [`Deck`] and a [`Table`] that deals streets
//! and resolves the showdown are included.
//!
//! # Example
//!
//! ```
//! use pkrs::{compare, evaluate_best_hand, Card, HandCategory, Rank};
//!
//! let cards = |s: &str| -> Vec<Card> { s.split(' ').map(|c| c.parse().unwrap()).collect() };
//! let board = cards("Kh Kd Kc Qh Qd");
//!
//! let alice = evaluate_best_hand(&board, &cards("Qc Jd"));
//! assert_eq!(alice.category(), HandCategory::FullHouse);
//! assert_eq!(alice.rank1(), Some(Rank::King));
//! assert_eq!(alice.rank2(), Some(Rank::Queen));
//!
//! let bob = evaluate_best_hand(&board, &cards("2c 3d"));
//! assert!(compare(&alice, &bob).is_eq());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod combinations;
pub mod deck;
pub mod error;
pub mod eval;
pub mod hand;
pub mod options;
pub mod result;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, base_deck};
pub use combinations::combinations;
pub use deck::Deck;
pub use error::{CardError, DealError, EvalError, JoinError, ShowdownError};
pub use eval::{evaluate, evaluate_best_hand, evaluate_exhaustive, try_evaluate_best_hand};
pub use hand::Hand;
pub use options::TableOptions;
pub use result::{HandCategory, HandResult, compare};
pub use table::{SeatResult, Showdown, Street, Table, TableState, winners};

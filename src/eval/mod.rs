//! Best-hand selection over a pool of board and hole cards.

use alloc::vec::Vec;

use crate::card::Card;
use crate::combinations::combinations;
use crate::error::EvalError;
use crate::result::HandResult;

pub mod buckets;
pub mod detect;

pub use buckets::{RankBuckets, SuitBuckets};

/// A category detector.
pub type Detector = fn(&RankBuckets) -> Option<HandResult>;

/// All detectors, strongest category first.
pub const DETECTORS: [Detector; 9] = [
    detect::straight_flush,
    detect::four_of_a_kind,
    detect::full_house,
    detect::flush,
    detect::straight,
    detect::three_of_a_kind,
    detect::two_pair,
    detect::one_pair,
    detect::high_card,
];

/// Maximum pool size accepted by [`try_evaluate_best_hand`].
pub const MAX_POOL: usize = 7;

/// Returns the best hand that can be made from `cards`.
///
/// Any number of cards is accepted. Pools smaller than five still produce the
/// best partial hand, and an empty pool yields an empty high-card result.
#[must_use]
pub fn evaluate(cards: &[Card]) -> HandResult {
    let buckets = RankBuckets::new(cards);
    let result = DETECTORS
        .iter()
        .find_map(|detect| detect(&buckets))
        .unwrap_or_else(HandResult::empty);

    log::trace!("evaluated {} cards: {result}", cards.len());
    result
}

/// Returns the best hand from the board combined with a player's hole cards.
///
/// # Example
///
/// ```
/// use pkrs::{evaluate_best_hand, Card, HandCategory, Rank};
///
/// let board: Vec<Card> = ["Ah", "2h", "3h", "4h", "5h"]
///     .iter()
///     .map(|c| c.parse().unwrap())
///     .collect();
/// let hole: Vec<Card> = ["Kc", "Qd"].iter().map(|c| c.parse().unwrap()).collect();
///
/// let result = evaluate_best_hand(&board, &hole);
/// assert_eq!(result.category(), HandCategory::StraightFlush);
/// assert_eq!(result.rank1(), Some(Rank::Five));
/// ```
#[must_use]
pub fn evaluate_best_hand(board: &[Card], hand: &[Card]) -> HandResult {
    evaluate(&[board, hand].concat())
}

/// Like [`evaluate_best_hand`], but validates the pool first.
///
/// # Errors
///
/// Returns [`EvalError::TooManyCards`] if the pool holds more than
/// [`MAX_POOL`] cards and [`EvalError::DuplicateCard`] if a card appears twice.
pub fn try_evaluate_best_hand(board: &[Card], hand: &[Card]) -> Result<HandResult, EvalError> {
    let pool = [board, hand].concat();
    if pool.len() > MAX_POOL {
        return Err(EvalError::TooManyCards(pool.len()));
    }
    for (i, card) in pool.iter().enumerate() {
        if pool[..i].contains(card) {
            return Err(EvalError::DuplicateCard(*card));
        }
    }

    Ok(evaluate(&pool))
}

/// Evaluates every five-card subset of `cards` and keeps the strongest.
///
/// Returns `None` for pools of fewer than five cards. The result always ties
/// with [`evaluate`] on the same pool.
#[must_use]
pub fn evaluate_exhaustive(cards: &[Card]) -> Option<HandResult> {
    combinations(cards, 5)
        .iter()
        .map(Vec::as_slice)
        .map(evaluate)
        .reduce(|best, candidate| {
            if candidate.compare(&best).is_gt() {
                candidate
            } else {
                best
            }
        })
}

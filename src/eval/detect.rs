//! One detector per hand category.
//!
//! Every detector looks for the best instance of its own category in a
//! [`RankBuckets`] pool and returns `None` when the category is absent. They do
//! not look at stronger categories: a pool holding a full house also satisfies
//! [`three_of_a_kind`] and [`one_pair`]. Ranking across categories is the
//! selector's job.

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::eval::buckets::RankBuckets;
use crate::result::{HandCategory, HandResult};

/// Straight scan order: Ace high down to Two, then Ace again as the low end.
const STRAIGHT_SCAN: [Rank; 14] = [
    Rank::Ace,
    Rank::King,
    Rank::Queen,
    Rank::Jack,
    Rank::Ten,
    Rank::Nine,
    Rank::Eight,
    Rank::Seven,
    Rank::Six,
    Rank::Five,
    Rank::Four,
    Rank::Three,
    Rank::Two,
    Rank::Ace,
];

const HAND_SIZE: usize = 5;

/// Finds the highest run of five consecutive ranks, highest card first.
///
/// `pick` returns the card to use at a rank, or `None` if the rank is missing.
fn highest_run(pick: impl Fn(Rank) -> Option<Card>) -> Option<Vec<Card>> {
    let mut run = Vec::with_capacity(HAND_SIZE);
    for rank in STRAIGHT_SCAN {
        match pick(rank) {
            Some(card) => {
                run.push(card);
                if run.len() == HAND_SIZE {
                    return Some(run);
                }
            }
            None => run.clear(),
        }
    }
    None
}

/// Keeps the first of equally strong candidates.
fn strongest(best: HandResult, candidate: HandResult) -> HandResult {
    if candidate.compare(&best).is_gt() {
        candidate
    } else {
        best
    }
}

/// Five consecutive ranks in one suit.
///
/// For the wheel (A-2-3-4-5) `rank1` is Five and the Ace is the last card.
#[must_use]
pub fn straight_flush(buckets: &RankBuckets) -> Option<HandResult> {
    buckets
        .by_suit()
        .iter()
        .filter(|(_, cards)| cards.len() >= HAND_SIZE)
        .filter_map(|(_, cards)| {
            highest_run(|rank| cards.iter().find(|card| card.rank == rank).copied())
        })
        .map(|run| {
            let high = run[0].rank;
            HandResult::new(HandCategory::StraightFlush, run, Some(high), None)
        })
        .reduce(strongest)
}

/// Four cards of one rank plus the highest remaining card as kicker.
#[must_use]
pub fn four_of_a_kind(buckets: &RankBuckets) -> Option<HandResult> {
    let (quad_rank, quads) = buckets.descending().find(|(_, cards)| cards.len() == 4)?;
    let kicker = buckets
        .descending()
        .find(|&(rank, _)| rank != quad_rank)
        .map(|(_, cards)| cards[0]);

    let mut cards = quads.to_vec();
    cards.extend(kicker);
    Some(HandResult::new(
        HandCategory::FourOfAKind,
        cards,
        Some(quad_rank),
        kicker.map(|card| card.rank),
    ))
}

/// The highest trips plus the highest other pair.
///
/// A lower second set of trips fills the pair slot with two of its cards.
#[must_use]
pub fn full_house(buckets: &RankBuckets) -> Option<HandResult> {
    let mut trips = None;
    let mut pair = None;
    for (rank, cards) in buckets.descending() {
        if cards.len() >= 3 && trips.is_none() {
            trips = Some((rank, &cards[..3]));
        } else if cards.len() >= 2 && pair.is_none() {
            pair = Some((rank, &cards[..2]));
        }
        if trips.is_some() && pair.is_some() {
            break;
        }
    }

    let (trip_rank, trip_cards) = trips?;
    let (pair_rank, pair_cards) = pair?;
    let cards = [trip_cards, pair_cards].concat();
    Some(HandResult::new(
        HandCategory::FullHouse,
        cards,
        Some(trip_rank),
        Some(pair_rank),
    ))
}

/// The five highest cards of a suit holding at least five.
#[must_use]
pub fn flush(buckets: &RankBuckets) -> Option<HandResult> {
    buckets
        .by_suit()
        .iter()
        .filter(|(_, cards)| cards.len() >= HAND_SIZE)
        .map(|(_, cards)| {
            let cards = cards[..HAND_SIZE].to_vec();
            let high = cards[0].rank;
            HandResult::new(HandCategory::Flush, cards, Some(high), None)
        })
        .reduce(strongest)
}

/// Five consecutive ranks, one card per rank.
#[must_use]
pub fn straight(buckets: &RankBuckets) -> Option<HandResult> {
    let run = highest_run(|rank| buckets.get(rank).first().copied())?;
    let high = run[0].rank;
    Some(HandResult::new(HandCategory::Straight, run, Some(high), None))
}

/// The highest trips plus the next two ranks as kickers, one card each.
#[must_use]
pub fn three_of_a_kind(buckets: &RankBuckets) -> Option<HandResult> {
    let (trip_rank, trips) = buckets.descending().find(|(_, cards)| cards.len() >= 3)?;

    let mut cards = trips[..3].to_vec();
    cards.extend(
        buckets
            .descending()
            .filter(|&(rank, _)| rank != trip_rank)
            .map(|(_, cards)| cards[0])
            .take(2),
    );
    Some(HandResult::new(
        HandCategory::ThreeOfAKind,
        cards,
        Some(trip_rank),
        None,
    ))
}

/// The two highest pairs plus the highest card of any other rank.
#[must_use]
pub fn two_pair(buckets: &RankBuckets) -> Option<HandResult> {
    let mut pairs = buckets.descending().filter(|(_, cards)| cards.len() >= 2);
    let (high_rank, high) = pairs.next()?;
    let (low_rank, low) = pairs.next()?;
    let kicker = buckets
        .descending()
        .find(|&(rank, _)| rank != high_rank && rank != low_rank)
        .map(|(_, cards)| cards[0]);

    let mut cards = [&high[..2], &low[..2]].concat();
    cards.extend(kicker);
    Some(HandResult::new(
        HandCategory::TwoPair,
        cards,
        Some(high_rank),
        Some(low_rank),
    ))
}

/// The highest pair plus the next three highest cards as kickers.
#[must_use]
pub fn one_pair(buckets: &RankBuckets) -> Option<HandResult> {
    let (pair_rank, pair) = buckets.descending().find(|(_, cards)| cards.len() >= 2)?;

    let mut cards = pair[..2].to_vec();
    cards.extend(
        buckets
            .descending()
            .filter(|&(rank, _)| rank != pair_rank)
            .flat_map(|(_, cards)| cards.iter().copied())
            .take(3),
    );
    let kicker = cards.get(2).map(|card| card.rank);
    Some(HandResult::new(
        HandCategory::OnePair,
        cards,
        Some(pair_rank),
        kicker,
    ))
}

/// The five highest cards. Fewer if the pool is smaller, `None` if it is empty.
#[must_use]
pub fn high_card(buckets: &RankBuckets) -> Option<HandResult> {
    let cards: Vec<Card> = buckets
        .descending()
        .flat_map(|(_, cards)| cards.iter().copied())
        .take(HAND_SIZE)
        .collect();
    let high = cards.first()?.rank;
    let second = cards.get(1).map(|card| card.rank);
    Some(HandResult::new(
        HandCategory::HighCard,
        cards,
        Some(high),
        second,
    ))
}

//! Best-hand selection tests.

use pkrs::eval::{DETECTORS, RankBuckets};
use pkrs::{
    Card, CardError, Deck, EvalError, HandCategory, Rank, Suit, compare, evaluate,
    evaluate_best_hand, evaluate_exhaustive, try_evaluate_best_hand,
};

fn cards(s: &str) -> Vec<Card> {
    s.split_whitespace().map(|c| c.parse().unwrap()).collect()
}

fn ranks(cards: &[Card]) -> Vec<Rank> {
    cards.iter().map(Card::rank).collect()
}

#[test]
fn wheel_straight_flush_reports_five_high() {
    let result = evaluate_best_hand(&cards("Ah 2h 3h 4h 5h"), &cards("Kc Qd"));
    assert_eq!(result.category(), HandCategory::StraightFlush);
    assert_eq!(result.rank1(), Some(Rank::Five));
    assert_eq!(
        ranks(result.cards()),
        [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace]
    );
}

#[test]
fn royal_flush_from_board_and_hole_card() {
    let result = evaluate_best_hand(&cards("Ah Kh Qh Jh 2c"), &cards("10h 3s"));
    assert_eq!(result.category(), HandCategory::StraightFlush);
    assert_eq!(result.rank1(), Some(Rank::Ace));
}

#[test]
fn four_of_a_kind_takes_highest_kicker() {
    let result = evaluate_best_hand(&cards("Ah Ad Ac 7s 2d"), &cards("As Kh"));
    assert_eq!(result.category(), HandCategory::FourOfAKind);
    assert_eq!(result.rank1(), Some(Rank::Ace));
    assert_eq!(result.rank2(), Some(Rank::King));
    assert_eq!(result.cards().len(), 5);
}

#[test]
fn full_house_trips_claim_priority_over_pair() {
    let result = evaluate_best_hand(&cards("Kh Kd Kc Qh Qd"), &cards("Qc Jd"));
    assert_eq!(result.category(), HandCategory::FullHouse);
    assert_eq!(result.rank1(), Some(Rank::King));
    assert_eq!(result.rank2(), Some(Rank::Queen));
    assert_eq!(result.cards(), cards("Kh Kd Kc Qh Qd"));
}

#[test]
fn full_house_with_two_trips_uses_lower_as_pair() {
    let result = evaluate(&cards("6h 6d 6c 9h 9d 9c 2s"));
    assert_eq!(result.category(), HandCategory::FullHouse);
    assert_eq!(result.rank1(), Some(Rank::Nine));
    assert_eq!(result.rank2(), Some(Rank::Six));
}

#[test]
fn flush_beats_straight_in_same_pool() {
    let result = evaluate(&cards("9h 8h 7h 6c 5h 2h"));
    assert_eq!(result.category(), HandCategory::Flush);
    assert_eq!(result.rank1(), Some(Rank::Nine));
    assert_eq!(
        ranks(result.cards()),
        [Rank::Nine, Rank::Eight, Rank::Seven, Rank::Five, Rank::Two]
    );
}

#[test]
fn wheel_straight_plays_ace_low() {
    let result = evaluate(&cards("Ah 2d 3c 4s 5h 9d Kc"));
    assert_eq!(result.category(), HandCategory::Straight);
    assert_eq!(result.rank1(), Some(Rank::Five));
    assert_eq!(result.cards().last().map(Card::rank), Some(Rank::Ace));
}

#[test]
fn broadway_straight() {
    let result = evaluate_best_hand(&cards("Ah Kd Qc 3s 2d"), &cards("Jh 10c"));
    assert_eq!(result.category(), HandCategory::Straight);
    assert_eq!(result.rank1(), Some(Rank::Ace));
}

#[test]
fn straight_with_paired_rank_uses_one_card() {
    let result = evaluate(&cards("9h 8d 8c 7s 6h 5d"));
    assert_eq!(result.category(), HandCategory::Straight);
    assert_eq!(result.rank1(), Some(Rank::Nine));
    assert_eq!(result.cards(), cards("9h 8d 7s 6h 5d"));
}

#[test]
fn three_of_a_kind_with_two_kickers() {
    let result = evaluate(&cards("Ah Ad Ac Kh Qd 7s 2c"));
    assert_eq!(result.category(), HandCategory::ThreeOfAKind);
    assert_eq!(result.rank1(), Some(Rank::Ace));
    assert_eq!(
        ranks(result.cards()),
        [Rank::Ace, Rank::Ace, Rank::Ace, Rank::King, Rank::Queen]
    );
}

#[test]
fn two_pair_picks_highest_two_of_three_pairs() {
    let result = evaluate(&cards("Ah Ad Kh Kd Qh Qd 2c"));
    assert_eq!(result.category(), HandCategory::TwoPair);
    assert_eq!(result.rank1(), Some(Rank::Ace));
    assert_eq!(result.rank2(), Some(Rank::King));
    assert_eq!(result.cards()[4].rank, Rank::Queen);
}

#[test]
fn two_pair_kicker_can_outrank_pairs() {
    let result = evaluate(&cards("Ah Kh Kd Qh Qd 2c 3s"));
    assert_eq!(result.category(), HandCategory::TwoPair);
    assert_eq!(result.rank1(), Some(Rank::King));
    assert_eq!(result.rank2(), Some(Rank::Queen));
    assert_eq!(result.cards()[4].rank, Rank::Ace);
}

#[test]
fn one_pair_with_three_kickers() {
    let result = evaluate(&cards("Ah Ad Kh 7c 4d 3s 2c"));
    assert_eq!(result.category(), HandCategory::OnePair);
    assert_eq!(result.rank1(), Some(Rank::Ace));
    assert_eq!(result.rank2(), Some(Rank::King));
    assert_eq!(
        ranks(result.cards()),
        [Rank::Ace, Rank::Ace, Rank::King, Rank::Seven, Rank::Four]
    );
}

#[test]
fn high_card_takes_five_highest() {
    let result = evaluate(&cards("Ah Kd 9c 7s 4h 3d 2c"));
    assert_eq!(result.category(), HandCategory::HighCard);
    assert_eq!(result.rank1(), Some(Rank::Ace));
    assert_eq!(result.rank2(), Some(Rank::King));
    assert_eq!(
        ranks(result.cards()),
        [Rank::Ace, Rank::King, Rank::Nine, Rank::Seven, Rank::Four]
    );
}

#[test]
fn flop_without_made_hand_is_high_card() {
    let result = evaluate_best_hand(&cards("Kh 9h 7h"), &cards("Ah 2c"));
    assert_eq!(result.category(), HandCategory::HighCard);
    assert_eq!(result.rank1(), Some(Rank::Ace));
}

#[test]
fn pocket_pair_on_flop() {
    let result = evaluate_best_hand(&cards("Kh Qd 7c"), &cards("Jc Jd"));
    assert_eq!(result.category(), HandCategory::OnePair);
    assert_eq!(result.rank1(), Some(Rank::Jack));
    assert_eq!(
        ranks(result.cards()),
        [Rank::Jack, Rank::Jack, Rank::King, Rank::Queen, Rank::Seven]
    );
}

#[test]
fn straight_flush_on_turn() {
    let result = evaluate_best_hand(&cards("6s 7s 8s Kd"), &cards("9s 10s"));
    assert_eq!(result.category(), HandCategory::StraightFlush);
    assert_eq!(result.rank1(), Some(Rank::Ten));
}

#[test]
fn fewer_than_five_cards_still_evaluate() {
    let pair = evaluate_best_hand(&[], &cards("Ah Ad"));
    assert_eq!(pair.category(), HandCategory::OnePair);
    assert_eq!(pair.rank1(), Some(Rank::Ace));
    assert_eq!(pair.rank2(), None);
    assert_eq!(pair.cards().len(), 2);

    let high = evaluate_best_hand(&[], &cards("Ah Kd"));
    assert_eq!(high.category(), HandCategory::HighCard);
    assert_eq!(high.cards().len(), 2);

    let quads = evaluate(&cards("9h 9d 9c 9s"));
    assert_eq!(quads.category(), HandCategory::FourOfAKind);
    assert_eq!(quads.rank2(), None);
}

#[test]
fn empty_pool_is_empty_high_card() {
    let result = evaluate(&[]);
    assert_eq!(result.category(), HandCategory::HighCard);
    assert!(result.cards().is_empty());
    assert_eq!(result.rank1(), None);
    assert_eq!(result.rank2(), None);
}

#[test]
fn evaluation_is_idempotent() {
    let board = cards("Jh 10d 4c 4s 9h");
    let hole = cards("Qh 8c");
    let first = evaluate_best_hand(&board, &hole);
    let second = evaluate_best_hand(&board, &hole);
    assert_eq!(first, second);
    assert!(compare(&first, &second).is_eq());
}

#[test]
fn no_stronger_detector_matches_the_selected_hand() {
    for seed in 0..300 {
        let mut deck = Deck::new(seed);
        let pool: Vec<Card> = (0..7).map(|_| deck.draw().unwrap()).collect();
        let buckets = RankBuckets::new(&pool);
        let result = evaluate(&pool);

        for (i, detect) in DETECTORS.iter().enumerate() {
            let category = 9 - i as u8;
            if category > result.category().value() {
                assert!(detect(&buckets).is_none(), "seed {seed}: {result}");
            } else if category == result.category().value() {
                assert_eq!(detect(&buckets).as_ref(), Some(&result));
            }
        }
    }
}

#[test]
fn selector_agrees_with_exhaustive_search() {
    for seed in 0..300 {
        let mut deck = Deck::new(seed);
        for size in 5..=7 {
            let pool: Vec<Card> = (0..size).map(|_| deck.draw().unwrap()).collect();
            let fast = evaluate(&pool);
            let slow = evaluate_exhaustive(&pool).unwrap();
            assert_eq!(fast.category(), slow.category(), "seed {seed}: {fast} vs {slow}");
            assert!(compare(&fast, &slow).is_eq(), "seed {seed}: {fast} vs {slow}");
        }
    }
}

#[test]
fn exhaustive_search_needs_five_cards() {
    assert!(evaluate_exhaustive(&cards("Ah Kh Qh Jh")).is_none());
}

#[test]
fn validated_evaluation_rejects_bad_pools() {
    assert_eq!(
        try_evaluate_best_hand(&cards("Ah Kd 7c"), &cards("Kd 2s")),
        Err(EvalError::DuplicateCard(Card::new(Rank::King, Suit::Diamonds)))
    );
    assert_eq!(
        try_evaluate_best_hand(&cards("Ah Kd 7c 6c 5c 4c"), &cards("3d 2s")),
        Err(EvalError::TooManyCards(8))
    );

    let result = try_evaluate_best_hand(&cards("Ah Kd 7c"), &cards("As 2s")).unwrap();
    assert_eq!(result.category(), HandCategory::OnePair);
}

#[test]
fn card_parsing_and_display() {
    assert_eq!("10h".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
    assert_eq!("Th".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
    assert_eq!("A♠".parse::<Card>(), Ok(Card::new(Rank::Ace, Suit::Spades)));
    assert_eq!("qD".parse::<Card>(), Ok(Card::new(Rank::Queen, Suit::Diamonds)));

    assert_eq!("1h".parse::<Card>(), Err(CardError::UnknownRank));
    assert_eq!("Ax".parse::<Card>(), Err(CardError::UnknownSuit));
    assert_eq!("h".parse::<Card>(), Err(CardError::Malformed));
    assert_eq!("".parse::<Card>(), Err(CardError::Malformed));

    assert_eq!(Rank::try_from(15), Err(CardError::InvalidRank(15)));
    assert_eq!(Rank::try_from(11), Ok(Rank::Jack));

    assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10♥");
    assert_eq!(Card::new(Rank::Ace, Suit::Clubs).to_string(), "A♣");
}

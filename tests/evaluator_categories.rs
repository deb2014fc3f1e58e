use poker_trainer::cards::{parse_cards, Card, Rank, Suit};
use poker_trainer::evaluator::{evaluate, evaluate_holdem, EvalError, HandRank};
use poker_trainer::hand::{Board, HandError, HoleCards};

fn rank_of(s: &str) -> Option<HandRank> {
    evaluate(&parse_cards(s).unwrap()).unwrap().rank()
}

#[test]
fn category_two_pair_boundary() {
    let xs = [
        Card::new(Rank::Two, Suit::Spades),
        Card::new(Rank::Two, Suit::Hearts),
        Card::new(Rank::Three, Suit::Diamonds),
        Card::new(Rank::Three, Suit::Clubs),
        Card::new(Rank::Four, Suit::Spades),
    ];
    let e = evaluate(&xs).unwrap();
    assert_eq!(e.rank(), Some(HandRank::TwoPair));
    assert_eq!(e.ordinal(), 3);
}

#[test]
fn category_full_house_not_quads() {
    let e = evaluate(&parse_cards("A♠ A♥ A♦ 2♣ 2♠").unwrap()).unwrap();
    assert_eq!(e.rank(), Some(HandRank::FullHouse));
    assert_eq!(e.ordinal(), 7);
}

#[test]
fn category_straight() {
    assert_eq!(rank_of("5s 6h 7d 8c 9s"), Some(HandRank::Straight));
}

#[test]
fn category_wheel_is_ace_low_straight() {
    let e = evaluate(&parse_cards("As 2h 3d 4c 5s").unwrap()).unwrap();
    assert_eq!(e.rank(), Some(HandRank::Straight));
    assert_eq!(e.ordinal(), 5);
}

#[test]
fn category_royal_flush() {
    let e = evaluate(&parse_cards("Ah Kh Qh Jh Th").unwrap()).unwrap();
    assert_eq!(e.rank(), Some(HandRank::RoyalFlush));
    assert_eq!(e.label(), "Royal Flush");
    assert_eq!(e.tie_score(), 1014);
}

#[test]
fn category_straight_flush() {
    assert_eq!(rank_of("9s 8s 7s 6s 5s"), Some(HandRank::StraightFlush));
}

#[test]
fn category_four_of_a_kind() {
    assert_eq!(rank_of("9c 9d 9h 9s Ac"), Some(HandRank::FourOfAKind));
}

#[test]
fn category_flush() {
    assert_eq!(rank_of("Kh Th 8h 6h 3h"), Some(HandRank::Flush));
}

#[test]
fn category_trips_pair_high_card() {
    assert_eq!(rank_of("7c 7d 7h Ks 2d"), Some(HandRank::ThreeOfAKind));
    assert_eq!(rank_of("Ah Ad Ts 9c 2d"), Some(HandRank::Pair));
    assert_eq!(rank_of("Ah Kd Ts 9c 2d"), Some(HandRank::HighCard));
}

#[test]
fn high_card_tie_score_uses_category_offset() {
    let e = evaluate(&parse_cards("Ah Kd Ts 9c 2d").unwrap()).unwrap();
    assert_eq!(e.tie_score(), 114);
}

#[test]
fn seven_card_hands_pick_the_strongest_category() {
    assert_eq!(rank_of("As Ah Ks Qs Js Ts 9s"), Some(HandRank::RoyalFlush));
    assert_eq!(rank_of("2c 2d 2h 2s Kc Kd 7h"), Some(HandRank::FourOfAKind));
    assert_eq!(rank_of("Jc Jd 9c 9h 4s 4d Ac"), Some(HandRank::TwoPair));
}

#[test]
fn fewer_than_five_cards_is_incomplete() {
    for s in ["", "Ah", "Ah Kh", "Ah Kh Qh Jh"] {
        let e = evaluate(&parse_cards(s).unwrap()).unwrap();
        assert_eq!(e.rank(), None);
        assert_eq!(e.ordinal(), 0);
        assert_eq!(e.tie_score(), 0);
        assert_eq!(e.label(), "Incomplete");
    }
}

#[test]
fn rejects_duplicates_and_oversized_input() {
    let dup = parse_cards("Ah Ah Kd 7s 2c").unwrap();
    assert!(evaluate(&dup).is_err());

    let eight = parse_cards("2c 3c 4c 5c 6c 7c 8c 9c").unwrap();
    assert_eq!(evaluate(&eight), Err(EvalError::TooManyCards(8)));
}

#[test]
fn holdem_wrapper_validates_overlap() {
    let hole: HoleCards = "Ah Kh".parse().unwrap();
    let board = Board::new(parse_cards("Ah 2c 3d").unwrap());
    assert_eq!(
        evaluate_holdem(&hole, &board),
        Err(EvalError::InvalidHand(HandError::Overlap(Card::new(Rank::Ace, Suit::Hearts))))
    );
}

use poker_trainer::cards::{parse_cards, Card};
use poker_trainer::deck::Deck;
use poker_trainer::evaluator::HandRank;
use poker_trainer::hand::{Board, HandError, HoleCards};
use poker_trainer::showdown::{resolve, Seat, ShowdownError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn hole(s: &str) -> HoleCards {
    s.parse().unwrap()
}

#[test]
fn royal_flush_beats_any_random_field() {
    let player = hole("Ah Kh");
    let board: Board = "Qh Jh Th 2c 3d".parse().unwrap();
    let mut used: Vec<Card> = player.as_array().to_vec();
    used.extend_from_slice(board.as_slice());

    for seed in 0..50u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::standard().exclude_dealt(&used).shuffled(&mut rng);
        let opponents: Vec<HoleCards> = (0..8)
            .map(|_| HoleCards::from_slice(&deck.draw_n(2).unwrap()).unwrap())
            .collect();
        let sd = resolve(&player, &opponents, &board).unwrap();
        assert!(sd.player_won(), "seed {seed}");
        assert_eq!(sd.winner().evaluation.rank(), Some(HandRank::RoyalFlush));
        assert_eq!(sd.standings().len(), 9);
    }
}

#[test]
fn standings_are_sorted_best_first() {
    let board: Board = "9c 9d 4h Ks 2c".parse().unwrap();
    let sd = resolve(&hole("As 3h"), &[hole("9h 9s"), hole("Kd Kh"), hole("4c 5d")], &board)
        .unwrap();
    let seats: Vec<Seat> = sd.standings().iter().map(|c| c.seat).collect();
    assert_eq!(seats, vec![Seat::Opponent(0), Seat::Opponent(1), Seat::Opponent(2), Seat::Player]);
    assert!(sd
        .standings()
        .windows(2)
        .all(|w| w[0].evaluation >= w[1].evaluation));
}

#[test]
fn equal_hands_go_to_the_earlier_opponent() {
    let board: Board = "Ac Ad Ah As Kc".parse().unwrap();
    let sd = resolve(&hole("2c 3d"), &[hole("2h 3h"), hole("2s 3s")], &board).unwrap();
    // Everyone plays quads with the king; the player is listed first.
    assert_eq!(sd.winner().seat, Seat::Player);
    assert_eq!(sd.standings()[1].seat, Seat::Opponent(0));
}

#[test]
fn short_board_resolves_on_incomplete_hands() {
    let board = Board::new(parse_cards("Kc 7d").unwrap());
    let sd = resolve(&hole("As Qd"), &[hole("7c 7h")], &board).unwrap();
    assert!(sd.standings().iter().all(|c| !c.evaluation.is_complete()));
    assert_eq!(sd.winner().seat, Seat::Player);
}

#[test]
fn overlapping_cards_are_rejected() {
    let board: Board = "Kc 7d 2h 9s 4c".parse().unwrap();
    let err = resolve(&hole("As Qd"), &[hole("As 3h")], &board).unwrap_err();
    let dup: Card = "As".parse().unwrap();
    assert_eq!(err, ShowdownError::InvalidDeal(HandError::DuplicateCard(dup)));
}

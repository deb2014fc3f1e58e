use poker_trainer::cards::{Card, Rank, Suit};
use poker_trainer::deck::{Deck, DeckError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

fn sorted(cards: &[Card]) -> Vec<Card> {
    let mut v = cards.to_vec();
    v.sort();
    v
}

#[test]
fn fresh_deck_covers_every_card_once() {
    let deck = Deck::standard();
    let unique: HashSet<Card> = deck.as_slice().iter().copied().collect();
    assert_eq!(unique.len(), 52);
    for r in Rank::ALL {
        for s in Suit::ALL {
            assert!(deck.contains(&Card::new(r, s)));
        }
    }
}

#[test]
fn shuffle_is_a_permutation() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let shuffled = Deck::standard().shuffled(&mut rng);
    assert_eq!(sorted(shuffled.as_slice()), sorted(Deck::standard().as_slice()));
}

#[test]
fn shuffles_are_not_identity() {
    // Statistical: 20 shuffles all landing on the identity order is effectively impossible.
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let standard = Deck::standard();
    let moved = (0..20)
        .filter(|_| Deck::standard().shuffled(&mut rng).as_slice() != standard.as_slice())
        .count();
    assert_eq!(moved, 20);
}

#[test]
fn seeded_shuffles_reproduce() {
    let mut a = Deck::standard();
    let mut b = Deck::standard();
    a.shuffle_seeded(77);
    b.shuffle_seeded(77);
    assert_eq!(a, b);
}

#[test]
fn dealing_is_disjoint_and_exhausts_with_error() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut deck = Deck::standard().shuffled(&mut rng);
    let mut seen = HashSet::new();
    for _ in 0..26 {
        for c in deck.draw_n(2).unwrap() {
            assert!(seen.insert(c));
        }
    }
    assert!(deck.is_empty());
    assert_eq!(
        deck.draw_n(1),
        Err(DeckError::InsufficientCards { requested: 1, remaining: 0 })
    );
}

#[test]
fn excluding_dealt_cards_removes_them_only() {
    let (dealt, _) = Deck::standard().deal(6).unwrap();
    let rest = Deck::standard().exclude_dealt(&dealt);
    assert_eq!(rest.len(), 46);
    assert!(dealt.iter().all(|c| !rest.contains(c)));

    let err = rest.deal(47).unwrap_err();
    assert_eq!(err, DeckError::InsufficientCards { requested: 47, remaining: 46 });
}

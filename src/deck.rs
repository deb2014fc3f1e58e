use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("insufficient cards: requested {requested}, {remaining} remaining")]
    InsufficientCards { requested: usize, remaining: usize },
}

/// An ordered run of unique cards. Dealing takes from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards, suit-major and rank-minor (`2♠ 3♠ .. A♠ 2♥ ..`).
    ///
    /// ```
    /// use poker_trainer::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle in place with the provided RNG (Fisher-Yates).
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Consume the deck and return a uniformly shuffled permutation of it.
    pub fn shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.shuffle_with(rng);
        self
    }

    /// Split off the first `n` cards, returning them with the rest of the deck.
    ///
    /// ```
    /// use poker_trainer::deck::{Deck, DeckError};
    ///
    /// let (hand, rest) = Deck::standard().deal(2).unwrap();
    /// assert_eq!(hand.len(), 2);
    /// assert_eq!(rest.len(), 50);
    /// assert!(matches!(rest.deal(51), Err(DeckError::InsufficientCards { .. })));
    /// ```
    pub fn deal(mut self, n: usize) -> Result<(Vec<Card>, Deck), DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        let rest = self.cards.split_off(n);
        Ok((self.cards, Deck { cards: rest }))
    }

    /// Take the first `n` cards in place.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Remove every card that is already in play, keeping the remaining order.
    pub fn exclude_dealt(mut self, dealt: &[Card]) -> Self {
        self.cards.retain(|c| !dealt.contains(c));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        let set: HashSet<Card> = d.as_slice().iter().copied().collect();
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn standard_deck_is_suit_major() {
        let d = Deck::standard();
        assert_eq!(d.as_slice()[0], Card::new(Rank::Two, Suit::Spades));
        assert_eq!(d.as_slice()[12], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(d.as_slice()[13], Card::new(Rank::Two, Suit::Hearts));
        assert_eq!(d.as_slice()[51], Card::new(Rank::Ace, Suit::Clubs));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn deal_takes_from_the_front() {
        let (hand, rest) = Deck::standard().deal(3).unwrap();
        assert_eq!(
            hand,
            vec![
                Card::new(Rank::Two, Suit::Spades),
                Card::new(Rank::Three, Suit::Spades),
                Card::new(Rank::Four, Suit::Spades),
            ]
        );
        assert_eq!(rest.len(), 49);
        assert_eq!(rest.as_slice()[0], Card::new(Rank::Five, Suit::Spades));
    }

    #[test]
    fn deal_whole_deck_then_fail() {
        let (all, rest) = Deck::standard().deal(52).unwrap();
        assert_eq!(all.len(), 52);
        assert!(rest.is_empty());
        let err = rest.deal(1).unwrap_err();
        assert_eq!(err, DeckError::InsufficientCards { requested: 1, remaining: 0 });
    }

    #[test]
    fn draw_n_does_not_truncate() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        assert_eq!(d.draw_n(50).unwrap().len(), 50);
        assert!(d.draw_n(3).is_err());
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn exclude_dealt_filters_cards_in_play() {
        let dealt = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::King, Suit::Hearts)];
        let d = Deck::standard().exclude_dealt(&dealt);
        assert_eq!(d.len(), 50);
        assert!(!d.contains(&dealt[0]));
        assert!(!d.contains(&dealt[1]));
    }
}

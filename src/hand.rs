use crate::cards::{parse_cards, Card, CardParseError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("card {0} is dealt more than once")]
    DuplicateCard(Card),
    #[error("too many board cards: {0}")]
    TooManyBoardCards(usize),
    #[error("hole card {0} is also on the board")]
    Overlap(Card),
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("card parse error: {0}")]
    CardParse(#[from] CardParseError),
}

/// First card that repeats in `cards`, if any.
pub(crate) fn first_duplicate<I>(cards: I) -> Option<Card>
where
    I: IntoIterator<Item = Card>,
{
    let mut seen = HashSet::new();
    cards.into_iter().find(|c| !seen.insert(*c))
}

/// A player's two private hole cards.
///
/// ```
/// use poker_trainer::cards::{Card, Rank, Suit};
/// use poker_trainer::hand::HoleCards;
///
/// let hole = HoleCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// ).unwrap();
/// assert!(hole.is_suited());
/// assert!(!hole.is_pair());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateCard(a));
        }
        Ok(Self(a, b))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match *slice {
            [a, b] => Self::try_new(a, b),
            _ => Err(HandError::HoleCount(slice.len())),
        }
    }

    pub fn first(&self) -> Card {
        self.0
    }

    pub fn second(&self) -> Card {
        self.1
    }

    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }

    pub fn is_pair(&self) -> bool {
        self.0.rank() == self.1.rank()
    }

    pub fn is_suited(&self) -> bool {
        self.0.suit() == self.1.suit()
    }

    /// Hole cards followed by the board: the set a hand is evaluated on.
    pub fn with_board(&self, board: &Board) -> Vec<Card> {
        let mut cards = Vec::with_capacity(2 + board.len());
        cards.extend_from_slice(&self.as_array());
        cards.extend_from_slice(board.as_slice());
        cards
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(&parse_cards(s)?)
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

/// Community cards: empty preflop, then three, four and five.
///
/// ```
/// use poker_trainer::hand::Board;
///
/// let board: Board = "2c 3c 4c".parse().unwrap();
/// assert_eq!(board.len(), 3);
/// assert_eq!(board.to_string(), "2c 3c 4c");
/// assert!("2c 2c".parse::<Board>().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub const MAX_CARDS: usize = 5;

    /// Unchecked; [`validate_holdem`] catches a bad board at evaluation time.
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > Self::MAX_CARDS {
            return Err(HandError::TooManyBoardCards(cards.len()));
        }
        if let Some(dup) = first_duplicate(cards.iter().copied()) {
            return Err(HandError::DuplicateCard(dup));
        }
        Ok(Self { cards })
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

    pub(crate) fn extend<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_new(parse_cards(s)?)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Check that hole cards and a board of 0..=5 cards form one Hold'em hand.
///
/// ```
/// use poker_trainer::cards::{Card, Rank, Suit};
/// use poker_trainer::hand::{validate_holdem, Board, HandError, HoleCards};
///
/// let hole: HoleCards = "As Ks".parse().unwrap();
/// assert!(validate_holdem(&hole, &"2c 3c 4c".parse().unwrap()).is_ok());
///
/// let board = Board::new(vec![Card::new(Rank::King, Suit::Spades)]);
/// assert_eq!(
///     validate_holdem(&hole, &board),
///     Err(HandError::Overlap(Card::new(Rank::King, Suit::Spades)))
/// );
/// ```
pub fn validate_holdem(hole: &HoleCards, board: &Board) -> Result<(), HandError> {
    if board.len() > Board::MAX_CARDS {
        return Err(HandError::TooManyBoardCards(board.len()));
    }
    if let Some(dup) = first_duplicate(board.as_slice().iter().copied()) {
        return Err(HandError::DuplicateCard(dup));
    }
    if let Some(&c) = hole.as_array().iter().find(|c| board.as_slice().contains(c)) {
        return Err(HandError::Overlap(c));
    }
    if hole.first() == hole.second() {
        return Err(HandError::DuplicateCard(hole.first()));
    }
    Ok(())
}

/// Check that no physical card appears twice across a whole deal: the
/// player's hole cards, every opponent's hole cards and the board.
///
/// ```
/// use poker_trainer::hand::{validate_disjoint, Board, HandError, HoleCards};
///
/// let player: HoleCards = "As Kd".parse().unwrap();
/// let opponent: HoleCards = "Qc Kd".parse().unwrap();
/// let err = validate_disjoint(&player, &[opponent], &Board::default()).unwrap_err();
/// assert!(matches!(err, HandError::DuplicateCard(_)));
/// ```
pub fn validate_disjoint(
    player: &HoleCards,
    opponents: &[HoleCards],
    board: &Board,
) -> Result<(), HandError> {
    let all = player
        .as_array()
        .into_iter()
        .chain(opponents.iter().flat_map(|h| h.as_array()))
        .chain(board.as_slice().iter().copied());
    match first_duplicate(all) {
        Some(card) => Err(HandError::DuplicateCard(card)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn hole_cards_must_be_two_distinct() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(HoleCards::try_new(a, a), Err(HandError::DuplicateCard(a)));
        assert_eq!(HoleCards::from_slice(&[a]), Err(HandError::HoleCount(1)));
        assert!(matches!("As Kd Qc".parse::<HoleCards>(), Err(HandError::HoleCount(3))));
        assert!(matches!("As Zz".parse::<HoleCards>(), Err(HandError::CardParse(_))));
    }

    #[test]
    fn hole_card_shape() {
        let pocket: HoleCards = "9c 9d".parse().unwrap();
        assert!(pocket.is_pair());
        assert!(!pocket.is_suited());
        assert_eq!(pocket.to_string(), "9c 9d");
    }

    #[test]
    fn board_try_new_checks_limits_and_dupes() {
        assert!(matches!(
            "2c 3c 4c 5c 6c 7c".parse::<Board>(),
            Err(HandError::TooManyBoardCards(6))
        ));
        let two = Card::new(Rank::Two, Suit::Clubs);
        assert_eq!(Board::try_new(vec![two, two]), Err(HandError::DuplicateCard(two)));
        assert!(Board::default().is_empty());
    }

    #[test]
    fn with_board_orders_hole_first() {
        let hole: HoleCards = "As Kd".parse().unwrap();
        let board: Board = "2c, 3c 4c".parse().unwrap();
        let all = hole.with_board(&board);
        assert_eq!(all.len(), 5);
        assert_eq!(all[0], hole.first());
        assert_eq!(&all[2..], board.as_slice());
    }

    #[test]
    fn unchecked_board_is_caught_by_validation() {
        let hole: HoleCards = "As Kd".parse().unwrap();
        let two = Card::new(Rank::Two, Suit::Clubs);
        let board = Board::new(vec![two, two]);
        assert_eq!(validate_holdem(&hole, &board), Err(HandError::DuplicateCard(two)));
    }

    #[test]
    fn disjoint_deal_passes() {
        let player: HoleCards = "As Ah".parse().unwrap();
        let opponents: Vec<HoleCards> =
            vec!["Kc Kd".parse().unwrap(), "Qs Qh".parse().unwrap()];
        let board: Board = "2c 3c 4c 5d 6h".parse().unwrap();
        assert!(validate_disjoint(&player, &opponents, &board).is_ok());
    }

    #[test]
    fn disjoint_catches_board_collision_with_opponent() {
        let player: HoleCards = "As Ah".parse().unwrap();
        let opponents: Vec<HoleCards> = vec!["Kc Kd".parse().unwrap()];
        let board = Board::new(vec![
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::King, Suit::Diamonds),
        ]);
        let err = validate_disjoint(&player, &opponents, &board).unwrap_err();
        assert_eq!(err, HandError::DuplicateCard(Card::new(Rank::King, Suit::Diamonds)));
    }
}

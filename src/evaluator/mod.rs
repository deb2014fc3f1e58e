pub(crate) mod analysis;
pub(crate) mod detector;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use crate::hand::{first_duplicate, validate_holdem, Board, HandError, HoleCards};
use analysis::HandAnalysis;
use detector::DETECTORS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Most cards a single evaluation accepts: two hole cards plus a full board.
pub const MAX_EVAL_CARDS: usize = 7;

/// Fewest cards that produce a real category.
pub const MIN_EVAL_CARDS: usize = 5;

/// Poker hand category from weakest to strongest. The discriminant is the
/// rank ordinal, 1 (High Card) through 10 (Royal Flush).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[repr(u8)]
pub enum HandRank {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl HandRank {
    pub const ALL: [HandRank; 10] = [
        HandRank::HighCard,
        HandRank::Pair,
        HandRank::TwoPair,
        HandRank::ThreeOfAKind,
        HandRank::Straight,
        HandRank::Flush,
        HandRank::FullHouse,
        HandRank::FourOfAKind,
        HandRank::StraightFlush,
        HandRank::RoyalFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn from_ordinal(v: u8) -> Option<HandRank> {
        match v {
            1 => Some(HandRank::HighCard),
            2 => Some(HandRank::Pair),
            3 => Some(HandRank::TwoPair),
            4 => Some(HandRank::ThreeOfAKind),
            5 => Some(HandRank::Straight),
            6 => Some(HandRank::Flush),
            7 => Some(HandRank::FullHouse),
            8 => Some(HandRank::FourOfAKind),
            9 => Some(HandRank::StraightFlush),
            10 => Some(HandRank::RoyalFlush),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of classifying a hand.
///
/// `rank` is `None` for the "Incomplete" state (fewer than five cards), which
/// orders below every real category. Ordering is by rank, then `tie_score`.
///
/// `tie_score` is `100 * rank + highest card value` over every supplied card.
/// It does not look at kickers, so two hands of the same category can compare
/// equal even when a full best-five comparison would split them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Evaluation {
    rank: Option<HandRank>,
    tie_score: u32,
}

impl Evaluation {
    pub const INCOMPLETE_LABEL: &'static str = "Incomplete";

    /// The degraded classification returned for fewer than five cards.
    pub const fn incomplete() -> Self {
        Self { rank: None, tie_score: 0 }
    }

    pub(crate) const fn new(rank: HandRank, tie_score: u32) -> Self {
        Self { rank: Some(rank), tie_score }
    }

    pub const fn rank(&self) -> Option<HandRank> {
        self.rank
    }

    /// Rank ordinal, with 0 standing for "Incomplete".
    pub const fn ordinal(&self) -> u8 {
        match self.rank {
            Some(r) => r.ordinal(),
            None => 0,
        }
    }

    pub const fn tie_score(&self) -> u32 {
        self.tie_score
    }

    pub const fn is_complete(&self) -> bool {
        self.rank.is_some()
    }

    pub const fn label(&self) -> &'static str {
        match self.rank {
            Some(r) => r.label(),
            None => Self::INCOMPLETE_LABEL,
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("too many cards to evaluate: {0} (max 7)")]
    TooManyCards(usize),
}

/// Classify up to seven cards.
///
/// Counts ranks and suits over every supplied card (there is no explicit
/// best-five selection) and walks the category detectors from Royal Flush down
/// to High Card; the first match wins. Input order does not matter.
///
/// ```
/// use poker_trainer::cards::parse_cards;
/// use poker_trainer::evaluator::{evaluate, HandRank};
///
/// let cards = parse_cards("Ah Kh Qh Jh Th").unwrap();
/// let eval = evaluate(&cards).unwrap();
/// assert_eq!(eval.rank(), Some(HandRank::RoyalFlush));
/// assert_eq!(eval.tie_score(), 1014);
///
/// let preflop = parse_cards("Ah Kh").unwrap();
/// assert_eq!(evaluate(&preflop).unwrap().label(), "Incomplete");
/// ```
pub fn evaluate(cards: &[Card]) -> Result<Evaluation, EvalError> {
    if cards.len() > MAX_EVAL_CARDS {
        return Err(EvalError::TooManyCards(cards.len()));
    }
    if let Some(dup) = first_duplicate(cards.iter().copied()) {
        return Err(HandError::DuplicateCard(dup).into());
    }
    if cards.len() < MIN_EVAL_CARDS {
        return Ok(Evaluation::incomplete());
    }

    let analysis = HandAnalysis::new(cards);
    let eval = DETECTORS
        .iter()
        .find(|d| d.detect(&analysis))
        .map(|d| d.build_evaluation(&analysis))
        .unwrap_or_else(|| analysis.build_evaluation(HandRank::HighCard));
    log::trace!("evaluated {} cards as {} ({})", cards.len(), eval.label(), eval.tie_score());
    Ok(eval)
}

/// Evaluate a Hold'em hand given hole cards and a board of 0..=5 cards.
///
/// ```
/// use poker_trainer::evaluator::{evaluate_holdem, HandRank};
/// use poker_trainer::hand::{Board, HoleCards};
///
/// let hole: HoleCards = "As Ah".parse().unwrap();
/// let board: Board = "Qc Jd 9h 3s 2c".parse().unwrap();
/// let eval = evaluate_holdem(&hole, &board).unwrap();
/// assert_eq!(eval.rank(), Some(HandRank::Pair));
/// assert_eq!(eval.tie_score(), 214);
/// ```
pub fn evaluate_holdem(hole: &HoleCards, board: &Board) -> Result<Evaluation, EvalError> {
    validate_holdem(hole, board)?;
    evaluate(&hole.with_board(board))
}

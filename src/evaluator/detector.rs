use super::analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::{Evaluation, HandRank};

/// Strategy pattern: each detector recognises one category.
/// Detectors are tried in `DETECTORS` order and the first match wins.
pub trait CategoryDetector {
    fn rank(&self) -> HandRank;
    fn detect(&self, analysis: &HandAnalysis) -> bool;

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(self.rank())
    }
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Royal Flush: flush-eligible, a straight, and both an Ace and a King present
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn rank(&self) -> HandRank {
        HandRank::RoyalFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush
            && analysis.straight_info.is_straight
            && analysis.contains_rank(Rank::Ace)
            && analysis.contains_rank(Rank::King)
    }
}

/// Straight Flush: flush-eligible and a straight
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn rank(&self) -> HandRank {
        HandRank::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush && analysis.straight_info.is_straight
    }
}

/// Four of a Kind: largest rank group holds four cards
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn rank(&self) -> HandRank {
        HandRank::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.count_at(0) == 4
    }
}

/// Full House: largest group is three, the next is exactly two
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn rank(&self) -> HandRank {
        HandRank::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.count_at(0) == 3 && analysis.rank_groups.count_at(1) == 2
    }
}

/// Flush: five or more cards of one suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn rank(&self) -> HandRank {
        HandRank::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush
    }
}

/// Straight: five consecutive values, or the wheel
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn rank(&self) -> HandRank {
        HandRank::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight
    }
}

/// Three of a Kind
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn rank(&self) -> HandRank {
        HandRank::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.count_at(0) == 3
    }
}

/// Two Pair: at least two ranks appear exactly twice
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn rank(&self) -> HandRank {
        HandRank::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.count_at(0) == 2 && analysis.rank_groups.pair_count() >= 2
    }
}

/// One Pair
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn rank(&self) -> HandRank {
        HandRank::Pair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.count_at(0) == 2
    }
}

/// High Card
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn rank(&self) -> HandRank {
        HandRank::HighCard
    }

    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true // Always matches as fallback
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn analyze(s: &str) -> HandAnalysis {
        HandAnalysis::new(&parse_cards(s).unwrap())
    }

    fn first_match(s: &str) -> HandRank {
        let a = analyze(s);
        DETECTORS.iter().find(|d| d.detect(&a)).map(|d| d.rank()).unwrap()
    }

    #[test]
    fn detectors_are_in_descending_rank_order() {
        let ranks: Vec<HandRank> = DETECTORS.iter().map(|d| d.rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(ranks, sorted);
        assert_eq!(ranks.len(), HandRank::ALL.len());
    }

    #[test]
    fn test_royal_flush_detector() {
        assert!(RoyalFlushDetector.detect(&analyze("Ah Kh Qh Jh Th")));
        assert!(!RoyalFlushDetector.detect(&analyze("Kh Qh Jh Th 9h")));
    }

    #[test]
    fn test_straight_flush_detector() {
        assert!(StraightFlushDetector.detect(&analyze("9s 8s 7s 6s 5s")));
        assert!(!StraightFlushDetector.detect(&analyze("9s 8s 7s 6s 5h")));
    }

    #[test]
    fn test_four_of_a_kind_detector() {
        assert!(FourOfAKindDetector.detect(&analyze("9c 9d 9h 9s Ac")));
        assert!(!FourOfAKindDetector.detect(&analyze("9c 9d 9h As Ac")));
    }

    #[test]
    fn test_full_house_detector() {
        assert!(FullHouseDetector.detect(&analyze("3c 3d 3h Js Jc")));
        assert!(!FullHouseDetector.detect(&analyze("3c 3d 3h Js Qc")));
    }

    #[test]
    fn test_two_pair_detector() {
        assert!(TwoPairDetector.detect(&analyze("Jc Jd 9c 9h 2s")));
        assert!(!TwoPairDetector.detect(&analyze("Jc Jd 9c 8h 2s")));
    }

    #[test]
    fn test_one_pair_detector() {
        assert!(OnePairDetector.detect(&analyze("Ah Ad Ts 9c 2d")));
        assert!(!OnePairDetector.detect(&analyze("Ah Kd Ts 9c 2d")));
    }

    #[test]
    fn test_detector_priority_straight_flush_over_flush() {
        assert_eq!(first_match("9h 8h 7h 6h 5h"), HandRank::StraightFlush);
    }

    #[test]
    fn royal_flush_check_uses_aggregate_ranks() {
        // A flush and a straight that are not the same five cards still
        // classify as royal once an Ace and King are both present.
        assert_eq!(first_match("Ah Kh 2h 3h 4h 5c Tc"), HandRank::RoyalFlush);
    }

    #[test]
    fn two_trips_do_not_make_a_full_house() {
        assert_eq!(first_match("9c 9d 9h 5s 5c 5d 2h"), HandRank::ThreeOfAKind);
    }

    #[test]
    fn trips_with_two_pairs_is_full_house() {
        assert_eq!(first_match("9c 9d 9h 5s 5c 2d 2h"), HandRank::FullHouse);
    }
}

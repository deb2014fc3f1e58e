use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Evaluation, HandRank};

/// Aggregate counts over every supplied card (5..=7).
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub rank_counts: [u8; 15],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
    pub highest: Rank,
}

impl HandAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        debug_assert!(!cards.is_empty());
        let mut rank_counts = [0u8; 15];
        for c in cards {
            rank_counts[c.rank().value() as usize] += 1;
        }
        let highest = cards.iter().map(|c| c.rank()).max().unwrap_or(Rank::Two);

        let rank_groups = RankGroups::from_counts(&rank_counts);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(&rank_counts);

        Self { rank_counts, rank_groups, suit_info, straight_info, highest }
    }

    pub fn contains_rank(&self, rank: Rank) -> bool {
        self.rank_counts[rank.value() as usize] > 0
    }

    /// Build an Evaluation for `rank`, scoring ties by the highest card seen.
    pub fn build_evaluation(&self, rank: HandRank) -> Evaluation {
        let tie_score = 100 * u32::from(rank.ordinal()) + u32::from(self.highest.value());
        Evaluation::new(rank, tie_score)
    }
}

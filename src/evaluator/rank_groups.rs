use crate::cards::Rank;

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Create RankGroups from a rank count array.
    /// The array should be indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups = Vec::new();

        for rank in Rank::ALL.iter().copied() {
            let count = rank_counts[rank.value() as usize];
            if count > 0 {
                groups.push((rank, count));
            }
        }

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Size of the `i`-th largest group, or 0 if there are fewer groups.
    pub fn count_at(&self, i: usize) -> u8 {
        self.groups.get(i).map(|(_, count)| *count).unwrap_or(0)
    }

    /// Number of distinct ranks that appear exactly twice.
    pub fn pair_count(&self) -> usize {
        self.groups.iter().filter(|(_, count)| *count == 2).count()
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }

    #[cfg(test)]
    fn rank_at(&self, i: usize) -> Option<Rank> {
        self.groups.get(i).map(|(rank, _)| *rank)
    }
}

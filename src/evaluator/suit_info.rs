use crate::cards::Card;

/// Per-suit counts and whether some suit reaches five cards (flush-eligible).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub counts: [u8; 4],
    pub is_flush: bool,
}

impl SuitInfo {
    pub fn detect(cards: &[Card]) -> Self {
        let counts = suit_counts(cards);
        SuitInfo { counts, is_flush: counts.iter().any(|&n| n >= 5) }
    }

    /// Size of the largest same-suit group.
    pub fn max_count(&self) -> u8 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Count cards per suit, indexed in `Suit::ALL` order.
fn suit_counts(cards: &[Card]) -> [u8; 4] {
    let mut counts = [0u8; 4];
    for c in cards {
        counts[c.suit() as usize] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Suit};

    #[test]
    fn test_flush() {
        let info = SuitInfo::detect(&parse_cards("As Ks Qs Js 9s").unwrap());
        assert!(info.is_flush);
        assert_eq!(info.counts[Suit::Spades as usize], 5);
        assert_eq!(info.max_count(), 5);
    }

    #[test]
    fn test_not_flush() {
        let info = SuitInfo::detect(&parse_cards("As Kh Qs Js 9s").unwrap());
        assert!(!info.is_flush);
        assert_eq!(info.max_count(), 4);
    }

    #[test]
    fn test_flush_within_seven() {
        let info = SuitInfo::detect(&parse_cards("2c 3c Ah 4c Kd 7c 9c").unwrap());
        assert!(info.is_flush);
        assert_eq!(info.counts[Suit::Clubs as usize], 5);
    }

    #[test]
    fn empty_hand_has_no_suit_group() {
        assert_eq!(SuitInfo::detect(&[]).max_count(), 0);
    }
}

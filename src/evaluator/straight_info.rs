/// Whether five consecutive rank values appear anywhere among the cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
}

impl StraightInfo {
    /// Detect a straight from rank counts indexed by value (2..=14).
    /// Handles both regular runs and the wheel (A-2-3-4-5).
    pub fn detect(rank_counts: &[u8; 15]) -> Self {
        let present = |v: u8| rank_counts[v as usize] > 0;

        // Scan distinct values ascending, tracking the current run length.
        let mut run = 0u8;
        let mut is_straight = false;
        for v in 2u8..=14 {
            run = if present(v) { run + 1 } else { 0 };
            is_straight |= run >= 5;
        }
        if !is_straight {
            is_straight = present(14) && (2..=5).all(present);
        }
        StraightInfo { is_straight }
    }
}

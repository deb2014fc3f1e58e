use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    /// Final accuracy in percent.
    pub score: f64,
    pub hands: u32,
    /// Caller-supplied date string; house entries have none.
    pub date: Option<String>,
}

/// Top scores, best first, never longer than `capacity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    capacity: usize,
}

const HOUSE_ENTRIES: [(&str, f64); 5] = [
    ("PokerPro", 85.2),
    ("CardShark", 82.7),
    ("BluffMaster", 79.3),
    ("AceHunter", 76.8),
    ("RiverRat", 74.5),
];

impl Leaderboard {
    pub fn empty(capacity: usize) -> Self {
        Self { entries: Vec::new(), capacity }
    }

    /// A board pre-filled with the five house players.
    pub fn with_house_entries(capacity: usize) -> Self {
        let mut board = Self::empty(capacity);
        for (name, score) in HOUSE_ENTRIES {
            board.entries.push(LeaderboardEntry {
                name: name.to_string(),
                score,
                hands: 50,
                date: None,
            });
        }
        board.entries.truncate(capacity);
        board
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// A score makes the board if there is room or it beats the last entry.
    pub fn qualifies(&self, score: f64) -> bool {
        if self.entries.len() < self.capacity {
            return true;
        }
        self.entries.last().is_some_and(|last| score > last.score)
    }

    /// Insert and re-rank. Returns the entry's zero-based position, or `None`
    /// if it fell off the end.
    pub fn insert(&mut self, entry: LeaderboardEntry) -> Option<usize> {
        // Equal scores keep earlier entries ahead.
        let pos = self.entries.partition_point(|e| e.score >= entry.score);
        self.entries.insert(pos, entry);
        self.entries.truncate(self.capacity);
        (pos < self.entries.len()).then_some(pos)
    }
}

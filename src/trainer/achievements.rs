use super::progress::Progress;
use crate::probability::GamePhase;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Milestones unlocked by play. Once unlocked they stay unlocked across games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Achievement {
    FirstWin,
    Streak5,
    Streak10,
    Folder,
    RiverMaster,
    Perfectionist,
    Analyzer,
    TournamentPlayer,
    Expert,
}

impl Achievement {
    pub const ALL: [Achievement; 9] = [
        Achievement::FirstWin,
        Achievement::Streak5,
        Achievement::Streak10,
        Achievement::Folder,
        Achievement::RiverMaster,
        Achievement::Perfectionist,
        Achievement::Analyzer,
        Achievement::TournamentPlayer,
        Achievement::Expert,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Achievement::FirstWin => "First Win",
            Achievement::Streak5 => "Streak of 5",
            Achievement::Streak10 => "Ace High",
            Achievement::Folder => "Selective",
            Achievement::RiverMaster => "River Master",
            Achievement::Perfectionist => "Perfectionist",
            Achievement::Analyzer => "Analyzer",
            Achievement::TournamentPlayer => "Tournament Player",
            Achievement::Expert => "Expert",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Achievement::FirstWin => "Get your first probability right",
            Achievement::Streak5 => "5 correct answers in a row",
            Achievement::Streak10 => "10 correct answers in a row",
            Achievement::Folder => "Fold 10 hands",
            Achievement::RiverMaster => "Get 10 river probabilities right",
            Achievement::Perfectionist => "95% accuracy over at least 20 answers",
            Achievement::Analyzer => "Complete 50 hands",
            Achievement::TournamentPlayer => "Play 10 hands in tournament mode",
            Achievement::Expert => "Complete 10 games in expert mode",
        }
    }

    /// Whether `progress` meets this milestone's condition right now.
    pub fn is_earned(self, progress: &Progress) -> bool {
        let score = progress.score();
        match self {
            Achievement::FirstWin => score.correct >= 1,
            Achievement::Streak5 => progress.current_streak() >= 5,
            Achievement::Streak10 => progress.current_streak() >= 10,
            Achievement::Folder => score.folded >= 10,
            Achievement::RiverMaster => progress.phase_stats().get(GamePhase::River).correct >= 10,
            Achievement::Perfectionist => score.total >= 20 && score.accuracy() >= 95.0,
            Achievement::Analyzer => progress.hands_played() >= 50,
            Achievement::TournamentPlayer => progress.tournament_hands() >= 10,
            Achievement::Expert => progress.expert_games() >= 10,
        }
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

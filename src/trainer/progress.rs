use super::achievements::Achievement;
use super::config::TrainerConfig;
use super::leaderboard::Leaderboard;
use crate::hand::{Board, HoleCards};
use crate::probability::{GameMode, GamePhase};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// A guess further than this from the estimate counts as a directional error.
pub const TREND_THRESHOLD: f64 = 0.05;

/// Answers for the current game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
    pub folded: u32,
}

impl Score {
    /// Accuracy in percent, 0 before any answer.
    pub fn accuracy(&self) -> f64 {
        percent(self.correct, self.total)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub correct: u32,
    pub total: u32,
}

impl Tally {
    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
    }

    pub fn accuracy(&self) -> f64 {
        percent(self.correct, self.total)
    }
}

fn percent(correct: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(correct) / f64::from(total) * 100.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseStats {
    pub preflop: Tally,
    pub flop: Tally,
    pub turn: Tally,
    pub river: Tally,
}

impl PhaseStats {
    pub fn get(&self, phase: GamePhase) -> Tally {
        match phase {
            GamePhase::Preflop => self.preflop,
            GamePhase::Flop => self.flop,
            GamePhase::Turn => self.turn,
            GamePhase::River => self.river,
        }
    }

    fn get_mut(&mut self, phase: GamePhase) -> &mut Tally {
        match phase {
            GamePhase::Preflop => &mut self.preflop,
            GamePhase::Flop => &mut self.flop,
            GamePhase::Turn => &mut self.turn,
            GamePhase::River => &mut self.river,
        }
    }
}

/// Direction of the player's misses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorTrends {
    pub optimistic: u32,
    pub pessimistic: u32,
    pub accurate: u32,
}

impl ErrorTrends {
    pub fn record(&mut self, selected: f64, correct: f64) {
        let diff = selected - correct;
        if diff > TREND_THRESHOLD {
            self.optimistic += 1;
        } else if diff < -TREND_THRESHOLD {
            self.pessimistic += 1;
        } else {
            self.accurate += 1;
        }
    }
}

/// Running accuracy after an answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvolutionPoint {
    pub hand: u32,
    pub accuracy: f64,
    pub phase: GamePhase,
}

/// One answered prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    pub hand: u32,
    pub player: HoleCards,
    pub board: Board,
    pub phase: GamePhase,
    pub estimated: f64,
    pub actual: f64,
    pub correct: bool,
    pub hand_type: String,
}

/// Everything the trainer remembers between hands and games.
///
/// Per-game fields (score, hands played, current streak) reset on restart;
/// statistics, achievements and the leaderboard persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    score: Score,
    hands_played: u32,
    current_streak: u32,
    best_streak: u32,
    games_played: u32,
    phase_stats: PhaseStats,
    error_trends: ErrorTrends,
    hand_type_stats: BTreeMap<String, Tally>,
    evolution: Vec<EvolutionPoint>,
    history: VecDeque<HandRecord>,
    achievements: BTreeSet<Achievement>,
    leaderboard: Leaderboard,
    tournament_hands: u32,
    expert_games: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(&TrainerConfig::default())
    }
}

impl Progress {
    pub fn new(config: &TrainerConfig) -> Self {
        Self {
            score: Score::default(),
            hands_played: 0,
            current_streak: 0,
            best_streak: 0,
            games_played: 0,
            phase_stats: PhaseStats::default(),
            error_trends: ErrorTrends::default(),
            hand_type_stats: BTreeMap::new(),
            evolution: Vec::new(),
            history: VecDeque::new(),
            achievements: BTreeSet::new(),
            leaderboard: Leaderboard::with_house_entries(config.leaderboard_size),
            tournament_hands: 0,
            expert_games: 0,
        }
    }

    pub(crate) fn begin_hand(&mut self, mode: GameMode) -> Vec<Achievement> {
        self.hands_played += 1;
        if mode == GameMode::Tournament {
            self.tournament_hands += 1;
        }
        self.unlock()
    }

    pub(crate) fn record_answer(
        &mut self,
        record: HandRecord,
        history_limit: usize,
    ) -> Vec<Achievement> {
        let correct = record.correct;
        self.score.total += 1;
        if correct {
            self.score.correct += 1;
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }

        self.phase_stats.get_mut(record.phase).record(correct);
        self.error_trends.record(record.estimated, record.actual);
        self.hand_type_stats.entry(record.hand_type.clone()).or_default().record(correct);
        self.evolution.push(EvolutionPoint {
            hand: self.hands_played,
            accuracy: self.score.accuracy(),
            phase: record.phase,
        });

        self.history.push_front(record);
        self.history.truncate(history_limit);
        self.unlock()
    }

    pub(crate) fn record_fold(&mut self) -> Vec<Achievement> {
        self.score.folded += 1;
        self.unlock()
    }

    pub(crate) fn finish_game(&mut self, mode: GameMode) -> Vec<Achievement> {
        self.games_played += 1;
        if mode == GameMode::Expert {
            self.expert_games += 1;
        }
        self.unlock()
    }

    /// Clear the per-game counters. Best streak and games played carry over.
    pub(crate) fn reset_game(&mut self) {
        self.score = Score::default();
        self.hands_played = 0;
        self.current_streak = 0;
    }

    pub(crate) fn leaderboard_mut(&mut self) -> &mut Leaderboard {
        &mut self.leaderboard
    }

    /// Add every newly earned achievement and return the new ones.
    fn unlock(&mut self) -> Vec<Achievement> {
        let fresh: Vec<Achievement> = Achievement::ALL
            .into_iter()
            .filter(|a| !self.achievements.contains(a) && a.is_earned(self))
            .collect();
        for a in &fresh {
            log::info!("achievement unlocked: {a}");
            self.achievements.insert(*a);
        }
        fresh
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn hands_played(&self) -> u32 {
        self.hands_played
    }

    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn phase_stats(&self) -> &PhaseStats {
        &self.phase_stats
    }

    pub fn error_trends(&self) -> &ErrorTrends {
        &self.error_trends
    }

    pub fn hand_type_stats(&self) -> &BTreeMap<String, Tally> {
        &self.hand_type_stats
    }

    pub fn evolution(&self) -> &[EvolutionPoint] {
        &self.evolution
    }

    /// Most recent answer first.
    pub fn history(&self) -> &VecDeque<HandRecord> {
        &self.history
    }

    pub fn achievements(&self) -> &BTreeSet<Achievement> {
        &self.achievements
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn tournament_hands(&self) -> u32 {
        self.tournament_hands
    }

    pub fn expert_games(&self) -> u32 {
        self.expert_games
    }
}

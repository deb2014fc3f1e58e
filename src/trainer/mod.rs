//! Game loop of the probability trainer.
//!
//! A [`Trainer`] deals hands, asks for a win-probability estimate on every
//! street, scores the answer and keeps the player's [`Progress`]. All state is
//! explicit: hand a `Progress` in with [`Trainer::with_progress`] and take it
//! back out with [`Trainer::into_progress`] to persist it.

pub mod achievements;
pub mod config;
pub mod hints;
pub mod leaderboard;
pub mod progress;
pub mod round;

pub use achievements::Achievement;
pub use config::{ConfigError, TrainerConfig};
pub use hints::{beginner_hints, Hint, StrengthTier};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use progress::{ErrorTrends, HandRecord, PhaseStats, Progress, Score, Tally};
pub use round::{Advance, HandRound, RoundError};

use crate::evaluator::EvalError;
use crate::probability::{GameMode, ModeContext, OPTION_COUNT};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TrainerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Round(#[from] RoundError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("no hand has been dealt")]
    NoRound,
    #[error("this street has already been answered")]
    AlreadyAnswered,
    #[error("option {0} does not exist (expected 0..{OPTION_COUNT})")]
    InvalidOption(usize),
    #[error("the game is over")]
    GameOver,
    #[error("the game is still in progress")]
    GameInProgress,
    #[error("player name must not be empty")]
    EmptyName,
    #[error("this game has already been ranked")]
    AlreadyRanked,
}

/// Result of checking one answer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOutcome {
    pub selected: f64,
    pub correct_probability: f64,
    pub is_correct: bool,
    pub unlocked: Vec<Achievement>,
}

/// End-of-game report.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub score: Score,
    /// Accuracy in percent.
    pub final_score: f64,
    pub hands_played: u32,
    pub qualifies: bool,
    pub unlocked: Vec<Achievement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RoundStart {
    Dealt,
    GameOver(GameSummary),
}

#[derive(Debug)]
pub struct Trainer {
    config: TrainerConfig,
    progress: Progress,
    rng: ChaCha8Rng,
    round: Option<HandRound>,
    answered: bool,
    stack: u64,
    blind_level: u32,
    summary: Option<GameSummary>,
    ranked: bool,
    /// Unlocked while dealing or folding; answers report theirs directly.
    pending_unlocks: Vec<Achievement>,
}

impl Trainer {
    pub fn new(config: TrainerConfig) -> Result<Self, TrainerError> {
        let progress = Progress::new(&config);
        Self::with_progress(config, progress)
    }

    /// Resume with previously saved progress.
    pub fn with_progress(config: TrainerConfig, progress: Progress) -> Result<Self, TrainerError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        log::info!("trainer ready: mode {}, {} hands per game", config.mode, config.hands_per_game);
        Ok(Self {
            stack: config.starting_stack,
            config,
            progress,
            rng,
            round: None,
            answered: false,
            blind_level: 1,
            summary: None,
            ranked: false,
            pending_unlocks: Vec::new(),
        })
    }

    fn mode_context(&self) -> ModeContext {
        ModeContext::with_stack(self.stack)
    }

    /// Deal the next hand, or end the game once enough hands were played.
    ///
    /// ```
    /// use poker_trainer::trainer::{RoundStart, Trainer, TrainerConfig};
    ///
    /// let mut trainer = Trainer::new(TrainerConfig::default().with_seed(7)).unwrap();
    /// assert_eq!(trainer.start_round().unwrap(), RoundStart::Dealt);
    /// let round = trainer.round().unwrap();
    /// assert!(round.options().contains(&round.correct_probability()));
    /// ```
    pub fn start_round(&mut self) -> Result<RoundStart, TrainerError> {
        if self.summary.is_some() {
            return Err(TrainerError::GameOver);
        }
        if self.progress.hands_played() >= self.config.hands_per_game {
            return self.finish_game().map(RoundStart::GameOver);
        }

        let ctx = self.mode_context();
        let round = HandRound::deal(&mut self.rng, &self.config, ctx)?;
        self.round = Some(round);
        self.answered = false;

        let unlocked = self.progress.begin_hand(self.config.mode);
        self.pending_unlocks.extend(unlocked);
        let hands = self.progress.hands_played();
        if self.config.mode == GameMode::Tournament && hands % self.config.blind_level_interval == 0
        {
            self.blind_level += 1;
            log::info!("blind level up to {}", self.blind_level);
        }
        log::debug!("hand {hands} of {}", self.config.hands_per_game);
        Ok(RoundStart::Dealt)
    }

    /// Answer with one of the four offered options.
    pub fn answer(&mut self, option: usize) -> Result<AnswerOutcome, TrainerError> {
        let round = self.round.as_ref().ok_or(TrainerError::NoRound)?;
        let selected =
            *round.options().get(option).ok_or(TrainerError::InvalidOption(option))?;
        self.answer_value(selected)
    }

    /// Answer with an arbitrary probability. Correct iff within the configured
    /// tolerance of the estimate.
    pub fn answer_value(&mut self, selected: f64) -> Result<AnswerOutcome, TrainerError> {
        if self.summary.is_some() {
            return Err(TrainerError::GameOver);
        }
        let round = self.round.as_ref().ok_or(TrainerError::NoRound)?;
        if self.answered {
            return Err(TrainerError::AlreadyAnswered);
        }
        if round.is_over() {
            return Err(RoundError::HandOver.into());
        }

        let actual = round.correct_probability();
        let is_correct = (selected - actual).abs() < self.config.answer_tolerance;
        let record = HandRecord {
            hand: self.progress.hands_played(),
            player: *round.player(),
            board: round.board().clone(),
            phase: round.phase(),
            estimated: selected,
            actual,
            correct: is_correct,
            hand_type: round.evaluation().label().to_string(),
        };
        log::debug!("{} answer {selected:.3} vs {actual:.3}: {is_correct}", record.phase);

        let unlocked = self.progress.record_answer(record, self.config.history_limit);
        self.answered = true;
        Ok(AnswerOutcome { selected, correct_probability: actual, is_correct, unlocked })
    }

    /// Deal the next street, or resolve the showdown after the river.
    pub fn next_street(&mut self) -> Result<Advance, TrainerError> {
        if self.summary.is_some() {
            return Err(TrainerError::GameOver);
        }
        let ctx = self.mode_context();
        let round = self.round.as_mut().ok_or(TrainerError::NoRound)?;
        let step = round.advance(&mut self.rng, self.config.mode, ctx)?;
        if let Advance::Street(_) = step {
            self.answered = false;
        }
        Ok(step)
    }

    /// Give up on the current hand and deal the next one.
    pub fn fold(&mut self) -> Result<RoundStart, TrainerError> {
        if self.summary.is_some() {
            return Err(TrainerError::GameOver);
        }
        if self.round.is_none() {
            return Err(TrainerError::NoRound);
        }
        let unlocked = self.progress.record_fold();
        self.pending_unlocks.extend(unlocked);
        log::debug!("hand {} folded", self.progress.hands_played());
        self.start_round()
    }

    /// Drain achievements unlocked by [`Trainer::start_round`] and
    /// [`Trainer::fold`] since the last call.
    pub fn take_unlocked(&mut self) -> Vec<Achievement> {
        std::mem::take(&mut self.pending_unlocks)
    }

    pub fn finish_game(&mut self) -> Result<GameSummary, TrainerError> {
        if self.summary.is_some() {
            return Err(TrainerError::GameOver);
        }
        let unlocked = self.progress.finish_game(self.config.mode);
        let score = self.progress.score();
        let final_score = score.accuracy();
        let summary = GameSummary {
            score,
            final_score,
            hands_played: self.progress.hands_played(),
            qualifies: self.progress.leaderboard().qualifies(final_score),
            unlocked,
        };
        log::info!("game finished: {final_score:.1}% over {} answers", score.total);
        self.round = None;
        self.summary = Some(summary.clone());
        Ok(summary)
    }

    /// Put the finished game on the leaderboard. Returns the position taken,
    /// or `None` when the score did not make the cut.
    pub fn submit_ranking(
        &mut self,
        name: &str,
        date: Option<String>,
    ) -> Result<Option<usize>, TrainerError> {
        let summary = self.summary.as_ref().ok_or(TrainerError::GameInProgress)?;
        if self.ranked {
            return Err(TrainerError::AlreadyRanked);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(TrainerError::EmptyName);
        }
        let entry = LeaderboardEntry {
            name: name.to_string(),
            score: summary.final_score,
            hands: self.config.hands_per_game,
            date,
        };
        let pos = self.progress.leaderboard_mut().insert(entry);
        self.ranked = true;
        log::info!("{name} ranked at {pos:?}");
        Ok(pos)
    }

    /// Start a new game. Best streak, statistics and achievements carry over.
    pub fn restart(&mut self) -> Result<RoundStart, TrainerError> {
        self.progress.reset_game();
        self.stack = self.config.starting_stack;
        self.blind_level = 1;
        self.summary = None;
        self.ranked = false;
        self.round = None;
        log::info!("new game started");
        self.start_round()
    }

    /// Beginner coaching for the current hand.
    pub fn hints(&self) -> Result<Vec<Hint>, TrainerError> {
        let round = self.round.as_ref().ok_or(TrainerError::NoRound)?;
        Ok(beginner_hints(self.config.mode, round.player(), round.board())?)
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn into_progress(self) -> Progress {
        self.progress
    }

    pub fn round(&self) -> Option<&HandRound> {
        self.round.as_ref()
    }

    pub fn has_answered(&self) -> bool {
        self.answered
    }

    pub fn stack(&self) -> u64 {
        self.stack
    }

    pub fn blind_level(&self) -> u32 {
        self.blind_level
    }

    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    pub fn is_ranked(&self) -> bool {
        self.ranked
    }
}

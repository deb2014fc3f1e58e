use crate::probability::GameMode;
use serde::{Deserialize, Serialize};

/// Largest opponent count a single deck can serve: 2 + 2n hole cards plus a
/// five-card board must fit in 52.
pub const MAX_SUPPORTED_OPPONENTS: usize = 22;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("a game needs at least one hand")]
    NoHands,
    #[error("invalid opponent range: {min}..={max}")]
    OpponentRange { min: usize, max: usize },
    #[error("too many opponents for one deck: {0} (max {MAX_SUPPORTED_OPPONENTS})")]
    TooManyOpponents(usize),
    #[error("starting stack must be positive")]
    ZeroStack,
    #[error("answer tolerance must be in (0, 1): {0}")]
    Tolerance(f64),
    #[error("leaderboard size must be positive")]
    EmptyLeaderboard,
    #[error("blind level interval must be positive")]
    ZeroBlindInterval,
}

/// Settings for one training game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerConfig {
    pub mode: GameMode,
    pub hands_per_game: u32,
    /// Opponents per hand are drawn uniformly from this inclusive range.
    pub min_opponents: usize,
    pub max_opponents: usize,
    pub starting_stack: u64,
    /// Most recent answers kept in the hand history.
    pub history_limit: usize,
    pub leaderboard_size: usize,
    /// An answer within this distance of the estimate counts as correct.
    pub answer_tolerance: f64,
    /// Tournament blinds go up every this many hands.
    pub blind_level_interval: u32,
    pub seed: Option<u64>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Beginner,
            hands_per_game: 50,
            min_opponents: 2,
            max_opponents: 8,
            starting_stack: 1000,
            history_limit: 50,
            leaderboard_size: 10,
            answer_tolerance: 0.01,
            blind_level_interval: 10,
            seed: None,
        }
    }
}

impl TrainerConfig {
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hands_per_game == 0 {
            return Err(ConfigError::NoHands);
        }
        if self.min_opponents == 0 || self.min_opponents > self.max_opponents {
            return Err(ConfigError::OpponentRange {
                min: self.min_opponents,
                max: self.max_opponents,
            });
        }
        if self.max_opponents > MAX_SUPPORTED_OPPONENTS {
            return Err(ConfigError::TooManyOpponents(self.max_opponents));
        }
        if self.starting_stack == 0 {
            return Err(ConfigError::ZeroStack);
        }
        if !(self.answer_tolerance > 0.0 && self.answer_tolerance < 1.0) {
            return Err(ConfigError::Tolerance(self.answer_tolerance));
        }
        if self.leaderboard_size == 0 {
            return Err(ConfigError::EmptyLeaderboard);
        }
        if self.blind_level_interval == 0 {
            return Err(ConfigError::ZeroBlindInterval);
        }
        Ok(())
    }
}

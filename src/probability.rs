//! Heuristic win-probability curve and multiple-choice distractors.
//!
//! The estimate is a fixed table lookup, not an equity calculation:
//! `base(rank) * phase * 0.85^(opponents - 1) * mode`, clamped to
//! [`MIN_PROBABILITY`, `MAX_PROBABILITY`].

use crate::cards::Card;
use crate::evaluator::{evaluate, EvalError, Evaluation};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_PROBABILITY: f64 = 0.05;
pub const MAX_PROBABILITY: f64 = 0.95;

/// Relative reduction applied per opponent beyond the first.
pub const OPPONENT_FACTOR: f64 = 0.85;

/// Stack size at which the tournament multiplier is exactly 1.1.
pub const TOURNAMENT_REFERENCE_STACK: f64 = 1000.0;

/// Number of answers offered per prompt, the correct one included.
pub const OPTION_COUNT: usize = 4;

/// Minimum distance between any two offered answers.
pub const MIN_SEPARATION: f64 = 0.03;

/// Rejected draws allowed before the separation is relaxed.
pub const MAX_DISTRACTOR_ATTEMPTS: usize = 1_000;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseEnumError {
    #[error("unknown {kind} value: '{value}'")]
    UnknownEnumValue { kind: &'static str, value: String },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EstimateError {
    #[error("at least one opponent is required")]
    NoOpponents,
    #[error("tournament mode requires the current stack size")]
    MissingStackSize,
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Betting round. Ordered; a hand only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    Preflop,
    Flop,
    Turn,
    River,
}

impl GamePhase {
    pub const ALL: [GamePhase; 4] =
        [GamePhase::Preflop, GamePhase::Flop, GamePhase::Turn, GamePhase::River];

    /// Uncertainty shrinks as community cards are revealed.
    pub const fn multiplier(self) -> f64 {
        match self {
            GamePhase::Preflop => 0.7,
            GamePhase::Flop => 0.85,
            GamePhase::Turn => 0.95,
            GamePhase::River => 1.0,
        }
    }

    /// The following street, or `None` after the river.
    pub const fn next(self) -> Option<GamePhase> {
        match self {
            GamePhase::Preflop => Some(GamePhase::Flop),
            GamePhase::Flop => Some(GamePhase::Turn),
            GamePhase::Turn => Some(GamePhase::River),
            GamePhase::River => None,
        }
    }

    /// Community cards on the board during this phase.
    pub const fn board_len(self) -> usize {
        match self {
            GamePhase::Preflop => 0,
            GamePhase::Flop => 3,
            GamePhase::Turn => 4,
            GamePhase::River => 5,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            GamePhase::Preflop => "preflop",
            GamePhase::Flop => "flop",
            GamePhase::Turn => "turn",
            GamePhase::River => "river",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            GamePhase::Preflop => "Pre-Flop",
            GamePhase::Flop => "Flop",
            GamePhase::Turn => "Turn",
            GamePhase::River => "River",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GamePhase {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preflop" | "pre-flop" => Ok(GamePhase::Preflop),
            "flop" => Ok(GamePhase::Flop),
            "turn" => Ok(GamePhase::Turn),
            "river" => Ok(GamePhase::River),
            _ => Err(ParseEnumError::UnknownEnumValue { kind: "phase", value: s.to_string() }),
        }
    }
}

/// Training mode. Only changes the probability multiplier, the distractor
/// spread and a few trainer conveniences; the evaluator ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Beginner,
    Normal,
    Expert,
    Tournament,
    Scenario,
}

impl GameMode {
    pub const ALL: [GameMode; 5] = [
        GameMode::Beginner,
        GameMode::Normal,
        GameMode::Expert,
        GameMode::Tournament,
        GameMode::Scenario,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            GameMode::Beginner => "beginner",
            GameMode::Normal => "normal",
            GameMode::Expert => "expert",
            GameMode::Tournament => "tournament",
            GameMode::Scenario => "scenario",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            GameMode::Beginner => "Beginner",
            GameMode::Normal => "Normal",
            GameMode::Expert => "Expert",
            GameMode::Tournament => "Tournament",
            GameMode::Scenario => "Scenario",
        }
    }

    pub fn next(self) -> GameMode {
        let i = Self::ALL.iter().position(|&m| m == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> GameMode {
        let n = Self::ALL.len();
        let i = Self::ALL.iter().position(|&m| m == self).unwrap_or(0);
        Self::ALL[(i + n - 1) % n]
    }

    /// Half-width of the uniform spread used to draw distractors.
    pub const fn distractor_range(self) -> f64 {
        match self {
            GameMode::Expert => 0.08,
            _ => 0.15,
        }
    }

    /// Mode multiplier. Tournament scales with the stack in `ctx`.
    pub fn multiplier(self, ctx: ModeContext) -> Result<f64, EstimateError> {
        match self {
            GameMode::Beginner | GameMode::Normal | GameMode::Scenario => Ok(1.0),
            GameMode::Expert => Ok(0.95),
            GameMode::Tournament => {
                let stack = ctx.stack_size.ok_or(EstimateError::MissingStackSize)?;
                Ok(1.1 * (stack as f64 / TOURNAMENT_REFERENCE_STACK))
            }
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GameMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(GameMode::Beginner),
            "normal" => Ok(GameMode::Normal),
            "expert" => Ok(GameMode::Expert),
            "tournament" => Ok(GameMode::Tournament),
            "scenario" => Ok(GameMode::Scenario),
            _ => Err(ParseEnumError::UnknownEnumValue { kind: "mode", value: s.to_string() }),
        }
    }
}

/// Extra inputs some modes need.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeContext {
    pub stack_size: Option<u64>,
}

impl ModeContext {
    pub const fn with_stack(stack_size: u64) -> Self {
        Self { stack_size: Some(stack_size) }
    }
}

/// Base win probability by rank ordinal. Incomplete (0) shares High Card's value.
pub const fn base_probability(rank_ordinal: u8) -> f64 {
    match rank_ordinal {
        10..=u8::MAX => 0.95,
        9 => 0.90,
        8 => 0.85,
        7 => 0.80,
        6 => 0.75,
        5 => 0.65,
        4 => 0.55,
        3 => 0.45,
        2 => 0.35,
        _ => 0.25,
    }
}

/// `0.85^(opponents - 1)`.
pub fn opponent_penalty(opponents: usize) -> Result<f64, EstimateError> {
    if opponents == 0 {
        return Err(EstimateError::NoOpponents);
    }
    let extra = i32::try_from(opponents - 1).unwrap_or(i32::MAX);
    Ok(OPPONENT_FACTOR.powi(extra))
}

fn clamp_probability(p: f64) -> f64 {
    p.clamp(MIN_PROBABILITY, MAX_PROBABILITY)
}

/// The curve itself, keyed by a bare rank ordinal (0 for Incomplete, 1..=10
/// for High Card through Royal Flush).
///
/// ```
/// use poker_trainer::probability::{estimate_for_rank, GameMode, GamePhase, ModeContext};
///
/// let p = estimate_for_rank(6, GamePhase::River, 1, GameMode::Normal, ModeContext::default());
/// assert!((p.unwrap() - 0.75).abs() < 1e-12);
/// ```
pub fn estimate_for_rank(
    rank_ordinal: u8,
    phase: GamePhase,
    opponents: usize,
    mode: GameMode,
    ctx: ModeContext,
) -> Result<f64, EstimateError> {
    let raw = base_probability(rank_ordinal)
        * phase.multiplier()
        * opponent_penalty(opponents)?
        * mode.multiplier(ctx)?;
    Ok(clamp_probability(raw))
}

/// Estimate from an already evaluated hand.
pub fn estimate_for(
    eval: &Evaluation,
    phase: GamePhase,
    opponents: usize,
    mode: GameMode,
    ctx: ModeContext,
) -> Result<f64, EstimateError> {
    estimate_for_rank(eval.ordinal(), phase, opponents, mode, ctx)
}

/// Evaluate `cards` and map the result onto the heuristic curve.
///
/// ```
/// use poker_trainer::cards::parse_cards;
/// use poker_trainer::probability::{estimate, GameMode, GamePhase, ModeContext};
///
/// let cards = parse_cards("Ah Ad Ts 9c 2d").unwrap();
/// let p = estimate(&cards, GamePhase::Flop, 2, GameMode::Normal, ModeContext::default()).unwrap();
/// assert!((p - 0.35 * 0.85 * 0.85).abs() < 1e-12);
/// ```
pub fn estimate(
    cards: &[Card],
    phase: GamePhase,
    opponents: usize,
    mode: GameMode,
    ctx: ModeContext,
) -> Result<f64, EstimateError> {
    let eval = evaluate(cards)?;
    estimate_for(&eval, phase, opponents, mode, ctx)
}

/// Produce [`OPTION_COUNT`] answers, `correct` among them, in random order.
///
/// Candidates are `correct + U(-range, range)` clamped into the probability
/// bounds and rejected when closer than [`MIN_SEPARATION`] to an accepted
/// value. Near the bounds that may be impossible to satisfy, so after
/// [`MAX_DISTRACTOR_ATTEMPTS`] consecutive rejections the separation is halved,
/// and once it falls below 0.001 it is dropped altogether.
///
/// `correct` is expected to come from the curve and so already lie within
/// the bounds; debug builds assert this.
///
/// ```
/// use poker_trainer::probability::{generate_distractors, GameMode};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let options = generate_distractors(0.5, GameMode::Normal, &mut rng);
/// assert!(options.contains(&0.5));
/// ```
pub fn generate_distractors<R: Rng + ?Sized>(correct: f64, mode: GameMode, rng: &mut R) -> [f64; 4] {
    debug_assert!(
        (MIN_PROBABILITY..=MAX_PROBABILITY).contains(&correct),
        "answer {correct} outside the probability bounds"
    );
    let range = mode.distractor_range();
    let mut options = Vec::with_capacity(OPTION_COUNT);
    options.push(correct);

    let mut separation = MIN_SEPARATION;
    let mut attempts = 0usize;
    while options.len() < OPTION_COUNT {
        let candidate = clamp_probability(correct + rng.random_range(-range..=range));
        if options.iter().all(|o: &f64| (o - candidate).abs() >= separation) {
            options.push(candidate);
            attempts = 0;
            continue;
        }
        attempts += 1;
        if attempts >= MAX_DISTRACTOR_ATTEMPTS {
            separation = if separation < 0.001 { 0.0 } else { separation / 2.0 };
            attempts = 0;
            log::debug!("relaxing distractor separation to {separation} around {correct:.3}");
        }
    }

    options.shuffle(rng);
    [options[0], options[1], options[2], options[3]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::HandRank;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    fn eval_of(rank: HandRank) -> Evaluation {
        Evaluation::new(rank, 100 * u32::from(rank.ordinal()) + 14)
    }

    #[test]
    fn base_table_matches_curve() {
        assert!(close(base_probability(10), 0.95));
        assert!(close(base_probability(5), 0.65));
        assert!(close(base_probability(1), 0.25));
        assert!(close(base_probability(0), 0.25));
    }

    #[test]
    fn river_single_opponent_normal_is_base() {
        let p = estimate_for(
            &eval_of(HandRank::Flush),
            GamePhase::River,
            1,
            GameMode::Normal,
            ModeContext::default(),
        )
        .unwrap();
        assert!(close(p, 0.75));
    }

    #[test]
    fn expert_applies_discount() {
        let p = estimate_for(
            &eval_of(HandRank::Pair),
            GamePhase::Turn,
            3,
            GameMode::Expert,
            ModeContext::default(),
        )
        .unwrap();
        assert!(close(p, 0.35 * 0.95 * 0.85 * 0.85 * 0.95));
    }

    #[test]
    fn incomplete_preflop_many_opponents_clamps_low() {
        let p = estimate_for(
            &Evaluation::incomplete(),
            GamePhase::Preflop,
            8,
            GameMode::Normal,
            ModeContext::default(),
        )
        .unwrap();
        assert!(close(p, 0.25 * 0.7 * 0.85f64.powi(7)));
        let p = estimate_for(
            &Evaluation::incomplete(),
            GamePhase::Preflop,
            20,
            GameMode::Normal,
            ModeContext::default(),
        )
        .unwrap();
        assert!(close(p, MIN_PROBABILITY));
    }

    #[test]
    fn tournament_scales_with_stack_and_clamps() {
        let ctx = ModeContext::with_stack(1000);
        let p = estimate_for(&eval_of(HandRank::Pair), GamePhase::River, 1, GameMode::Tournament, ctx)
            .unwrap();
        assert!(close(p, 0.35 * 1.1));

        let big = ModeContext::with_stack(100_000);
        let p = estimate_for(&eval_of(HandRank::Pair), GamePhase::River, 1, GameMode::Tournament, big)
            .unwrap();
        assert!(close(p, MAX_PROBABILITY));
    }

    #[test]
    fn tournament_without_stack_errors() {
        let err = estimate_for(
            &eval_of(HandRank::Pair),
            GamePhase::River,
            1,
            GameMode::Tournament,
            ModeContext::default(),
        )
        .unwrap_err();
        assert_eq!(err, EstimateError::MissingStackSize);
    }

    #[test]
    fn zero_opponents_errors() {
        assert_eq!(opponent_penalty(0).unwrap_err(), EstimateError::NoOpponents);
        assert!(close(opponent_penalty(1).unwrap(), 1.0));
    }

    #[test]
    fn unknown_keys_fail_loudly() {
        assert_eq!(
            "torneo".parse::<GameMode>().unwrap_err(),
            ParseEnumError::UnknownEnumValue { kind: "mode", value: "torneo".to_string() }
        );
        assert!("showdown".parse::<GamePhase>().is_err());
        assert_eq!("River".parse::<GamePhase>().unwrap(), GamePhase::River);
        assert_eq!("expert".parse::<GameMode>().unwrap(), GameMode::Expert);
    }

    #[test]
    fn phase_progression() {
        assert_eq!(GamePhase::Preflop.next(), Some(GamePhase::Flop));
        assert_eq!(GamePhase::River.next(), None);
        assert!(GamePhase::Preflop < GamePhase::River);
        assert_eq!(GamePhase::Turn.board_len(), 4);
    }

    #[test]
    fn mode_cycles() {
        assert_eq!(GameMode::Scenario.next(), GameMode::Beginner);
        assert_eq!(GameMode::Beginner.prev(), GameMode::Scenario);
    }

    #[test]
    #[should_panic(expected = "outside the probability bounds")]
    #[cfg(debug_assertions)]
    fn distractors_reject_out_of_range_answer() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let _ = generate_distractors(0.99, GameMode::Normal, &mut rng);
    }

    #[test]
    fn evaluated_hand_and_bare_ordinal_agree() {
        let ctx = ModeContext::default();
        let eval = eval_of(HandRank::Straight);
        assert_eq!(
            estimate_for(&eval, GamePhase::Flop, 3, GameMode::Expert, ctx),
            estimate_for_rank(5, GamePhase::Flop, 3, GameMode::Expert, ctx)
        );
    }

    #[test]
    fn distractors_terminate_at_the_upper_bound() {
        // 0.95 in expert mode cannot fit four values 0.03 apart inside [0.87, 0.95].
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let options = generate_distractors(MAX_PROBABILITY, GameMode::Expert, &mut rng);
        assert_eq!(options.len(), 4);
        assert!(options.contains(&MAX_PROBABILITY));
        assert!(options.iter().all(|o| (MIN_PROBABILITY..=MAX_PROBABILITY).contains(o)));
    }
}

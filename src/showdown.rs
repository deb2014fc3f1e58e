use crate::evaluator::{evaluate_holdem, EvalError, Evaluation};
use crate::hand::{validate_disjoint, Board, HandError, HoleCards};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShowdownError {
    #[error("invalid deal: {0}")]
    InvalidDeal(#[from] HandError),
    #[error("hand evaluation failed: {0}")]
    EvaluationFailed(#[from] EvalError),
}

/// Who holds a hand at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Player,
    /// Zero-based index into the opponent list.
    Opponent(usize),
}

impl Seat {
    pub fn is_player(self) -> bool {
        matches!(self, Seat::Player)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Player => f.write_str("You"),
            Seat::Opponent(i) => write!(f, "Opponent {}", i + 1),
        }
    }
}

/// One evaluated hand at showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contender {
    pub seat: Seat,
    pub cards: HoleCards,
    pub evaluation: Evaluation,
}

/// Outcome of a showdown: every contender, best first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showdown {
    standings: Vec<Contender>,
}

impl Showdown {
    pub fn winner(&self) -> &Contender {
        // `resolve` always seats the player, so standings is never empty.
        &self.standings[0]
    }

    pub fn standings(&self) -> &[Contender] {
        &self.standings
    }

    pub fn player_won(&self) -> bool {
        self.winner().seat.is_player()
    }
}

/// Evaluate the player and every opponent against the same board and pick a
/// single winner.
///
/// Contenders are ordered by (rank, tie score) descending with a stable sort,
/// so when two hands compare equal the one listed first wins; the player is
/// listed before all opponents.
///
/// ```
/// use poker_trainer::hand::{Board, HoleCards};
/// use poker_trainer::showdown::{resolve, Seat};
///
/// let player: HoleCards = "Ah Kh".parse().unwrap();
/// let opponents: Vec<HoleCards> = vec!["2c 2d".parse().unwrap()];
/// let board: Board = "Qh Jh Th 3s 4d".parse().unwrap();
/// let showdown = resolve(&player, &opponents, &board).unwrap();
/// assert_eq!(showdown.winner().seat, Seat::Player);
/// ```
pub fn resolve(
    player: &HoleCards,
    opponents: &[HoleCards],
    board: &Board,
) -> Result<Showdown, ShowdownError> {
    validate_disjoint(player, opponents, board)?;

    let mut standings = Vec::with_capacity(opponents.len() + 1);
    standings.push(Contender {
        seat: Seat::Player,
        cards: *player,
        evaluation: evaluate_holdem(player, board)?,
    });
    for (i, hole) in opponents.iter().enumerate() {
        standings.push(Contender {
            seat: Seat::Opponent(i),
            cards: *hole,
            evaluation: evaluate_holdem(hole, board)?,
        });
    }

    // `sort_by` is stable: equal evaluations keep listing order.
    standings.sort_by(|a, b| b.evaluation.cmp(&a.evaluation));

    let w = &standings[0];
    log::debug!("showdown won by {} with {} ({})", w.seat, w.evaluation, w.evaluation.tie_score());
    Ok(Showdown { standings })
}

use crate::evaluator::{evaluate_holdem, EvalError, Evaluation};
use crate::evaluator::suit_info::SuitInfo;
use crate::hand::{Board, HoleCards};
use crate::probability::GameMode;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthTier {
    Weak,
    Medium,
    Good,
    VeryStrong,
}

impl StrengthTier {
    pub fn of(evaluation: &Evaluation) -> Self {
        match evaluation.ordinal() {
            7..=u8::MAX => StrengthTier::VeryStrong,
            4..=6 => StrengthTier::Good,
            2..=3 => StrengthTier::Medium,
            _ => StrengthTier::Weak,
        }
    }
}

/// Coaching shown to beginners next to the answer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    Strength(StrengthTier),
    FlushDraw,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Hint::Strength(StrengthTier::VeryStrong) => "Very strong hand!",
            Hint::Strength(StrengthTier::Good) => "Good hand",
            Hint::Strength(StrengthTier::Medium) => "Medium hand",
            Hint::Strength(StrengthTier::Weak) => "Weak hand",
            Hint::FlushDraw => "Possible flush draw",
        };
        f.write_str(text)
    }
}

/// Hints for the current hand. Empty outside beginner mode.
pub fn beginner_hints(
    mode: GameMode,
    player: &HoleCards,
    board: &Board,
) -> Result<Vec<Hint>, EvalError> {
    if mode != GameMode::Beginner {
        return Ok(Vec::new());
    }
    let evaluation = evaluate_holdem(player, board)?;
    let mut hints = vec![Hint::Strength(StrengthTier::of(&evaluation))];

    if board.len() >= 3 {
        if SuitInfo::detect(&player.with_board(board)).max_count() >= 4 {
            hints.push(Hint::FlushDraw);
        }
    }
    Ok(hints)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hole(s: &str) -> HoleCards {
        s.parse().unwrap()
    }

    #[test]
    fn preflop_is_weak_and_no_draw() {
        let hints = beginner_hints(GameMode::Beginner, &hole("Ah Kh"), &Board::default()).unwrap();
        assert_eq!(hints, vec![Hint::Strength(StrengthTier::Weak)]);
    }

    #[test]
    fn flush_draw_on_the_flop() {
        let board: Board = "2h 9h Qc".parse().unwrap();
        let hints = beginner_hints(GameMode::Beginner, &hole("Ah Kh"), &board).unwrap();
        assert_eq!(hints, vec![Hint::Strength(StrengthTier::Weak), Hint::FlushDraw]);
    }

    #[test]
    fn three_of_a_suit_is_no_draw() {
        let board: Board = "2h 9c Qc".parse().unwrap();
        let hints = beginner_hints(GameMode::Beginner, &hole("Ah Kh"), &board).unwrap();
        assert!(!hints.contains(&Hint::FlushDraw));
    }

    #[test]
    fn tiers_follow_rank() {
        let board: Board = "Kc Kd 2s".parse().unwrap();
        let hints = beginner_hints(GameMode::Beginner, &hole("Ks 2c"), &board).unwrap();
        assert_eq!(hints[0], Hint::Strength(StrengthTier::VeryStrong));

        let board: Board = "Ad 7c 3s".parse().unwrap();
        let hints = beginner_hints(GameMode::Beginner, &hole("As 9h"), &board).unwrap();
        assert_eq!(hints[0], Hint::Strength(StrengthTier::Medium));
    }

    #[test]
    fn silent_outside_beginner_mode() {
        let board: Board = "2h 9h Qh".parse().unwrap();
        assert!(beginner_hints(GameMode::Expert, &hole("Ah Kh"), &board).unwrap().is_empty());
    }
}

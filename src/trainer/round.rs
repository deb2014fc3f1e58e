use super::config::TrainerConfig;
use crate::cards::Card;
use crate::deck::{Deck, DeckError};
use crate::evaluator::{evaluate_holdem, EvalError, Evaluation};
use crate::hand::{Board, HandError, HoleCards};
use crate::probability::{
    estimate_for, generate_distractors, EstimateError, GameMode, GamePhase, ModeContext,
};
use crate::showdown::{resolve, Showdown, ShowdownError};
use rand::Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RoundError {
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error(transparent)]
    Estimate(#[from] EstimateError),
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
    #[error("the hand is already over")]
    HandOver,
}

/// What `HandRound::advance` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Community cards were dealt and the hand moved to this phase.
    Street(GamePhase),
    /// The river was complete, so the showdown was resolved.
    Showdown,
}

/// One dealt hand of Hold'em from pre-flop to showdown.
#[derive(Debug, Clone, PartialEq)]
pub struct HandRound {
    player: HoleCards,
    opponents: Vec<HoleCards>,
    board: Board,
    in_play: Vec<Card>,
    phase: GamePhase,
    evaluation: Evaluation,
    correct: f64,
    options: [f64; 4],
    showdown: Option<Showdown>,
}

impl HandRound {
    /// Shuffle a fresh deck and deal hole cards to the player and to a random
    /// number of opponents drawn from the configured range.
    pub fn deal<R: Rng + ?Sized>(
        rng: &mut R,
        config: &TrainerConfig,
        ctx: ModeContext,
    ) -> Result<Self, RoundError> {
        let opponent_count = rng.random_range(config.min_opponents..=config.max_opponents);
        let mut deck = Deck::standard().shuffled(rng);

        let player = HoleCards::from_slice(&deck.draw_n(2)?)?;
        let mut opponents = Vec::with_capacity(opponent_count);
        for _ in 0..opponent_count {
            opponents.push(HoleCards::from_slice(&deck.draw_n(2)?)?);
        }

        let mut in_play = Vec::with_capacity(2 + 2 * opponent_count + 5);
        in_play.extend(player.as_array());
        in_play.extend(opponents.iter().flat_map(|h| h.as_array()));

        log::debug!("dealt {player} against {opponent_count} opponents");

        let mut round = Self {
            player,
            opponents,
            board: Board::default(),
            in_play,
            phase: GamePhase::Preflop,
            evaluation: Evaluation::incomplete(),
            correct: 0.0,
            options: [0.0; 4],
            showdown: None,
        };
        round.reprice(rng, config.mode, ctx)?;
        Ok(round)
    }

    /// Move to the next street, or resolve the showdown once the river is out.
    ///
    /// Each street comes from a freshly shuffled deck with every card already
    /// in play removed, so all dealt cards stay pairwise distinct.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        mode: GameMode,
        ctx: ModeContext,
    ) -> Result<Advance, RoundError> {
        if self.showdown.is_some() {
            return Err(RoundError::HandOver);
        }
        let Some(next) = self.phase.next() else {
            let showdown = resolve(&self.player, &self.opponents, &self.board)?;
            self.showdown = Some(showdown);
            return Ok(Advance::Showdown);
        };

        let count = next.board_len() - self.phase.board_len();
        let (cards, _) = Deck::standard()
            .exclude_dealt(&self.in_play)
            .shuffled(rng)
            .deal(count)?;
        self.in_play.extend_from_slice(&cards);
        self.board.extend(cards);
        self.phase = next;
        log::debug!("{} dealt, board now {} cards", next, self.board.len());

        self.reprice(rng, mode, ctx)?;
        Ok(Advance::Street(next))
    }

    fn reprice<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        mode: GameMode,
        ctx: ModeContext,
    ) -> Result<(), RoundError> {
        self.evaluation = evaluate_holdem(&self.player, &self.board)?;
        self.correct =
            estimate_for(&self.evaluation, self.phase, self.opponents.len(), mode, ctx)?;
        self.options = generate_distractors(self.correct, mode, rng);
        Ok(())
    }

    pub fn player(&self) -> &HoleCards {
        &self.player
    }

    pub fn opponents(&self) -> &[HoleCards] {
        &self.opponents
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every card dealt so far this hand, hole cards first.
    pub fn in_play(&self) -> &[Card] {
        &self.in_play
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The player's current hand classification.
    pub fn evaluation(&self) -> Evaluation {
        self.evaluation
    }

    /// Estimated win probability for the current street.
    pub fn correct_probability(&self) -> f64 {
        self.correct
    }

    pub fn options(&self) -> [f64; 4] {
        self.options
    }

    pub fn showdown(&self) -> Option<&Showdown> {
        self.showdown.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.showdown.is_some()
    }
}

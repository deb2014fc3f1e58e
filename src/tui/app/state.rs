use crate::probability::GameMode;
use crate::trainer::{Advance, AnswerOutcome, RoundStart, Trainer, TrainerConfig, TrainerError};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    /// Pick answer option 0..4.
    Answer(usize),
    /// Next street, next hand, or a new game once the last one is over.
    Next,
    Fold,
    NameChar(char),
    NameBackspace,
    NameSubmit,
    NameCancel,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub trainer: Trainer,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_mode: GameMode,
    pub cfg_hands_per_game: u32,
    pub cfg_starting_stack: u64,
    last_answer: Option<AnswerOutcome>,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    name_entry: Option<String>,
    name_entry_error: Option<String>,
    notice: Option<String>,
    notice_at: Option<Instant>,
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const NOTICE_TTL: Duration = Duration::from_secs(3);
    const MAX_NAME_LEN: usize = 16;

    pub fn new(config: TrainerConfig) -> Result<Self, TrainerError> {
        let cfg_mode = config.mode;
        let cfg_hands_per_game = config.hands_per_game;
        let cfg_starting_stack = config.starting_stack;
        Ok(Self {
            scene: Scene::Menu,
            trainer: Trainer::new(config)?,
            menu_index: 0,
            cfg_mode,
            cfg_hands_per_game,
            cfg_starting_stack,
            last_answer: None,
            help_open: false,
            history_open: false,
            history_offset: 0,
            name_entry: None,
            name_entry_error: None,
            notice: None,
            notice_at: None,
        })
    }

    pub fn last_answer(&self) -> Option<&AnswerOutcome> {
        self.last_answer.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    fn set_notice(&mut self, text: String) {
        self.notice = Some(text);
        self.notice_at = Some(Instant::now());
    }

    pub(crate) fn reset_table(&mut self) {
        self.last_answer = None;
        self.history_offset = 0;
        self.name_entry = None;
        self.name_entry_error = None;
        self.notice = None;
        self.notice_at = None;
    }

    pub(crate) fn report(&mut self, err: &TrainerError) {
        log::warn!("action rejected: {err}");
        self.set_notice(format!("Error: {err}"));
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
    }

    pub fn name_entry_active(&self) -> bool {
        self.name_entry.is_some()
    }

    pub fn name_entry_text(&self) -> Option<&str> {
        self.name_entry.as_deref()
    }

    pub fn name_entry_error(&self) -> Option<&str> {
        self.name_entry_error.as_deref()
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.history_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    self.help_open = false;
                    if !self.history_open {
                        self.history_offset = 0;
                    }
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.scene == Scene::Table && self.history_open {
                    let max_offset = self
                        .trainer
                        .progress()
                        .history()
                        .len()
                        .saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.scene == Scene::Table && self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    return self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::Answer(i) => self.scene == Scene::Table && self.answer(i),
            InputAction::Next => self.scene == Scene::Table && self.next(),
            InputAction::Fold => self.scene == Scene::Table && self.fold(),
            InputAction::NameChar(c) => {
                self.name_entry_push(c);
                false
            }
            InputAction::NameBackspace => {
                if let Some(buf) = self.name_entry.as_mut() {
                    buf.pop();
                }
                self.name_entry_error = None;
                false
            }
            InputAction::NameSubmit => self.name_entry_submit(),
            InputAction::NameCancel => {
                self.name_entry = None;
                self.name_entry_error = None;
                false
            }
        }
    }

    fn answer(&mut self, option: usize) -> bool {
        match self.trainer.answer(option) {
            Ok(outcome) => {
                if let Some(a) = outcome.unlocked.last() {
                    self.set_notice(format!("Achievement unlocked: {a}"));
                }
                self.last_answer = Some(outcome);
                true
            }
            Err(err) => {
                self.report(&err);
                false
            }
        }
    }

    /// Advance whatever comes next: deal, next street, showdown or new game.
    pub fn next(&mut self) -> bool {
        if self.trainer.summary().is_some() {
            if self.name_entry_active() {
                return false;
            }
            let result = self.trainer.restart();
            return self.after_round_start(result);
        }
        let in_hand = self.trainer.round().is_some_and(|r| !r.is_over());
        if !in_hand {
            let result = self.trainer.start_round();
            return self.after_round_start(result);
        }
        match self.trainer.next_street() {
            Ok(Advance::Street(_)) => {
                self.last_answer = None;
                true
            }
            Ok(Advance::Showdown) => {
                let won = self
                    .trainer
                    .round()
                    .and_then(|r| r.showdown())
                    .is_some_and(|s| s.player_won());
                if won {
                    self.set_notice("You win the hand!".to_string());
                }
                true
            }
            Err(err) => {
                self.report(&err);
                false
            }
        }
    }

    fn fold(&mut self) -> bool {
        let result = self.trainer.fold();
        if result.is_ok() {
            self.set_notice("Hand folded".to_string());
        }
        self.after_round_start(result)
    }

    fn after_round_start(&mut self, result: Result<RoundStart, TrainerError>) -> bool {
        self.last_answer = None;
        if let Some(a) = self.trainer.take_unlocked().last() {
            self.set_notice(format!("Achievement unlocked: {a}"));
        }
        match result {
            Ok(RoundStart::Dealt) => true,
            Ok(RoundStart::GameOver(summary)) => {
                self.set_notice(format!("Game over! Accuracy: {:.1}%", summary.final_score));
                if summary.qualifies {
                    self.name_entry = Some(String::new());
                    self.name_entry_error = None;
                }
                true
            }
            Err(err) => {
                self.report(&err);
                false
            }
        }
    }

    fn name_entry_push(&mut self, c: char) {
        if let Some(buf) = self.name_entry.as_mut() {
            if buf.chars().count() >= Self::MAX_NAME_LEN || c.is_control() {
                return;
            }
            buf.push(c);
        }
        self.name_entry_error = None;
    }

    fn name_entry_submit(&mut self) -> bool {
        let Some(name) = self.name_entry.clone() else {
            return false;
        };
        match self.trainer.submit_ranking(&name, None) {
            Ok(pos) => {
                self.name_entry = None;
                self.name_entry_error = None;
                match pos {
                    Some(p) => self.set_notice(format!("Ranked #{}", p + 1)),
                    None => self.set_notice("Score did not make the leaderboard".to_string()),
                }
                true
            }
            Err(TrainerError::EmptyName) => {
                self.name_entry_error = Some("Enter a name".to_string());
                false
            }
            Err(err) => {
                self.name_entry = None;
                self.report(&err);
                false
            }
        }
    }

    /// Periodic housekeeping from the controller loop.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.notice_at {
            if at.elapsed() >= Self::NOTICE_TTL {
                self.notice = None;
                self.notice_at = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_app() -> AppState {
        let mut app = AppState::new(TrainerConfig::default().with_seed(3)).unwrap();
        app.apply_menu();
        app
    }

    #[test]
    fn answer_ignored_before_deal() {
        let mut app = table_app();
        assert!(!app.handle_input(InputAction::Answer(0)));
        assert!(app.notice().is_some());
        assert_eq!(app.trainer.progress().score().total, 0);
    }

    #[test]
    fn next_walks_a_hand_to_showdown() {
        let mut app = table_app();
        assert!(app.handle_input(InputAction::Next));
        for _ in 0..4 {
            assert!(app.handle_input(InputAction::Next));
        }
        assert!(app.trainer.round().unwrap().is_over());
        assert!(app.handle_input(InputAction::Next));
        assert_eq!(app.trainer.progress().hands_played(), 2);
    }

    #[test]
    fn fold_unlock_shows_a_notice() {
        let mut app = AppState::new(TrainerConfig::default().with_seed(3)).unwrap();
        app.cfg_hands_per_game = 20;
        app.apply_menu();
        assert!(app.handle_input(InputAction::Next));
        for _ in 0..9 {
            assert!(app.handle_input(InputAction::Fold));
            assert_eq!(app.notice(), Some("Hand folded"));
        }
        assert!(app.handle_input(InputAction::Fold));
        assert_eq!(app.notice(), Some("Achievement unlocked: Selective"));
    }
}

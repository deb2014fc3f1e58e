use crate::trainer::{Trainer, TrainerConfig};

use super::AppState;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Mode,
    HandsPerGame,
    StartingStack,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::Mode, MenuItem::HandsPerGame, MenuItem::StartingStack];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Mode => format!("Mode: {}", app.cfg_mode),
            MenuItem::HandsPerGame => format!("Hands per Game: {}", app.cfg_hands_per_game),
            MenuItem::StartingStack => format!("Starting Stack: ${}", app.cfg_starting_stack),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Mode => app.cfg_mode = app.cfg_mode.next(),
            MenuItem::HandsPerGame => {
                if app.cfg_hands_per_game < 200 {
                    app.cfg_hands_per_game += 5;
                }
            }
            MenuItem::StartingStack => {
                app.cfg_starting_stack = app.cfg_starting_stack.saturating_add(100);
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Mode => app.cfg_mode = app.cfg_mode.prev(),
            MenuItem::HandsPerGame => {
                app.cfg_hands_per_game = app.cfg_hands_per_game.saturating_sub(5).max(5);
            }
            MenuItem::StartingStack => {
                app.cfg_starting_stack = app.cfg_starting_stack.saturating_sub(100).max(100);
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.scene = match self.scene {
            super::Scene::Menu => super::Scene::Table,
            _ => {
                self.open_menu();
                super::Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.menu_index = 0;
        let cfg = self.trainer.config();
        self.cfg_mode = cfg.mode;
        self.cfg_hands_per_game = cfg.hands_per_game;
        self.cfg_starting_stack = cfg.starting_stack;
        self.scene = super::Scene::Menu;
    }

    /// Start a fresh game with the edited settings. Progress carries over.
    pub fn apply_menu(&mut self) -> bool {
        let config = TrainerConfig {
            mode: self.cfg_mode,
            hands_per_game: self.cfg_hands_per_game.max(1),
            starting_stack: self.cfg_starting_stack.max(1),
            ..self.trainer.config().clone()
        };
        let progress = self.trainer.progress().clone();
        match Trainer::with_progress(config, progress) {
            Ok(trainer) => {
                self.trainer = trainer;
                self.reset_table();
                self.scene = super::Scene::Table;
                true
            }
            Err(err) => {
                self.report(&err);
                false
            }
        }
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probability::GameMode;

    #[test]
    fn mode_cycles_and_applies() {
        let mut app = AppState::new(TrainerConfig::default().with_seed(1)).unwrap();
        app.menu_inc();
        assert_eq!(app.cfg_mode, GameMode::Normal);
        app.menu_dec();
        app.menu_dec();
        assert_eq!(app.cfg_mode, GameMode::Scenario);
        assert!(app.apply_menu());
        assert_eq!(app.trainer.config().mode, GameMode::Scenario);
        assert_eq!(app.trainer.config().seed, Some(1));
    }

    #[test]
    fn numeric_items_stay_positive() {
        let mut app = AppState::new(TrainerConfig::default()).unwrap();
        app.menu_next();
        for _ in 0..50 {
            app.menu_dec();
        }
        assert_eq!(app.cfg_hands_per_game, 5);
        app.menu_next();
        for _ in 0..50 {
            app.menu_dec();
        }
        assert_eq!(app.cfg_starting_stack, 100);
    }
}

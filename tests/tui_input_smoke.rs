use crossterm::event::KeyCode;
use poker_trainer::probability::GameMode;
use poker_trainer::trainer::TrainerConfig;
use poker_trainer::tui::app::{AppState, InputAction, Scene};
use poker_trainer::tui::controller::handle_key;

fn app_with(hands: u32) -> AppState {
    let config = TrainerConfig { hands_per_game: hands, ..TrainerConfig::default() }.with_seed(11);
    AppState::new(config).unwrap()
}

fn setup_table_app() -> AppState {
    let mut app = app_with(50);
    assert!(app.apply_menu());
    app
}

#[test]
fn menu_navigation_and_apply() {
    let mut app = app_with(50);
    assert!(matches!(app.scene, Scene::Menu));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);

    let _ = app.handle_input(InputAction::MenuInc);
    assert_eq!(app.cfg_mode, GameMode::Normal);
    let _ = app.handle_input(InputAction::MenuApply);
    assert!(matches!(app.scene, Scene::Table));
    assert_eq!(app.trainer.config().mode, GameMode::Normal);
}

#[test]
fn help_and_history_toggle() {
    let mut app = setup_table_app();
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.help_open());
    assert!(app.history_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.history_open());
}

#[test]
fn keys_deal_answer_and_fold() {
    let mut app = setup_table_app();
    assert!(!handle_key(&mut app, KeyCode::Char(' ')));
    assert!(app.trainer.round().is_some());

    assert!(!handle_key(&mut app, KeyCode::Char('2')));
    assert!(app.last_answer().is_some());
    assert_eq!(app.trainer.progress().score().total, 1);

    let _ = handle_key(&mut app, KeyCode::Char('f'));
    assert_eq!(app.trainer.progress().score().folded, 1);
    assert_eq!(app.trainer.progress().hands_played(), 2);
    assert!(app.last_answer().is_none());
}

#[test]
fn finished_game_prompts_for_a_name() {
    let mut app = app_with(1);
    assert!(app.apply_menu());
    let _ = handle_key(&mut app, KeyCode::Char('n'));
    let _ = handle_key(&mut app, KeyCode::Char('f'));
    assert!(app.trainer.summary().is_some());
    assert!(app.name_entry_active());

    // Typing goes to the name buffer, not the table bindings.
    assert!(!handle_key(&mut app, KeyCode::Enter));
    assert!(app.name_entry_error().is_some());
    for c in "Ann".chars() {
        let _ = handle_key(&mut app, KeyCode::Char(c));
    }
    let _ = handle_key(&mut app, KeyCode::Char('q'));
    let _ = handle_key(&mut app, KeyCode::Backspace);
    assert_eq!(app.name_entry_text(), Some("Ann"));
    let _ = handle_key(&mut app, KeyCode::Enter);
    assert!(!app.name_entry_active());
    assert!(app.trainer.is_ranked());
    assert!(app
        .trainer
        .progress()
        .leaderboard()
        .entries()
        .iter()
        .any(|e| e.name == "Ann"));

    // Next starts a new game.
    let _ = handle_key(&mut app, KeyCode::Char('n'));
    assert!(app.trainer.summary().is_none());
    assert!(app.trainer.round().is_some());
}

#[test]
fn quit_from_either_scene() {
    let mut app = app_with(50);
    assert!(handle_key(&mut app, KeyCode::Char('q')));
    assert!(app.apply_menu());
    assert!(handle_key(&mut app, KeyCode::Char('Q')));
}

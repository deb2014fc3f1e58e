use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// What a key press means in the app's current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    Act(InputAction),
    Ignore,
}

/// Map one key press onto the app. Returns `true` when the user quits.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    match command_for(app, code) {
        Command::Quit => true,
        Command::Act(action) => {
            let _ = app.handle_input(action);
            false
        }
        Command::Ignore => false,
    }
}

fn command_for(app: &AppState, code: KeyCode) -> Command {
    use Command::{Act, Ignore, Quit};

    // The name prompt swallows every key, letters included.
    if app.name_entry_active() {
        return match code {
            KeyCode::Esc => Act(InputAction::NameCancel),
            KeyCode::Enter => Act(InputAction::NameSubmit),
            KeyCode::Backspace => Act(InputAction::NameBackspace),
            KeyCode::Char(c) => Act(InputAction::NameChar(c)),
            _ => Ignore,
        };
    }

    match code {
        KeyCode::Char('?') => return Act(InputAction::ToggleHelp),
        KeyCode::Char('h' | 'H') => return Act(InputAction::ToggleHistory),
        _ => {}
    }
    if app.help_open() {
        return if code == KeyCode::Esc { Act(InputAction::ToggleHelp) } else { Ignore };
    }
    if app.history_open() {
        return match code {
            KeyCode::Up => Act(InputAction::HistoryUp),
            KeyCode::Down => Act(InputAction::HistoryDown),
            KeyCode::Esc => Act(InputAction::ToggleHistory),
            _ => Ignore,
        };
    }

    match (app.scene, code) {
        (_, KeyCode::Char('q' | 'Q')) => Quit,
        (_, KeyCode::Char('m' | 'M')) => Act(InputAction::ToggleMenu),
        (Scene::Menu, KeyCode::Up) => Act(InputAction::MenuPrev),
        (Scene::Menu, KeyCode::Down) => Act(InputAction::MenuNext),
        (Scene::Menu, KeyCode::Char('+' | '=') | KeyCode::Right) => Act(InputAction::MenuInc),
        (Scene::Menu, KeyCode::Char('-' | '_') | KeyCode::Left) => Act(InputAction::MenuDec),
        (Scene::Menu, KeyCode::Enter) => Act(InputAction::MenuApply),
        (Scene::Menu, KeyCode::Esc) => Act(InputAction::MenuCancel),
        (Scene::Table, KeyCode::Char(' ' | 'n' | 'N')) => Act(InputAction::Next),
        (Scene::Table, KeyCode::Char('f' | 'F')) => Act(InputAction::Fold),
        (Scene::Table, KeyCode::Char(c @ '1'..='4')) => {
            Act(InputAction::Answer(usize::from(c as u8 - b'1')))
        }
        _ => Ignore,
    }
}

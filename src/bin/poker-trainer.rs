use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use poker_trainer::trainer::TrainerConfig;
use poker_trainer::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const SEED_VAR: &str = "POKER_TRAINER_SEED";
const LOG_VAR: &str = "POKER_TRAINER_LOG";

/// File logging under `logs/`; the terminal itself belongs to the TUI.
fn init_logging() -> io::Result<()> {
    if std::env::var(LOG_VAR).is_ok_and(|v| v.eq_ignore_ascii_case("off")) {
        return Ok(());
    }
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0);
    let file = std::fs::File::create(format!("logs/{time}.log"))?;
    simplelog::WriteLogger::init(log::LevelFilter::Debug, config, file).map_err(io::Error::other)
}

fn config_from_env() -> io::Result<TrainerConfig> {
    let mut config = TrainerConfig::default();
    if let Ok(raw) = std::env::var(SEED_VAR) {
        let seed = raw.trim().parse::<u64>().map_err(|e| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("{SEED_VAR}={raw}: {e}"))
        })?;
        config = config.with_seed(seed);
    }
    Ok(config)
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    if !io::stdout().is_terminal() {
        println!(
            "poker-trainer requires a real terminal (TTY).\nRun in Terminal and press q to quit. Version: {}",
            poker_trainer::VERSION
        );
        return Ok(());
    }
    let config = config_from_env()?;
    init_logging()?;
    log::info!("poker-trainer {} starting", poker_trainer::VERSION);

    let mut app = AppState::new(config).map_err(io::Error::other)?;
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    log::info!(
        "session ended after {} games, best streak {}",
        app.trainer.progress().games_played(),
        app.trainer.progress().best_streak()
    );
    res
}

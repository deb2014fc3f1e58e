use crate::trainer::Achievement;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

const LOGO: &str = r#"
 ____   ___  _  _______ ____
|  _ \ / _ \| |/ / ____|  _ \
| |_) | | | | ' /|  _| | |_) |
|  __/| |_| | . \| |___|  _ <
|_|    \___/|_|\_\_____|_| \_\
 _____ ____      _    ___ _   _ _____ ____
|_   _|  _ \    / \  |_ _| \ | | ____|  _ \
  | | | |_) |  / _ \  | ||  \| |  _| | |_) |
  | | |  _ <  / ___ \ | || |\  | |___|  _ <
  |_| |_| \_\/_/   \_\___|_| \_|_____|_| \_\
"#;

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let area = centered_rect(80, 80, f.area());
    f.render_widget(Clear, area);
    f.render_widget(Block::default().title("poker-trainer").borders(Borders::ALL), area);

    let logo: Vec<Line> = LOGO
        .lines()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::Cyan))))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(logo.len() as u16 + 1), Constraint::Min(3)])
        .split(inner(area));
    f.render_widget(Paragraph::new(logo).alignment(Alignment::Center), rows[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);
    f.render_widget(
        Paragraph::new(setup_lines(app)).wrap(Wrap { trim: true }),
        body[0],
    );
    draw_leaderboard(f, app, body[1]);
}

fn setup_lines(app: &AppState) -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let dim = Style::default().add_modifier(Modifier::DIM);
    let progress = app.trainer.progress();

    let mut lines = vec![Line::from(Span::styled("Training setup:", bold))];
    for (i, item) in app.menu_items_display().into_iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let marker = if i == app.menu_index { "> " } else { "  " };
        lines.push(Line::from(Span::styled(format!("{marker}{item}"), style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "Games played: {}  Best streak: {}  Achievements: {}/{}",
            progress.games_played(),
            progress.best_streak(),
            progress.achievements().len(),
            Achievement::ALL.len()
        ),
        dim,
    )));
    lines.push(Line::from(Span::styled(
        "[Enter] New game  [Esc] Back  [↑/↓] Move  [+/-] Adjust  [Q] Quit",
        dim,
    )));
    lines
}

fn draw_leaderboard(f: &mut Frame, app: &AppState, area: Rect) {
    let rows = app.trainer.progress().leaderboard().entries().iter().enumerate().map(|(i, e)| {
        Row::new(vec![
            Cell::from(format!("{:>2}.", i + 1)),
            Cell::from(e.name.clone()),
            Cell::from(format!("{:>5.1}%", e.score)),
            Cell::from(e.hands.to_string()),
        ])
    });
    let table = Table::new(
        rows,
        [Constraint::Length(3), Constraint::Min(8), Constraint::Length(7), Constraint::Length(5)],
    )
    .header(
        Row::new(vec!["#", "Name", "Score", "Hands"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().title("Leaderboard").borders(Borders::ALL));
    f.render_widget(table, area);
}

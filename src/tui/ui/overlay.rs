use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};
use super::table::dim_line;

pub(super) fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let history = app.trainer.progress().history();
    if history.is_empty() {
        lines.push(Line::from("No answers yet."));
    } else {
        for record in history.iter().skip(app.history_offset()).take(AppState::HISTORY_PAGE_SIZE) {
            let mark = if record.correct { "ok " } else { "x  " };
            let style = if record.correct {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            lines.push(Line::from(vec![
                Span::styled(mark, style),
                Span::raw(format!(
                    "#{:<3} {:<8} {} {:<16} you {:>5.1}%  est {:>5.1}%",
                    record.hand,
                    record.phase.label(),
                    record.player,
                    record.hand_type,
                    record.estimated * 100.0,
                    record.actual * 100.0
                )),
            ]));
        }
    }
    let trends = app.trainer.progress().error_trends();
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "Optimistic: {}   Pessimistic: {}   Accurate: {}",
        trends.optimistic, trends.pessimistic, trends.accurate
    )));
    lines.push(dim_line("Up/Down scroll • Close: H or Esc"));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

pub(super) fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Table:", bold)),
        Line::from("- Space / N: deal, next street, showdown, next hand"),
        Line::from("- 1-4: pick a win probability"),
        Line::from("- F: fold and deal the next hand"),
        Line::from("- H: answer history"),
        Line::from(""),
        Line::from(Span::styled("Scoring:", bold)),
        Line::from("- The estimate depends on hand rank, street and opponents"),
        Line::from("- Only the exact estimate counts as correct"),
        Line::from(""),
        Line::from(Span::styled("Menu:", bold)),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: start a new game"),
        Line::from("- Esc: back to the table"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

pub(super) fn draw_name_entry(f: &mut Frame, app: &AppState) {
    let area = centered_rect(50, 30, f.area());
    let current = app.name_entry_text().unwrap_or("");
    let score = app.trainer.summary().map(|s| s.final_score).unwrap_or(0.0);
    let lines = vec![
        Line::from(format!("You made the top {}!", app.trainer.config().leaderboard_size)),
        Line::from(format!("Accuracy: {score:.1}%")),
        Line::from(format!("Name: {current}_")),
        Line::from("Enter submit, Esc skip"),
    ];
    let block = Block::default().title("Leaderboard").borders(Borders::ALL);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner(area));
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[0]);
    let error = app.name_entry_error().unwrap_or("");
    let error_line = Line::from(Span::styled(error, Style::default().fg(Color::Red)));
    f.render_widget(Paragraph::new(error_line).alignment(Alignment::Center), chunks[1]);
}

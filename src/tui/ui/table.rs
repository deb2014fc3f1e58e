use crate::cards::{Card, Suit};
use crate::probability::{GameMode, GamePhase};
use crate::trainer::HandRound;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{card_slots, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let header_lines_count: u16 = 2;
    // Add borders (2 rows) to get total block height
    let header_height = header_lines_count + 2;
    let status_height: u16 = 2 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // header
            Constraint::Length(5),             // board
            Constraint::Min(8),                // hand + answers
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    draw_header(f, app, chunks[0]);

    let round = app.trainer.round();
    draw_board(f, round, chunks[1]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[2]);
    draw_player(f, app, round, middle[0]);
    draw_answers(f, app, round, middle[1]);

    draw_status(f, app, chunks[3]);
}

fn draw_header(f: &mut Frame, app: &AppState, area: Rect) {
    let cfg = app.trainer.config();
    let progress = app.trainer.progress();
    let score = progress.score();
    let round = app.trainer.round();

    let phase = round.map(|r| r.phase().label()).unwrap_or("--");
    let opponents = round.map(|r| r.opponents().len().to_string()).unwrap_or_else(|| "--".into());
    let mut first = format!(
        "Mode: {}   Hand {}/{}   Phase: {}   Opponents: {}",
        cfg.mode,
        progress.hands_played(),
        cfg.hands_per_game,
        phase,
        opponents
    );
    if cfg.mode == GameMode::Tournament {
        first.push_str(&format!(
            "   Blinds L{}   Stack ${}",
            app.trainer.blind_level(),
            app.trainer.stack()
        ));
    }
    let second = format!(
        "Score: {}/{} ({:.1}%)   Streak: {} (best {})   Folded: {}",
        score.correct,
        score.total,
        score.accuracy(),
        progress.current_streak(),
        progress.best_streak(),
        score.folded
    );
    let header = Paragraph::new(vec![Line::from(first), Line::from(second)])
        .block(Block::default().title("poker-trainer").borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_board(f: &mut Frame, round: Option<&HandRound>, area: Rect) {
    let phase = round.map(|r| r.phase()).unwrap_or(GamePhase::Preflop);
    let board_block = Block::default().title(format!("Board: {phase}")).borders(Borders::ALL);
    let board_cards = round.map(|r| r.board().as_slice()).unwrap_or(&[]);
    let slots = card_slots(inner(area), 5, 9);
    f.render_widget(board_block, area);
    for i in 0..5 {
        let highlight = (phase == GamePhase::Flop && i < 3)
            || (phase == GamePhase::Turn && i == 3)
            || (phase == GamePhase::River && i == 4);
        render_card_widget(
            f,
            slots[i],
            board_cards.get(i).copied(),
            if highlight { Some(Color::Yellow) } else { None },
        );
    }
}

fn draw_player(f: &mut Frame, app: &AppState, round: Option<&HandRound>, area: Rect) {
    f.render_widget(Block::default().title("Your Hand").borders(Borders::ALL), area);
    let Some(round) = round else {
        let para = Paragraph::new("Press Space to deal.").wrap(Wrap { trim: true });
        f.render_widget(para, inner(area));
        return;
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner(area));
    let slots = card_slots(rows[0], 2, 9);
    render_card_widget(f, slots[0], Some(round.player().first()), Some(Color::Cyan));
    render_card_widget(f, slots[1], Some(round.player().second()), Some(Color::Cyan));

    let mut lines = vec![Line::from(Span::styled(
        round.evaluation().label(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    // Hints are only computed in beginner mode; the error case renders nothing.
    if let Ok(hints) = app.trainer.hints() {
        for hint in hints {
            lines.push(Line::from(Span::styled(
                format!("Hint: {hint}"),
                Style::default().fg(Color::LightBlue),
            )));
        }
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), rows[1]);
}

fn draw_answers(f: &mut Frame, app: &AppState, round: Option<&HandRound>, area: Rect) {
    f.render_widget(
        Block::default().title("Win probability?").borders(Borders::ALL),
        area,
    );
    let Some(round) = round else {
        return;
    };
    let mut lines: Vec<Line> = Vec::new();

    if let Some(showdown) = round.showdown() {
        let winner = showdown.winner();
        let color = if winner.seat.is_player() { Color::Green } else { Color::Red };
        lines.push(Line::from(Span::styled(
            format!("Winner: {} with {}", winner.seat, winner.evaluation),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        for c in showdown.standings() {
            lines.push(Line::from(format!(
                "{:<12} {} {}  {}",
                c.seat.to_string(),
                c.cards.first().pretty(),
                c.cards.second().pretty(),
                c.evaluation
            )));
        }
        lines.push(Line::from(""));
        lines.push(dim_line("Space: next hand"));
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
        return;
    }

    let answer = app.last_answer();
    for (i, option) in round.options().iter().enumerate() {
        let mut style = Style::default();
        if let Some(a) = answer {
            if *option == a.correct_probability {
                style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
            } else if *option == a.selected {
                style = style.fg(Color::Red);
            } else {
                style = style.add_modifier(Modifier::DIM);
            }
        }
        lines.push(Line::from(Span::styled(
            format!("[{}] {:>5.1}%", i + 1, option * 100.0),
            style,
        )));
    }
    lines.push(Line::from(""));
    match answer {
        Some(a) if a.is_correct => lines.push(Line::from(Span::styled(
            "Correct!",
            Style::default().fg(Color::Green),
        ))),
        Some(a) => lines.push(Line::from(Span::styled(
            format!("Wrong: the estimate was {:.1}%", a.correct_probability * 100.0),
            Style::default().fg(Color::Red),
        ))),
        None => lines.push(dim_line("Pick 1-4, or F to fold")),
    }
    if answer.is_some() {
        let next = if round.phase() == GamePhase::River { "showdown" } else { "next street" };
        lines.push(dim_line(&format!("Space: {next}")));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}

fn draw_status(f: &mut Frame, app: &AppState, area: Rect) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(area));

    let mut left_info = Vec::new();
    if let Some(summary) = app.trainer.summary() {
        left_info.push(Line::from(format!(
            "Game over: {:.1}% accuracy over {} answers. Space: new game.",
            summary.final_score, summary.score.total
        )));
    }
    if let Some(notice) = app.notice() {
        let color = if notice.starts_with("Error") { Color::Red } else { Color::Yellow };
        left_info.push(Line::from(Span::styled(notice.to_string(), Style::default().fg(color))));
    }
    let right_keys = vec![
        Line::from("1-4 answer • Space/N next • F fold"),
        Line::from("? help • H history • M menu • Q quit"),
    ];
    f.render_widget(Paragraph::new(left_info).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );
}

pub(super) fn dim_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Style::default().add_modifier(Modifier::DIM)))
}

fn suit_style(s: Suit) -> Style {
    if s.is_red() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => Line::from(Span::styled(c.pretty(), suit_style(c.suit()))),
        None => Line::from("[  ]"),
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}

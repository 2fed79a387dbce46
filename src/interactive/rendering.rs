//! TUI rendering with ratatui
//!
//! Draws the attempt grid, the on-screen keyboard, and the message panel.

use super::app::{App, MessageStyle};
use crate::core::{LetterFeedback, WORD_LENGTH};
use crate::session::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Main content
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - grid left, keyboard and messages right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE - Terminal Edition")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn tile_style(state: LetterFeedback, filled: bool) -> Style {
    match state {
        LetterFeedback::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterFeedback::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterFeedback::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterFeedback::Pending if filled => {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        }
        LetterFeedback::Pending => Style::default().fg(Color::DarkGray),
    }
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::default()];

    for (row, attempt) in app.session.attempts().iter().enumerate() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for (column, cell) in attempt.letters().iter().enumerate() {
            let ch = cell
                .character()
                .map_or('·', |c| c.to_ascii_uppercase());
            let state = app.visible_state(row, column);
            spans.push(Span::styled(
                format!(" {ch} "),
                tile_style(state, cell.is_filled()),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::default());
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(grid, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(5)])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.keyboard_hints();

    let mut lines = vec![Line::default()];
    for row in KEYBOARD_ROWS {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for ch in row.chars() {
            let state = hints.get(&ch).copied().unwrap_or(LetterFeedback::Pending);
            let style = match state {
                LetterFeedback::Pending => Style::default().fg(Color::White),
                other => tile_style(other, true),
            };
            spans.push(Span::styled(ch.to_ascii_uppercase().to_string(), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
    }

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let tries_text = format!(
        "Try {}/{}",
        (app.session.submitted_count() + 1).min(crate::core::NUMBER_OF_TRIES),
        crate::core::NUMBER_OF_TRIES
    );
    let tries = Paragraph::new(tries_text).alignment(Alignment::Center);
    f.render_widget(tries, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.session.status() == GameStatus::InProgress {
        "Type: guess | Enter: submit | Backspace: delete | Esc: quit"
    } else {
        "n: new game | q: quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

//! TUI rendering with ratatui

use super::app::App;
use crate::core::{Mark, WORD_LENGTH};
use crate::game::{GameState, MAX_GUESSES, Phase};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Column where the accept / rejection hint starts, counted from the row's left edge
const HINT_COLUMN: usize = 15;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Board
            Constraint::Length(1), // Help line
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, &app.game, chunks[1]);
    render_help(f, &app.game, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, game: &GameState, area: Rect) {
    let board = Paragraph::new(board_lines(game)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_help(f: &mut Frame, game: &GameState, area: Rect) {
    let text = if game.phase().is_terminal() {
        "any key: Quit".to_string()
    } else {
        format!(
            "Guess {}/{MAX_GUESSES} | Enter: Accept | Backspace: Delete | Esc: Quit",
            game.history().len() + 1
        )
    };

    let help = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

/// Lines of the board: past guesses, then the input row or the final result
#[must_use]
pub fn board_lines(game: &GameState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (guess, feedback) in game.scored_history() {
        let mut spans = vec![Span::raw(" ")];
        for (i, (&letter, &mark)) in guess.chars().iter().zip(feedback.marks()).enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(char::from(letter).to_string(), mark_style(mark)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    if game.phase().is_terminal() {
        lines.extend(result_lines(game));
    } else {
        lines.push(input_line(game));
    }

    lines
}

fn input_line(game: &GameState) -> Line<'static> {
    let typed: Vec<char> = game.in_flight().chars().collect();
    let mut spans = vec![Span::raw(" ")];
    for i in 0..WORD_LENGTH {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let slot = typed.get(i).copied().unwrap_or(' ');
        spans.push(Span::styled(
            slot.to_string(),
            Style::default().add_modifier(Modifier::UNDERLINED),
        ));
    }

    let hint = match game.phase() {
        Phase::PendingConfirmation => Some(("press enter to accept", Color::Cyan)),
        Phase::Invalid => Some(("word not in wordlist!", Color::Red)),
        _ => None,
    };
    if let Some((text, color)) = hint {
        let used = 2 * WORD_LENGTH;
        spans.push(Span::raw(" ".repeat(HINT_COLUMN - used)));
        spans.push(Span::styled(
            text,
            Style::default().fg(Color::Black).bg(color),
        ));
    }

    Line::from(spans)
}

fn result_lines(game: &GameState) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = game
        .scored_history()
        .map(|(_, feedback)| Line::from(feedback.to_emoji()))
        .collect();
    lines.push(Line::default());

    match (game.phase(), game.secret()) {
        (Phase::Lost, Some(secret)) => {
            lines.push(Line::from("BETTER LUCK NEXT TIME!"));
            lines.push(Line::from(format!("THE WORD WAS: {secret}")));
        }
        _ => lines.push(Line::from("CONGRATULATION YOU WON!")),
    }
    lines.push(Line::from("(press a key to quit)"));
    lines
}

fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        Mark::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        Mark::Absent => Style::default(),
    }
}

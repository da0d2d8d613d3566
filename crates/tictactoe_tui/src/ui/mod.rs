//! Stateless UI rendering.

mod board;

use crate::app::App;
use crate::config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

const HELP: &str = "←↑→↓ move · Enter/Space or 1-9 play · r restart · q quit";

/// Draws the whole screen for the current application state.
pub fn draw(frame: &mut Frame, app: &App, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(4), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    board::render_board(frame, chunks[1], app.engine().board(), app.cursor(), theme);

    let mut lines = Vec::new();
    let result = app.status_message();
    if !result.is_empty() {
        lines.push(Line::styled(
            result,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
    }
    if let Some(turn) = app.turn_message() {
        lines.push(Line::from(turn));
    }
    if let Some(hint) = app.hint() {
        lines.push(Line::styled(hint.to_string(), Style::default().fg(Color::Yellow)));
    }
    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

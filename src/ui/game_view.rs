use crate::game::{GameEngine, Phase};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{player_color, render_board};

pub fn render(
    frame: &mut Frame,
    engine: &GameEngine,
    selected_column: usize,
    message: &Option<String>,
) {
    let board_height = board_rows(engine.height());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                       // Header
            Constraint::Min(board_height),               // Board
            Constraint::Length(3),                       // Message
            Constraint::Length(3),                       // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, chunks[0]);

    let selected = engine.phase().is_in_progress().then_some(selected_column);
    render_board(frame, engine.board(), selected, engine.winning_run(), chunks[1]);

    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Terminal rows needed for a board of `height`: the grid plus the number,
/// border and marker lines.
fn board_rows(height: usize) -> u16 {
    u16::try_from(height).unwrap_or(u16::MAX).saturating_add(4)
}

pub(crate) fn header_text(engine: &GameEngine) -> String {
    match engine.phase() {
        Phase::NotStarted => "Press S to start".to_string(),
        Phase::InProgress => format!(
            "Current Player: {}  |  Move {}",
            engine.current_player(),
            engine.move_count() + 1
        ),
        phase => phase.end_message().unwrap_or_default(),
    }
}

fn render_header(frame: &mut Frame, engine: &GameEngine, area: Rect) {
    let color = match engine.phase() {
        Phase::InProgress => player_color(engine.current_player()),
        Phase::Won(player) => player_color(player),
        Phase::NotStarted | Phase::Tied => Color::White,
    };

    let header = Paragraph::new(header_text(engine))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter: Drop  |  S: Start  |  R: Reset  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

use crate::game::GameEngine;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::debug;

use super::rejection_message;

pub struct App {
    engine: GameEngine,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(engine: GameEngine) -> Self {
        let selected_column = engine.width() / 2; // Start in middle
        App {
            engine,
            selected_column,
            should_quit: false,
            message: Some("Press S to start.".to_string()),
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        debug!(code = ?key.code, "key pressed");
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.engine.width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('s') => {
                if self.engine.phase().is_in_progress() {
                    self.message = Some("Game already in progress.".to_string());
                } else {
                    self.engine.start();
                    self.selected_column = self.engine.width() / 2;
                    self.message = Some("New game started!".to_string());
                }
            }
            KeyCode::Char('r') => {
                self.engine.reset();
                self.selected_column = self.engine.width() / 2;
                self.message = Some("Board cleared. Press S to start.".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        // Input is gated here; the engine would reject it anyway
        if !self.engine.phase().is_in_progress() {
            self.message = Some(match self.engine.phase().end_message() {
                Some(end) => format!("{end} Press S for a rematch."),
                None => "Press S to start.".to_string(),
            });
            return;
        }

        let column = isize::try_from(self.selected_column).unwrap_or(isize::MAX);
        match self.engine.drop_piece(column) {
            Ok(placement) => {
                self.message = placement.phase.end_message();
            }
            Err(err) => {
                self.message = Some(rejection_message(&err));
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.engine, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameEngine::default())
    }
}

//! Adapters around [`GameEngine`](crate::game::GameEngine): a Ratatui
//! terminal UI and a line-oriented headless mode. Both show columns
//! 1-based.

mod app;
pub mod board_widget;
mod game_view;
pub mod headless;

pub use app::App;

use crate::error::MoveError;

/// User-facing text for a rejected drop, with 1-based column numbers.
pub fn rejection_message(err: &MoveError) -> String {
    match *err {
        MoveError::InvalidColumn { width, .. } => {
            format!("Invalid column! Pick 1-{width}.")
        }
        MoveError::ColumnFull { column } => format!("Column {} is full!", column + 1),
        MoveError::GameNotInProgress { phase } => match phase.end_message() {
            Some(end) => format!("{end} Press S for a rematch or R to reset."),
            None => "Game not started. Press S to start.".to_string(),
        },
    }
}

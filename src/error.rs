use std::path::PathBuf;

use crate::game::Phase;

/// Reasons a drop is rejected. None of them change engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside the board (0..{width})")]
    InvalidColumn { column: isize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is not in progress ({phase})")]
    GameNotInProgress { phase: Phase },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to open log file in {path}: {source}")]
    Appender {
        path: PathBuf,
        source: tracing_appender::rolling::InitError,
    },

    #[error("invalid log filter '{directive}': {source}")]
    Filter {
        directive: String,
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("failed to install log subscriber: {0}")]
    Install(#[from] tracing::subscriber::SetGlobalDefaultError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::InvalidColumn {
            column: -1,
            width: 7,
        };
        assert_eq!(err.to_string(), "column -1 is outside the board (0..7)");

        let err = MoveError::ColumnFull { column: 2 };
        assert_eq!(err.to_string(), "column 2 is full");
    }

    #[test]
    fn test_not_in_progress_names_phase() {
        let err = MoveError::GameNotInProgress {
            phase: Phase::Won(Player::Two),
        };
        assert_eq!(err.to_string(), "game is not in progress (Player 2 won)");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.width must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.width must be >= 1"
        );
    }
}

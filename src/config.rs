use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION, WIN_LENGTH};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl BoardConfig {
    /// Dimensions that are legal but make a win impossible along one axis.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.width < WIN_LENGTH {
            warnings.push(format!(
                "board.width = {} is below {WIN_LENGTH}, no horizontal or diagonal win is possible",
                self.width
            ));
        }
        if self.height < WIN_LENGTH {
            warnings.push(format!(
                "board.height = {} is below {WIN_LENGTH}, no vertical or diagonal win is possible",
                self.height
            ));
        }
        warnings
    }
}

/// File logging. The terminal UI owns the screen, so logs never go to stdout.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub directory: PathBuf,
    pub file_name: String,
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            enabled: true,
            directory: PathBuf::from("logs"),
            file_name: "connect-four.log".to_string(),
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dimensions = [
            ("board.width", self.board.width),
            ("board.height", self.board.height),
        ];
        for (name, value) in dimensions {
            if value == 0 {
                return Err(ConfigError::Validation(format!("{name} must be >= 1")));
            }
            if value > MAX_DIMENSION {
                return Err(ConfigError::Validation(format!(
                    "{name} must be <= {MAX_DIMENSION}"
                )));
            }
        }

        if self.logging.file_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.file_name must not be empty".into(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.level must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.board.width, 7);
        assert_eq!(config.board.height, 6);
        assert!(config.board.warnings().is_empty());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
width = 9
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.width, 9);
        // Other fields should be defaults
        assert_eq!(config.board.height, 6);
        assert!(config.logging.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.board, BoardConfig::default());
        assert_eq!(config.logging.file_name, "connect-four.log");
    }

    #[test]
    fn test_validation_rejects_zero_width() {
        let mut config = AppConfig::default();
        config.board.width = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("board.width"));
    }

    #[test]
    fn test_validation_rejects_oversized_height() {
        let mut config = AppConfig::default();
        config.board.height = MAX_DIMENSION + 1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("board.height"));
    }

    #[test]
    fn test_validation_rejects_empty_log_file_name() {
        let mut config = AppConfig::default();
        config.logging.file_name = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_small_board_is_valid_but_warns() {
        let mut config = AppConfig::default();
        config.board.width = 3;
        config.board.height = 2;
        config.validate().expect("small boards are allowed");
        assert_eq!(config.board.warnings().len(), 2);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.board.width, 7);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
width = 8
height = 7

[logging]
enabled = false
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.width, 8);
        assert_eq!(config.board.height, 7);
        assert!(!config.logging.enabled);
        // Others are defaults
        assert_eq!(config.logging.directory, PathBuf::from("logs"));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\nwidth = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));

        std::fs::write(&path, "[board\nwidth = ").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config.board, BoardConfig::default());
    }
}

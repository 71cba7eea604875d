use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::ai::DEFAULT_SEED;
use crate::error::ConfigError;
use crate::game::{Player, COLS};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub opponent: OpponentConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

/// Which side, if any, the computer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputerSide {
    None,
    One,
    #[default]
    Two,
}

impl ComputerSide {
    pub fn player(self) -> Option<Player> {
        match self {
            ComputerSide::None => None,
            ComputerSide::One => Some(Player::One),
            ComputerSide::Two => Some(Player::Two),
        }
    }
}

impl FromStr for ComputerSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("none") {
            return Ok(ComputerSide::None);
        }
        match s.parse::<Player>()? {
            Player::One => Ok(ComputerSide::One),
            Player::Two => Ok(ComputerSide::Two),
        }
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub computer: ComputerSide,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OpponentConfig {
    pub seed: u64,
}

impl Default for OpponentConfig {
    fn default() -> Self {
        OpponentConfig { seed: DEFAULT_SEED }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Column the cursor starts on after launch and reset.
    pub start_column: usize,
    /// Milliseconds per sequencer tick.
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            start_column: 3,
            tick_ms: 40,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub file: PathBuf,
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: PathBuf::from("logs/connect-four.log"),
            level: "info".to_string(),
        }
    }
}

impl LogConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.level.parse().map_err(|_| {
            ConfigError::Validation(format!(
                "log.level '{}' must be one of off, error, warn, info, debug, trace",
                self.level
            ))
        })
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
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.start_column >= COLS {
            return Err(ConfigError::Validation(format!(
                "ui.start_column must be < {COLS}"
            )));
        }
        if self.ui.tick_ms == 0 {
            return Err(ConfigError::Validation("ui.tick_ms must be > 0".into()));
        }
        if self.log.file.as_os_str().is_empty() {
            return Err(ConfigError::Validation("log.file must not be empty".into()));
        }
        self.log.level_filter()?;
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

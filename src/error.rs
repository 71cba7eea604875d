use std::path::PathBuf;

use crate::game::{Phase, Player};

/// Reasons a submitted move was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside the board")]
    InvalidColumn { column: i32 },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is over")]
    GameOver,

    #[error("not accepting moves while {phase:?}")]
    NotAccepting { phase: Phase },

    #[error("{player} is computer-controlled")]
    ComputerTurn { player: Player },
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

/// Errors that can occur while installing the logger.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("failed to create log file {path}: {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("logger already initialized: {0}")]
    AlreadySet(#[from] log::SetLoggerError),
}

use std::path::PathBuf;

use crate::game_repr::Direction;

/// Errors that can occur while parsing or loading a layout.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,

    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown layout character {ch:?} at row {row}, column {col}")]
    UnknownChar { ch: char, row: usize, col: usize },

    #[error("layout has no Pacman start position")]
    MissingPacman,

    #[error("layout has more than one Pacman start position")]
    DuplicatePacman,

    #[error("no built-in layout named '{0}'")]
    UnknownLayout(String),

    #[error("failed to read layout file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
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

    #[error("unknown agent type '{0}'")]
    UnknownAgent(String),

    #[error("unknown evaluation function '{0}'")]
    UnknownEvaluation(String),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur while running a game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("agent {agent} chose illegal action {action} (legal: {legal:?})")]
    IllegalAction {
        agent: usize,
        action: Direction,
        legal: Vec<Direction>,
    },

    #[error("state has {expected} agents but {found} players were supplied")]
    AgentCountMismatch { expected: usize, found: usize },

    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

use std::path::PathBuf;

use crate::types::PaneId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures while turning a shortcut string into bytes for a pane.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("malformed chord: {0}")]
    MalformedChord(String),

    #[error("unsupported target: {0}")]
    UnsupportedTarget(String),
}

/// Failures reported by the host workspace.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The pane closed between the trigger and its handling.
    #[error("pane {0} no longer exists")]
    MissingPane(PaneId),

    #[error("host command `{command}` failed: {message}")]
    CommandFailed { command: String, message: String },

    #[error("host protocol error: {0}")]
    Protocol(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum PanewiseError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid action: {0}")]
    InvalidAction(String),

    #[error("invalid direction: {0}")]
    InvalidDirection(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("invalid process pattern: {0}")]
    InvalidPattern(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
}

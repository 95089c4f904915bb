//! Errors surfaced by the drill binaries.

use crate::config::ConfigError;
use drills_core::DrillError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Drill(#[from] DrillError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("'{input}' is not a valid number for {field}")]
    InvalidNumber { field: &'static str, input: String },
    #[error("input ended before {field} was read")]
    UnexpectedEof { field: &'static str },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot encode report: {0}")]
    Json(#[from] serde_json::Error),
}

//! Error types for context operations

use crate::game_log::ReaderError;
use crate::lamps::LampError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save configuration to {path}")]
    Save {
        path: PathBuf,
        #[source]
        source: confy::ConfyError,
    },

    #[error("failed to locate configuration file")]
    Locate(#[source] confy::ConfyError),

    #[error("invalid configuration: {field} {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Errors that end the main loop
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Reader(#[from] ReaderError),

    #[error(transparent)]
    Lamp(#[from] LampError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{failed} of {total} initial lamp commands failed")]
    StartupFlush { failed: usize, total: usize },
}

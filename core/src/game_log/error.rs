//! Error types for game log parsing

use std::path::PathBuf;
use thiserror::Error;

/// Errors during game log line parsing
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid line format at line {line_number}: {line}")]
    InvalidLineFormat { line_number: u64, line: String },

    #[error("invalid timestamp at line {line_number}: {segment}")]
    InvalidTimestamp { line_number: u64, segment: String },
}

impl ParseError {
    pub fn line_number(&self) -> u64 {
        match self {
            Self::InvalidLineFormat { line_number, .. }
            | Self::InvalidTimestamp { line_number, .. } => *line_number,
        }
    }
}

/// Errors during log file reading operations
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("failed to read log file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed line in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while summarizing samples
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("Cannot summarize an empty sample set")]
    EmptyInput,
}

/// Errors that can occur while reading a measurement file
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed measurement file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Measurement file {} holds no DDL entry", path.display())]
    EmptyDocument { path: PathBuf },

    #[error("Measurement file {} holds {count} DDL entries, expected exactly one", path.display())]
    MultipleDdlEntries { path: PathBuf, count: usize },

    #[error("Negative duration {value} in {series} samples of {dml_name}")]
    NegativeDuration {
        dml_name: String,
        series: &'static str,
        value: f64,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

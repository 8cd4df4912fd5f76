// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A page came back but could not be used (listing, competition page).
    #[error("could not fetch {0}")]
    Fetch(String),

    /// Reading or appending a correction store failed.
    #[error("correction store {path}: {reason}")]
    Store { path: PathBuf, reason: String },

    /// An athlete cell that could not be read.
    #[error("malformed row: {0}")]
    Row(String),

    /// The disambiguation strategy could not produce an answer.
    #[error("name prompt failed: {0}")]
    Prompt(String),

    #[error("invalid competition id '{0}' (expected digits only)")]
    InvalidCompetitionId(String),

    /// The export destination could not be written (often: open in a spreadsheet).
    #[error("could not write {path}: {source}")]
    Destination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

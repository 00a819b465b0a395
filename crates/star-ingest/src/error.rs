//! Error types for sales feed ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the sales feed.
///
/// All of these are structural: the feed cannot be turned into records at
/// all, so the run must stop.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not UTF-8 text.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Failed to parse the CSV content.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// The header row contains only blank names.
    #[error("could not detect header row in {path}")]
    NoHeaderDetected { path: PathBuf },

    /// One or more required sales columns are absent.
    #[error("required column(s) {} not found in {path}", .columns.join(", "))]
    MissingColumns { columns: Vec<String>, path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

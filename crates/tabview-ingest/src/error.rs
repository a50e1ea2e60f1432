//! Error types for fixture ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating or decoding fixture files.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("fixture file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file contents.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON document is valid but is not a list of records.
    #[error("expected a top-level array in {path}, found {found}")]
    NotAnArray { path: PathBuf, found: &'static str },

    #[error("element {index} of {path} is not an object")]
    NotAnObject { path: PathBuf, index: usize },

    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV header that cannot be used as a field path.
    #[error("invalid column header {header:?} in {path}")]
    InvalidHeader { path: PathBuf, header: String },

    #[error("unsupported fixture extension: {path}")]
    UnsupportedExtension { path: PathBuf },
}

/// Result type for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;

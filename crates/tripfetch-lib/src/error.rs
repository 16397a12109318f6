use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TripFetchError {
    #[error("Invalid month '{value}': expected YYYY-MM format")]
    InvalidMonth { value: String },

    #[error("Unsupported filetype '{value}'. Choose from parquet, csv, csv.gz.")]
    UnsupportedFiletype { value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Data directory creation failed at {path}: {reason}")]
    DataDirectoryCreation { path: PathBuf, reason: String },

    #[error("Failed to write metadata to {path}: {reason}")]
    MetadataWrite { path: PathBuf, reason: String },

    #[error("Failed to initialize logging: {reason}")]
    LoggingInit { reason: String },

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}

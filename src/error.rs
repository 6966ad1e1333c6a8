//! Error types for BIM Extract.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when serializing and writing object records.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the destination directory (or one of its ancestors).
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the record file.
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create the batch report file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize a record to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV report data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}

/// Errors that can occur when reading a host selection snapshot.
#[derive(Debug, Error)]
pub enum HostError {
    /// Failed to read the snapshot file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The snapshot is not a valid selection document.
    #[error("invalid selection snapshot '{path}': {source}")]
    InvalidSnapshot {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Errors that can occur when loading the export configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this tool.
    #[error("invalid config '{path}': {message}")]
    Parse { path: PathBuf, message: String },
}

//! Error types for task discovery and decoding

use std::path::PathBuf;
use thiserror::Error;

/// Why a document could not be turned into a Task
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Document is not valid YAML or does not match the Task schema
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Document is not valid JSON or does not match the Task schema
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `apiVersion` or `kind` is missing
    #[error("Object 'Kind' is missing or has no 'apiVersion'")]
    MissingTypeMeta,

    /// A resource other than a Task
    #[error("unsupported kind '{kind}', expected 'Task'")]
    UnsupportedKind {
        /// Kind found in the document
        kind: String,
    },

    /// A Task outside the `tekton.dev` group or of an unknown version
    #[error("unsupported apiVersion '{api_version}'")]
    UnsupportedApiVersion {
        /// apiVersion found in the document
        api_version: String,
    },
}

/// Loader errors
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Target path does not exist or cannot be inspected
    #[error("cannot access '{path}': {source}")]
    NotFound {
        /// Requested path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Directory listing failed
    #[error("failed to read directory '{path}': {source}")]
    ReadDir {
        /// Directory being scanned
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Candidate file could not be read
    #[error("error reading file '{path}': {source}")]
    ReadFile {
        /// File being loaded
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Candidate file did not decode as a Task
    #[error("failed to decode '{path}': {source}")]
    Decode {
        /// File being loaded
        path: PathBuf,
        /// Decoding failure
        source: DecodeError,
    },
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, LoaderError>;

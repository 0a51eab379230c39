//! Error types for cfboard-core

use thiserror::Error;

/// Main error type for the cfboard-core library.
///
/// Analytics computations themselves never fail on data-shape issues; these
/// variants cover the file, JSON, and configuration boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Snapshot document error
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

/// Result type alias for cfboard-core
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//! The aggregator itself never fails; degenerate input resolves to sentinels.

use thiserror::Error;

/// Errors that can occur while talking to the workout store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid store response: {0}")]
    InvalidResponse(String),

    #[error("Workout store rejected the credentials")]
    Unauthorized,

    #[error("Could not decode workouts: {0}")]
    Decode(#[from] ParseError),
}

/// Errors that can occur while decoding workout data or CLI values
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid workout format: {0}")]
    InvalidFormat(String),

    #[error("Unknown period '{0}' (expected week, month or all)")]
    InvalidPeriod(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
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

//! Error types shared between client and server.
//!
//! The `TrackerError` enum unifies common failure cases for I/O, serialization,
//! HTTP requests, and shared-state locking, allowing crates to propagate a
//! single error type.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// I/O error originating from the standard library or sockets/files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Error while parsing a ticker file into `Symbol` values.
    #[error("Parse tickers file error: {0}")]
    ParseTickersFile(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// HTTP request to the tracker server failed; contains a short context string.
    #[error("Request failed: {0}")]
    Request(String),

    /// Error indicating a poisoned mutex/lock was encountered.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),

    /// A ticker symbol was empty or otherwise unusable.
    #[error("Invalid ticker symbol: {0:?}")]
    InvalidSymbol(String),
}

impl<T> From<PoisonError<T>> for TrackerError {
    fn from(err: PoisonError<T>) -> Self {
        TrackerError::MutexLock(err.to_string())
    }
}

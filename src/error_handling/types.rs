//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Invalid settings in [`crate::Config`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Concurrency outside `1..=max`.
    #[error("max_concurrency must be between 1 and {max}, got {value}")]
    InvalidConcurrency {
        /// Rejected value
        value: usize,
        /// Largest accepted value
        max: usize,
    },

    /// Zero request timeout.
    #[error("timeout_seconds must be greater than zero")]
    InvalidTimeout,

    /// Blank User-Agent.
    #[error("user_agent must not be empty")]
    EmptyUserAgent,
}

/// Failures while retrieving a document.
///
/// A non-200 response is not a `FetchError`; the status travels with the
/// fetched document and the aggregator decides what to do with it.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be completed (DNS, connect, TLS, timeout, ...).
    #[error("{0}")]
    Transport(#[from] ReqwestError),

    /// The response body exceeded the configured size cap.
    #[error("response body too large ({size} bytes, limit {limit})")]
    BodyTooLarge {
        /// Observed body size
        size: usize,
        /// Configured limit
        limit: usize,
    },
}

/// Errors raised by the client/URL store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the data file failed.
    #[error("data file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data could not be encoded as JSON.
    #[error("data file encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// The named client is not tracked.
    #[error("unknown client: {0}")]
    UnknownClient(String),

    /// The URL index is out of range for the client.
    #[error("client {client} has no URL at index {index}")]
    UnknownUrl {
        /// Client name
        client: String,
        /// Requested index
        index: usize,
    },
}

/// Errors raised while importing tracked URLs from CSV.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The CSV input could not be read.
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row.
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),

    /// Persisting the imported data failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

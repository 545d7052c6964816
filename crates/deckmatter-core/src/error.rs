//! Error types for the Deckmatter core library
//!
//! This module defines the error handling for the fallible edges of the
//! crate, using thiserror for ergonomic error definitions and anyhow for
//! flexible error contexts. Note that the conversion pipeline itself never
//! returns errors: unsupported layouts pass through, missing values resolve
//! to absent, and structural problems are reported through
//! [`ValidationReport`](crate::ValidationReport). Only loading the external
//! slot catalog can fail.

use thiserror::Error;

/// Main error type for Deckmatter operations
#[derive(Error, Debug)]
pub enum Error {
    /// Slot catalog structure errors
    #[error("Catalog error: {message}")]
    Catalog {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

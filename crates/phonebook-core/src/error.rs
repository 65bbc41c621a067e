//! Error types for the phonebook service
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for phonebook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the phonebook service
#[derive(Error, Debug)]
pub enum Error {
    /// A contact with the given name already exists in the store.
    ///
    /// This is the only validation error the store raises. It surfaces at
    /// the API boundary as a user-input error, not a server fault.
    #[error("Name must be unique: {name}")]
    DuplicateName {
        /// The rejected name
        name: String,
    },

    /// Remote directory errors (request, status, or decode failures)
    #[error("Directory error: {0}")]
    Directory(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network-related errors
    #[error("Network error: {0}")]
    Network(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a duplicate-name validation error
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Create a remote directory error
    pub fn directory(msg: impl Into<String>) -> Self {
        Self::Directory(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

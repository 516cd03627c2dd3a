//! Error types for jotter-core

use thiserror::Error;

use crate::api::ApiError;

/// Result type alias using jotter-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in jotter-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Any failure from the data-access layer (transport, status or payload)
    #[error("Fetch failed: {0}")]
    Fetch(#[from] ApiError),

    /// Expected record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Persisted session store error
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// The record the operation targeted is gone, locally or at the store
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Fetch(error) => error.is_not_found(),
            _ => false,
        }
    }
}

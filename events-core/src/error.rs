//! Error types for the events client.

use thiserror::Error;

use crate::form::FormErrors;

/// Errors that can occur in events operations.
#[derive(Error, Debug)]
pub enum EventsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} responded with {status}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Invalid form: {0}")]
    Validation(FormErrors),

    #[error("Invalid category id: '{0}'")]
    InvalidCategoryId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for events operations.
pub type EventsResult<T> = Result<T, EventsError>;

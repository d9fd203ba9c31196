//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::{DomainError, Operation};
use crate::infrastructure::TransportError;

/// Application errors wrap domain errors and add request-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Transport(#[from] TransportError),

    #[error("{operation} request failed with status {status}: {body}")]
    HttpStatus {
        operation: Operation,
        status: u16,
        body: String,
    },

    #[error("invalid JSON in {operation} response: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot encode request payload: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

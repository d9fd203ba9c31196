//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the API contract that can be
/// detected locally, before any request is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unsupported operation: \"{0}\"")]
    UnsupportedOperation(String),
}

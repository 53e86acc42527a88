//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while interpreting endpoint names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The name does not match any known endpoint.
    #[error("unknown endpoint: {0}")]
    UnknownEndpoint(String),
}

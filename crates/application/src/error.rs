//! Application error types
//!
//! Resolution itself never fails; these errors cover wiring a resolver
//! together from configuration.

use endpoints_domain::DomainError;
use thiserror::Error;

use crate::ports::DefaultsError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// An explicitly configured defaults source could not be used.
    #[error("defaults error: {0}")]
    Defaults(#[from] DefaultsError),

    /// A configuration value is invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

//! Error types for the alert check

use thiserror::Error;

/// Result type alias for the alert check
pub type Result<T> = std::result::Result<T, CheckError>;

/// Main error type for the alert check
///
/// Every variant ends the run and surfaces as a CRITICAL report; the
/// taxonomy only exists so the report message describes what failed.
#[derive(Error, Debug)]
pub enum CheckError {
    /// Transport errors (connection refused/reset, timeout, protocol
    /// violation, non-success HTTP status)
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Response body could not be decoded into a list of alert records
    #[error("Malformed alert payload: {0}")]
    Payload(String),

    /// A decoded record failed JSON re-validation. The message text is
    /// part of the reporting contract and must not change.
    #[error("Response contains invalid JSON")]
    InvalidRecord,

    /// Configuration errors (invalid endpoint, unbuildable client)
    #[error("Configuration error: {0}")]
    Config(String),
}

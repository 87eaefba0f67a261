//! Loan API client error types.

use loanform_core::LoanFormError;

/// Errors from loan API calls.
#[derive(Debug, thiserror::Error)]
pub enum LoanApiError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The API returned a non-2xx status.
    #[error("loan API {endpoint} returned {status}: {body}")]
    ApiError {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// A bundled or overriding fixture did not parse.
    #[error("invalid {name} fixture: {source}")]
    Fixture {
        name: &'static str,
        source: LoanFormError,
    },
    /// The response parsed but its content is unusable.
    #[error("invalid payload from {endpoint}: {source}")]
    InvalidPayload {
        endpoint: String,
        source: LoanFormError,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

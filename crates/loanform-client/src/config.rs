//! Loan API client configuration.
//!
//! Only the HTTP client needs configuration; the fixture client is
//! self-contained.

use url::Url;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to a loan API service.
#[derive(Debug, Clone)]
pub struct LoanApiConfig {
    /// Base URL of the service; API paths are appended under `api/v1/`.
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl LoanApiConfig {
    /// Configuration for a base URL with the default timeout.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `LOANFORM_API_URL` (required)
    /// - `LOANFORM_API_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var("LOANFORM_API_URL").map_err(|_| ConfigError::MissingBaseUrl)?;
        let base_url = parse_url("LOANFORM_API_URL", &raw)?;
        Ok(Self {
            base_url,
            timeout_secs: std::env::var("LOANFORM_API_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Configuration pointing at a local server (for testing).
    pub fn local(port: u16) -> Result<Self, ConfigError> {
        let base_url = parse_url("localhost", &format!("http://127.0.0.1:{port}"))?;
        Ok(Self {
            base_url,
            timeout_secs: 5,
        })
    }
}

/// Parse a URL, naming its source in the error.
pub fn parse_url(source: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(source.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("LOANFORM_API_URL environment variable is required")]
    MissingBaseUrl,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}

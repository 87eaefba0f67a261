//! Session error types.

use loanform_client::LoanApiError;
use loanform_core::{FieldPath, LoanFormError};

/// Errors a session reports to its front end.
///
/// Eligibility failures are not represented here; they are logged and
/// swallowed by [`crate::FormSession::submit`].
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Fetching rules or the product catalog failed.
    #[error("failed to load {what}: {source}")]
    Load {
        what: &'static str,
        source: LoanApiError,
    },
    /// A select input was given a value that is not one of its options.
    #[error("{value:?} is not an option for {path}")]
    NotAnOption { path: FieldPath, value: String },
    /// The form does not hold a usable amount and term for a quote.
    #[error(transparent)]
    QuoteInput(#[from] LoanFormError),
    /// The rate call failed.
    #[error("rate calculation failed: {0}")]
    Quote(#[source] LoanApiError),
}

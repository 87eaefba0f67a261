//! # Error Types
//!
//! Errors raised while loading the externally supplied configuration (rule
//! store, product catalog) and while parsing field paths. Validation
//! outcomes are not errors in this sense; see [`crate::validator::FieldError`].

use thiserror::Error;

/// Top-level error type for the loan form domain.
#[derive(Error, Debug)]
pub enum LoanFormError {
    /// A rule in the rule store is internally inconsistent.
    #[error("invalid rule for {path}: {reason}")]
    InvalidRule {
        /// Field path of the offending rule (`section.field`).
        path: String,
        /// Why the rule was rejected.
        reason: String,
    },

    /// A field path did not name a known section and field.
    #[error("unknown field path: {0}")]
    UnknownField(String),

    /// The approval likelihood in an eligibility result was outside 0-100.
    #[error("approval likelihood {0} is outside 0-100")]
    LikelihoodOutOfRange(f64),

    /// A rate quote could not be built from the form values.
    #[error("cannot quote rates: {0}")]
    RateQuote(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

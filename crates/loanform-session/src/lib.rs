//! # loanform-session — Form State and Submit Flow
//!
//! [`FormSession`] is the reducer behind every front end. It owns the loaded
//! rules and product catalog, the current [`ApplicationForm`] snapshot, the
//! errors from the last validation pass, the last eligibility verdict and a
//! loading flag.
//!
//! ## Submit Flow
//!
//! 1. Clear the previous verdict and errors.
//! 2. Validate the whole snapshot against the rule store.
//! 3. If any field failed, keep the errors and stop. No API call is made.
//! 4. Otherwise set `loading`, send the snapshot to the eligibility call
//!    exactly once, store the verdict, clear `loading`.
//!
//! A failed eligibility call is logged and swallowed; the session is left
//! without a verdict and without errors.
//!
//! All mutation goes through `&mut self`, so a second submit cannot start
//! while the first is awaiting its response.
//!
//! [`ApplicationForm`]: loanform_core::ApplicationForm

pub mod error;
pub mod session;

pub use error::SessionError;
pub use session::{FormSession, SubmitOutcome};

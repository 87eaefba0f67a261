//! # loanform-cli — Terminal Front End
//!
//! Library half of the `loanform` binary. Each subcommand lives in its own
//! module with an `Args` struct and a `run_*` handler returning an exit code:
//!
//! - `schema`: print every input with its kind, bounds and options.
//! - `validate`: run the validation pass and show errors inline.
//! - `submit`: validate, then request an eligibility verdict.
//! - `quote`: rate quote for the amount and term on the form.
//!
//! Handlers take a `&dyn LoanApi`; [`api::build_api`] picks the fixture or
//! HTTP implementation from the global options.
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success; for `submit`, the applicant was approved |
//! | 1 | Validation failed, applicant declined, or the eligibility call failed |
//! | 2 | Operational error (bad input file, unreachable API, bad rules) |

pub mod api;
pub mod input;
pub mod quote;
pub mod render;
pub mod schema;
pub mod submit;
pub mod validate;

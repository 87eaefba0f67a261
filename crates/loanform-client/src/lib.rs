//! # loanform-client — Loan API Access
//!
//! The only path by which the rest of the workspace reaches rules, products,
//! eligibility verdicts and rate quotes. Everything goes through the
//! [`LoanApi`] trait:
//!
//! - [`FixtureLoanApi`] serves bundled JSON fixtures after an artificial
//!   delay. There is no backend; this is the default.
//! - [`HttpLoanApi`] talks to a deployed service under `{base_url}/api/v1/`.

pub mod api;
pub mod config;
pub mod error;
pub mod fixture;
pub mod http;

pub use api::LoanApi;
pub use config::{ConfigError, LoanApiConfig};
pub use error::LoanApiError;
pub use fixture::{parse_products, parse_rules, FixtureLoanApi, Fixtures, Latency};
pub use http::HttpLoanApi;

//! # loanform-core — Domain Types for the Loan Application Form
//!
//! Every other crate in the workspace depends on `loanform-core`; it depends
//! on nothing internal. It owns the data model and the only logic with real
//! rules in it: field validation against a server-supplied rule table.
//!
//! ## Key Design Principles
//!
//! 1. **Explicit field identifiers.** `Section` and `Field` are closed enums.
//!    No dynamic property access by string anywhere past the JSON boundary.
//!
//! 2. **Immutable form snapshots.** `ApplicationForm::with_value()` returns a
//!    new snapshot; edits never mutate a form another holder can observe.
//!
//! 3. **Atomic revalidation.** `validate_form()` recomputes the whole
//!    `ValidationErrors` map from one snapshot. There is no incremental error
//!    state to drift out of sync.
//!
//! 4. **Schema-driven rendering.** `FormSchema` enumerates every field with a
//!    tagged `FieldKind` so front ends render with one generic loop.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `loanform-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod currency;
pub mod eligibility;
pub mod error;
pub mod field;
pub mod form;
pub mod product;
pub mod rate;
pub mod rule;
pub mod schema;
pub mod validator;

// Re-export primary types for ergonomic imports.
pub use currency::format_zar;
pub use eligibility::{
    ApprovalLikelihood, EligibilityResponse, EligibilityResult, RecommendedLoan, RiskCategory,
};
pub use error::LoanFormError;
pub use field::{Field, FieldPath, Section};
pub use form::ApplicationForm;
pub use product::{LoanProduct, ProductCatalog};
pub use rate::{RateQuote, RateQuoteRequest};
pub use rule::{RuleStore, ValidationRule};
pub use schema::{FieldKind, FieldSpec, FormSchema, SelectOption};
pub use validator::{validate_field, validate_form, FieldError, ValidationErrors, Violation};

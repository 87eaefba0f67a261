//! # Loan API Interface
//!
//! The `LoanApi` trait abstracts over where rules, products and verdicts come
//! from. Development and tests use [`crate::FixtureLoanApi`]; a deployment
//! with a real eligibility service uses [`crate::HttpLoanApi`]. The session
//! logic composes these calls without knowing which one it holds.

use async_trait::async_trait;

use loanform_core::{
    ApplicationForm, EligibilityResponse, ProductCatalog, RateQuote, RateQuoteRequest, RuleStore,
};

use crate::error::LoanApiError;

/// The four calls the loan form makes.
///
/// Implementations must be `Send + Sync` so they can be shared behind an
/// `Arc`. The trait is object-safe to support runtime selection (fixture vs.
/// HTTP).
#[async_trait]
pub trait LoanApi: Send + Sync {
    /// Fetch the loan product catalog.
    async fn loan_products(&self) -> Result<ProductCatalog, LoanApiError>;

    /// Fetch the validation rule store.
    async fn validation_rules(&self) -> Result<RuleStore, LoanApiError>;

    /// Submit a validated application for an eligibility verdict.
    async fn check_eligibility(
        &self,
        form: &ApplicationForm,
    ) -> Result<EligibilityResponse, LoanApiError>;

    /// Quote an interest rate and repayment for an amount and term.
    async fn calculate_rates(&self, request: &RateQuoteRequest) -> Result<RateQuote, LoanApiError>;

    /// Human-readable name of this implementation (e.g. "FixtureLoanApi").
    fn api_name(&self) -> &str;
}

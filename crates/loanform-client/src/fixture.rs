//! # Fixture Loan API
//!
//! Resolves every call to a local JSON fixture after an artificial delay.
//! There is no evaluator behind it: `check_eligibility` logs the submitted
//! payload and returns the canned verdict whatever the form says.
//!
//! Default delays: products 800ms, rules 400ms, eligibility 1000ms,
//! rates 700ms. [`Latency::none`] removes them for tests.

use std::time::Duration;

use async_trait::async_trait;

use loanform_core::{
    ApplicationForm, EligibilityResponse, LoanFormError, ProductCatalog, RateQuote,
    RateQuoteRequest, RuleStore,
};

use crate::api::LoanApi;
use crate::error::LoanApiError;

const PRODUCTS_JSON: &str = include_str!("../fixtures/products.json");
const RULES_JSON: &str = include_str!("../fixtures/validation.json");
const ELIGIBILITY_JSON: &str = include_str!("../fixtures/eligibility.json");
const RATE_JSON: &str = include_str!("../fixtures/rate.json");

/// Simulated network latency per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub products: Duration,
    pub rules: Duration,
    pub eligibility: Duration,
    pub rates: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            products: Duration::from_millis(800),
            rules: Duration::from_millis(400),
            eligibility: Duration::from_millis(1000),
            rates: Duration::from_millis(700),
        }
    }
}

impl Latency {
    /// Resolve immediately.
    pub fn none() -> Self {
        Self {
            products: Duration::ZERO,
            rules: Duration::ZERO,
            eligibility: Duration::ZERO,
            rates: Duration::ZERO,
        }
    }
}

/// The canned responses.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub products: ProductCatalog,
    pub rules: RuleStore,
    pub eligibility: EligibilityResponse,
    pub rate: RateQuote,
}

impl Fixtures {
    /// The fixtures compiled into this crate.
    pub fn bundled() -> Result<Self, LoanApiError> {
        Ok(Self {
            products: parse_products(PRODUCTS_JSON)?,
            rules: parse_rules(RULES_JSON)?,
            eligibility: parse("eligibility", ELIGIBILITY_JSON)?,
            rate: parse("rate", RATE_JSON)?,
        })
    }
}

/// Parse a rule store fixture.
pub fn parse_rules(json: &str) -> Result<RuleStore, LoanApiError> {
    RuleStore::from_json(json).map_err(|source| LoanApiError::Fixture {
        name: "validation rules",
        source,
    })
}

/// Parse a product catalog fixture.
pub fn parse_products(json: &str) -> Result<ProductCatalog, LoanApiError> {
    parse("products", json)
}

fn parse<T: serde::de::DeserializeOwned>(name: &'static str, json: &str) -> Result<T, LoanApiError> {
    serde_json::from_str(json).map_err(|e| LoanApiError::Fixture {
        name,
        source: LoanFormError::Serialization(e),
    })
}

/// Loan API backed by local fixtures.
#[derive(Debug, Clone)]
pub struct FixtureLoanApi {
    fixtures: Fixtures,
    latency: Latency,
}

impl FixtureLoanApi {
    /// Bundled fixtures with the default latency.
    pub fn new() -> Result<Self, LoanApiError> {
        Ok(Self::with_fixtures(Fixtures::bundled()?))
    }

    /// Custom fixtures with the default latency.
    pub fn with_fixtures(fixtures: Fixtures) -> Self {
        Self {
            fixtures,
            latency: Latency::default(),
        }
    }

    /// Replace the simulated latency.
    #[must_use]
    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// The fixtures this client serves.
    pub fn fixtures(&self) -> &Fixtures {
        &self.fixtures
    }

    async fn simulate_delay<T: Clone>(&self, data: &T, delay: Duration) -> T {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        data.clone()
    }
}

#[async_trait]
impl LoanApi for FixtureLoanApi {
    async fn loan_products(&self) -> Result<ProductCatalog, LoanApiError> {
        Ok(self
            .simulate_delay(&self.fixtures.products, self.latency.products)
            .await)
    }

    async fn validation_rules(&self) -> Result<RuleStore, LoanApiError> {
        Ok(self
            .simulate_delay(&self.fixtures.rules, self.latency.rules)
            .await)
    }

    async fn check_eligibility(
        &self,
        form: &ApplicationForm,
    ) -> Result<EligibilityResponse, LoanApiError> {
        match serde_json::to_string(form) {
            Ok(payload) => tracing::info!(%payload, "submitted payload"),
            Err(e) => tracing::warn!("could not serialize submitted payload for logging: {e}"),
        }
        Ok(self
            .simulate_delay(&self.fixtures.eligibility, self.latency.eligibility)
            .await)
    }

    async fn calculate_rates(&self, request: &RateQuoteRequest) -> Result<RateQuote, LoanApiError> {
        tracing::debug!(
            amount = request.requested_amount,
            term = request.loan_term,
            "rate quote requested"
        );
        Ok(self
            .simulate_delay(&self.fixtures.rate, self.latency.rates)
            .await)
    }

    fn api_name(&self) -> &str {
        "FixtureLoanApi"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loanform_core::{validate_form, Field, RiskCategory};

    fn instant() -> FixtureLoanApi {
        FixtureLoanApi::new().unwrap().with_latency(Latency::none())
    }

    #[test]
    fn bundled_fixtures_parse() {
        let fixtures = Fixtures::bundled().unwrap();
        assert!(!fixtures.rules.is_empty());
        assert!(fixtures.products.purposes().contains(&"vehicle"));
        assert_eq!(
            fixtures.eligibility.eligibility_result.risk_category,
            RiskCategory::Low
        );
    }

    #[test]
    fn bundled_rules_cover_age_with_bounds() {
        let fixtures = Fixtures::bundled().unwrap();
        let age = fixtures.rules.rule_for(Field::Age).unwrap();
        assert!(age.required);
        assert_eq!((age.min, age.max), (Some(18.0), Some(65.0)));
    }

    #[test]
    fn bundled_rules_reject_empty_form() {
        let fixtures = Fixtures::bundled().unwrap();
        let errors = validate_form(&ApplicationForm::new(), &fixtures.rules);
        assert!(errors.contains(Field::Age));
        assert!(errors.contains(Field::LoanTerm));
        // No rules exist for these two inputs.
        assert!(!errors.contains(Field::ExistingDebt));
        assert!(!errors.contains(Field::LoanPurpose));
    }

    #[test]
    fn parse_rules_reports_fixture_name() {
        let err = parse_rules("{ not json").unwrap_err();
        assert!(err.to_string().contains("validation rules"));
    }

    #[tokio::test]
    async fn serves_canned_responses() {
        let api = instant();
        let products = api.loan_products().await.unwrap();
        assert_eq!(products.products.len(), 3);
        let verdict = api.check_eligibility(&ApplicationForm::new()).await.unwrap();
        assert!(verdict.eligibility_result.is_eligible);
        let request = RateQuoteRequest {
            requested_amount: 50_000.0,
            loan_term: 36,
            credit_score: None,
        };
        assert_eq!(api.calculate_rates(&request).await.unwrap().interest_rate, 14.5);
        assert_eq!(api.api_name(), "FixtureLoanApi");
    }

    #[tokio::test(start_paused = true)]
    async fn default_latency_delays_each_call() {
        let api = FixtureLoanApi::new().unwrap();

        let start = tokio::time::Instant::now();
        api.validation_rules().await.unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(400) && elapsed < Duration::from_millis(450));

        let start = tokio::time::Instant::now();
        api.check_eligibility(&ApplicationForm::new()).await.unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(1000) && elapsed < Duration::from_millis(1050));
    }

    #[test]
    fn trait_is_object_safe() {
        let _: Box<dyn LoanApi> = Box::new(instant());
    }
}

//! HTTP implementation of [`LoanApi`] for a deployed loan service.
//!
//! ## Paths
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/api/v1/products` | Product catalog |
//! | GET    | `/api/v1/validation-rules` | Rule store |
//! | POST   | `/api/v1/eligibility` | Eligibility check (body: application form) |
//! | POST   | `/api/v1/rates` | Rate quote |
//!
//! Every request is sent once. Failures are returned to the caller without
//! retry.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use loanform_core::{
    ApplicationForm, EligibilityResponse, ProductCatalog, RateQuote, RateQuoteRequest, RuleStore,
};

use crate::api::LoanApi;
use crate::config::LoanApiConfig;
use crate::error::LoanApiError;

/// API version path.
const API_PREFIX: &str = "api/v1";

/// Client for a loan service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpLoanApi {
    http: reqwest::Client,
    base_url: url::Url,
}

impl HttpLoanApi {
    /// Create a client from configuration.
    pub fn new(config: LoanApiConfig) -> Result<Self, LoanApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LoanApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    fn url(&self, path: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/{API_PREFIX}/{path}")
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, LoanApiError> {
        let endpoint = format!("GET /{path}");
        let url = self.url(path);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| LoanApiError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        decode(endpoint, resp).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, LoanApiError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let endpoint = format!("POST /{path}");
        let url = self.url(path);

        let resp = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| LoanApiError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        decode(endpoint, resp).await
    }
}

async fn decode<T: DeserializeOwned>(
    endpoint: String,
    resp: reqwest::Response,
) -> Result<T, LoanApiError> {
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read response body: {e}>"));
        return Err(LoanApiError::ApiError {
            endpoint,
            status,
            body,
        });
    }

    resp.json()
        .await
        .map_err(|e| LoanApiError::Deserialization {
            endpoint,
            source: e,
        })
}

#[async_trait]
impl LoanApi for HttpLoanApi {
    async fn loan_products(&self) -> Result<ProductCatalog, LoanApiError> {
        self.get_json("products").await
    }

    async fn validation_rules(&self) -> Result<RuleStore, LoanApiError> {
        let rules: RuleStore = self.get_json("validation-rules").await?;
        rules.check().map_err(|source| LoanApiError::InvalidPayload {
            endpoint: "GET /validation-rules".into(),
            source,
        })?;
        Ok(rules)
    }

    async fn check_eligibility(
        &self,
        form: &ApplicationForm,
    ) -> Result<EligibilityResponse, LoanApiError> {
        self.post_json("eligibility", form).await
    }

    async fn calculate_rates(&self, request: &RateQuoteRequest) -> Result<RateQuote, LoanApiError> {
        self.post_json("rates", request).await
    }

    fn api_name(&self) -> &str {
        "HttpLoanApi"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let api = HttpLoanApi::new(LoanApiConfig::local(9000).unwrap()).unwrap();
        assert_eq!(api.url("products"), "http://127.0.0.1:9000/api/v1/products");
    }

    #[test]
    fn url_keeps_base_path() {
        let config = LoanApiConfig::new("https://example.com/loans/".parse().unwrap());
        let api = HttpLoanApi::new(config).unwrap();
        assert_eq!(api.url("rates"), "https://example.com/loans/api/v1/rates");
    }
}

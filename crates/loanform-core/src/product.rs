//! Loan product catalog. The form only needs the purposes each product
//! covers; the remaining attributes are carried for display.

use serde::{Deserialize, Serialize};

/// One loan product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Loan purposes this product can fund (e.g. `home_improvement`).
    pub purposes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_term: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_term: Option<u32>,
    /// Annual interest rate, percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
}

/// The product catalog as returned by the products endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductCatalog {
    pub products: Vec<LoanProduct>,
}

impl ProductCatalog {
    /// Every purpose offered by any product, first occurrence wins.
    pub fn purposes(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for purpose in self.products.iter().flat_map(|p| p.purposes.iter()) {
            if !seen.contains(&purpose.as_str()) {
                seen.push(purpose);
            }
        }
        seen
    }

    /// Products that fund the given purpose.
    pub fn products_for(&self, purpose: &str) -> impl Iterator<Item = &LoanProduct> {
        let purpose = purpose.to_string();
        self.products
            .iter()
            .filter(move |product| product.purposes.iter().any(|p| *p == purpose))
    }
}

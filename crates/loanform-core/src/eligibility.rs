//! # Eligibility Result
//!
//! The verdict returned by the eligibility evaluator. The evaluator itself is
//! external; this module only types its response.
//!
//! Wire shape:
//!
//! ```json
//! {
//!   "eligibilityResult": { "isEligible": true, "riskCategory": "low", "approvalLikelihood": 85 },
//!   "recommendedLoan": { "amount": 50000, "termMonths": 36, "interestRate": 12.5, "monthlyPayment": 1672.68 }
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LoanFormError;

/// Risk band assigned by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Approval likelihood as a percentage, 0 to 100 inclusive. Fractional
/// values are kept as sent.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ApprovalLikelihood(f64);

impl ApprovalLikelihood {
    /// Validated constructor.
    pub fn new(percent: f64) -> Result<Self, LoanFormError> {
        if percent.is_finite() && (0.0..=100.0).contains(&percent) {
            Ok(Self(percent))
        } else {
            Err(LoanFormError::LikelihoodOutOfRange(percent))
        }
    }

    /// The percentage.
    pub fn percent(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ApprovalLikelihood {
    type Error = LoanFormError;

    fn try_from(percent: f64) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl From<ApprovalLikelihood> for f64 {
    fn from(likelihood: ApprovalLikelihood) -> Self {
        likelihood.0
    }
}

impl fmt::Display for ApprovalLikelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// The verdict itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub is_eligible: bool,
    pub risk_category: RiskCategory,
    pub approval_likelihood: ApprovalLikelihood,
}

impl EligibilityResult {
    /// "Approved" or "Declined".
    pub fn decision(&self) -> &'static str {
        if self.is_eligible {
            "Approved"
        } else {
            "Declined"
        }
    }
}

/// The loan the evaluator suggests instead of, or in addition to, the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedLoan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub amount: f64,
    pub term_months: u32,
    /// Annual interest rate, percent.
    pub interest_rate: f64,
    pub monthly_payment: f64,
}

/// Full response of the eligibility endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResponse {
    pub eligibility_result: EligibilityResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_loan: Option<RecommendedLoan>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_documented_shape() {
        let response: EligibilityResponse = serde_json::from_str(
            r#"{
                "eligibilityResult": { "isEligible": true, "riskCategory": "low", "approvalLikelihood": 85 },
                "recommendedLoan": { "amount": 50000, "termMonths": 36, "interestRate": 12.5, "monthlyPayment": 1672.68 }
            }"#,
        )
        .unwrap();
        let verdict = &response.eligibility_result;
        assert!(verdict.is_eligible);
        assert_eq!(verdict.decision(), "Approved");
        assert_eq!(verdict.risk_category, RiskCategory::Low);
        assert_eq!(verdict.approval_likelihood.percent(), 85.0);
        assert_eq!(response.recommended_loan.unwrap().term_months, 36);
    }

    #[test]
    fn recommended_loan_is_optional() {
        let response: EligibilityResponse = serde_json::from_str(
            r#"{ "eligibilityResult": { "isEligible": false, "riskCategory": "high", "approvalLikelihood": 12 } }"#,
        )
        .unwrap();
        assert_eq!(response.eligibility_result.decision(), "Declined");
        assert!(response.recommended_loan.is_none());
    }

    #[test]
    fn likelihood_outside_0_to_100_is_rejected() {
        assert!(ApprovalLikelihood::new(0.0).is_ok());
        assert!(ApprovalLikelihood::new(100.0).is_ok());
        assert!(ApprovalLikelihood::new(100.5).is_err());
        assert!(ApprovalLikelihood::new(-1.0).is_err());
        assert!(ApprovalLikelihood::new(f64::NAN).is_err());
        let bad = r#"{ "isEligible": true, "riskCategory": "low", "approvalLikelihood": 140 }"#;
        assert!(serde_json::from_str::<EligibilityResult>(bad).is_err());
    }

    #[test]
    fn unknown_risk_category_is_rejected() {
        let bad = r#"{ "isEligible": true, "riskCategory": "extreme", "approvalLikelihood": 40 }"#;
        assert!(serde_json::from_str::<EligibilityResult>(bad).is_err());
    }

    #[test]
    fn display_formats() {
        assert_eq!(RiskCategory::Medium.to_string(), "Medium");
        assert_eq!(ApprovalLikelihood::new(7.0).unwrap().to_string(), "7%");
        assert_eq!(ApprovalLikelihood::new(72.5).unwrap().to_string(), "72.5%");
    }

    #[test]
    fn fractional_likelihood_is_accepted() {
        let verdict: EligibilityResult = serde_json::from_str(
            r#"{ "isEligible": true, "riskCategory": "low", "approvalLikelihood": 72.5 }"#,
        )
        .unwrap();
        assert_eq!(verdict.approval_likelihood.percent(), 72.5);
    }
}

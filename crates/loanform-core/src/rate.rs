//! Rate quotes for the requested amount and term.

use serde::{Deserialize, Serialize};

use crate::error::LoanFormError;
use crate::field::Field;
use crate::form::ApplicationForm;
use crate::validator::coerce_number;

/// Body of the rate calculation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateQuoteRequest {
    pub requested_amount: f64,
    pub loan_term: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_score: Option<u32>,
}

impl RateQuoteRequest {
    /// Build a request from the amount, term and (optional) credit score on
    /// the form.
    pub fn from_form(form: &ApplicationForm) -> Result<Self, LoanFormError> {
        let requested_amount = coerce_number(form.value(Field::RequestedAmount))
            .filter(|amount| *amount > 0.0)
            .ok_or_else(|| LoanFormError::RateQuote("requested amount must be a positive number".into()))?;
        let loan_term = whole(form.value(Field::LoanTerm))
            .filter(|term| *term > 0)
            .ok_or_else(|| LoanFormError::RateQuote("loan term must be a whole number of months".into()))?;
        let credit_score = whole(form.value(Field::CreditScore));
        Ok(Self {
            requested_amount,
            loan_term,
            credit_score,
        })
    }
}

fn whole(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

/// Response of the rate calculation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateQuote {
    /// Annual interest rate, percent.
    pub interest_rate: f64,
    pub monthly_payment: f64,
    pub total_repayment: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_request_from_form() {
        let form = ApplicationForm::new()
            .with_value(Field::RequestedAmount, "25000")
            .with_value(Field::LoanTerm, "24")
            .with_value(Field::CreditScore, "710");
        let request = RateQuoteRequest::from_form(&form).unwrap();
        assert_eq!(request.requested_amount, 25000.0);
        assert_eq!(request.loan_term, 24);
        assert_eq!(request.credit_score, Some(710));
    }

    #[test]
    fn credit_score_is_optional() {
        let form = ApplicationForm::new()
            .with_value(Field::RequestedAmount, "1000")
            .with_value(Field::LoanTerm, "6");
        let request = RateQuoteRequest::from_form(&form).unwrap();
        assert!(request.credit_score.is_none());
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("creditScore").is_none());
    }

    #[test]
    fn rejects_missing_amount_or_fractional_term() {
        let blank = ApplicationForm::new().with_value(Field::LoanTerm, "12");
        assert!(RateQuoteRequest::from_form(&blank).is_err());
        let fractional = ApplicationForm::new()
            .with_value(Field::RequestedAmount, "1000")
            .with_value(Field::LoanTerm, "12.5");
        assert!(RateQuoteRequest::from_form(&fractional).is_err());
    }
}

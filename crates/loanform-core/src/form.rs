//! # Application Form Snapshot
//!
//! The applicant's input, captured as text exactly as typed. Values are
//! coerced to numbers only inside the validator.
//!
//! A form is an immutable value: [`ApplicationForm::with_value`] returns a new
//! snapshot with one field replaced. The serialized shape is the nested
//! camelCase object the eligibility endpoint receives.

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Age and employment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub age: String,
    pub employment_status: String,
    pub employment_duration: String,
}

/// Income, expenses, debt and credit score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialInfo {
    pub monthly_income: String,
    pub monthly_expenses: String,
    pub existing_debt: String,
    pub credit_score: String,
}

/// The loan being requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoanDetails {
    pub requested_amount: String,
    pub loan_term: String,
    pub loan_purpose: String,
}

/// A complete snapshot of the application form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationForm {
    pub personal_info: PersonalInfo,
    pub financial_info: FinancialInfo,
    pub loan_details: LoanDetails,
}

impl ApplicationForm {
    /// An empty form, every field blank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Age => &self.personal_info.age,
            Field::EmploymentStatus => &self.personal_info.employment_status,
            Field::EmploymentDuration => &self.personal_info.employment_duration,
            Field::MonthlyIncome => &self.financial_info.monthly_income,
            Field::MonthlyExpenses => &self.financial_info.monthly_expenses,
            Field::ExistingDebt => &self.financial_info.existing_debt,
            Field::CreditScore => &self.financial_info.credit_score,
            Field::RequestedAmount => &self.loan_details.requested_amount,
            Field::LoanTerm => &self.loan_details.loan_term,
            Field::LoanPurpose => &self.loan_details.loan_purpose,
        }
    }

    /// A new snapshot with `field` set to `value`; `self` is untouched.
    #[must_use]
    pub fn with_value(&self, field: Field, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        *next.slot(field) = value.into();
        next
    }

    /// Every `(field, value)` pair in form order.
    pub fn entries(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::all().iter().map(move |field| (*field, self.value(*field)))
    }

    /// Whether no field has been filled in.
    pub fn is_blank(&self) -> bool {
        self.entries().all(|(_, value)| value.trim().is_empty())
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Age => &mut self.personal_info.age,
            Field::EmploymentStatus => &mut self.personal_info.employment_status,
            Field::EmploymentDuration => &mut self.personal_info.employment_duration,
            Field::MonthlyIncome => &mut self.financial_info.monthly_income,
            Field::MonthlyExpenses => &mut self.financial_info.monthly_expenses,
            Field::ExistingDebt => &mut self.financial_info.existing_debt,
            Field::CreditScore => &mut self.financial_info.credit_score,
            Field::RequestedAmount => &mut self.loan_details.requested_amount,
            Field::LoanTerm => &mut self.loan_details.loan_term,
            Field::LoanPurpose => &mut self.loan_details.loan_purpose,
        }
    }
}

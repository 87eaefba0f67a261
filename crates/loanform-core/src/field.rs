//! # Field Identifiers — Single Source of Truth
//!
//! Defines the `Section` and `Field` enums naming every input on the loan
//! application form. Every `match` on `Field` is exhaustive, so adding an
//! input forces the form snapshot, the schema and the front end to handle it.
//!
//! The serialized names are the camelCase keys used by the rule store JSON
//! and by the eligibility request body.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LoanFormError;

/// A top-level section of the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    /// Age and employment.
    PersonalInfo,
    /// Income, expenses, debt and credit score.
    FinancialInfo,
    /// The loan being requested.
    LoanDetails,
}

impl Section {
    /// Returns all sections in form order.
    pub fn all() -> &'static [Section] {
        &[Self::PersonalInfo, Self::FinancialInfo, Self::LoanDetails]
    }

    /// Returns the camelCase key for this section.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "personalInfo",
            Self::FinancialInfo => "financialInfo",
            Self::LoanDetails => "loanDetails",
        }
    }

    /// Human-readable heading for this section.
    pub fn title(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Information",
            Self::FinancialInfo => "Financial Information",
            Self::LoanDetails => "Loan Details",
        }
    }

    /// Fields belonging to this section, in form order.
    pub fn fields(self) -> impl Iterator<Item = Field> {
        Field::all()
            .iter()
            .copied()
            .filter(move |field| field.section() == self)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = LoanFormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| LoanFormError::UnknownField(s.to_string()))
    }
}

/// A single input on the application form.
///
/// Declaration order is form order; `Ord` follows it so error maps keyed by
/// `Field` iterate in the order the fields are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Age,
    EmploymentStatus,
    EmploymentDuration,
    MonthlyIncome,
    MonthlyExpenses,
    ExistingDebt,
    CreditScore,
    RequestedAmount,
    LoanTerm,
    LoanPurpose,
}

impl Field {
    /// Returns all fields in form order.
    pub fn all() -> &'static [Field] {
        &[
            Self::Age,
            Self::EmploymentStatus,
            Self::EmploymentDuration,
            Self::MonthlyIncome,
            Self::MonthlyExpenses,
            Self::ExistingDebt,
            Self::CreditScore,
            Self::RequestedAmount,
            Self::LoanTerm,
            Self::LoanPurpose,
        ]
    }

    /// The section this field belongs to.
    pub fn section(&self) -> Section {
        match self {
            Self::Age | Self::EmploymentStatus | Self::EmploymentDuration => Section::PersonalInfo,
            Self::MonthlyIncome | Self::MonthlyExpenses | Self::ExistingDebt | Self::CreditScore => {
                Section::FinancialInfo
            }
            Self::RequestedAmount | Self::LoanTerm | Self::LoanPurpose => Section::LoanDetails,
        }
    }

    /// Returns the camelCase key for this field within its section.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::EmploymentStatus => "employmentStatus",
            Self::EmploymentDuration => "employmentDuration",
            Self::MonthlyIncome => "monthlyIncome",
            Self::MonthlyExpenses => "monthlyExpenses",
            Self::ExistingDebt => "existingDebt",
            Self::CreditScore => "creditScore",
            Self::RequestedAmount => "requestedAmount",
            Self::LoanTerm => "loanTerm",
            Self::LoanPurpose => "loanPurpose",
        }
    }

    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::EmploymentStatus => "Employment Status",
            Self::EmploymentDuration => "Employment Duration (Months)",
            Self::MonthlyIncome => "Monthly Income (R)",
            Self::MonthlyExpenses => "Monthly Expenses (R)",
            Self::ExistingDebt => "Existing Debt (R)",
            Self::CreditScore => "Credit Score",
            Self::RequestedAmount => "Requested Loan Amount (R)",
            Self::LoanTerm => "Loan Term (Months)",
            Self::LoanPurpose => "Loan Purpose",
        }
    }

    /// Whether the input is a select list rather than a number box.
    pub fn is_select(&self) -> bool {
        matches!(self, Self::EmploymentStatus | Self::LoanPurpose)
    }

    /// The full `section.field` path.
    pub fn path(&self) -> FieldPath {
        FieldPath(*self)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `section.field` path, e.g. `personalInfo.age`.
///
/// Only paths naming a field inside its own section parse; `loanDetails.age`
/// is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPath(Field);

impl FieldPath {
    /// The field this path names.
    pub fn field(&self) -> Field {
        self.0
    }
}

impl From<Field> for FieldPath {
    fn from(field: Field) -> Self {
        Self(field)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0.section(), self.0)
    }
}

impl FromStr for FieldPath {
    type Err = LoanFormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || LoanFormError::UnknownField(s.to_string());
        let (section, name) = s.split_once('.').ok_or_else(unknown)?;
        let section: Section = section.parse().map_err(|_| unknown())?;
        section
            .fields()
            .find(|field| field.as_str() == name)
            .map(FieldPath)
            .ok_or_else(unknown)
    }
}

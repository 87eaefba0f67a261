//! # Field Validation
//!
//! [`validate_field`] checks one value against its rule; [`validate_form`]
//! runs it over every field of a snapshot and collects the failures into a
//! [`ValidationErrors`] map.
//!
//! ## Check order
//!
//! 1. No rule: pass.
//! 2. `required` and blank: fail.
//! 3. `min` set and blank: fail.
//! 4. Numeric bounds (`min`, then `max`) against the coerced value. A
//!    non-blank value that does not coerce fails any numeric rule.
//! 5. `options` set and value not listed: fail.
//!
//! Every failure reports the rule's single `error_message`; the
//! [`Violation`] says which check tripped, for logs and tests.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::field::{Field, Section};
use crate::form::ApplicationForm;
use crate::rule::{RuleStore, ValidationRule};

/// Which check a value failed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Violation {
    /// Required field left blank.
    Required,
    /// Numeric field with a lower bound left blank.
    Blank,
    /// Text that is not a finite decimal number, checked against bounds.
    NotANumber,
    /// Below the inclusive lower bound.
    BelowMin { min: f64 },
    /// Above the inclusive upper bound.
    AboveMax { max: f64 },
    /// Not one of the allowed options.
    NotAnOption,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "required"),
            Self::Blank => write!(f, "blank"),
            Self::NotANumber => write!(f, "not a number"),
            Self::BelowMin { min } => write!(f, "below min {min}"),
            Self::AboveMax { max } => write!(f, "above max {max}"),
            Self::NotAnOption => write!(f, "not an option"),
        }
    }
}

/// A failed field check. Displays as the rule's message.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct FieldError {
    /// The check that failed.
    pub violation: Violation,
    /// The rule's configured message.
    pub message: String,
}

impl FieldError {
    fn new(violation: Violation, rule: &ValidationRule) -> Self {
        Self {
            violation,
            message: rule.error_message.clone(),
        }
    }
}

/// Coerce form text to a number: trimmed, decimal, finite.
pub fn coerce_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

/// Validate one value against its rule.
pub fn validate_field(value: &str, rule: Option<&ValidationRule>) -> Result<(), FieldError> {
    let Some(rule) = rule else {
        return Ok(());
    };
    let blank = value.trim().is_empty();

    if rule.required && blank {
        return Err(FieldError::new(Violation::Required, rule));
    }

    if rule.min.is_some() && blank {
        return Err(FieldError::new(Violation::Blank, rule));
    }

    if rule.is_numeric() && !blank {
        let Some(number) = coerce_number(value) else {
            return Err(FieldError::new(Violation::NotANumber, rule));
        };
        if let Some(min) = rule.min {
            if number < min {
                return Err(FieldError::new(Violation::BelowMin { min }, rule));
            }
        }
        if let Some(max) = rule.max {
            if number > max {
                return Err(FieldError::new(Violation::AboveMax { max }, rule));
            }
        }
    }

    if let Some(options) = &rule.options {
        if !options.iter().any(|option| option == value) {
            return Err(FieldError::new(Violation::NotAnOption, rule));
        }
    }

    Ok(())
}

/// Per-field error messages, shaped like the form: section → field → message.
///
/// A field appears only when its value failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    sections: BTreeMap<Section, BTreeMap<Field, String>>,
}

impl ValidationErrors {
    /// No errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field, replacing any earlier one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.sections
            .entry(field.section())
            .or_default()
            .insert(field, message.into());
    }

    /// The message for a field, if it is invalid.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.sections
            .get(&field.section())?
            .get(&field)
            .map(String::as_str)
    }

    /// Whether a field is invalid.
    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// Errors within one section, if any field there is invalid.
    pub fn section(&self, section: Section) -> Option<&BTreeMap<Field, String>> {
        self.sections.get(&section)
    }

    /// Whether every field passed.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of invalid fields.
    pub fn len(&self) -> usize {
        self.sections.values().map(BTreeMap::len).sum()
    }

    /// Every `(field, message)` pair in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.sections
            .values()
            .flat_map(|fields| fields.iter().map(|(field, message)| (*field, message.as_str())))
    }
}

/// Validate every field of a snapshot against the rule store.
///
/// The result reflects `form` alone; nothing from an earlier pass survives.
pub fn validate_form(form: &ApplicationForm, rules: &RuleStore) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for (field, value) in form.entries() {
        if let Err(err) = validate_field(value, rules.rule_for(field)) {
            tracing::debug!(
                field = %field.path(),
                violation = %err.violation,
                "field failed validation"
            );
            errors.insert(field, err.message);
        }
    }
    errors
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any required rule rejects empty input with its own message.
        #[test]
        fn required_rejects_empty(
            message in "[A-Za-z ]{1,40}",
            min in proptest::option::of(-1000i32..1000),
            with_options in any::<bool>(),
        ) {
            let mut rule = ValidationRule::new(message.clone()).required();
            rule.min = min.map(f64::from);
            if with_options {
                rule = rule.options(["a", "b"]);
            }
            let err = validate_field("", Some(&rule)).unwrap_err();
            prop_assert_eq!(err.to_string(), message);
        }

        /// A numeric value fails a bounded rule iff it lies outside [min, max].
        #[test]
        fn bounds_fail_iff_outside_range(
            min in -10_000i32..10_000,
            span in 0i32..10_000,
            value in -30_000i32..30_000,
            cents in 0u8..100,
        ) {
            let max = min + span;
            let rule = ValidationRule::new("out of range").min(f64::from(min)).max(f64::from(max));
            let raw = format!("{value}.{cents:02}");
            let number: f64 = raw.parse().unwrap();
            let outside = number < f64::from(min) || number > f64::from(max);
            prop_assert_eq!(validate_field(&raw, Some(&rule)).is_err(), outside);
        }

        /// An options rule passes iff the value is listed.
        #[test]
        fn options_pass_iff_member(
            options in proptest::collection::vec("[a-z_]{1,12}", 1..6),
            candidate in "[a-z_]{1,12}",
            pick in any::<proptest::sample::Index>(),
            use_member in any::<bool>(),
        ) {
            let rule = ValidationRule::new("pick one").options(options.clone());
            let value = if use_member { options[pick.index(options.len())].clone() } else { candidate };
            let member = options.contains(&value);
            prop_assert_eq!(validate_field(&value, Some(&rule)).is_ok(), member);
        }
    }
}

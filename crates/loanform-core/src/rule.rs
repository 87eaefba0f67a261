//! # Rule Store
//!
//! The server-supplied validation configuration: a JSON object keyed
//! `section → field → rule`. Fetched once per session and read-only after
//! that.
//!
//! Sections and fields the form does not know are preserved (the store is a
//! faithful copy of what the server sent) but never consulted, since lookups
//! go through the closed [`Field`] enum.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::LoanFormError;
use crate::field::Field;

/// How one field is validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRule {
    /// Empty input is rejected.
    #[serde(default)]
    pub required: bool,
    /// Inclusive lower bound on the numeric value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Inclusive upper bound on the numeric value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Closed list of accepted values, in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Message reported for any violation of this rule.
    pub error_message: String,
}

impl ValidationRule {
    /// A rule with only a message; accepts everything until constrained.
    pub fn new(error_message: impl Into<String>) -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            options: None,
            error_message: error_message.into(),
        }
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the inclusive lower bound.
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the inclusive upper bound.
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Restrict the field to a list of values.
    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// Whether the rule constrains the numeric value.
    pub fn is_numeric(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Reject rules no input could ever satisfy or that carry non-finite bounds.
    fn check(&self, path: &str) -> Result<(), LoanFormError> {
        let invalid = |reason: String| LoanFormError::InvalidRule {
            path: path.to_string(),
            reason,
        };
        for (name, bound) in [("min", self.min), ("max", self.max)] {
            if let Some(value) = bound {
                if !value.is_finite() {
                    return Err(invalid(format!("{name} must be finite, got {value}")));
                }
            }
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(invalid(format!("min {min} exceeds max {max}")));
            }
        }
        if matches!(&self.options, Some(options) if options.is_empty()) {
            return Err(invalid("options list is empty".to_string()));
        }
        Ok(())
    }
}

/// All validation rules, keyed by section then field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleStore {
    sections: BTreeMap<String, BTreeMap<String, ValidationRule>>,
}

impl RuleStore {
    /// Parse and check a rule store from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, LoanFormError> {
        let store: Self = serde_json::from_str(json)?;
        store.check()?;
        tracing::debug!(rules = store.len(), "loaded rule store");
        Ok(store)
    }

    /// Build a rule store from `(field, rule)` pairs.
    pub fn from_rules<I>(rules: I) -> Result<Self, LoanFormError>
    where
        I: IntoIterator<Item = (Field, ValidationRule)>,
    {
        let mut store = Self::default();
        for (field, rule) in rules {
            store
                .sections
                .entry(field.section().as_str().to_string())
                .or_default()
                .insert(field.as_str().to_string(), rule);
        }
        store.check()?;
        Ok(store)
    }

    /// Verify every rule in the store is satisfiable.
    pub fn check(&self) -> Result<(), LoanFormError> {
        for (section, fields) in &self.sections {
            for (name, rule) in fields {
                rule.check(&format!("{section}.{name}"))?;
            }
        }
        Ok(())
    }

    /// The rule for a form field, if the server supplied one.
    pub fn rule_for(&self, field: Field) -> Option<&ValidationRule> {
        self.get(field.section().as_str(), field.as_str())
    }

    /// Raw lookup by section and field key.
    pub fn get(&self, section: &str, field: &str) -> Option<&ValidationRule> {
        self.sections.get(section)?.get(field)
    }

    /// Total number of rules, including ones for unknown fields.
    pub fn len(&self) -> usize {
        self.sections.values().map(BTreeMap::len).sum()
    }

    /// Whether the store holds no rules.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate `(section, field, rule)` triples in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &ValidationRule)> {
        self.sections.iter().flat_map(|(section, fields)| {
            fields
                .iter()
                .map(move |(name, rule)| (section.as_str(), name.as_str(), rule))
        })
    }
}

//! # Form Schema
//!
//! An explicit description of every input, derived from the rule store and
//! the product catalog. Front ends walk [`FormSchema::fields`] with a single
//! loop and branch on [`FieldKind`]; no per-field markup.
//!
//! Kind selection:
//! - Select inputs (`employmentStatus`, `loanPurpose`) become
//!   [`FieldKind::EnumSelect`] when they have options, otherwise
//!   [`FieldKind::FreeText`].
//! - `employmentStatus` options come from its rule; `loanPurpose` options
//!   come from the product catalog.
//! - Every other input is [`FieldKind::NumericRange`] with the rule's bounds.

use serde::{Deserialize, Serialize};

use crate::field::{Field, Section};
use crate::product::ProductCatalog;
use crate::rule::RuleStore;

/// One entry of a select list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Submitted value, e.g. `self_employed`.
    pub value: String,
    /// Display text, e.g. `self employed`.
    pub label: String,
}

impl SelectOption {
    /// Option whose label is the value with underscores shown as spaces.
    pub fn from_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let label = value.replace('_', " ");
        Self { value, label }
    }
}

/// How an input is rendered and what it accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// Number box, optionally bounded.
    NumericRange { min: Option<f64>, max: Option<f64> },
    /// Select list.
    EnumSelect { options: Vec<SelectOption> },
    /// Unconstrained text.
    FreeText,
}

/// Everything a front end needs to render one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub field: Field,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
}

/// The whole form, in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// Derive the schema from the loaded rules and catalog.
    pub fn build(rules: &RuleStore, catalog: &ProductCatalog) -> Self {
        let fields = Field::all()
            .iter()
            .map(|field| {
                let rule = rules.rule_for(*field);
                let kind = if field.is_select() {
                    let options: Vec<SelectOption> = match field {
                        Field::LoanPurpose => catalog
                            .purposes()
                            .into_iter()
                            .map(SelectOption::from_value)
                            .collect(),
                        _ => rule
                            .and_then(|r| r.options.as_ref())
                            .map(|values| values.iter().map(SelectOption::from_value).collect())
                            .unwrap_or_default(),
                    };
                    if options.is_empty() {
                        FieldKind::FreeText
                    } else {
                        FieldKind::EnumSelect { options }
                    }
                } else {
                    FieldKind::NumericRange {
                        min: rule.and_then(|r| r.min),
                        max: rule.and_then(|r| r.max),
                    }
                };
                FieldSpec {
                    field: *field,
                    label: field.label().to_string(),
                    kind,
                    required: rule.is_some_and(|r| r.required),
                }
            })
            .collect();
        Self { fields }
    }

    /// Every input in display order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Inputs of one section in display order.
    pub fn section(&self, section: Section) -> impl Iterator<Item = &FieldSpec> {
        self.fields
            .iter()
            .filter(move |spec| spec.field.section() == section)
    }

    /// The spec for a single field.
    pub fn spec(&self, field: Field) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.field == field)
    }

    /// Whether `value` can be entered into `field` at all.
    ///
    /// Select inputs accept only a listed option, or blank for "nothing
    /// selected". Every other input accepts any text; the rule store decides
    /// validity on submit.
    pub fn admits(&self, field: Field, value: &str) -> bool {
        match self.spec(field).map(|spec| &spec.kind) {
            Some(FieldKind::EnumSelect { options }) => {
                value.is_empty() || options.iter().any(|option| option.value == value)
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::ValidationRule;

    fn rules() -> RuleStore {
        RuleStore::from_rules([
            (Field::Age, ValidationRule::new("Invalid age").required().min(18.0).max(65.0)),
            (
                Field::EmploymentStatus,
                ValidationRule::new("Select a status")
                    .required()
                    .options(["employed", "self_employed"]),
            ),
        ])
        .unwrap()
    }

    fn catalog() -> ProductCatalog {
        serde_json::from_str(
            r#"{ "products": [ { "purposes": ["home_improvement", "debt_consolidation"] } ] }"#,
        )
        .unwrap()
    }

    #[test]
    fn covers_every_field_in_order() {
        let schema = FormSchema::build(&rules(), &catalog());
        let order: Vec<Field> = schema.fields().iter().map(|s| s.field).collect();
        assert_eq!(order, Field::all());
    }

    #[test]
    fn numeric_fields_carry_rule_bounds() {
        let schema = FormSchema::build(&rules(), &catalog());
        let age = schema.spec(Field::Age).unwrap();
        assert!(age.required);
        assert_eq!(
            age.kind,
            FieldKind::NumericRange {
                min: Some(18.0),
                max: Some(65.0)
            }
        );
        let debt = schema.spec(Field::ExistingDebt).unwrap();
        assert!(!debt.required);
        assert_eq!(debt.kind, FieldKind::NumericRange { min: None, max: None });
    }

    #[test]
    fn status_options_come_from_rule_with_readable_labels() {
        let schema = FormSchema::build(&rules(), &catalog());
        let FieldKind::EnumSelect { options } = &schema.spec(Field::EmploymentStatus).unwrap().kind
        else {
            panic!("employment status should be a select");
        };
        assert_eq!(options[1].value, "self_employed");
        assert_eq!(options[1].label, "self employed");
    }

    #[test]
    fn purpose_options_come_from_catalog() {
        let schema = FormSchema::build(&rules(), &catalog());
        let FieldKind::EnumSelect { options } = &schema.spec(Field::LoanPurpose).unwrap().kind
        else {
            panic!("loan purpose should be a select");
        };
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["home_improvement", "debt_consolidation"]);
    }

    #[test]
    fn select_without_options_falls_back_to_free_text() {
        let schema = FormSchema::build(&RuleStore::default(), &ProductCatalog::default());
        assert_eq!(schema.spec(Field::EmploymentStatus).unwrap().kind, FieldKind::FreeText);
        assert_eq!(schema.spec(Field::LoanPurpose).unwrap().kind, FieldKind::FreeText);
    }

    #[test]
    fn section_filter() {
        let schema = FormSchema::build(&rules(), &catalog());
        assert_eq!(schema.section(Section::FinancialInfo).count(), 4);
    }

    #[test]
    fn kind_is_tagged_in_json() {
        let json = serde_json::to_value(FieldKind::FreeText).unwrap();
        assert_eq!(json["kind"], "free_text");
    }

    #[test]
    fn select_inputs_admit_only_listed_options() {
        let schema = FormSchema::build(&rules(), &catalog());
        assert!(schema.admits(Field::LoanPurpose, "home_improvement"));
        assert!(schema.admits(Field::LoanPurpose, ""));
        assert!(!schema.admits(Field::LoanPurpose, "yacht"));
        assert!(!schema.admits(Field::EmploymentStatus, "Employed"));
        assert!(schema.admits(Field::Age, "not a number"));
    }
}

//! # Form Input
//!
//! Builds an [`ApplicationForm`] from an optional JSON file in the
//! eligibility payload shape, then applies `--set section.field=value`
//! assignments in order. Later assignments win.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use loanform_core::{ApplicationForm, Field, FieldPath};

/// Form values for `validate`, `submit` and `quote`.
#[derive(Args, Debug, Clone, Default)]
pub struct FormArgs {
    /// JSON file holding the form (`personalInfo`, `financialInfo`, `loanDetails`).
    #[arg(long, value_name = "FILE")]
    pub form: Option<PathBuf>,

    /// Set one field, e.g. `--set personalInfo.age=35`. Repeatable.
    #[arg(long = "set", value_name = "SECTION.FIELD=VALUE")]
    pub assignments: Vec<String>,
}

/// Assemble the form described by `args`.
pub fn load_form(args: &FormArgs) -> Result<ApplicationForm> {
    let mut form = match &args.form {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read form file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("invalid form file {}", path.display()))?
        }
        None => ApplicationForm::new(),
    };

    for raw in &args.assignments {
        let (field, value) = parse_assignment(raw)?;
        form = form.with_value(field, value);
    }
    Ok(form)
}

/// Parse `section.field=value`. The value may be empty or contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(Field, &str)> {
    let (path, value) = raw
        .split_once('=')
        .with_context(|| format!("expected SECTION.FIELD=VALUE, got {raw:?}"))?;
    let path: FieldPath = path.trim().parse()?;
    Ok((path.field(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_assignment() {
        let (field, value) = parse_assignment("loanDetails.loanPurpose=home_improvement").unwrap();
        assert_eq!(field, Field::LoanPurpose);
        assert_eq!(value, "home_improvement");
    }

    #[test]
    fn assignment_value_may_be_empty_or_contain_equals() {
        assert_eq!(parse_assignment("personalInfo.age=").unwrap().1, "");
        assert_eq!(parse_assignment("personalInfo.age=a=b").unwrap().1, "a=b");
    }

    #[test]
    fn rejects_malformed_assignments() {
        assert!(parse_assignment("personalInfo.age").is_err());
        assert!(parse_assignment("personalInfo.height=180").is_err());
        assert!(parse_assignment("loanDetails.age=30").is_err());
    }

    #[test]
    fn no_input_gives_blank_form() {
        assert!(load_form(&FormArgs::default()).unwrap().is_blank());
    }

    #[test]
    fn file_then_assignments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "personalInfo": {{ "age": "40" }}, "loanDetails": {{ "loanTerm": "24" }} }}"#
        )
        .unwrap();
        let args = FormArgs {
            form: Some(file.path().to_path_buf()),
            assignments: vec![
                "personalInfo.age=41".into(),
                "financialInfo.creditScore=700".into(),
            ],
        };

        let form = load_form(&args).unwrap();

        assert_eq!(form.value(Field::Age), "41");
        assert_eq!(form.value(Field::LoanTerm), "24");
        assert_eq!(form.value(Field::CreditScore), "700");
        assert_eq!(form.value(Field::MonthlyIncome), "");
    }

    #[test]
    fn invalid_form_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2, 3]").unwrap();
        let args = FormArgs {
            form: Some(file.path().to_path_buf()),
            assignments: Vec::new(),
        };
        let err = load_form(&args).unwrap_err();
        assert!(format!("{err:#}").contains("invalid form file"));
    }
}

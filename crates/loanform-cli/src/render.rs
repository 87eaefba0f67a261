//! # Terminal Rendering
//!
//! Plain-text views of the schema, a filled form with inline errors, an
//! eligibility verdict and a rate quote. Every function returns a `String`;
//! printing is left to the subcommand handlers.
//!
//! The form views walk [`FormSchema`] section by section and branch on
//! [`FieldKind`]; no field is special-cased.

use std::fmt::Write;

use loanform_core::{
    format_zar, ApplicationForm, EligibilityResponse, FieldKind, FieldSpec, FormSchema,
    RateQuote, Section, ValidationErrors,
};

/// Width of the approval likelihood bar, in cells.
const BAR_WIDTH: usize = 20;

/// Column where values start in label/value listings.
const LABEL_WIDTH: usize = 32;

/// Every input grouped by section: label, kind, bounds or options.
pub fn render_schema(schema: &FormSchema) -> String {
    let mut out = String::new();
    for section in Section::all() {
        let _ = writeln!(out, "{}", section.title());
        for spec in schema.section(*section) {
            let _ = writeln!(
                out,
                "  {:<LABEL_WIDTH$}{}{}",
                spec.label,
                describe_kind(&spec.kind),
                if spec.required { " (required)" } else { "" }
            );
            let _ = writeln!(out, "  {:<LABEL_WIDTH$}--set {}=...", "", spec.field.path());
        }
        out.push('\n');
    }
    out
}

fn describe_kind(kind: &FieldKind) -> String {
    match kind {
        FieldKind::NumericRange { min, max } => match (min, max) {
            (Some(min), Some(max)) => format!("number, {min} to {max}"),
            (Some(min), None) => format!("number, at least {min}"),
            (None, Some(max)) => format!("number, at most {max}"),
            (None, None) => "number".to_string(),
        },
        FieldKind::EnumSelect { options } => {
            let listed: Vec<String> = options
                .iter()
                .map(|option| {
                    if option.label == option.value {
                        option.value.clone()
                    } else {
                        format!("{} ({})", option.value, option.label)
                    }
                })
                .collect();
            format!("one of: {}", listed.join(", "))
        }
        FieldKind::FreeText => "text".to_string(),
    }
}

/// The form's current values with each error under its field.
pub fn render_form(schema: &FormSchema, form: &ApplicationForm, errors: &ValidationErrors) -> String {
    let mut out = String::new();
    for section in Section::all() {
        let _ = writeln!(out, "{}", section.title());
        for spec in schema.section(*section) {
            let value = form.value(spec.field);
            let _ = writeln!(
                out,
                "  {:<LABEL_WIDTH$}{}",
                spec.label,
                display_value(spec, value)
            );
            if let Some(message) = errors.get(spec.field) {
                let _ = writeln!(out, "    ! {message}");
            }
        }
        out.push('\n');
    }
    out
}

fn display_value(spec: &FieldSpec, value: &str) -> String {
    if value.trim().is_empty() {
        return "-".to_string();
    }
    match &spec.kind {
        FieldKind::EnumSelect { options } => options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.clone())
            .unwrap_or_else(|| value.to_string()),
        _ => value.to_string(),
    }
}

/// The verdict and, when present, the recommended loan.
pub fn render_result(response: &EligibilityResponse) -> String {
    let result = &response.eligibility_result;
    let mut out = String::new();
    let _ = writeln!(out, "Eligibility Result");
    let _ = writeln!(out, "  {:<22}{}", "Status:", result.decision());
    let _ = writeln!(out, "  {:<22}{}", "Risk Category:", result.risk_category);
    let _ = writeln!(
        out,
        "  {:<22}{:>4} {}",
        "Approval Likelihood:",
        result.approval_likelihood.to_string(),
        likelihood_bar(result.approval_likelihood.percent())
    );

    if let Some(loan) = &response.recommended_loan {
        let _ = writeln!(out);
        let _ = writeln!(out, "Recommended Loan");
        if let Some(product) = &loan.product_id {
            let _ = writeln!(out, "  {:<22}{}", "Product:", product.replace('_', " "));
        }
        let _ = writeln!(out, "  {:<22}{}", "Amount:", format_zar(loan.amount));
        let _ = writeln!(out, "  {:<22}{} months", "Term:", loan.term_months);
        let _ = writeln!(out, "  {:<22}{}%", "Interest Rate:", loan.interest_rate);
        let _ = writeln!(out, "  {:<22}{}", "Monthly Payment:", format_zar(loan.monthly_payment));
    }
    out
}

/// `[#####...............]` filled in proportion to `percent`.
pub fn likelihood_bar(percent: f64) -> String {
    let filled = if percent.is_finite() {
        (percent.clamp(0.0, 100.0) * BAR_WIDTH as f64 / 100.0).round() as usize
    } else {
        0
    };
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// A rate quote.
pub fn render_quote(quote: &RateQuote) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Rate Quote");
    let _ = writeln!(out, "  {:<22}{}%", "Interest Rate:", quote.interest_rate);
    let _ = writeln!(out, "  {:<22}{}", "Monthly Payment:", format_zar(quote.monthly_payment));
    let _ = writeln!(out, "  {:<22}{}", "Total Repayment:", format_zar(quote.total_repayment));
    out
}

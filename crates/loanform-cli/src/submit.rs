//! # Submit Subcommand
//!
//! The full submit flow: validate, and only when every field passes, ask
//! the eligibility service for a verdict. A processing notice is printed
//! while the verdict is pending.

use anyhow::{Context, Result};
use clap::Args;

use loanform_client::LoanApi;
use loanform_session::{FormSession, SubmitOutcome};

use crate::input::{load_form, FormArgs};
use crate::render::{render_form, render_result};

/// Arguments for the `loanform submit` subcommand.
#[derive(Args, Debug, Default)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub input: FormArgs,
}

/// Execute the submit subcommand.
///
/// Returns exit code: 0 when approved, 1 when declined, rejected by
/// validation, or when the eligibility call failed.
pub async fn run_submit(args: &SubmitArgs, api: &dyn LoanApi) -> Result<u8> {
    let form = load_form(&args.input)?;
    let mut session = FormSession::load(api)
        .await
        .context("failed to load form configuration")?;
    session.replace_form(form)?;

    let outcome = match session.begin_submit() {
        Ok(pending) => {
            println!("Processing your application...");
            let response = api.check_eligibility(&pending).await;
            if let Err(e) = &response {
                tracing::error!(api = api.api_name(), "eligibility check failed: {e}");
            }
            session.complete_submit(response.ok())
        }
        Err(outcome) => outcome,
    };

    match outcome {
        SubmitOutcome::Rejected { invalid } => {
            print!(
                "{}",
                render_form(session.schema(), session.form(), session.errors())
            );
            println!("Submission blocked: {invalid} field(s) failed validation.");
            Ok(1)
        }
        SubmitOutcome::InFlight | SubmitOutcome::Failed => {
            println!("Eligibility check failed. Run with -v for details.");
            Ok(1)
        }
        SubmitOutcome::Evaluated => match session.result() {
            Some(response) => {
                print!("{}", render_result(response));
                Ok(if response.eligibility_result.is_eligible { 0 } else { 1 })
            }
            None => Ok(1),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loanform_client::{FixtureLoanApi, Latency};

    fn api() -> FixtureLoanApi {
        FixtureLoanApi::new().unwrap().with_latency(Latency::none())
    }

    fn valid_form() -> FormArgs {
        FormArgs {
            form: None,
            assignments: [
                "personalInfo.age=35",
                "personalInfo.employmentStatus=employed",
                "personalInfo.employmentDuration=48",
                "financialInfo.monthlyIncome=45000",
                "financialInfo.monthlyExpenses=20000",
                "financialInfo.creditScore=720",
                "loanDetails.requestedAmount=50000",
                "loanDetails.loanTerm=36",
                "loanDetails.loanPurpose=education",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }

    #[tokio::test]
    async fn valid_form_is_approved_by_fixture() {
        let args = SubmitArgs { input: valid_form() };
        assert_eq!(run_submit(&args, &api()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn invalid_form_is_blocked() {
        let mut input = valid_form();
        input.assignments.push("personalInfo.age=70".into());
        let args = SubmitArgs { input };
        assert_eq!(run_submit(&args, &api()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn purpose_outside_catalog_is_refused_before_submission() {
        let mut input = valid_form();
        input.assignments.push("loanDetails.loanPurpose=yacht".into());
        let args = SubmitArgs { input };
        let err = run_submit(&args, &api()).await.unwrap_err();
        assert!(format!("{err:#}").contains("yacht"));
    }
}

//! # Validate Subcommand
//!
//! Runs the validation pass over the assembled form and prints it with
//! errors inline. Nothing is submitted.

use anyhow::{Context, Result};
use clap::Args;

use loanform_client::LoanApi;
use loanform_session::FormSession;

use crate::input::{load_form, FormArgs};
use crate::render::render_form;

/// Arguments for the `loanform validate` subcommand.
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: FormArgs,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when every field passes, 1 otherwise.
pub async fn run_validate(args: &ValidateArgs, api: &dyn LoanApi) -> Result<u8> {
    let form = load_form(&args.input)?;
    let mut session = FormSession::load(api)
        .await
        .context("failed to load form configuration")?;
    session.replace_form(form)?;

    let invalid = session.validate().len();
    print!(
        "{}",
        render_form(session.schema(), session.form(), session.errors())
    );

    if invalid == 0 {
        println!("All fields valid.");
        Ok(0)
    } else {
        println!("{invalid} field(s) failed validation.");
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loanform_client::{FixtureLoanApi, Latency};

    fn api() -> FixtureLoanApi {
        FixtureLoanApi::new().unwrap().with_latency(Latency::none())
    }

    #[tokio::test]
    async fn blank_form_fails_validation() {
        assert_eq!(run_validate(&ValidateArgs::default(), &api()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn bad_assignment_is_an_operational_error() {
        let args = ValidateArgs {
            input: FormArgs {
                form: None,
                assignments: vec!["personalInfo.shoeSize=42".into()],
            },
        };
        assert!(run_validate(&args, &api()).await.is_err());
    }
}

//! # Quote Subcommand
//!
//! Rate quote for the requested amount and term. The form is not validated
//! first; only the amount, term and credit score are read.

use anyhow::{Context, Result};
use clap::Args;

use loanform_client::LoanApi;
use loanform_session::FormSession;

use crate::input::{load_form, FormArgs};
use crate::render::render_quote;

/// Arguments for the `loanform quote` subcommand.
#[derive(Args, Debug, Default)]
pub struct QuoteArgs {
    #[command(flatten)]
    pub input: FormArgs,
}

/// Execute the quote subcommand.
pub async fn run_quote(args: &QuoteArgs, api: &dyn LoanApi) -> Result<u8> {
    let form = load_form(&args.input)?;
    let mut session = FormSession::load(api)
        .await
        .context("failed to load form configuration")?;
    session.replace_form(form)?;

    let quote = session.quote(api).await?;
    print!("{}", render_quote(&quote));
    Ok(0)
}

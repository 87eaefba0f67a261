//! # Schema Subcommand
//!
//! Prints the form as the loaded rules and catalog describe it.

use anyhow::{Context, Result};
use clap::Args;

use loanform_client::LoanApi;
use loanform_session::FormSession;

use crate::render::render_schema;

/// Arguments for the `loanform schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {
    /// Print the schema as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the schema subcommand. Always returns exit code 0 once loaded.
pub async fn run_schema(args: &SchemaArgs, api: &dyn LoanApi) -> Result<u8> {
    let session = FormSession::load(api)
        .await
        .context("failed to load form configuration")?;

    if args.json {
        let json = serde_json::to_string_pretty(session.schema())
            .context("failed to serialize schema")?;
        println!("{json}");
    } else {
        print!("{}", render_schema(session.schema()));
    }
    Ok(0)
}

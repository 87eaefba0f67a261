//! # loanform CLI entry point
//!
//! Parses command-line arguments, selects the loan API, and dispatches to
//! subcommand handlers on a single-threaded runtime.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use loanform_cli::api::{build_api, ApiArgs};
use loanform_cli::quote::{run_quote, QuoteArgs};
use loanform_cli::schema::{run_schema, SchemaArgs};
use loanform_cli::submit::{run_submit, SubmitArgs};
use loanform_cli::validate::{run_validate, ValidateArgs};

/// Loan application form in the terminal.
///
/// Renders the application form from server-supplied validation rules,
/// validates input, and submits it for an eligibility verdict. Without
/// --api-url or LOANFORM_API_URL, bundled fixtures stand in for the service.
#[derive(Parser, Debug)]
#[command(name = "loanform", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    api: ApiArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show every input with its kind, bounds and options.
    Schema(SchemaArgs),

    /// Validate a form and show errors inline.
    Validate(ValidateArgs),

    /// Validate a form and submit it for an eligibility verdict.
    Submit(SubmitArgs),

    /// Quote an interest rate for the requested amount and term.
    Quote(QuoteArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("loanform CLI starting");

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("failed to start async runtime: {e}");
            return ExitCode::from(2);
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<u8> {
    let api = build_api(&cli.api)?;
    let api = api.as_ref();
    match cli.command {
        Commands::Schema(args) => run_schema(&args, api).await,
        Commands::Validate(args) => run_validate(&args, api).await,
        Commands::Submit(args) => run_submit(&args, api).await,
        Commands::Quote(args) => run_quote(&args, api).await,
    }
}

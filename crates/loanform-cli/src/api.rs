//! # API Selection
//!
//! Global options deciding which [`LoanApi`] the subcommands talk to.
//!
//! - `--api-url URL`, or `LOANFORM_API_URL` in the environment, selects
//!   [`HttpLoanApi`].
//! - Otherwise the bundled fixtures are served by [`FixtureLoanApi`], with
//!   `--rules` and `--products` replacing individual fixtures and
//!   `--no-delay` removing the simulated latency.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use loanform_client::config::parse_url;
use loanform_client::{
    parse_products, parse_rules, FixtureLoanApi, Fixtures, HttpLoanApi, Latency, LoanApi,
    LoanApiConfig,
};

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ApiArgs {
    /// Base URL of a loan service. Overrides LOANFORM_API_URL.
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Resolve fixture calls immediately instead of simulating latency.
    #[arg(long, global = true)]
    pub no_delay: bool,

    /// Validation rules JSON to serve instead of the bundled fixture.
    #[arg(long, global = true, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Product catalog JSON to serve instead of the bundled fixture.
    #[arg(long, global = true, value_name = "FILE")]
    pub products: Option<PathBuf>,
}

/// Build the API client selected by `args`.
pub fn build_api(args: &ApiArgs) -> Result<Box<dyn LoanApi>> {
    if let Some(config) = http_config(args)? {
        if args.rules.is_some() || args.products.is_some() {
            tracing::warn!("--rules and --products only apply to the fixture API; ignoring");
        }
        tracing::info!(base_url = %config.base_url, "using HTTP loan API");
        let api = HttpLoanApi::new(config).context("failed to build HTTP client")?;
        return Ok(Box::new(api));
    }

    let mut fixtures = Fixtures::bundled().context("bundled fixtures are invalid")?;
    if let Some(path) = &args.rules {
        fixtures.rules = parse_rules(&read(path)?)
            .with_context(|| format!("invalid rules file {}", path.display()))?;
    }
    if let Some(path) = &args.products {
        fixtures.products = parse_products(&read(path)?)
            .with_context(|| format!("invalid products file {}", path.display()))?;
    }

    let latency = if args.no_delay {
        Latency::none()
    } else {
        Latency::default()
    };
    tracing::debug!(?latency, "using fixture loan API");
    Ok(Box::new(
        FixtureLoanApi::with_fixtures(fixtures).with_latency(latency),
    ))
}

fn http_config(args: &ApiArgs) -> Result<Option<LoanApiConfig>> {
    if let Some(raw) = &args.api_url {
        let base_url = parse_url("--api-url", raw)?;
        return Ok(Some(LoanApiConfig::new(base_url)));
    }
    if std::env::var_os("LOANFORM_API_URL").is_some() {
        return Ok(Some(LoanApiConfig::from_env()?));
    }
    Ok(None)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

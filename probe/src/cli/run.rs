//! run subcommand
//!
//! Runs the selected scenarios sequentially and prints a report.

use crate::config::ProbeConfig;
use crate::runner::{RunReport, ScenarioRunner};
use crate::scenarios;
use anyhow::Context;
use clap::Args;
use tracing::info;

/// Arguments for the run subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Service base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Run only these scenario ids (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<u8>,

    /// Include boundary scenarios
    #[arg(long)]
    pub extended: bool,

    /// Wait before reusing a token in the expiry scenario (milliseconds)
    #[arg(long)]
    pub expiry_wait_ms: Option<u64>,

    /// Per-request timeout (seconds)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl RunArgs {
    /// Apply command-line overrides on top of `base`
    pub fn apply(&self, mut base: ProbeConfig) -> ProbeConfig {
        if let Some(url) = &self.base_url {
            base.base_url = url.clone();
        }
        if let Some(wait) = self.expiry_wait_ms {
            base.expiry_wait_ms = wait;
        }
        if let Some(timeout) = self.timeout_secs {
            base.request_timeout_secs = timeout;
        }
        base.include_extended |= self.extended;
        base
    }
}

/// Execute the run command
///
/// Returns the finished report. Configuration problems are errors;
/// failing scenarios are not.
pub async fn execute(args: &RunArgs) -> Result<RunReport, anyhow::Error> {
    let config = args.apply(ProbeConfig::from_env());
    let selected = scenarios::select(config.include_extended, &args.only)
        .context("invalid scenario selection")?;

    info!(
        "Running {} scenario(s) against {}",
        selected.len(),
        config.base_url
    );
    let runner = ScenarioRunner::new(config).context("failed to initialize probe")?;
    let report = runner.run(&selected).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_table());
    }
    Ok(report)
}

//! CLI module for favorites-probe
//!
//! Provides the command-line interface for running the scenario suite.

pub mod list;
pub mod run;

use clap::{Parser, Subcommand};

/// Favorites probe - black-box checks for the favorites API
#[derive(Parser, Debug)]
#[command(name = "favorites-probe")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    FAVORITES_PROBE_BASE_URL        Service base URL (default: https://regions-test.2gis.com/v1)
    FAVORITES_PROBE_TIMEOUT_SECS    Per-request timeout (default: 30)
    FAVORITES_PROBE_EXPIRY_WAIT_MS  Wait before reusing a token in the expiry scenario (default: 3000)
    FAVORITES_PROBE_EXTENDED        Include boundary scenarios (default: false)
    FAVORITES_PROBE_LOG_LEVEL       Log filter (default: info)
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run scenarios against the service
    Run(run::RunArgs),
    /// List scenarios without running them
    List(list::ListArgs),
}

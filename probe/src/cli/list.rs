//! list subcommand
//!
//! Prints the scenario catalog without contacting the service.

use crate::scenarios::{self, Scenario};
use clap::Args;

/// Arguments for the list subcommand
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Include boundary scenarios
    #[arg(long)]
    pub extended: bool,
}

/// Render the catalog as a table
pub fn render(scenarios: &[Scenario]) -> String {
    let mut out = String::from("ID\tEXPECT\tNAME\tDESCRIPTION\n");
    for s in scenarios {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            s.id,
            s.expected.status().as_u16(),
            s.name,
            s.description
        ));
    }
    out
}

/// Execute the list command
pub fn execute(args: &ListArgs) {
    let mut all = scenarios::catalog();
    if args.extended {
        all.extend(scenarios::extended());
    }
    print!("{}", render(&all));
}

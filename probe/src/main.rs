//! Favorites Probe Entry Point

use clap::Parser;
use favorites_probe::cli::{run::RunArgs, Cli, Commands};
use favorites_probe::logging;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match cli.command {
        Some(Commands::List(args)) => {
            favorites_probe::cli::list::execute(&args);
            ExitCode::SUCCESS
        }
        Some(Commands::Run(args)) => run(&args).await,
        None => run(&RunArgs::default()).await,
    }
}

async fn run(args: &RunArgs) -> ExitCode {
    match favorites_probe::cli::run::execute(args).await {
        Ok(report) if report.all_passed() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

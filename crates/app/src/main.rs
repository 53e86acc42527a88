//! Endpoints - prints the resolved service endpoints.
//!
//! Reads its settings from the environment, resolves the selected
//! endpoints and writes them to stdout. Logs go to stderr.

mod cli;
mod report;

use std::process::ExitCode;

use clap::Parser;
use endpoints_application::{ApplicationError, ApplicationResult};
use endpoints_infrastructure::ResolverConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Args;
use crate::report::{build_report, render_json, render_text};

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "endpoints failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> ApplicationResult<()> {
    let config = ResolverConfig::from_env()?;
    let resolver = config.build()?;
    tracing::info!(
        "Resolving {} endpoint(s) from {}",
        args.selected().len(),
        resolver.store().source_name()
    );

    let rows = build_report(&resolver, args);
    if args.json {
        let json = render_json(&rows).map_err(|e| ApplicationError::Config(e.to_string()))?;
        println!("{json}");
    } else {
        print!("{}", render_text(&rows));
    }

    Ok(())
}

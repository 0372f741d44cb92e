//! Binary entry point for flistclean.
//!
//! This binary provides the CLI interface for resolving filelist duplicates.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use flistclean::observability::{self, InitOptions};
use flistclean::{FlistConfig, ResolveCommand, ResolveOutcome};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Filelist cleaner - resolve duplicates in a filelist.
#[derive(Parser)]
#[command(name = "flistclean")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Filelist to resolve.
    filename: PathBuf,

    /// Path to output file (default: rewrite the input in place).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the resolved filelist to stdout instead of writing it.
    #[arg(long, conflicts_with = "output")]
    dry_run: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Path to configuration file (default: `FLISTCLEAN_CONFIG_PATH`, then
    /// the user config directory).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Main entry point.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match FlistConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = observability::init_from_config(
        &config.logging,
        InitOptions {
            verbose: cli.verbose,
        },
    ) {
        eprintln!("Failed to initialize observability: {e}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the resolve command and reports its outcome.
fn run(cli: &Cli) -> anyhow::Result<()> {
    let outcome = ResolveCommand::new(&cli.filename)
        .with_output(cli.output.clone())
        .with_dry_run(cli.dry_run)
        .execute()?;

    report(&outcome)
}

fn report(outcome: &ResolveOutcome) -> anyhow::Result<()> {
    match &outcome.destination {
        Some(destination) => {
            println!("Resolved filelist written to {}", destination.display());
        },
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(flistclean::io::join_lines(&outcome.lines).as_bytes())?;
            stdout.flush()?;
        },
    }

    if outcome.report.has_duplicates() {
        tracing::info!(summary = %outcome.report.summary(), "Duplicates disabled");
    }

    Ok(())
}

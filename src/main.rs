//! tfridge - Terraform module and provider version checker CLI tool
//!
//! Scans a directory for `.tf` files and prints the pinned and latest
//! registry version of every module and provider it finds.

use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tfridge::cli::{CliArgs, ScanConfig};
use tfridge::logging;
use tfridge::orchestrator::Orchestrator;
use tfridge::output::{create_formatter, OutputFormat, Verbosity};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::init(args.verbose);

    let mut config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if !io::stdout().is_terminal() {
        config.output.color = false;
    }
    colored::control::set_override(config.output.color);

    match run(config).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(config: ScanConfig) -> anyhow::Result<ExitCode> {
    let text_mode = config.output.format == OutputFormat::Text;
    let quiet = config.output.verbosity == Verbosity::Quiet;

    let mut stdout = io::stdout().lock();
    if text_mode && !quiet {
        writeln!(stdout, "Scanning directory: {}", config.root.display())?;
        writeln!(stdout)?;
        stdout.flush()?;
    }

    let formatter = create_formatter(&config.output);
    let orchestrator = Orchestrator::new(config)?;
    let report = orchestrator.run().await?;

    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}

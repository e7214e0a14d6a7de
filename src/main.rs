use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use tidyup::output::{ConsoleNotifier, OutputFormatter};
use tidyup::run_cli;

/// Sort the files of the current directory into category subdirectories.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {}

fn main() -> ExitCode {
    let _ = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            OutputFormatter::error(&format!("Error: {:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let base_path = std::env::current_dir().context("Could not determine the current directory")?;
    run_cli(&base_path, &mut ConsoleNotifier)
        .with_context(|| format!("Organizing {} failed", base_path.display()))?;
    Ok(())
}

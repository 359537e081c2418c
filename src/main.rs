use anyhow::Result;
use autopush::cli::Cli;
use autopush::logging;
use autopush::pipeline::{PushOutcome, run_push};
use autopush::process::SystemRunner;
use clap::Parser;
use colored::Colorize;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut runner = SystemRunner::new()?;
    tracing::debug!(program = %runner.program().display(), "Using git executable");

    let mut stdout = std::io::stdout().lock();

    // A failed step has already been reported on stdout; the exit status stays 0.
    if let PushOutcome::Failed(failure) = run_push(&mut runner, &mut stdout)? {
        tracing::debug!(%failure, "Push did not complete");
    }

    Ok(())
}

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use snippet_runner::cli::Cli;
use snippet_runner::logging::init::init_tracing;
use snippet_runner::run;

mod snippets;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let outcome = run(&cli)?;
    Ok(outcome.exit_code())
}

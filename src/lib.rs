pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod logging;

#[doc(hidden)]
pub use inventory;

use anyhow::Result;

/// Entry point for the CLI: discover snippets and run the requested mode.
///
/// # Errors
/// Returns an error for infrastructure failures only; snippet failures are
/// reported on the console and carried in the returned [`core::Outcome`].
pub fn run(cli: &cli::Cli) -> Result<core::Outcome> {
    commands::dispatch(cli)
}

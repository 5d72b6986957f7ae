use anyhow::Result;
use tracing::debug;

use crate::{
    app::context::AppContext,
    cli::Cli,
    config::RunnerConfig,
    core::Outcome,
};

pub mod pick;
pub mod prompt;
pub mod run;

/// Unified interface implemented by each run mode.
pub trait Command {
    /// Execute the mode and report how the dispatch ended.
    ///
    /// # Errors
    /// Returns an error only for infrastructure failures (e.g. unreadable
    /// stdin); snippet failures are reported through the [`Outcome`].
    fn run(&self, ctx: &AppContext) -> Result<Outcome>;
}

/// Central dispatcher: routes parsed CLI to the matching run mode.
///
/// # Errors
/// Returns an error if configuration cannot be loaded or the mode fails.
pub fn dispatch(cli: &Cli) -> Result<Outcome> {
    let cfg = RunnerConfig::load(cli.platform.as_deref())?;
    let ctx = AppContext::discover(cfg, cli.verbose);
    debug!(
        platform = %ctx.cfg.platform,
        verbosity = ctx.verbosity,
        "snippet registry ready"
    );

    if cli.pick {
        return pick::PickCommand.run(&ctx);
    }
    match cli.snippet() {
        Some(token) => {
            let cmd = run::RunCommand {
                token,
                args: cli.args(),
            };
            cmd.run(&ctx)
        }
        None => prompt::PromptCommand.run(&ctx),
    }
}

use anyhow::Result;

use super::Command;
use crate::{
    app::context::AppContext,
    core::{ConsoleReporter, Dispatcher, Outcome},
};

/// One-shot mode: `snippet-runner <snippet> [args...]`.
pub struct RunCommand<'a> {
    pub token: &'a str,
    pub args: &'a [String],
}

impl Command for RunCommand<'_> {
    fn run(&self, ctx: &AppContext) -> Result<Outcome> {
        let mut reporter = ConsoleReporter;
        Ok(Dispatcher::new(&ctx.registry, &mut reporter).run_token(self.token, self.args))
    }
}

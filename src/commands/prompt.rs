use std::io;

use anyhow::Result;

use super::Command;
use crate::{
    app::context::AppContext,
    core::{ConsoleReporter, Dispatcher, Outcome},
};

/// Interactive mode: list snippets and read one name from stdin.
pub struct PromptCommand;

impl Command for PromptCommand {
    fn run(&self, ctx: &AppContext) -> Result<Outcome> {
        let mut reporter = ConsoleReporter;
        Dispatcher::new(&ctx.registry, &mut reporter).interactive(io::stdin().lock())
    }
}

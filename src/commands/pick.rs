use anyhow::{Context, Result};
use skim::{
    Skim,
    prelude::{SkimItemReader, SkimOptionsBuilder},
};
use tracing::debug;

use super::Command;
use crate::{
    app::context::AppContext,
    core::{ConsoleReporter, Dispatcher, Outcome, Registry, Reporter, Severity},
};

/// Fuzzy-finder mode: choose a runnable snippet with skim, then run it.
pub struct PickCommand;

impl Command for PickCommand {
    fn run(&self, ctx: &AppContext) -> Result<Outcome> {
        let mut reporter = ConsoleReporter;
        let items = picker_items(&ctx.registry);
        if items.is_empty() {
            reporter.emit(Severity::Warning, "No runnable snippets to pick from.");
            return Ok(Outcome::Idle);
        }

        let Some(key) = select_snippet(items)? else {
            debug!("snippet selection aborted");
            return Ok(Outcome::Idle);
        };
        Ok(Dispatcher::new(&ctx.registry, &mut reporter).run_token(&key, &[]))
    }
}

/// One `key<TAB>description` line per runnable snippet.
fn picker_items(registry: &Registry) -> String {
    registry
        .runnable()
        .map(|(key, snippet)| format!("{key}\t{}", snippet.description()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Interactive snippet selection using skim fuzzy finder.
fn select_snippet(items: String) -> Result<Option<String>> {
    let options = SkimOptionsBuilder::default()
        .height("50%".to_string())
        .multi(false)
        .prompt("Select snippet> ".to_string())
        .build()
        .context("failed to build skim options")?;

    let item_reader = SkimItemReader::default();
    let items = item_reader.of_bufread(std::io::Cursor::new(items));

    let skim_output = Skim::run_with(&options, Some(items)).context("skim UI failed")?;
    if skim_output.is_abort {
        return Ok(None);
    }

    Ok(skim_output.selected_items.first().map(|item| {
        let output = item.output();
        output
            .split_once('\t')
            .map_or_else(|| output.to_string(), |(key, _)| key.to_string())
    }))
}

use std::{
    io::BufRead,
    panic::{self, AssertUnwindSafe},
    process::ExitCode,
};

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::{
    error::{SnippetError, panic_message},
    registry::Registry,
    report::{Reporter, Severity},
    resolve::Resolved,
    tree::render_tree,
};

/// How a dispatch ended. Every variant is a clean return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The snippet ran to completion.
    Executed { key: String },
    /// Nothing was requested.
    Idle,
    /// The token did not resolve, or the snippet failed while running.
    Failed(SnippetError),
}

impl Outcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Executed { .. } | Self::Idle)
    }

    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Resolves tokens against a registry and runs the result behind a single
/// failure boundary.
pub struct Dispatcher<'a, R: Reporter> {
    registry: &'a Registry,
    reporter: &'a mut R,
}

impl<'a, R: Reporter> Dispatcher<'a, R> {
    pub const fn new(registry: &'a Registry, reporter: &'a mut R) -> Self {
        Self { registry, reporter }
    }

    pub fn show_tree(&mut self) {
        self.reporter.emit(Severity::Info, &render_tree(self.registry));
    }

    /// One-shot mode: run `token`, forwarding `args` verbatim.
    pub fn run_token(&mut self, token: &str, args: &[String]) -> Outcome {
        match self.registry.resolve(token) {
            Ok(found) => self.execute(&found, args),
            Err(err) => {
                self.report_unresolved(&err);
                Outcome::Failed(err)
            }
        }
    }

    /// Split a typed line into a token and its arguments and run it.
    /// A blank line does nothing.
    pub fn run_line(&mut self, line: &str) -> Outcome {
        let mut words = line.split_whitespace();
        let Some(token) = words.next() else {
            debug!("no snippet requested");
            return Outcome::Idle;
        };
        let args: Vec<String> = words.map(str::to_string).collect();
        self.run_token(token, &args)
    }

    /// Interactive mode: list everything, prompt for one line, run it once.
    ///
    /// `input` is dropped before the snippet runs so the snippet can read
    /// from the same stream.
    ///
    /// # Errors
    /// Returns an error only if reading the input line fails.
    pub fn interactive<I: BufRead>(&mut self, mut input: I) -> Result<Outcome> {
        self.reporter.emit(Severity::Info, "=== Snippet Runner ===\n");
        if self.registry.is_empty() {
            self.reporter
                .emit(Severity::Warning, "No snippets were discovered.");
        }
        self.show_tree();
        self.reporter.prompt("\nEnter snippet name to run: ");

        let mut line = String::new();
        input
            .read_line(&mut line)
            .context("failed to read snippet name from input")?;
        drop(input);

        Ok(self.run_line(&line))
    }

    fn execute(&mut self, found: &Resolved<'_>, args: &[String]) -> Outcome {
        let key = found.key.to_string();
        self.reporter
            .emit(Severity::Info, &format!("\n▶ Running '{key}'...\n"));
        info!(key = %key, ?args, "executing snippet");

        let message = match panic::catch_unwind(AssertUnwindSafe(|| found.snippet.execute(args))) {
            Ok(Ok(())) => {
                debug!(key = %key, "snippet finished");
                return Outcome::Executed { key };
            }
            Ok(Err(err)) => format!("{err:#}"),
            Err(payload) => panic_message(payload.as_ref()),
        };

        let err = SnippetError::Execution { key, message };
        info!(error = %err, "snippet execution failed");
        self.reporter.emit(Severity::Error, &format!("❌ {err}"));
        Outcome::Failed(err)
    }

    fn report_unresolved(&mut self, err: &SnippetError) {
        match err {
            SnippetError::Ambiguous { name, candidates } => {
                self.reporter.emit(
                    Severity::Error,
                    &format!("❌ Ambiguous name '{name}'. Matches:"),
                );
                for candidate in candidates {
                    self.reporter
                        .emit(Severity::Info, &format!("   - {candidate}"));
                }
            }
            SnippetError::Unknown(token) => {
                self.reporter
                    .emit(Severity::Error, &format!("❌ Unknown snippet '{token}'\n"));
                self.show_tree();
            }
            SnippetError::PlatformMismatch { .. } => {
                self.reporter.emit(Severity::Warning, &format!("⚠ {err}"));
            }
            SnippetError::Construction { .. } | SnippetError::Execution { .. } => {
                self.reporter.emit(Severity::Error, &format!("❌ {err}"));
            }
        }
    }
}

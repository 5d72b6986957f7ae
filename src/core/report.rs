//! Leveled console messages, kept apart from any particular terminal styling.

use std::io::{self, Write};

use console::Style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Sink for user-facing messages from the dispatcher.
pub trait Reporter {
    /// Emit one message. Multi-line text is allowed.
    fn emit(&mut self, severity: Severity, text: &str);

    /// Show an input prompt without a trailing newline.
    fn prompt(&mut self, text: &str) {
        self.emit(Severity::Info, text);
    }
}

/// Writes info to stdout and warnings/errors to stderr, coloured when the
/// stream is a terminal.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn emit(&mut self, severity: Severity, text: &str) {
        let text = text.trim_end_matches('\n');
        match severity {
            Severity::Info => println!("{text}"),
            Severity::Warning => {
                eprintln!("{}", Style::new().for_stderr().yellow().apply_to(text));
            }
            Severity::Error => {
                eprintln!("{}", Style::new().for_stderr().red().bold().apply_to(text));
            }
        }
    }

    fn prompt(&mut self, text: &str) {
        let mut stdout = io::stdout();
        // best effort
        let _ = write!(stdout, "{}", Style::new().cyan().apply_to(text));
        let _ = stdout.flush();
    }
}

/// Collects messages in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    pub messages: Vec<(Severity, String)>,
}

impl MemoryReporter {
    /// All message text joined with newlines.
    #[must_use]
    pub fn text(&self) -> String {
        self.messages
            .iter()
            .map(|(_, text)| text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Text of messages at one severity.
    #[must_use]
    pub fn at(&self, severity: Severity) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, text)| text.as_str())
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn emit(&mut self, severity: Severity, text: &str) {
        self.messages.push((severity, text.to_string()));
    }
}

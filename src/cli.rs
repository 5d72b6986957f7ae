use clap::{ArgAction, Parser};

/// snippet-runner command-line interface
#[derive(Parser, Debug, Clone)]
#[command(
    name = "snippet-runner",
    version,
    about = "Discover snippets and run one by name",
    long_about = "Run a snippet by full key (e.g. snippets/second_week/hello) or by its \
                  short name when that is unique. Without a name, the available snippets are \
                  listed and one is read from the prompt."
)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv). `RUST_LOG` overrides this.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Platform label to run as (defaults to `SNIPPET_RUNNER_PLATFORM`, then the host OS)
    #[arg(long, value_name = "LABEL")]
    pub platform: Option<String>,

    /// Pick the snippet with a fuzzy finder instead of typing its name
    #[arg(long, conflicts_with = "command")]
    pub pick: bool,

    /// Snippet key or short name to run, followed by arguments forwarded
    /// verbatim to the snippet
    #[arg(value_name = "SNIPPET", trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Cli {
    /// The requested snippet token, if any.
    #[must_use]
    pub fn snippet(&self) -> Option<&str> {
        self.command.first().map(String::as_str)
    }

    /// Everything after the snippet token.
    #[must_use]
    pub fn args(&self) -> &[String] {
        self.command.get(1..).unwrap_or_default()
    }
}

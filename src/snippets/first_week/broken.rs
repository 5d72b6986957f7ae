use anyhow::{Result, bail};
use snippet_runner::core::Snippet;

/// Always fails to construct; exercises load-error reporting.
#[derive(Debug)]
pub struct BrokenSnippet;

impl BrokenSnippet {
    pub fn try_new() -> Result<Self> {
        bail!("This snippet is broken on purpose!")
    }
}

impl Snippet for BrokenSnippet {
    fn name(&self) -> &str {
        "broken"
    }

    fn description(&self) -> &str {
        "Testing exception handling"
    }

    fn execute(&self, _args: &[String]) -> Result<()> {
        println!("You should never see this, construction fails first.");
        Ok(())
    }
}

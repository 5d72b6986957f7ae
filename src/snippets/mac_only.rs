use anyhow::Result;
use snippet_runner::core::Snippet;

#[derive(Debug, Default)]
pub struct MacTest;

snippet_runner::register_snippet!(MacTest, platform = "Mac");

impl Snippet for MacTest {
    fn name(&self) -> &str {
        "mac-test"
    }

    fn description(&self) -> &str {
        "Mac-only snippet"
    }

    fn execute(&self, _args: &[String]) -> Result<()> {
        println!("✅ Running macOS-specific snippet!");
        Ok(())
    }
}

use anyhow::Result;
use snippet_runner::core::Snippet;

#[derive(Debug, Default)]
pub struct WindowsTest;

snippet_runner::register_snippet!(WindowsTest, platform = "Windows");

impl Snippet for WindowsTest {
    fn name(&self) -> &str {
        "windows-test"
    }

    fn description(&self) -> &str {
        "Windows-only snippet"
    }

    fn execute(&self, _args: &[String]) -> Result<()> {
        println!("✅ Running Windows-specific snippet!");
        Ok(())
    }
}

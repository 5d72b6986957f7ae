use anyhow::Result;
use snippet_runner::core::Snippet;

#[derive(Debug, Default)]
pub struct HelloWorld;

impl Snippet for HelloWorld {
    fn name(&self) -> &str {
        "hello"
    }

    fn description(&self) -> &str {
        "prints hello world"
    }

    fn execute(&self, _args: &[String]) -> Result<()> {
        println!("Hello, world!");
        Ok(())
    }
}

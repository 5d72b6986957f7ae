use anyhow::Result;
use snippet_runner::core::Snippet;

#[derive(Debug, Default)]
pub struct PrintMessage;

impl Snippet for PrintMessage {
    fn name(&self) -> &str {
        "PrintMessage"
    }

    fn description(&self) -> &str {
        "Prints Hello World by function"
    }

    fn execute(&self, _args: &[String]) -> Result<()> {
        print_message();
        Ok(())
    }
}

fn print_message() {
    println!("Hello World by Function");
}

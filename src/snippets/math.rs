use anyhow::{Context, Result, bail};
use snippet_runner::core::Snippet;

#[derive(Debug, Default)]
pub struct MathSnippet;

snippet_runner::register_snippet!(MathSnippet, group = "");

impl Snippet for MathSnippet {
    fn name(&self) -> &str {
        "math"
    }

    fn description(&self) -> &str {
        "adds two numbers together"
    }

    fn execute(&self, args: &[String]) -> Result<()> {
        let [a, b, ..] = args else {
            bail!("usage: math <a> <b>");
        };
        let (a, b) = (parse(a)?, parse(b)?);
        println!("{a} plus {b} = {}", add(a, b)?);
        Ok(())
    }
}

fn parse(raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .with_context(|| format!("invalid number '{raw}'"))
}

fn add(a: i64, b: i64) -> Result<i64> {
    a.checked_add(b)
        .with_context(|| format!("{a} plus {b} overflows"))
}

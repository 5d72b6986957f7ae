use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use snippet_runner::core::Snippet;

#[derive(Debug, Default)]
pub struct PrintDecimal;

impl Snippet for PrintDecimal {
    fn name(&self) -> &str {
        "PrintDecimal"
    }

    fn description(&self) -> &str {
        "Prints a decimal in percentage form"
    }

    fn execute(&self, args: &[String]) -> Result<()> {
        let value = match args.first().and_then(|a| a.trim().parse::<f64>().ok()) {
            Some(value) => value,
            None => read_decimal(&mut io::stdin().lock(), &mut io::stdout().lock())?,
        };
        println!("Percentage Conversion: {}%", to_percentage(value));
        Ok(())
    }
}

fn to_percentage(value: f64) -> f64 {
    value * 100.0
}

/// Ask for a decimal; anything unparsable counts as zero.
fn read_decimal(input: &mut impl BufRead, out: &mut impl Write) -> Result<f64> {
    writeln!(out, "Enter a decimal to convert:")?;
    out.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read a decimal from input")?;

    if let Ok(value) = line.trim().parse() {
        Ok(value)
    } else {
        writeln!(out, "Invalid input! Defaulting to 0.")?;
        Ok(0.0)
    }
}

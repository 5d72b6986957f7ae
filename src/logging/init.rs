use anyhow::{Context, Result};

/// Initialize tracing. `RUST_LOG` (if set) takes precedence.
/// Otherwise, -v/-vv/-vvv map to "info"/"debug"/"trace".
///
/// Events go to stderr so they never interleave with snippet output on stdout.
///
/// # Errors
/// Returns an error if the filter expression is invalid.
pub fn init_tracing(verbosity: u8) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| base_filter(verbosity).to_string());

    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let filter_layer = EnvFilter::try_new(filter).context("invalid RUST_LOG / filter")?;

    // Allow re-init to be a no-op in tests
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();

    Ok(())
}

const fn base_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

//! Renders each built-in template case through minijinja and prints a table
//! of timings to stdout. Diagnostics go to stderr, filtered by `RUST_LOG`.

use std::io::{self, Write};

use jinja_bench::{BenchmarkRunner, MinijinjaEngine, builtin_cases};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cases = builtin_cases();
    let mut runner = BenchmarkRunner::new(MinijinjaEngine::new());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcomes = runner.run_all(&cases, &mut out)?;
    out.flush()?;

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    tracing::info!(cases = outcomes.len(), failed, "benchmark run complete");

    Ok(())
}

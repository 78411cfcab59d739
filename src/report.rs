//! Plain-text results table.
//!
//! ```text
//!
//! Jinja2 Benchmark Results
//! Warmup iterations: 100
//! Benchmark iterations: 1000
//!
//! Test Case                 Total Time      Avg per op      ops/sec
//! ----------------------------------------------------------------------
//! simple_text               0.412..........ms 412............ns 2427184.47
//! ```

use std::io::{self, Write};

use crate::error::BenchError;
use crate::runner::{BenchmarkConfig, BenchmarkResult};

pub const TITLE: &str = "Jinja2 Benchmark Results";

const RULE_WIDTH: usize = 70;

/// Writes the title, iteration counts and column headings.
pub fn write_header<W: Write>(out: &mut W, config: &BenchmarkConfig) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "Warmup iterations: {}", config.warmup_iterations)?;
    writeln!(out, "Benchmark iterations: {}", config.benchmark_iterations)?;
    writeln!(out)?;
    writeln!(
        out,
        "{:<25} {:<15} {:<15} {:<15}",
        "Test Case", "Total Time", "Avg per op", "ops/sec"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

/// Writes one row of timings for a successful case.
pub fn write_row<W: Write>(out: &mut W, name: &str, result: &BenchmarkResult) -> io::Result<()> {
    writeln!(out, "{}", format_row(name, result))
}

/// Writes the line reported in place of a row when a case fails.
pub fn write_error<W: Write>(out: &mut W, name: &str, error: &BenchError) -> io::Result<()> {
    writeln!(out, "Error in {}: {}", name, error)
}

pub fn format_row(name: &str, result: &BenchmarkResult) -> String {
    format!(
        "{:<25} {:.<15.3}ms {:.<15.0}ns {:<15.2}",
        name,
        result.total_millis(),
        result.avg_per_op_ns(),
        result.ops_per_sec()
    )
}

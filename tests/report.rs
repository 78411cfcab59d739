use std::time::Duration;

use jinja_bench::report::{format_row, write_error, write_header};
use jinja_bench::{BenchError, BenchmarkConfig, BenchmarkResult, Phase};

#[test]
#[ntest::timeout(1000)]
fn test_header_layout() {
    let mut out = Vec::new();
    write_header(&mut out, &BenchmarkConfig::default()).unwrap();

    let expected = format!(
        "\nJinja2 Benchmark Results\nWarmup iterations: 100\nBenchmark iterations: 1000\n\n{}\n{}\n",
        "Test Case                 Total Time      Avg per op      ops/sec        ",
        "-".repeat(70),
    );
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
#[ntest::timeout(1000)]
fn test_row_layout() {
    let result = BenchmarkResult::from_total(Duration::from_secs_f64(1.5), 1000);
    let row = format_row("simple_text", &result);

    let expected = [
        "simple_text              ",
        " ",
        "1500.000.......",
        "ms ",
        "1500000........",
        "ns ",
        "666.67         ",
    ]
    .concat();
    assert_eq!(row, expected);
}

#[test]
#[ntest::timeout(1000)]
fn test_row_with_long_values_is_not_truncated() {
    let result = BenchmarkResult::from_total(Duration::from_secs(90), 1000);
    let row = format_row("a_test_case_name_longer_than_the_column", &result);

    assert!(row.starts_with("a_test_case_name_longer_than_the_column 90000.000......ms "));
    assert!(row.contains("90000000.......ns "), "{row}");
    assert!(row.ends_with("11.11          "), "{row}");
}

#[test]
#[ntest::timeout(1000)]
fn test_error_line() {
    let mut out = Vec::new();
    let error = BenchError::render("undefined value").during(Phase::Benchmark);
    write_error(&mut out, "simple_loop", &error).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Error in simple_loop: render error during benchmark: undefined value\n"
    );
}

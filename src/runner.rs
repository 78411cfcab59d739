use std::hint::black_box;
use std::io::Write;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::cases::TestCase;
use crate::clock::{Clock, MonotonicClock};
use crate::error::{BenchResult, Phase};
use crate::interface::{CompiledTemplate, Context, TemplateEngine};
use crate::report;

/// Renders performed before timing starts, per test case.
pub const WARMUP_ITERATIONS: u32 = 100;
/// Renders inside the timed interval, per test case.
pub const BENCHMARK_ITERATIONS: u32 = 1000;

const NANOS_PER_SEC: f64 = 1e9;
const MILLIS_PER_SEC: f64 = 1000.0;

/// Iteration counts shared by every test case in a run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BenchmarkConfig {
    pub warmup_iterations: u32,
    pub benchmark_iterations: u32,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            warmup_iterations: WARMUP_ITERATIONS,
            benchmark_iterations: BENCHMARK_ITERATIONS,
        }
    }
}

/// Timing statistics for one test case.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BenchmarkResult {
    total: Duration,
    avg_per_op_ns: f64,
    ops_per_sec: f64,
}

impl BenchmarkResult {
    /// Derives the per-operation figures from the time spent on `iterations`
    /// renders. A zero `total` yields an infinite `ops_per_sec`.
    pub fn from_total(total: Duration, iterations: u32) -> Self {
        let secs = total.as_secs_f64();
        let iterations = f64::from(iterations);

        Self {
            total,
            avg_per_op_ns: secs * NANOS_PER_SEC / iterations,
            ops_per_sec: iterations / secs,
        }
    }

    pub const fn total(&self) -> Duration {
        self.total
    }

    pub fn total_secs(&self) -> f64 {
        self.total.as_secs_f64()
    }

    pub fn total_millis(&self) -> f64 {
        self.total_secs() * MILLIS_PER_SEC
    }

    pub const fn avg_per_op_ns(&self) -> f64 {
        self.avg_per_op_ns
    }

    pub const fn ops_per_sec(&self) -> f64 {
        self.ops_per_sec
    }
}

/// What happened to a single test case during [`BenchmarkRunner::run_all`].
#[derive(Debug, Clone, PartialEq)]
pub struct CaseOutcome {
    pub name: String,
    pub result: BenchResult<BenchmarkResult>,
}

/// `BenchmarkRunner` times template renders through a [`TemplateEngine`].
///
/// # Examples
///
/// ```
/// use jinja_bench::{BenchmarkConfig, BenchmarkRunner, Context, MinijinjaEngine};
///
/// let mut runner = BenchmarkRunner::new(MinijinjaEngine::new()).with_config(BenchmarkConfig {
///     warmup_iterations: 1,
///     benchmark_iterations: 10,
/// });
///
/// let result = runner.run_benchmark("Hello, world!", &Context::new()).unwrap();
/// assert!(result.ops_per_sec() > 0.0);
/// ```
pub struct BenchmarkRunner<E, C = MonotonicClock> {
    engine: E,
    clock: C,
    config: BenchmarkConfig,
}

impl<E: TemplateEngine> BenchmarkRunner<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            clock: MonotonicClock::new(),
            config: BenchmarkConfig::default(),
        }
    }
}

impl<E: TemplateEngine, C: Clock> BenchmarkRunner<E, C> {
    /// Swaps the time source, keeping the engine and configuration.
    pub fn with_clock<D: Clock>(self, clock: D) -> BenchmarkRunner<E, D> {
        BenchmarkRunner {
            engine: self.engine,
            clock,
            config: self.config,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: BenchmarkConfig) -> Self {
        self.config = config;
        self
    }

    pub const fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// `run_benchmark` compiles `source` once, renders it
    /// `warmup_iterations` times untimed, then times
    /// `benchmark_iterations` renders as a single interval.
    ///
    /// # Errors
    /// - If the engine fails to compile the template.
    /// - If any render fails, in either phase.
    pub fn run_benchmark(
        &mut self,
        source: &str,
        context: &Context,
    ) -> BenchResult<BenchmarkResult> {
        let config = self.config;
        let template = self.engine.compile(source)?;

        debug!(iterations = config.warmup_iterations, "warming up");
        render_repeatedly(&template, context, config.warmup_iterations)
            .map_err(|e| e.during(Phase::Warmup))?;

        debug!(iterations = config.benchmark_iterations, "timing renders");
        let start = self.clock.now();
        render_repeatedly(&template, context, config.benchmark_iterations)
            .map_err(|e| e.during(Phase::Benchmark))?;
        let total = self.clock.now().saturating_sub(start);

        Ok(BenchmarkResult::from_total(
            total,
            config.benchmark_iterations,
        ))
    }

    /// `run_all` benchmarks every case in order, writing the results table to
    /// `out`. A failing case is reported on its own line and does not stop
    /// the run.
    ///
    /// # Errors
    /// - Only if writing to `out` fails.
    pub fn run_all<W: Write>(
        &mut self,
        cases: &[TestCase<'_>],
        out: &mut W,
    ) -> std::io::Result<Vec<CaseOutcome>> {
        report::write_header(out, &self.config)?;

        let mut outcomes = Vec::with_capacity(cases.len());
        for case in cases {
            let span = tracing::info_span!("case", name = case.name());
            let _guard = span.enter();

            let result = self.run_benchmark(case.template(), case.context());
            match &result {
                Ok(stats) => {
                    info!(total_ms = stats.total_millis(), "finished");
                    report::write_row(out, case.name(), stats)?;
                }
                Err(error) => {
                    warn!(%error, "case failed");
                    report::write_error(out, case.name(), error)?;
                }
            }

            outcomes.push(CaseOutcome {
                name: case.name().to_owned(),
                result,
            });
        }

        Ok(outcomes)
    }
}

fn render_repeatedly<T: CompiledTemplate>(
    template: &T,
    context: &Context,
    iterations: u32,
) -> BenchResult<()> {
    for _ in 0..iterations {
        black_box(template.render(black_box(context))?);
    }
    Ok(())
}


mod cases;
mod clock;
mod engine;
mod error;
mod interface;
pub mod report;
mod runner;

// Public exports.
pub use cases::{TestCase, builtin_cases};
pub use clock::{Clock, MonotonicClock};
pub use engine::{MinijinjaEngine, MinijinjaTemplate};
pub use error::{BenchError, BenchResult, Phase};
pub use interface::{CompiledTemplate, Context, TemplateEngine};
pub use runner::{
    BENCHMARK_ITERATIONS, BenchmarkConfig, BenchmarkResult, BenchmarkRunner, CaseOutcome,
    WARMUP_ITERATIONS,
};

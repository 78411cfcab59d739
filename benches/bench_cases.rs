#![allow(
    clippy::tests_outside_test_module,
    clippy::unwrap_used,
    reason = "benchmark"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use jinja_bench::{CompiledTemplate, MinijinjaEngine, TemplateEngine, builtin_cases};

fn render_benchmark(c: &mut Criterion) {
    let cases = builtin_cases();

    // Setup benchmark group
    let mut group = c.benchmark_group("Template Rendering");
    group.sample_size(50);

    for case in &cases {
        // Each case gets its own engine so compiled templates do not outlive it.
        let mut engine = MinijinjaEngine::new();
        let template = engine.compile(case.template()).unwrap();

        group.bench_function(case.name(), |b| {
            b.iter(|| black_box(template.render(case.context()).unwrap()));
        });
    }

    group.finish();
}

fn compile_benchmark(c: &mut Criterion) {
    let cases = builtin_cases();

    let mut group = c.benchmark_group("Template Compilation");
    group.sample_size(50);

    for case in &cases {
        let mut engine = MinijinjaEngine::new();

        group.bench_function(case.name(), |b| {
            b.iter(|| {
                black_box(engine.compile(black_box(case.template())).unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, render_benchmark, compile_benchmark);
criterion_main!(benches);

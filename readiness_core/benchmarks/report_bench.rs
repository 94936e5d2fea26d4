use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use readiness_core::{
    build_report, normalize_payload, CountdownConfig, FormulaSet, ReadinessSnapshot,
};
use serde_json::{json, Value};

fn sheet_payloads(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            let step = (i % 97) as f64;
            json!({
                "timestamp": format!("2025-11-{:02}T08:00:00Z", i % 28 + 1),
                "tone": step,
                "components": (step * 1.3) % 120.0,
                "infrastructure": (step * 0.7 + 20.0) % 110.0,
                "convergence": (step * 2.1) % 130.0,
                "hcmi": 100.0 - step,
                "narrative": { "today": step, "avg7d": 50.0 },
            })
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let payloads = sheet_payloads(256);
    c.bench_function("normalize_payload/256", |b| {
        b.iter(|| {
            for payload in &payloads {
                black_box(normalize_payload(payload));
            }
        });
    });
}

fn bench_report(c: &mut Criterion) {
    let config = CountdownConfig::default();
    let mut group = c.benchmark_group("build_report");

    for (name, formulas) in [
        ("all", FormulaSet::all()),
        ("v1.1", FormulaSet::SCIENCE),
        ("v2.0", FormulaSet::CONVERGENCE),
        ("v2.5+civilization", FormulaSet::CURVE | FormulaSet::CIVILIZATION),
    ] {
        group.bench_with_input(BenchmarkId::new("fallback", name), &formulas, |b, &formulas| {
            b.iter_batched(
                ReadinessSnapshot::fallback,
                |snapshot| black_box(build_report(&snapshot, &config, formulas)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(report_benches, bench_normalize, bench_report);
criterion_main!(report_benches);

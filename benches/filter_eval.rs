//! Benchmarks for filter compilation, predicate evaluation, and a full
//! coordinator cycle against buffered sinks.

// Criterion macros generate items without docs - this is expected for benchmarks
// Benchmarks use expect/unwrap for simplicity - panics are acceptable in benchmarks
#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;

use annoview::models::Annotation;
use annoview::{BufferedSink, LogNotifier, UpdateCoordinator, compile, preprocess};

const CLASSES: [&str; 4] = ["axon", "dendrite", "soma", "spine"];

fn make_annotations(count: usize) -> Vec<Annotation> {
    (0..count)
        .map(|i| {
            Annotation::new(format!("a-{i}"), CLASSES[i % CLASSES.len()])
                .with_author(if i % 3 == 0 { "mika" } else { "kim" })
                .with_note(format!("segment {i} near branch point"))
                .with_tag(if i % 2 == 0 { "reviewed" } else { "draft" })
        })
        .collect()
}

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_compile");
    for query in [
        "class:axon",
        "class:axon,dendrite -tag:draft author:mika branch",
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, query| {
            b.iter(|| compile(black_box(query)).unwrap());
        });
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_evaluate");
    let predicate = compile("class:axon -tag:draft branch").unwrap();
    for count in [100usize, 1_000, 10_000] {
        let annotations = make_annotations(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &annotations,
            |b, annotations| {
                b.iter(|| {
                    annotations
                        .iter()
                        .filter(|a| predicate.evaluate(&preprocess(a)))
                        .count()
                });
            },
        );
    }
    group.finish();
}

fn bench_full_cycle(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let _guard = runtime.enter();

    let mut group = c.benchmark_group("coordinator_cycle");
    for count in [100usize, 1_000] {
        let annotations = make_annotations(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &annotations,
            |b, annotations| {
                let overlay = Arc::new(BufferedSink::new());
                let mut coordinator = UpdateCoordinator::new(overlay, Arc::new(LogNotifier));
                coordinator.register_list_sink(Arc::new(BufferedSink::new()));
                coordinator.set_filter_query("class:axon -tag:draft");
                b.iter(|| coordinator.set_annotations(black_box(annotations.clone())));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_compile, bench_evaluate, bench_full_cycle);
criterion_main!(benches);

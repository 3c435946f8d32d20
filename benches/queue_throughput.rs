// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for queue operations.
//!
//! Measures the performance of:
//! - Enqueueing a backlog behind a visible toast
//! - Draining a backlog through full display cycles
//! - Recording lifecycle events into diagnostics

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::time::Duration;
use toast_queue::diagnostics::DiagnosticsCollector;
use toast_queue::notifications::{Placement, Queue, Toast};
use toast_queue::test_utils::{ManualScheduler, RecordingSurface};

const CYCLE: Duration = Duration::from_millis(5_000);

/// Benchmark enqueueing with alternating placements.
fn bench_enqueue(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_throughput");

    for size in [10_usize, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("enqueue", size), &size, |b, &size| {
            b.iter(|| {
                let mut queue = Queue::new(RecordingSurface::new(), ManualScheduler::new());
                for i in 0..size {
                    let placement = if i % 4 == 0 {
                        Placement::First
                    } else {
                        Placement::Last
                    };
                    queue.enqueue(Toast::message("bench"), placement);
                }
                black_box(queue.pending_count());
            });
        });
    }

    group.finish();
}

/// Benchmark presenting and dismissing a whole backlog on the virtual clock.
fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_throughput");

    group.bench_function("drain_100", |b| {
        b.iter(|| {
            let mut queue = Queue::new(RecordingSurface::new(), ManualScheduler::new());
            for _ in 0..100 {
                queue.enqueue(Toast::message("bench"), Placement::Last);
            }
            queue.advance_clock(CYCLE * 100);
            black_box(queue.is_idle());
        });
    });

    group.bench_function("drain_100_with_diagnostics", |b| {
        b.iter(|| {
            let mut collector = DiagnosticsCollector::default();
            let mut queue = Queue::new(RecordingSurface::new(), ManualScheduler::new());
            queue.set_diagnostics(collector.handle());
            for _ in 0..100 {
                queue.enqueue(Toast::message("bench"), Placement::Last);
                collector.process_pending();
            }
            for _ in 0..100 {
                queue.advance_clock(CYCLE);
                collector.process_pending();
            }
            black_box(collector.len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_enqueue, bench_drain);
criterion_main!(benches);

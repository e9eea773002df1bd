//! Benchmarks for UEvent indexes
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use uevent::{DateHistogram, IndexManager, NewEvent, Organizer, RangeCountTree};

fn create_test_organizer(count: usize) -> Organizer {
    let mut organizer = Organizer::new();
    for i in 0..count {
        let date = format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1);
        organizer
            .insert_event(
                NewEvent::new(format!("event-{:05}", i), date, 50)
                    .department(format!("dept-{}", i % 7)),
            )
            .unwrap();
    }
    organizer
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild");

    for size in [100, 1000, 5000] {
        let organizer = create_test_organizer(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("rebuild_all", size), &organizer, |b, org| {
            b.iter(|| IndexManager::build(black_box(org.all_events())))
        });

        group.bench_with_input(BenchmarkId::new("histogram", size), &organizer, |b, org| {
            b.iter(|| DateHistogram::build(black_box(org.all_events())))
        });
    }

    group.finish();
}

fn bench_range_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_tree");

    let histogram: Vec<usize> = (0..4096).map(|i| i % 5).collect();
    let tree = RangeCountTree::build(&histogram);

    group.bench_function("build_4096", |b| {
        b.iter(|| RangeCountTree::build(black_box(&histogram)))
    });

    group.bench_function("query_4096", |b| {
        b.iter(|| tree.query(black_box(17), black_box(3900)))
    });

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");
    let organizer = create_test_organizer(5000);

    group.bench_function("count_in_date_range", |b| {
        b.iter(|| organizer.count_in_date_range(black_box("2024-03-01"), black_box("2024-09-15")))
    });

    group.bench_function("find_by_name", |b| {
        b.iter(|| organizer.find_by_name(black_box("event-02500")).unwrap())
    });

    group.bench_function("find_by_department", |b| {
        b.iter(|| organizer.find_by_department(black_box("dept-3")).len())
    });

    group.finish();
}

criterion_group!(benches, bench_rebuild, bench_range_tree, bench_queries);
criterion_main!(benches);

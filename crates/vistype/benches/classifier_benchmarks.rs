//! Field type classification performance benchmarks.
//!
//! Measures single-column classification per check path and whole-dataset
//! field detection, where unique counting covers every row.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vistype::{classify, detect_fields, Dataset, RawValue, Row};

/// Generate a realistic orders dataset.
fn generate_orders(rows: usize) -> Dataset {
    let priorities = ["Low", "Medium", "High", "Critical"];
    let regions = ["North", "South", "East", "West", "Central"];

    let rows = (0..rows)
        .map(|row| {
            let mut record = Row::new();
            record.insert("order_id".to_string(), RawValue::from(row as i32 + 1000));
            record.insert(
                "order_date".to_string(),
                RawValue::text(format!("2023-{:02}-{:02}", (row % 12) + 1, (row % 28) + 1)),
            );
            record.insert("priority".to_string(), RawValue::from(priorities[row % priorities.len()]));
            record.insert("rating".to_string(), RawValue::from((row % 5) as i32 + 1));
            record.insert("amount".to_string(), RawValue::Number(12.5 + (row % 400) as f64 * 3.75));
            record.insert("region".to_string(), RawValue::from(regions[row % regions.len()]));
            record
        })
        .collect();

    Dataset::new(rows)
}

/// Benchmark one column per decision path.
fn bench_classify_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_paths");

    let columns: Vec<(&str, Vec<RawValue>)> = vec![
        (
            "temporal",
            (0..100).map(|i| RawValue::text(format!("2023-01-{:02}", i % 28 + 1))).collect(),
        ),
        (
            "ordinal_vocabulary",
            (0..100).map(|i| RawValue::from(["S", "M", "L", "XL"][i % 4])).collect(),
        ),
        (
            "identifier_shape",
            (0..100).map(|i| RawValue::from(i as i32 + 50_000)).collect(),
        ),
        (
            "quantitative",
            (0..100).map(|i| RawValue::Number(i as f64 * 1.37)).collect(),
        ),
        (
            "fallback",
            (0..100).map(|i| RawValue::text(format!("label-{i}"))).collect(),
        ),
    ];

    for (path, values) in &columns {
        group.bench_with_input(BenchmarkId::new("column", path), values, |b, values| {
            b.iter(|| black_box(classify(values, None)))
        });
    }

    group.finish();
}

/// Benchmark sampling cost on long columns.
fn bench_long_columns(c: &mut Criterion) {
    let mut group = c.benchmark_group("long_columns");

    for len in [100, 10_000, 100_000].iter() {
        let values: Vec<RawValue> = (0..*len).map(|i| RawValue::Number(i as f64 * 0.5)).collect();

        group.throughput(Throughput::Elements(*len as u64));
        group.bench_with_input(BenchmarkId::new("numbers", len), &values, |b, values| {
            b.iter(|| black_box(classify(values, Some("measurement"))))
        });
    }

    group.finish();
}

/// Benchmark field detection over whole datasets.
fn bench_detect_fields(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_fields");

    for rows in [100, 1_000, 10_000].iter() {
        let dataset = generate_orders(*rows);

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("orders_rows", rows), &dataset, |b, dataset| {
            b.iter(|| black_box(detect_fields(dataset)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_classify_paths,
    bench_long_columns,
    bench_detect_fields
);
criterion_main!(benches);

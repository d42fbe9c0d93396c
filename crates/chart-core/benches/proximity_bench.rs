use chart_core::{build_datasets, query_nearest, query_nearest_linear, ChartData, Record, SourceFile};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_data(series: usize, n: usize) -> ChartData {
    let files: Vec<SourceFile> = (0..series)
        .map(|s| {
            let rows = (0..n)
                .map(|i| {
                    let mut rec = Record::new();
                    rec.insert("x", i.to_string());
                    rec.insert("y", ((i as f64 * 0.01).sin() * 10.0 + s as f64).to_string());
                    rec
                })
                .collect();
            SourceFile::new(format!("s{s}"), format!("s{s}.csv"), vec!["x".into(), "y".into()], rows)
        })
        .collect();
    build_datasets(&files)
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_nearest");
    for &n in &[1_000usize, 100_000usize] {
        let data = gen_data(8, n);
        let width = n as f64;
        let px = width * 0.37 + 0.4;
        group.bench_with_input(BenchmarkId::new("binary", n), &data, |b, d| {
            b.iter(|| black_box(query_nearest(black_box(px), d, width, 0.05).len()));
        });
        group.bench_with_input(BenchmarkId::new("linear", n), &data, |b, d| {
            b.iter(|| black_box(query_nearest_linear(black_box(px), d, width, 0.05).len()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_nearest);
criterion_main!(benches);

use chart_core::{build_datasets, Chart, ChartOptions, Record, RenderOptions, Scene, SourceFile};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart_xy(n: usize) -> Chart {
    let rows = (0..n)
        .map(|i| {
            let mut rec = Record::new();
            rec.insert("x", i.to_string());
            rec.insert("y", ((i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001)).to_string());
            rec
        })
        .collect();
    let file = SourceFile::new("f", "f.csv", vec!["x".into(), "y".into()], rows);
    Chart::new(build_datasets(&[file]), ChartOptions::default())
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_scene");
    for &n in &[10_000usize, 50_000usize] {
        let ch = build_chart_xy(n);
        let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
        group.bench_function(format!("xy_{n}"), |b| {
            let mut scene = Scene::new(0.0, 0.0);
            b.iter(|| {
                ch.render(&mut scene, &opts);
                black_box(scene.items().len());
            });
        });
        group.bench_function(format!("svg_{n}"), |b| {
            let (scene, _) = ch.to_scene(&opts);
            b.iter(|| black_box(scene.to_svg().len()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);

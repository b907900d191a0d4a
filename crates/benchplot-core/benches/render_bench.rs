use benchplot_core::{Chart, RenderOptions, Series};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart(variants: usize, n: u64) -> Chart {
    let mut ch = Chart::with_labels("PushBacks", "Seconds", "bench");
    for v in 0..variants {
        let slope = 1e-6 * (v as f64 + 1.0);
        let points = (0..n).map(|i| (i * 1000, slope * (i as f64) * (i as f64 * 0.01).sin().abs()));
        ch.add_series(Series::from_points(format!("variant {v}"), points));
    }
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000u64, 50_000u64] {
        group.bench_function(format!("4x{n}"), |b| {
            let ch = build_chart(4, n);
            let opts = RenderOptions { width: 800, height: 500, draw_labels: false, ..RenderOptions::default() };
            b.iter(|| {
                let bytes = ch.render_to_png_bytes(&opts).expect("render");
                black_box(bytes);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);

use anyhow::Result;
use chart_core::{Axis, Chart, RenderOptions, Series};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart_xy(n: usize) -> Chart {
    let mut ch = Chart::new().with_title("Bench");
    let mut data = Vec::with_capacity(n);
    for i in 0..n {
        let x = (i * 100) as f64;
        let y = (i as f64).sqrt() * 0.01 + (i as f64 * 0.01).sin() * 0.002;
        data.push((x, y));
    }
    ch.x_axis = Axis::new("Total Changes", 0.0, 1.0);
    ch.y_axis = Axis::new("Average Time (Milliseconds)", 0.0, 1.0);
    ch.add_series(Series::with_data(data).with_label("Average Time per Change"));
    ch.autoscale_axes(0.05);
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for &n in &[1_000usize, 50_000usize] {
        let ch = build_chart_xy(n);
        group.bench_function(format!("png_bytes_{n}"), |b| {
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
        group.bench_function(format!("rgba8_{n}"), |b| {
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let frame = ch.render_to_rgba8(&opts)?;
                black_box(frame);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);

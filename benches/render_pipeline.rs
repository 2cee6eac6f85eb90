use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mandelbrot_explorer::{FireGradient, RasterSpec, ViewRect, generate_pixel_buffer, render};

fn bench_render(c: &mut Criterion) {
    let view = ViewRect::default();
    let raster = RasterSpec::default();

    c.bench_function("render_800x800_200_iterations", |b| {
        b.iter(|| render(black_box(view), black_box(raster)))
    });

    let seahorse = ViewRect::new(-0.76, -0.72, 0.08, 0.12).unwrap();
    let deep = RasterSpec::new(400, 400, 1000).unwrap();

    c.bench_function("render_seahorse_valley_1000_iterations", |b| {
        b.iter(|| render(black_box(seahorse), black_box(deep)))
    });
}

fn bench_pixel_buffer(c: &mut Criterion) {
    let raster = RasterSpec::default();
    let grid = render(ViewRect::default(), raster);
    let colour_map = FireGradient::new(raster.max_iterations());

    c.bench_function("generate_pixel_buffer_800x800", |b| {
        b.iter(|| generate_pixel_buffer(black_box(&grid), &colour_map))
    });
}

criterion_group!(benches, bench_render, bench_pixel_buffer);
criterion_main!(benches);

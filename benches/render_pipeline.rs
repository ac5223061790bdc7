//! Full-frame render against the incremental scroll-and-redraw step.
//!
//! Run with: cargo bench --bench render_pipeline

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mandelbrot_spiral::{
    Direction, FixedPointMandelbrot, GreyscaleColourMap, LineRenderer, MandelbrotConfig, PanState,
    PixelBuffer, escape_time, scroll_and_redraw, select_direction,
};

fn renderer(config: &MandelbrotConfig) -> LineRenderer<FixedPointMandelbrot, GreyscaleColourMap> {
    LineRenderer::new(FixedPointMandelbrot, GreyscaleColourMap, config.pixel_size)
}

fn bench_escape_time(c: &mut Criterion) {
    let config = MandelbrotConfig::default();
    let mut group = c.benchmark_group("escape_time");

    group.throughput(Throughput::Elements(u64::from(config.width)));
    group.bench_function("default_top_row", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for x in 0..config.width as i32 {
                if let Some(point) = config.upper_left.pixel_offset(config.pixel_size, x, 0) {
                    total += u32::from(escape_time(black_box(point)));
                }
            }
            total
        })
    });

    group.finish();
}

fn bench_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_frame");
    group.sample_size(10);

    for (width, height) in [(200u32, 150u32), (800, 600)] {
        let config = MandelbrotConfig {
            width,
            height,
            ..MandelbrotConfig::default()
        };
        let renderer = renderer(&config);
        let mut buffer = PixelBuffer::new(width, height).unwrap();

        group.throughput(Throughput::Elements(u64::from(width * height)));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &config,
            |b, config| {
                b.iter(|| {
                    renderer
                        .render_frame(&mut buffer, black_box(config.upper_left))
                        .unwrap()
                })
            },
        );
    }

    group.finish();
}

fn bench_spiral_step(c: &mut Criterion) {
    let config = MandelbrotConfig::default();
    let renderer = renderer(&config);
    let mut group = c.benchmark_group("spiral_step");

    for direction in [Direction::Right, Direction::Up, Direction::UpRight] {
        let mut buffer = PixelBuffer::new(config.width, config.height).unwrap();
        renderer.render_frame(&mut buffer, config.upper_left).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(direction),
            &direction,
            |b, &direction| {
                b.iter(|| {
                    // reset each time so the view never walks out of range
                    let mut state = PanState::new(config.upper_left, config.radius);
                    scroll_and_redraw(&mut buffer, &mut state, direction, &renderer).unwrap()
                })
            },
        );
    }

    let mut buffer = PixelBuffer::new(config.width, config.height).unwrap();
    renderer.render_frame(&mut buffer, config.upper_left).unwrap();
    let mut state = PanState::new(config.upper_left, config.radius);

    group.bench_function("selected", |b| {
        b.iter(|| {
            let direction = select_direction(state.offset, state.previous, config.radius);
            scroll_and_redraw(&mut buffer, &mut state, direction, &renderer).unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_escape_time, bench_full_frame, bench_spiral_step);
criterion_main!(benches);

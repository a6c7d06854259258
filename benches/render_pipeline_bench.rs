use criterion::{Criterion, criterion_group, criterion_main};
use parcoords::api::{ChartEngine, ChartEngineConfig};
use parcoords::core::{
    AxisRange, Level, Row, RowId, Viewport, pixel_range_to_data_range, value_to_pixel,
};
use parcoords::interaction::PointerEvent;
use parcoords::render::NullRenderer;
use std::hint::black_box;

const COLUMNS: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

fn rows(count: u64) -> Vec<Row> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            COLUMNS
                .iter()
                .enumerate()
                .fold(
                    Row::new(RowId::new(i), Level::from_raw((i % 4) as i64 + 1)),
                    |row, (k, column)| row.with_value(*column, (t * (k as f64 + 1.3)).sin() * 100.0),
                )
        })
        .collect()
}

fn engine(count: u64) -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(1600, 900), COLUMNS);
    ChartEngine::with_rows(NullRenderer::default(), rows(count), config).expect("engine init")
}

fn bench_mapper_round_trip(c: &mut Criterion) {
    let range = AxisRange::new("a", -100.0, 100.0).expect("valid range");

    c.bench_function("mapper_round_trip", |b| {
        b.iter(|| {
            let y = value_to_pixel(Some(black_box(42.5)), 40.0, 900.0, &range);
            let _ = pixel_range_to_data_range(y - 40.0, y - 20.0, 820.0, "a", &range)
                .expect("filter");
        })
    });
}

fn bench_build_frame_10k(c: &mut Criterion) {
    let mut engine = engine(10_000);

    c.bench_function("build_frame_10k_curved", |b| {
        b.iter(|| {
            let frame = engine.build_render_frame();
            black_box(frame.chart.paths.len());
        })
    });

    engine.set_density_enabled(true);
    c.bench_function("build_frame_10k_density", |b| {
        b.iter(|| {
            let frame = engine.build_render_frame();
            black_box(frame.axes.len());
        })
    });
}

fn bench_brush_drag_2k(c: &mut Criterion) {
    let mut engine = engine(2_000);
    let axis_x = engine.positions().get("a").copied().expect("axis a");

    c.bench_function("brush_drag_2k", |b| {
        b.iter(|| {
            engine
                .pointer_down(&PointerEvent::on_axis(axis_x, 100.0, "a"))
                .expect("down");
            engine
                .pointer_move(&PointerEvent::on_axis(axis_x, black_box(400.0), "a"))
                .expect("move");
            engine
                .pointer_up(&PointerEvent::on_axis(axis_x, 400.0, "a"))
                .expect("up");
            engine.clear_all_filters();
        })
    });
}

criterion_group!(
    benches,
    bench_mapper_round_trip,
    bench_build_frame_10k,
    bench_brush_drag_2k
);
criterion_main!(benches);

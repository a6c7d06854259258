use approx::assert_relative_eq;
use parcoords::api::{ChartEngine, ChartEngineConfig};
use parcoords::core::{Level, Row, RowId, Viewport};
use parcoords::interaction::{InteractionMode, PointerEvent};
use parcoords::render::NullRenderer;

fn rows() -> Vec<Row> {
    [(0.0, 1), (5.0, 2), (10.0, 3)]
        .into_iter()
        .enumerate()
        .map(|(i, (x, level))| {
            Row::new(RowId::new(i as u64), Level::from_raw(level))
                .with_value("x", x)
                .with_value("y", 1.0 + i as f64)
        })
        .collect()
}

fn engine() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(340, 240), ["x", "y"]);
    ChartEngine::with_rows(NullRenderer::default(), rows(), config).expect("engine init")
}

#[test]
fn brushing_x_then_clearing_restores_all_rows() {
    let mut engine = engine();
    assert_eq!(engine.filtered_count(), 3);

    // Axis `x` sits at chart x = 0; its strip starts at page y = 30. Local
    // rows 32..128 of the 160px span cover data values 8..2.
    engine
        .pointer_down(&PointerEvent::on_axis(0.0, 72.0, "x"))
        .expect("down");
    assert_eq!(
        engine.interaction_mode(),
        InteractionMode::Brushing("x".to_owned())
    );
    engine
        .pointer_move(&PointerEvent::on_axis(0.0, 168.0, "x"))
        .expect("move");
    engine
        .pointer_up(&PointerEvent::on_axis(0.0, 168.0, "x"))
        .expect("up");
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);

    let filter = engine.filters().get("x").expect("x filter");
    assert_relative_eq!(filter.min, 2.0);
    assert_relative_eq!(filter.max, 8.0);

    let ids: Vec<u64> = engine.filtered_rows().map(|row| row.id.raw()).collect();
    assert_eq!(ids, vec![1]);
    assert!(engine.axis("x").expect("axis").is_filtered());
    assert!(engine.renderer().frames_rendered >= 1);

    engine.clear_all_filters();
    assert_eq!(engine.filtered_count(), 3);
    assert!(engine.filters().is_empty());
}

#[test]
fn double_click_clears_the_brush() {
    let mut engine = engine();
    engine
        .pointer_down(&PointerEvent::on_axis(0.0, 72.0, "x"))
        .expect("down");
    engine
        .pointer_move(&PointerEvent::on_axis(0.0, 168.0, "x"))
        .expect("move");
    engine.pointer_leave_axis("x").expect("leave");
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
    assert_eq!(engine.filtered_count(), 1);

    // Idle axes ignore moves.
    engine
        .pointer_move(&PointerEvent::on_axis(0.0, 100.0, "x"))
        .expect("idle move");
    assert_eq!(engine.filtered_count(), 1);

    engine
        .double_click(&PointerEvent::on_axis(0.0, 100.0, "x"))
        .expect("double click");
    assert_eq!(engine.filtered_count(), 3);
    assert!(!engine.axis("x").expect("axis").is_filtered());
}

#[test]
fn drag_is_clamped_to_the_usable_span() {
    let mut engine = engine();
    engine
        .pointer_down(&PointerEvent::on_axis(0.0, 0.0, "x"))
        .expect("down above axis");
    engine
        .pointer_move(&PointerEvent::on_axis(0.0, 1_000.0, "x"))
        .expect("move below axis");
    engine.pointer_leave();

    let filter = engine.filters().get("x").expect("x filter");
    assert_relative_eq!(filter.top, 0.0);
    assert_relative_eq!(filter.bottom, 160.0);
    assert_relative_eq!(filter.min, 0.0);
    assert_relative_eq!(filter.max, 10.0);
    assert_eq!(engine.filtered_count(), 3);
}

#[test]
fn container_origin_offsets_pointer_positions() {
    let mut engine = engine();
    engine
        .set_container_origin(Some(parcoords::core::Point::new(100.0, 200.0)))
        .expect("origin");
    engine
        .pointer_down(&PointerEvent::on_axis(100.0, 272.0, "x"))
        .expect("down");
    engine
        .pointer_move(&PointerEvent::on_axis(100.0, 368.0, "x"))
        .expect("move");

    let filter = engine.filters().get("x").expect("x filter");
    assert_relative_eq!(filter.min, 2.0);
    assert_relative_eq!(filter.max, 8.0);
}

#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use parcoords::ChartError;
use parcoords::api::{ChartEngine, ChartEngineConfig};
use parcoords::core::{Level, Row, RowId, Viewport};
use parcoords::interaction::PointerEvent;
use parcoords::render::{CairoRenderer, Renderer, SurfaceFrame};

fn rows() -> Vec<Row> {
    (0..6)
        .map(|i| {
            Row::new(RowId::new(i), Level::from_raw(i as i64 % 3 + 1))
                .with_value("a", i as f64)
                .with_value("b", (i * i) as f64)
                .with_value("c", 10.0 - i as f64)
        })
        .collect()
}

fn config(width: u32, height: u32) -> ChartEngineConfig {
    ChartEngineConfig::new(Viewport::new(width, height), ["a", "b", "c"])
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_rows_points_and_labels() {
    let renderer = CairoRenderer::new(640, 400).expect("renderer");
    let mut engine =
        ChartEngine::with_rows(renderer, rows(), config(640, 400)).expect("engine init");
    engine.render().expect("render");

    let stats = engine.into_renderer().last_stats();
    assert_eq!(stats.paths_drawn, 6);
    assert_eq!(stats.rects_drawn, 18);
    assert_eq!(stats.texts_drawn, 9);
    assert_eq!(stats.axis_surfaces_drawn, 3);
}

#[test]
fn cairo_overlay_redraw_keeps_chart_surface() {
    let renderer = CairoRenderer::new(640, 400).expect("renderer");
    let mut engine =
        ChartEngine::with_rows(renderer, rows(), config(640, 400)).expect("engine init");
    engine.render().expect("render");
    engine
        .pointer_down(&PointerEvent::on_selection_surface(20.0, 50.0))
        .expect("down");
    engine
        .pointer_move(&PointerEvent::on_selection_surface(80.0, 120.0))
        .expect("move");

    let mut renderer = engine.into_renderer();
    assert_eq!(renderer.last_stats().paths_drawn, 6);
    renderer
        .render_overlay(&SurfaceFrame::new())
        .expect("clear overlay");
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(600, 320).expect("renderer");
    let mut engine =
        ChartEngine::with_rows(renderer, rows(), config(600, 320)).expect("engine init");

    let surface = ImageSurface::create(Format::ARgb32, 600, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    engine
        .render_on_cairo_context(&context)
        .expect("render on context");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_stats().paths_drawn, 6);
}

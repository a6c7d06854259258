use approx::assert_relative_eq;
use parcoords::api::{ChartEngine, ChartEngineConfig};
use parcoords::core::{ChartLayout, Filter, Level, Row, RowId, Viewport, layout};
use parcoords::render::NullRenderer;
use parcoords::ChartError;

fn names(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|name| (*name).to_owned()).collect()
}

fn engine() -> ChartEngine<NullRenderer> {
    let rows = (0..4)
        .map(|i| {
            Row::new(RowId::new(i), Level::Low)
                .with_value("a", i as f64)
                .with_value("b", 10.0 - i as f64)
                .with_value("c", (i * i) as f64)
        })
        .collect();
    let config = ChartEngineConfig::new(Viewport::new(340, 240), ["a", "b", "c"]);
    ChartEngine::with_rows(NullRenderer::default(), rows, config).expect("engine init")
}

#[test]
fn three_columns_are_evenly_spaced() {
    let positions = layout(&names(&["a", "b", "c"]), 300.0, 0.0).expect("layout");
    assert_eq!(positions, vec![0.0, 150.0, 300.0]);
}

#[test]
fn gutter_is_removed_from_usable_width() {
    let chart = ChartLayout::new(names(&["a", "b", "c", "d", "e"]), 440.0, 40.0).expect("layout");
    assert_relative_eq!(chart.usable_width(), 400.0);
    assert_eq!(chart.position("e"), Some(400.0));
    assert_eq!(chart.position("b"), Some(100.0));
}

#[test]
fn fewer_than_two_columns_is_rejected() {
    let err = layout(&names(&["a"]), 300.0, 0.0).expect_err("one column");
    assert!(matches!(err, ChartError::InvalidLayout { columns: 1 }));

    let config = ChartEngineConfig::new(Viewport::new(340, 240), ["only"]);
    let err = ChartEngine::with_rows(NullRenderer::default(), Vec::new(), config)
        .err()
        .expect("engine init must fail");
    assert!(matches!(err, ChartError::InvalidLayout { columns: 1 }));
}

#[test]
fn rearrange_reorders_and_redraws() {
    let mut engine = engine();
    engine.rearrange(["c", "a", "b"]).expect("rearrange");
    assert_eq!(engine.active_columns(), names(&["c", "a", "b"]));
    assert_eq!(engine.positions().get("c"), Some(&0.0));
    assert_eq!(engine.positions().get("b"), Some(&300.0));
    assert_eq!(engine.renderer().frames_rendered, 1);

    let frame = engine.renderer().last_frame.as_ref().expect("frame");
    let labels: Vec<&str> = frame
        .chart
        .texts
        .iter()
        .filter(|text| text.bold)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(labels, vec!["c", "a", "b"]);
}

#[test]
fn hidden_axis_keeps_its_filter() {
    let mut engine = engine();
    engine
        .add_filter(Filter {
            field: "b".to_owned(),
            top: 0.0,
            bottom: 40.0,
            height: 40.0,
            min: 8.5,
            max: 10.0,
        })
        .expect("filter b");
    assert_eq!(engine.filtered_count(), 2);

    engine.hide_column("b").expect("hide b");
    assert!(!engine.layout().is_visible("b"));
    assert!(engine.axis("b").expect("axis").is_filtered());
    assert_eq!(engine.filtered_count(), 2);
    assert!(engine.axis_range("b").is_none());
    let frame = engine.renderer().last_frame.as_ref().expect("frame");
    assert!(frame.axis("b").is_none());
    assert_eq!(frame.axes.len(), 2);

    engine.show_column("b").expect("show b");
    assert_eq!(engine.active_columns(), names(&["a", "c", "b"]));
}

#[test]
fn invalid_rearrange_changes_nothing() {
    let mut engine = engine();
    let err = engine.rearrange(["a", "zzz"]).expect_err("unknown");
    assert!(matches!(err, ChartError::UnknownColumn(ref name) if name == "zzz"));

    let err = engine.rearrange(["a", "a"]).expect_err("duplicate");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = engine.rearrange(["a"]).expect_err("single column");
    assert!(matches!(err, ChartError::InvalidLayout { columns: 1 }));

    assert_eq!(engine.active_columns(), names(&["a", "b", "c"]));
    assert_eq!(engine.renderer().frames_rendered, 0);
    assert!(matches!(
        engine.hide_column("zzz"),
        Err(ChartError::UnknownColumn(_))
    ));
}

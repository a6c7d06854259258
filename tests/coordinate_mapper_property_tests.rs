use parcoords::core::{AxisRange, pixel_range_to_data_range, value_to_pixel};
use proptest::prelude::*;

proptest! {
    #[test]
    fn brushed_extent_stays_inside_axis_range(
        min in -10_000.0f64..10_000.0,
        size in 0.001f64..5_000.0,
        span in 10.0f64..2_000.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0
    ) {
        let range = AxisRange::new("x", min, min + size).expect("valid range");
        let top = a.min(b) * span;
        let bottom = a.max(b) * span;

        let filter = pixel_range_to_data_range(top, bottom, span, "x", &range).expect("filter");
        let tolerance = 1e-9 * (1.0 + min.abs() + size);

        prop_assert!(filter.min <= filter.max + tolerance);
        prop_assert!(filter.min >= range.min - tolerance);
        prop_assert!(filter.max <= range.max + tolerance);
        prop_assert!((filter.height - (bottom - top)).abs() <= 1e-9 * span);
    }

    #[test]
    fn render_pixel_maps_back_within_one_step(
        min in -10_000.0f64..10_000.0,
        size in 0.001f64..5_000.0,
        gutter_y in 10.0f64..80.0,
        span in 10.0f64..2_000.0,
        t in 0.0f64..1.0
    ) {
        let range = AxisRange::new("x", min, min + size).expect("valid range");
        let value = min + t * size;
        let chart_height = span + 2.0 * gutter_y;

        let y = value_to_pixel(Some(value), gutter_y, chart_height, &range);
        let row = y - gutter_y;
        let filter = pixel_range_to_data_range(row, row, span, "x", &range).expect("filter");
        let step = size / span;

        prop_assert!((filter.max - value).abs() <= step + 1e-9 * (1.0 + value.abs()));
        prop_assert!((filter.min - value).abs() <= step + 1e-9 * (1.0 + value.abs()));
    }

    #[test]
    fn rendered_rows_stay_inside_the_usable_span(
        values in proptest::collection::vec(-1_000.0f64..1_000.0, 1..32),
        gutter_y in 10.0f64..80.0,
        span in 10.0f64..2_000.0
    ) {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = if max > min {
            AxisRange::new("x", min, max).expect("valid range")
        } else {
            AxisRange::degenerate("x", min)
        };
        let chart_height = span + 2.0 * gutter_y;

        for value in values {
            let y = value_to_pixel(Some(value), gutter_y, chart_height, &range);
            prop_assert!(y.is_finite());
            prop_assert!(y >= gutter_y - 1e-9);
            prop_assert!(y <= gutter_y + span + 1e-9);
        }
    }
}

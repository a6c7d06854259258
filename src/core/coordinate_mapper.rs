//! Pure conversions between container pixels and axis data values.
//!
//! Axes are drawn with the maximum value at the top, so pixel `0` of an
//! axis's usable span corresponds to `range.max`.

use crate::core::{AxisRange, Filter, Point};
use crate::error::{ChartError, ChartResult};

/// Pointer position relative to a container's top-left corner.
///
/// A container without a measurable origin is treated as sitting at `(0, 0)`.
#[must_use]
pub fn pixel_to_position(container_origin: Option<Point>, pointer: Point) -> Point {
    let origin = container_origin.unwrap_or_default();
    Point::new(pointer.x - origin.x, pointer.y - origin.y)
}

/// Converts a vertical pixel extent on an axis into a data-space filter.
///
/// `top` and `bottom` are measured from the top of the axis's usable span of
/// `pixel_span` pixels.
pub fn pixel_range_to_data_range(
    top: f64,
    bottom: f64,
    pixel_span: f64,
    column: &str,
    range: &AxisRange,
) -> ChartResult<Filter> {
    if !pixel_span.is_finite() || pixel_span <= 0.0 {
        return Err(ChartError::InvalidData(
            "axis pixel span must be finite and > 0".to_owned(),
        ));
    }
    if !top.is_finite() || !bottom.is_finite() {
        return Err(ChartError::InvalidData(
            "brush pixel extent must be finite".to_owned(),
        ));
    }

    let height = bottom - top;
    let step = (range.max - range.min) / pixel_span;
    Ok(Filter {
        field: column.to_owned(),
        top,
        bottom,
        height,
        min: range.max - (top + height) * step,
        max: range.max - top * step,
    })
}

/// Maps a data value to a chart-space y coordinate.
///
/// Degenerate ranges and missing values land on the vertical midpoint of the
/// usable span.
#[must_use]
pub fn value_to_pixel(
    value: Option<f64>,
    gutter_y: f64,
    chart_height: f64,
    range: &AxisRange,
) -> f64 {
    let span = chart_height - 2.0 * gutter_y;
    match value {
        Some(value) if !range.is_degenerate() => {
            gutter_y + span * ((range.max - value) / range.size())
        }
        _ => gutter_y + span / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{pixel_range_to_data_range, pixel_to_position, value_to_pixel};
    use crate::core::{AxisRange, Point};

    #[test]
    fn position_subtracts_container_origin() {
        let pos = pixel_to_position(Some(Point::new(10.0, 20.0)), Point::new(15.0, 50.0));
        assert_eq!(pos, Point::new(5.0, 30.0));
        assert_eq!(pixel_to_position(None, Point::new(3.0, 4.0)), Point::new(3.0, 4.0));
    }

    #[test]
    fn pixel_top_is_data_max() {
        let range = AxisRange::new("x", 0.0, 100.0).expect("valid range");
        let filter = pixel_range_to_data_range(0.0, 50.0, 200.0, "x", &range).expect("filter");
        assert_relative_eq!(filter.max, 100.0);
        assert_relative_eq!(filter.min, 75.0);
        assert_relative_eq!(filter.height, 50.0);
    }

    #[test]
    fn zero_span_is_rejected() {
        let range = AxisRange::new("x", 0.0, 1.0).expect("valid range");
        assert!(pixel_range_to_data_range(0.0, 1.0, 0.0, "x", &range).is_err());
    }

    #[test]
    fn degenerate_range_maps_to_midpoint() {
        let range = AxisRange::degenerate("x", 3.0);
        assert_relative_eq!(value_to_pixel(Some(3.0), 20.0, 220.0, &range), 120.0);
        let range = AxisRange::new("x", 0.0, 10.0).expect("valid range");
        assert_relative_eq!(value_to_pixel(None, 20.0, 220.0, &range), 120.0);
        assert_relative_eq!(value_to_pixel(Some(10.0), 20.0, 220.0, &range), 20.0);
        assert_relative_eq!(value_to_pixel(Some(0.0), 20.0, 220.0, &range), 220.0 - 20.0);
    }
}

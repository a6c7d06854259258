use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{AxisRange, Filter, Point, pixel_range_to_data_range, pixel_to_position};
use crate::error::ChartResult;

use super::{FilterDelta, PointerEvent, PointerTarget};

/// Width of the per-axis drawing strip.
pub const AXIS_STRIP_WIDTH: f64 = 40.0;

/// Vertical padding between the top of the axis strip and the first data pixel.
pub const AXIS_HIT_PADDING: f64 = 10.0;

/// Page-space top-left corner of an axis strip.
///
/// The strip is centered on `axis_x` and starts `AXIS_HIT_PADDING` above the
/// top gutter, so strip-local `y - AXIS_HIT_PADDING` equals chart `y - gutter_y`.
#[must_use]
pub fn axis_strip_origin(container_origin: Option<Point>, axis_x: f64, gutter_y: f64) -> Point {
    container_origin
        .unwrap_or_default()
        .offset(axis_x - AXIS_STRIP_WIDTH / 2.0, gutter_y - AXIS_HIT_PADDING)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AxisFilterState {
    Idle,
    /// `start` is strip-local.
    Dragging { start: Point },
}

/// Visible brush on one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisBrush {
    pub filter: Filter,
    /// Strip-local top of the brush rectangle.
    pub top: f64,
    /// Preview created by a rectangle drag that has not been released yet.
    pub temporary: bool,
}

impl AxisBrush {
    #[must_use]
    pub fn height(&self) -> f64 {
        self.filter.height
    }
}

/// Brush state machine for a single axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisFilter {
    field: String,
    state: AxisFilterState,
    brush: Option<AxisBrush>,
    range: Option<AxisRange>,
    /// Range captured when a gesture started; pixels map against it until
    /// the gesture ends.
    gesture_range: Option<AxisRange>,
}

impl AxisFilter {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            state: AxisFilterState::Idle,
            brush: None,
            range: None,
            gesture_range: None,
        }
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub fn state(&self) -> AxisFilterState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, AxisFilterState::Dragging { .. })
    }

    #[must_use]
    pub fn is_filtered(&self) -> bool {
        self.brush.is_some()
    }

    #[must_use]
    pub fn is_temporary(&self) -> bool {
        self.brush.as_ref().is_some_and(|brush| brush.temporary)
    }

    #[must_use]
    pub fn brush(&self) -> Option<&AxisBrush> {
        self.brush.as_ref()
    }

    #[must_use]
    pub fn range(&self) -> Option<&AxisRange> {
        self.range.as_ref()
    }

    /// Installs the range computed by the latest render pass.
    pub fn set_range(&mut self, range: AxisRange) {
        self.range = Some(range);
    }

    /// Range gesture pixels are mapped against: the one captured by
    /// [`Self::freeze_range`] while a gesture runs, else the latest range.
    #[must_use]
    pub fn mapping_range(&self) -> Option<&AxisRange> {
        self.gesture_range.as_ref().or(self.range.as_ref())
    }

    /// Pins the current range until [`Self::release_range`].
    pub fn freeze_range(&mut self) {
        self.gesture_range = self.range.clone();
    }

    pub fn release_range(&mut self) {
        self.gesture_range = None;
    }

    pub fn set_temporary(&mut self, temporary: bool) {
        if let Some(brush) = self.brush.as_mut() {
            brush.temporary = temporary;
        }
    }

    /// Starts a brush drag when the pointer went down on this axis's strip.
    ///
    /// `origin` is the page-space origin of the strip.
    pub fn activate(&mut self, event: &PointerEvent, origin: Point) -> bool {
        if self.is_dragging() {
            return false;
        }
        match &event.target {
            PointerTarget::AxisStrip(field) if *field == self.field => {}
            _ => return false,
        }
        let start = pixel_to_position(Some(origin), event.position);
        trace!(field = %self.field, y = start.y, "axis brush drag started");
        self.state = AxisFilterState::Dragging { start };
        self.freeze_range();
        true
    }

    /// Extends the drag to the pointer. Idle axes ignore the event.
    pub fn on_pointer_move(
        &mut self,
        event: &PointerEvent,
        origin: Point,
        pixel_span: f64,
    ) -> ChartResult<Option<FilterDelta>> {
        let AxisFilterState::Dragging { start } = self.state else {
            return Ok(None);
        };
        let Some(range) = self.mapping_range() else {
            trace!(field = %self.field, "axis has no range yet; ignoring drag");
            return Ok(None);
        };

        let current = pixel_to_position(Some(origin), event.position);
        let top = clamp_to_span(start.y.min(current.y) - AXIS_HIT_PADDING, pixel_span);
        let bottom = clamp_to_span(start.y.max(current.y) - AXIS_HIT_PADDING, pixel_span);
        let filter = pixel_range_to_data_range(top, bottom, pixel_span, &self.field, range)?;
        trace!(field = %self.field, top, bottom, min = filter.min, max = filter.max, "axis brush drag");
        Ok(Some(self.add_filter(filter)))
    }

    /// Ends the drag. The brush stays in place.
    pub fn deactivate(&mut self) {
        if self.is_dragging() {
            self.release_range();
        }
        self.state = AxisFilterState::Idle;
    }

    /// Shows `filter` as this axis's brush and returns the delta to publish.
    ///
    /// An existing brush keeps its `temporary` flag.
    pub fn add_filter(&mut self, filter: Filter) -> FilterDelta {
        let temporary = self.is_temporary();
        self.brush = Some(AxisBrush {
            top: filter.top + AXIS_HIT_PADDING,
            filter: filter.clone(),
            temporary,
        });
        FilterDelta::Add(filter)
    }

    /// Clears the brush. Clearing an unfiltered axis is a no-op.
    pub fn remove_filter(&mut self) -> Option<FilterDelta> {
        self.brush.take()?;
        Some(FilterDelta::Remove(self.field.clone()))
    }

    /// Moves the existing brush so its pixel top sits at `top`, keeping its height.
    ///
    /// `top` is measured within the usable span and is clamped so the whole
    /// brush stays on the axis. The data extent slides at the scale the
    /// brush was drawn with.
    pub fn move_brush(&mut self, top: f64, pixel_span: f64) -> ChartResult<Option<FilterDelta>> {
        let Some(current) = self.brush.as_ref().map(|brush| brush.filter.clone()) else {
            return Ok(None);
        };
        let top = top.clamp(0.0, (pixel_span - current.height).max(0.0));
        let filter = if current.height > 0.0 {
            slide_filter(&current, top)
        } else {
            let Some(range) = self.mapping_range() else {
                return Ok(None);
            };
            pixel_range_to_data_range(top, top, pixel_span, &self.field, range)?
        };
        Ok(Some(self.add_filter(filter)))
    }
}

/// Shifts `filter` so its pixel top is `top`, at the filter's own data scale.
fn slide_filter(filter: &Filter, top: f64) -> Filter {
    let step = (filter.max - filter.min) / filter.height;
    let max = filter.max - (top - filter.top) * step;
    Filter {
        field: filter.field.clone(),
        top,
        bottom: top + filter.height,
        height: filter.height,
        min: max - filter.height * step,
        max,
    }
}

fn clamp_to_span(value: f64, pixel_span: f64) -> f64 {
    value.clamp(0.0, pixel_span.max(0.0))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{AXIS_HIT_PADDING, AxisFilter, AxisFilterState};
    use crate::core::{AxisRange, Point};
    use crate::interaction::{FilterDelta, PointerEvent};

    const ORIGIN: Point = Point::new(100.0, 50.0);
    const SPAN: f64 = 200.0;

    fn axis() -> AxisFilter {
        let mut axis = AxisFilter::new("x");
        axis.set_range(AxisRange::new("x", 0.0, 100.0).expect("range"));
        axis
    }

    #[test]
    fn activate_requires_own_strip() {
        let mut axis = axis();
        assert!(!axis.activate(&PointerEvent::on_axis(110.0, 70.0, "y"), ORIGIN));
        assert!(!axis.activate(&PointerEvent::on_selection_surface(110.0, 70.0), ORIGIN));
        assert_eq!(axis.state(), AxisFilterState::Idle);
        assert!(axis.activate(&PointerEvent::on_axis(110.0, 70.0, "x"), ORIGIN));
        assert!(axis.is_dragging());
        assert!(!axis.activate(&PointerEvent::on_axis(110.0, 70.0, "x"), ORIGIN));
    }

    #[test]
    fn move_while_idle_is_noop() {
        let mut axis = axis();
        let delta = axis
            .on_pointer_move(&PointerEvent::on_axis(110.0, 90.0, "x"), ORIGIN, SPAN)
            .expect("move");
        assert_eq!(delta, None);
        assert!(!axis.is_filtered());
    }

    #[test]
    fn drag_extent_is_order_independent() {
        let mut axis = axis();
        let start_y = ORIGIN.y + AXIS_HIT_PADDING + 150.0;
        axis.activate(&PointerEvent::on_axis(110.0, start_y, "x"), ORIGIN);
        let delta = axis
            .on_pointer_move(&PointerEvent::on_axis(110.0, start_y - 100.0, "x"), ORIGIN, SPAN)
            .expect("move");
        let Some(FilterDelta::Add(filter)) = delta else {
            panic!("expected add delta");
        };
        assert_relative_eq!(filter.top, 50.0);
        assert_relative_eq!(filter.bottom, 150.0);
        assert_relative_eq!(filter.max, 75.0);
        assert_relative_eq!(filter.min, 25.0);
        let brush = axis.brush().expect("brush");
        assert_relative_eq!(brush.top, 50.0 + AXIS_HIT_PADDING);

        axis.deactivate();
        assert_eq!(axis.state(), AxisFilterState::Idle);
        assert!(axis.is_filtered());
    }

    #[test]
    fn remove_filter_is_idempotent() {
        let mut axis = axis();
        assert_eq!(axis.remove_filter(), None);
        axis.activate(&PointerEvent::on_axis(110.0, 70.0, "x"), ORIGIN);
        axis.on_pointer_move(&PointerEvent::on_axis(110.0, 120.0, "x"), ORIGIN, SPAN)
            .expect("move");
        assert_eq!(axis.remove_filter(), Some(FilterDelta::Remove("x".to_owned())));
        assert_eq!(axis.remove_filter(), None);
    }

    #[test]
    fn move_brush_keeps_height_and_clamps() {
        let mut axis = axis();
        assert_eq!(axis.move_brush(10.0, SPAN).expect("move"), None);

        axis.activate(&PointerEvent::on_axis(110.0, ORIGIN.y + AXIS_HIT_PADDING, "x"), ORIGIN);
        axis.on_pointer_move(
            &PointerEvent::on_axis(110.0, ORIGIN.y + AXIS_HIT_PADDING + 40.0, "x"),
            ORIGIN,
            SPAN,
        )
        .expect("move");
        axis.deactivate();

        let Some(FilterDelta::Add(filter)) = axis.move_brush(500.0, SPAN).expect("move") else {
            panic!("expected add delta");
        };
        assert_relative_eq!(filter.top, 160.0);
        assert_relative_eq!(filter.bottom, 200.0);
        assert_relative_eq!(filter.min, 0.0);
        assert_relative_eq!(filter.max, 20.0);
    }

    #[test]
    fn drag_maps_against_range_captured_at_press() {
        let mut axis = axis();
        let start_y = ORIGIN.y + AXIS_HIT_PADDING + 40.0;
        let move_to = PointerEvent::on_axis(110.0, start_y + 120.0, "x");
        axis.activate(&PointerEvent::on_axis(110.0, start_y, "x"), ORIGIN);

        let first = axis.on_pointer_move(&move_to, ORIGIN, SPAN).expect("move");
        // A render between moves narrows the live range to the filtered rows.
        axis.set_range(AxisRange::new("x", 25.0, 75.0).expect("range"));
        let second = axis.on_pointer_move(&move_to, ORIGIN, SPAN).expect("move");
        assert_eq!(first, second);
        let Some(FilterDelta::Add(filter)) = second else {
            panic!("expected add delta");
        };
        assert_relative_eq!(filter.max, 80.0);
        assert_relative_eq!(filter.min, 20.0);

        axis.deactivate();
        assert_eq!(axis.mapping_range(), axis.range());
    }

    #[test]
    fn move_brush_to_same_top_is_stable() {
        let mut axis = axis();
        axis.activate(&PointerEvent::on_axis(110.0, ORIGIN.y + AXIS_HIT_PADDING, "x"), ORIGIN);
        axis.on_pointer_move(
            &PointerEvent::on_axis(110.0, ORIGIN.y + AXIS_HIT_PADDING + 50.0, "x"),
            ORIGIN,
            SPAN,
        )
        .expect("move");
        axis.deactivate();
        axis.set_range(AxisRange::new("x", 75.0, 100.0).expect("range"));

        let first = axis.move_brush(100.0, SPAN).expect("move");
        let second = axis.move_brush(100.0, SPAN).expect("move");
        assert_eq!(first, second);
        let Some(FilterDelta::Add(filter)) = second else {
            panic!("expected add delta");
        };
        assert_relative_eq!(filter.max, 50.0);
        assert_relative_eq!(filter.min, 25.0);
    }
}

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{ChartLayout, Point, pixel_range_to_data_range, pixel_to_position};
use crate::error::ChartResult;

use super::{AxisFilter, FilterDelta, PointerEvent, PointerTarget};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SelectionState {
    Idle,
    /// Corners are container-relative.
    Selecting { start: Point, current: Point },
}

/// Normalized selection rectangle: `min <= max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionRect {
    pub min: Point,
    pub max: Point,
}

impl SelectionRect {
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.max.y - self.min.y
    }

    /// Strict containment: an axis sitting exactly on an edge is not spanned.
    #[must_use]
    pub fn spans_x(self, x: f64) -> bool {
        x > self.min.x && x < self.max.x
    }
}

/// Vertical geometry shared by every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionGeometry {
    pub gutter_y: f64,
    pub pixel_span: f64,
}

/// Chart-wide rubber-band selection that drives several axis brushes at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionController {
    state: SelectionState,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self {
            state: SelectionState::Idle,
        }
    }
}

impl SelectionController {
    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    #[must_use]
    pub fn is_selecting(&self) -> bool {
        matches!(self.state, SelectionState::Selecting { .. })
    }

    /// Current normalized rectangle while selecting.
    #[must_use]
    pub fn rectangle(&self) -> Option<SelectionRect> {
        match self.state {
            SelectionState::Selecting { start, current } => {
                Some(SelectionRect::from_corners(start, current))
            }
            SelectionState::Idle => None,
        }
    }

    /// Starts a selection when the pointer went down on the selection overlay.
    ///
    /// Presses on axis strips belong to the axis brushes and are ignored here.
    /// Every axis range is pinned until the selection ends.
    pub fn activate(
        &mut self,
        event: &PointerEvent,
        container_origin: Option<Point>,
        axes: &mut IndexMap<String, AxisFilter>,
    ) -> bool {
        if self.is_selecting() || event.target != PointerTarget::SelectionSurface {
            return false;
        }
        let start = pixel_to_position(container_origin, event.position);
        debug!(x = start.x, y = start.y, "rectangle selection started");
        self.state = SelectionState::Selecting {
            start,
            current: start,
        };
        for axis in axes.values_mut() {
            axis.freeze_range();
        }
        true
    }

    /// Re-evaluates the rectangle against every axis and previews brushes.
    pub fn on_pointer_move(
        &mut self,
        event: &PointerEvent,
        container_origin: Option<Point>,
        axes: &mut IndexMap<String, AxisFilter>,
        layout: &ChartLayout,
        geometry: SelectionGeometry,
    ) -> ChartResult<Vec<FilterDelta>> {
        let SelectionState::Selecting { start, .. } = self.state else {
            return Ok(Vec::new());
        };
        let current = pixel_to_position(container_origin, event.position);
        self.state = SelectionState::Selecting { start, current };
        apply_rectangle(
            SelectionRect::from_corners(start, current),
            axes,
            layout,
            geometry,
            true,
        )
    }

    /// Finishes the selection. Spanned axes keep permanent brushes.
    ///
    /// A release without a preceding press on the overlay is ignored.
    pub fn on_pointer_up(
        &mut self,
        event: &PointerEvent,
        container_origin: Option<Point>,
        axes: &mut IndexMap<String, AxisFilter>,
        layout: &ChartLayout,
        geometry: SelectionGeometry,
    ) -> ChartResult<Vec<FilterDelta>> {
        let SelectionState::Selecting { start, .. } = self.state else {
            return Ok(Vec::new());
        };
        self.state = SelectionState::Idle;
        let end = pixel_to_position(container_origin, event.position);
        let deltas = apply_rectangle(
            SelectionRect::from_corners(start, end),
            axes,
            layout,
            geometry,
            false,
        );
        release_ranges(axes);
        let deltas = deltas?;
        debug!(deltas = deltas.len(), "rectangle selection finished");
        Ok(deltas)
    }

    /// Abandons the selection. Preview brushes are removed; permanent
    /// brushes are untouched.
    pub fn cancel(&mut self, axes: &mut IndexMap<String, AxisFilter>) -> Vec<FilterDelta> {
        if !self.is_selecting() {
            return Vec::new();
        }
        self.state = SelectionState::Idle;
        let deltas: Vec<FilterDelta> = axes
            .values_mut()
            .filter(|axis| axis.is_temporary())
            .filter_map(AxisFilter::remove_filter)
            .collect();
        release_ranges(axes);
        debug!(deltas = deltas.len(), "rectangle selection cancelled");
        deltas
    }
}

fn apply_rectangle(
    rect: SelectionRect,
    axes: &mut IndexMap<String, AxisFilter>,
    layout: &ChartLayout,
    geometry: SelectionGeometry,
    temporary: bool,
) -> ChartResult<Vec<FilterDelta>> {
    let span = geometry.pixel_span.max(0.0);
    let top = (rect.min.y - geometry.gutter_y).clamp(0.0, span);
    let bottom = (rect.max.y - geometry.gutter_y).clamp(0.0, span);

    let mut deltas = Vec::new();
    for (field, axis) in axes.iter_mut() {
        let spanned = layout
            .position(field)
            .is_some_and(|axis_x| rect.spans_x(axis_x));

        if !spanned {
            if axis.is_temporary() {
                deltas.extend(axis.remove_filter());
            }
            continue;
        }

        let Some(range) = axis.mapping_range() else {
            trace!(field = %field, "axis has no range yet; skipping selection");
            continue;
        };
        let filter = pixel_range_to_data_range(top, bottom, geometry.pixel_span, field, range)?;
        deltas.push(axis.add_filter(filter));
        axis.set_temporary(temporary);
    }
    Ok(deltas)
}

fn release_ranges(axes: &mut IndexMap<String, AxisFilter>) {
    for axis in axes.values_mut() {
        axis.release_range();
    }
}

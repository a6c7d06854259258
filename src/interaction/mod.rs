//! Pointer-gesture state machines.
//!
//! Gestures never touch the model directly: every transition that changes a
//! brush yields a [`FilterDelta`] which the engine applies to the model.

mod axis_filter;
mod selection;

pub use axis_filter::{
    AXIS_HIT_PADDING, AXIS_STRIP_WIDTH, AxisBrush, AxisFilter, AxisFilterState, axis_strip_origin,
};
pub use selection::{SelectionController, SelectionGeometry, SelectionRect, SelectionState};

use serde::{Deserialize, Serialize};

use crate::core::{Filter, Point};

/// Coarse interaction mode exposed to hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    /// A per-axis brush drag is in progress on the named axis.
    Brushing(String),
    /// A chart-wide rectangle selection is in progress.
    Selecting,
}

/// Hit region a pointer event was dispatched on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerTarget {
    /// The 40px drawing strip of the named axis.
    AxisStrip(String),
    /// The chart-wide selection overlay.
    SelectionSurface,
    /// Anything else (labels, nested controls, outside the chart).
    Other,
}

/// Pointer event in page coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub position: Point,
    pub target: PointerTarget,
}

impl PointerEvent {
    #[must_use]
    pub fn new(x: f64, y: f64, target: PointerTarget) -> Self {
        Self {
            position: Point::new(x, y),
            target,
        }
    }

    #[must_use]
    pub fn on_axis(x: f64, y: f64, field: impl Into<String>) -> Self {
        Self::new(x, y, PointerTarget::AxisStrip(field.into()))
    }

    #[must_use]
    pub fn on_selection_surface(x: f64, y: f64) -> Self {
        Self::new(x, y, PointerTarget::SelectionSurface)
    }
}

/// Filter-set mutation produced by a gesture transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterDelta {
    Add(Filter),
    Remove(String),
}

impl FilterDelta {
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::Add(filter) => &filter.field,
            Self::Remove(field) => field,
        }
    }
}

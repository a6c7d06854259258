//! parcoords: parallel-coordinates chart core.
//!
//! Rows are drawn as polylines across evenly spaced vertical axes. Brushing
//! an axis, or dragging a rectangle across several, filters the rows; the
//! engine publishes those filters to a row model and redraws from the
//! filtered subset through a backend-agnostic render frame.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};

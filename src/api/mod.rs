//! Host-facing engine facade.
//!
//! `ChartEngine` is split across controller files by concern; each adds an
//! `impl` block over the same struct.

mod density;
mod display_controller;
mod display_options;
mod engine;
mod engine_config;
mod engine_snapshot;
mod filter_controller;
mod interaction_controller;
mod invalidation;
mod layout_controller;
mod plugin_dispatch;
mod plugin_registry;
mod render_pipeline;
mod render_style;
mod validation;

pub use density::{
    DENSITY_GRADIENT_STEPS, DensityColorMap, DensityGradient, DensityStop, bucket_counts,
};
pub use display_options::{AxisRangeSource, DisplayOptions, LineDrawMode};
pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use engine_snapshot::EngineSnapshot;
pub use invalidation::InvalidationLevel;
pub use render_pipeline::{RenderPipeline, format_axis_value, overlay_surface, resolve_ranges};
pub use render_style::{LevelPalette, RenderStyle};

pub use crate::extensions::{ChartPlugin, PluginContext, PluginEvent};

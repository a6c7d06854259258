//! Observer hooks hosts can attach to a chart engine.
//!
//! Extensions only read engine state; they never mutate filters or layout.

pub mod plugins;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent};

use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::interaction::InteractionMode;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub total_rows: usize,
    pub filtered_rows: usize,
    pub active_filters: usize,
    pub active_columns: usize,
    pub interaction_mode: InteractionMode,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    FilterApplied { field: String, min: f64, max: f64 },
    FilterCleared { field: String },
    FilteredRowsChanged { filtered: usize, total: usize },
    ColumnsRearranged { columns: Vec<String> },
    SelectionStarted,
    /// `spanned` counts the axes brushed by the released rectangle.
    SelectionEnded { spanned: usize },
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins can observe events and read engine context without mutating core
/// internals directly.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &PluginEvent, context: &PluginContext);
}

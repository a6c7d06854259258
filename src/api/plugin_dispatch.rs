use tracing::trace;

use crate::core::RowModel;
use crate::extensions::PluginContext;
use crate::render::Renderer;

use super::{ChartEngine, PluginEvent};

impl<R: Renderer, M: RowModel> ChartEngine<R, M> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            viewport: self.viewport,
            total_rows: self.model.rows().len(),
            filtered_rows: self.model.filtered_indices().len(),
            active_filters: self.model.filters().len(),
            active_columns: self.layout.len(),
            interaction_mode: self.interaction_mode(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        trace!(event = ?event, plugins = self.plugins.len(), "dispatch plugin event");
        for plugin in &mut self.plugins {
            plugin.on_event(&event, &context);
        }
    }
}

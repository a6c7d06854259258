use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, Filter, Gutter, RowModel, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::AxisBrush;
use crate::render::Renderer;

use super::{ChartEngine, DisplayOptions};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub gutter: Gutter,
    /// Active columns with their x position, in axis order.
    pub positions: IndexMap<String, f64>,
    pub hidden_columns: Vec<String>,
    pub ranges: IndexMap<String, AxisRange>,
    pub filters: Vec<Filter>,
    pub brushes: IndexMap<String, AxisBrush>,
    pub total_rows: usize,
    pub filtered_rows: usize,
    pub display: DisplayOptions,
}

impl EngineSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}

impl<R: Renderer, M: RowModel> ChartEngine<R, M> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            viewport: self.viewport,
            gutter: self.gutter,
            positions: self.layout.positions().clone(),
            hidden_columns: self
                .layout
                .all_columns()
                .iter()
                .filter(|column| !self.layout.is_visible(column))
                .cloned()
                .collect(),
            ranges: self.ranges.clone(),
            filters: self.model.filters().iter().cloned().collect(),
            brushes: self
                .axes
                .iter()
                .filter_map(|(column, axis)| Some((column.clone(), axis.brush()?.clone())))
                .collect(),
            total_rows: self.model.rows().len(),
            filtered_rows: self.model.filtered_indices().len(),
            display: self.display,
        }
    }
}

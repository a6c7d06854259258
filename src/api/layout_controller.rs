use indexmap::IndexMap;
use tracing::debug;

use crate::core::{Point, RowModel};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartEngine, InvalidationLevel, PluginEvent};

impl<R: Renderer, M: RowModel> ChartEngine<R, M> {
    /// X position of every active axis, in axis order.
    #[must_use]
    pub fn positions(&self) -> &IndexMap<String, f64> {
        self.layout.positions()
    }

    #[must_use]
    pub fn active_columns(&self) -> Vec<String> {
        self.layout.active_columns()
    }

    #[must_use]
    pub fn container_origin(&self) -> Option<Point> {
        self.container_origin
    }

    /// Replaces the active axis order. Columns left out are hidden but keep
    /// their brushes and filters.
    pub fn rearrange<I, S>(&mut self, columns: I) -> ChartResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        self.layout.rearrange(columns)?;
        for (column, axis) in &mut self.axes {
            if !self.layout.is_visible(column) {
                axis.deactivate();
            }
        }
        let active = self.layout.active_columns();
        debug!(columns = ?active, "rearranged axes");
        self.emit_plugin_event(PluginEvent::ColumnsRearranged { columns: active });
        self.flush_redraw(InvalidationLevel::Full);
        Ok(())
    }

    /// Removes `column` from the active order. Hiding a hidden axis is a no-op.
    pub fn hide_column(&mut self, column: &str) -> ChartResult<()> {
        self.require_column(column)?;
        if !self.layout.is_visible(column) {
            return Ok(());
        }
        let remaining: Vec<String> = self
            .layout
            .columns()
            .filter(|active| *active != column)
            .map(str::to_owned)
            .collect();
        self.rearrange(remaining)
    }

    /// Appends a hidden `column` to the end of the active order.
    pub fn show_column(&mut self, column: &str) -> ChartResult<()> {
        self.require_column(column)?;
        if self.layout.is_visible(column) {
            return Ok(());
        }
        let mut columns = self.layout.active_columns();
        columns.push(column.to_owned());
        self.rearrange(columns)
    }

    /// Moves the chart container in page space, e.g. after the host scrolled.
    pub fn set_container_origin(&mut self, origin: Option<Point>) -> ChartResult<()> {
        if let Some(point) = origin {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(ChartError::InvalidData(
                    "container origin must be finite".to_owned(),
                ));
            }
        }
        self.container_origin = origin;
        Ok(())
    }

    fn require_column(&self, column: &str) -> ChartResult<()> {
        if self.axes.contains_key(column) {
            Ok(())
        } else {
            Err(ChartError::UnknownColumn(column.to_owned()))
        }
    }
}

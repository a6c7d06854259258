use tracing::debug;

use crate::core::{Filter, FilterChange, FilterSet, Row, RowModel};
use crate::error::{ChartError, ChartResult};
use crate::interaction::FilterDelta;
use crate::render::Renderer;

use super::{ChartEngine, InvalidationLevel, PluginEvent};

impl<R: Renderer, M: RowModel> ChartEngine<R, M> {
    #[must_use]
    pub fn filters(&self) -> &FilterSet {
        self.model.filters()
    }

    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.model.filtered_indices().len()
    }

    pub fn filtered_rows(&self) -> impl Iterator<Item = &Row> {
        self.model.filtered_rows()
    }

    /// Brushes `filter.field` with an explicit filter, as if the user had
    /// dragged it. The brush is permanent.
    pub fn add_filter(&mut self, filter: Filter) -> ChartResult<()> {
        let axis = self
            .axes
            .get_mut(&filter.field)
            .ok_or_else(|| ChartError::UnknownColumn(filter.field.clone()))?;
        if ![filter.top, filter.bottom, filter.min, filter.max]
            .iter()
            .all(|value| value.is_finite())
        {
            return Err(ChartError::InvalidData(
                "filter bounds must be finite".to_owned(),
            ));
        }
        let delta = axis.add_filter(filter);
        axis.set_temporary(false);
        let level = self.apply_filter_deltas(vec![delta]);
        self.flush_redraw(level);
        Ok(())
    }

    /// Clears the brush on `column`. Clearing an unfiltered axis changes
    /// nothing and does not redraw.
    pub fn clear_axis_filter(&mut self, column: &str) -> ChartResult<()> {
        let axis = self
            .axes
            .get_mut(column)
            .ok_or_else(|| ChartError::UnknownColumn(column.to_owned()))?;
        let delta = axis
            .remove_filter()
            .unwrap_or_else(|| FilterDelta::Remove(column.to_owned()));
        let level = self.apply_filter_deltas(vec![delta]);
        self.flush_redraw(level);
        Ok(())
    }

    /// Clears every brush, visible or hidden.
    pub fn clear_all_filters(&mut self) {
        let deltas: Vec<FilterDelta> = self
            .axes
            .values_mut()
            .filter_map(|axis| axis.remove_filter())
            .collect();
        let mut level = self.apply_filter_deltas(deltas);
        if self.model.clear_filters().is_changed() {
            level = level.max(self.filtered_rows_changed());
        }
        self.flush_redraw(level);
    }

    /// Drags the existing brush on `column` so its top sits `top` pixels
    /// below the start of the usable span.
    pub fn move_axis_brush(&mut self, column: &str, top: f64) -> ChartResult<()> {
        if !top.is_finite() {
            return Err(ChartError::InvalidData(
                "brush top must be finite".to_owned(),
            ));
        }
        let pixel_span = self.pixel_span();
        let axis = self
            .axes
            .get_mut(column)
            .ok_or_else(|| ChartError::UnknownColumn(column.to_owned()))?;
        let Some(delta) = axis.move_brush(top, pixel_span)? else {
            return Ok(());
        };
        let level = self.apply_filter_deltas(vec![delta]);
        self.flush_redraw(level);
        Ok(())
    }

    /// Swaps the dataset. Active filters are re-applied to the new rows.
    pub fn replace_rows(&mut self, rows: Vec<Row>) {
        self.model.replace_rows(rows);
        debug!(
            rows = self.model.rows().len(),
            filtered = self.model.filtered_indices().len(),
            "replaced rows"
        );
        let level = self.filtered_rows_changed();
        self.flush_redraw(level);
    }

    /// Publishes gesture deltas to the model in order.
    pub(super) fn apply_filter_deltas(&mut self, deltas: Vec<FilterDelta>) -> InvalidationLevel {
        let mut change = FilterChange::Unchanged;
        for delta in deltas {
            let applied = match delta {
                FilterDelta::Add(filter) => {
                    let (field, min, max) = (filter.field.clone(), filter.min, filter.max);
                    let applied = self.model.add_filter(filter);
                    if applied.is_changed() {
                        debug!(field = %field, min, max, "filter applied");
                        self.emit_plugin_event(PluginEvent::FilterApplied { field, min, max });
                    }
                    applied
                }
                FilterDelta::Remove(field) => {
                    let applied = self.model.remove_filter(&field);
                    if applied.is_changed() {
                        debug!(field = %field, "filter cleared");
                        self.emit_plugin_event(PluginEvent::FilterCleared { field });
                    }
                    applied
                }
            };
            change = change.merge(applied);
        }

        if change.is_changed() {
            self.filtered_rows_changed()
        } else {
            InvalidationLevel::None
        }
    }

    fn filtered_rows_changed(&mut self) -> InvalidationLevel {
        self.emit_plugin_event(PluginEvent::FilteredRowsChanged {
            filtered: self.model.filtered_indices().len(),
            total: self.model.rows().len(),
        });
        InvalidationLevel::Full
    }
}

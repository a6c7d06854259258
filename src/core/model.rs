use tracing::debug;

use crate::core::{Filter, FilterChange, FilterSet, Row};

/// Row and filter-set owner the chart reads from and publishes brushes to.
///
/// Implementations recompute the filtered subset whenever the filter set
/// changes; the chart only observes the result through `filtered_indices`.
pub trait RowModel {
    /// Full dataset.
    fn rows(&self) -> &[Row];

    /// Indices into `rows()` of the currently visible subset, in row order.
    fn filtered_indices(&self) -> &[usize];

    fn filters(&self) -> &FilterSet;

    fn add_filter(&mut self, filter: Filter) -> FilterChange;

    fn remove_filter(&mut self, field: &str) -> FilterChange;

    fn clear_filters(&mut self) -> FilterChange;

    /// Replaces the dataset; existing filters are re-applied to the new rows.
    fn replace_rows(&mut self, rows: Vec<Row>);

    fn filtered_rows(&self) -> impl Iterator<Item = &Row> {
        let rows = self.rows();
        self.filtered_indices()
            .iter()
            .filter_map(move |&index| rows.get(index))
    }
}

/// Reference model: rows in memory, filtered set = intersection of all
/// filters with inclusive bounds.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRowModel {
    rows: Vec<Row>,
    filters: FilterSet,
    filtered: Vec<usize>,
}

impl InMemoryRowModel {
    #[must_use]
    pub fn new(rows: Vec<Row>) -> Self {
        let filtered = (0..rows.len()).collect();
        Self {
            rows,
            filters: FilterSet::new(),
            filtered,
        }
    }

    fn recompute(&mut self) {
        let filters = &self.filters;
        self.filtered = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| filters.accepts(row))
            .map(|(index, _)| index)
            .collect();
        debug!(
            filters = self.filters.len(),
            filtered = self.filtered.len(),
            total = self.rows.len(),
            "recomputed filtered rows"
        );
    }
}

impl RowModel for InMemoryRowModel {
    fn rows(&self) -> &[Row] {
        &self.rows
    }

    fn filtered_indices(&self) -> &[usize] {
        &self.filtered
    }

    fn filters(&self) -> &FilterSet {
        &self.filters
    }

    fn add_filter(&mut self, filter: Filter) -> FilterChange {
        let change = self.filters.add(filter);
        if change.is_changed() {
            self.recompute();
        }
        change
    }

    fn remove_filter(&mut self, field: &str) -> FilterChange {
        let change = self.filters.remove(field);
        if change.is_changed() {
            self.recompute();
        }
        change
    }

    fn clear_filters(&mut self) -> FilterChange {
        let change = self.filters.clear();
        if change.is_changed() {
            self.recompute();
        }
        change
    }

    fn replace_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.recompute();
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryRowModel, RowModel};
    use crate::core::{Filter, Level, Row, RowId};

    fn model() -> InMemoryRowModel {
        InMemoryRowModel::new(
            [(0.0, 1.0), (5.0, 2.0), (10.0, 3.0)]
                .into_iter()
                .enumerate()
                .map(|(i, (x, y))| {
                    Row::new(RowId::new(i as u64), Level::from_raw(i as i64 + 1))
                        .with_value("x", x)
                        .with_value("y", y)
                })
                .collect(),
        )
    }

    fn filter(field: &str, min: f64, max: f64) -> Filter {
        Filter {
            field: field.to_owned(),
            top: 0.0,
            bottom: 1.0,
            height: 1.0,
            min,
            max,
        }
    }

    #[test]
    fn filtered_set_is_intersection() {
        let mut model = model();
        model.add_filter(filter("x", 0.0, 6.0));
        assert_eq!(model.filtered_indices(), &[0, 1]);
        model.add_filter(filter("y", 1.5, 3.0));
        assert_eq!(model.filtered_indices(), &[1]);
        model.remove_filter("x");
        assert_eq!(model.filtered_indices(), &[1, 2]);
        model.clear_filters();
        assert_eq!(model.filtered_rows().count(), 3);
    }

    #[test]
    fn replace_rows_reapplies_filters() {
        let mut model = model();
        model.add_filter(filter("x", 4.0, 6.0));
        model.replace_rows(vec![
            Row::new(RowId::new(9), Level::Low).with_value("x", 5.0),
            Row::new(RowId::new(10), Level::Low).with_value("x", 7.0),
        ]);
        assert_eq!(model.filtered_indices(), &[0]);
    }
}

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Evenly spaces `columns.len()` axes across `container_width - gutter_x`.
///
/// Fewer than two columns cannot be spaced and is reported as a layout error.
pub fn layout(
    columns: &[String],
    container_width: f64,
    gutter_x: f64,
) -> ChartResult<Vec<f64>> {
    if columns.len() < 2 {
        return Err(ChartError::InvalidLayout {
            columns: columns.len(),
        });
    }
    let usable = container_width - gutter_x;
    if !usable.is_finite() || usable <= 0.0 {
        return Err(ChartError::InvalidData(
            "layout width minus horizontal gutter must be finite and > 0".to_owned(),
        ));
    }

    let space = usable / (columns.len() - 1) as f64;
    Ok((0..columns.len()).map(|i| i as f64 * space).collect())
}

/// Axis order and x-positions for the chart.
///
/// The full column set given at construction is retained so hidden axes can
/// be brought back by a later rearrange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    all_columns: Vec<String>,
    positions: IndexMap<String, f64>,
    container_width: f64,
    gutter_x: f64,
}

impl ChartLayout {
    pub fn new(columns: Vec<String>, container_width: f64, gutter_x: f64) -> ChartResult<Self> {
        validate_column_names(&columns, None)?;
        let positions = layout(&columns, container_width, gutter_x)?;
        Ok(Self {
            positions: columns.iter().cloned().zip(positions).collect(),
            all_columns: columns,
            container_width,
            gutter_x,
        })
    }

    /// Replaces the active column order.
    ///
    /// Every name must belong to the original column set. On error nothing
    /// changes.
    pub fn rearrange(&mut self, columns: Vec<String>) -> ChartResult<()> {
        validate_column_names(&columns, Some(&self.all_columns))?;
        let positions = layout(&columns, self.container_width, self.gutter_x)?;
        self.positions = columns.into_iter().zip(positions).collect();
        Ok(())
    }

    /// Active columns in axis order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.positions.keys().map(String::as_str)
    }

    #[must_use]
    pub fn active_columns(&self) -> Vec<String> {
        self.positions.keys().cloned().collect()
    }

    #[must_use]
    pub fn all_columns(&self) -> &[String] {
        &self.all_columns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn position(&self, column: &str) -> Option<f64> {
        self.positions.get(column).copied()
    }

    #[must_use]
    pub fn positions(&self) -> &IndexMap<String, f64> {
        &self.positions
    }

    #[must_use]
    pub fn is_visible(&self, column: &str) -> bool {
        self.positions.contains_key(column)
    }

    /// Horizontal span between the first and last axis.
    #[must_use]
    pub fn usable_width(&self) -> f64 {
        self.container_width - self.gutter_x
    }
}

fn validate_column_names(columns: &[String], known: Option<&[String]>) -> ChartResult<()> {
    for (index, column) in columns.iter().enumerate() {
        if column.is_empty() {
            return Err(ChartError::InvalidData(
                "column names must not be empty".to_owned(),
            ));
        }
        if columns[..index].contains(column) {
            return Err(ChartError::InvalidData(format!(
                "column `{column}` appears more than once"
            )));
        }
        if let Some(known) = known {
            if !known.contains(column) {
                return Err(ChartError::UnknownColumn(column.clone()));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ChartLayout, layout};
    use crate::error::ChartError;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|name| (*name).to_owned()).collect()
    }

    #[test]
    fn three_columns_span_full_width() {
        let positions = layout(&names(&["a", "b", "c"]), 300.0, 0.0).expect("layout");
        assert_eq!(positions, vec![0.0, 150.0, 300.0]);
    }

    #[test]
    fn single_column_is_a_layout_error() {
        let err = layout(&names(&["a"]), 300.0, 0.0).expect_err("single column");
        assert!(matches!(err, ChartError::InvalidLayout { columns: 1 }));
    }

    #[test]
    fn rearrange_keeps_full_set_and_rejects_unknown() {
        let mut chart = ChartLayout::new(names(&["a", "b", "c"]), 200.0, 0.0).expect("layout");
        chart.rearrange(names(&["c", "a"])).expect("rearrange");
        assert_eq!(chart.active_columns(), names(&["c", "a"]));
        assert_eq!(chart.position("a"), Some(200.0));
        assert!(!chart.is_visible("b"));
        assert_eq!(chart.all_columns().len(), 3);

        let err = chart.rearrange(names(&["a", "zzz"])).expect_err("unknown");
        assert!(matches!(err, ChartError::UnknownColumn(ref name) if name == "zzz"));
        assert_eq!(chart.active_columns(), names(&["c", "a"]));

        chart.rearrange(names(&["a", "b", "c"])).expect("restore");
        assert_eq!(chart.position("b"), Some(100.0));
    }
}

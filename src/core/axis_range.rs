use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::Row;
use crate::error::{ChartError, ChartResult};

/// Data-value span mapped onto one axis's pixel extent for the current frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub field: String,
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(field: impl Into<String>, min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ChartError::InvalidData(
                "axis range bounds must be finite with min <= max".to_owned(),
            ));
        }
        Ok(Self {
            field: field.into(),
            min,
            max,
        })
    }

    /// Zero-size range pinned at `value`; every row maps to the axis midpoint.
    #[must_use]
    pub fn degenerate(field: impl Into<String>, value: f64) -> Self {
        Self {
            field: field.into(),
            min: value,
            max: value,
        }
    }

    #[must_use]
    pub fn size(&self) -> f64 {
        (self.max - self.min).max(0.0)
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.size() == 0.0
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Min/max of `field` over the given rows, ignoring missing values.
    #[must_use]
    pub fn from_rows<'a>(field: &str, rows: impl IntoIterator<Item = &'a Row>) -> Option<Self> {
        let mut bounds: Option<(OrderedFloat<f64>, OrderedFloat<f64>)> = None;
        for value in rows.into_iter().filter_map(|row| row.value(field)) {
            let value = OrderedFloat(value);
            bounds = Some(match bounds {
                Some((min, max)) => (min.min(value), max.max(value)),
                None => (value, value),
            });
        }
        bounds.map(|(min, max)| Self {
            field: field.to_owned(),
            min: min.into_inner(),
            max: max.into_inner(),
        })
    }
}

/// Externally supplied global axis bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeOverride {
    pub min: f64,
    pub max: f64,
    pub enabled: bool,
}

impl Default for RangeOverride {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            enabled: false,
        }
    }
}

impl RangeOverride {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            enabled: true,
        }
    }

    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            enabled: false,
        }
    }

    /// Finite bounds with `min <= max`.
    #[must_use]
    pub fn is_usable(self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    /// Bounds to use for `field`, or `None` when the override does not apply.
    #[must_use]
    pub fn bounds_for(self, field: &str, excluded_columns: &[String]) -> Option<(f64, f64)> {
        if !self.enabled || excluded_columns.iter().any(|column| column == field) {
            return None;
        }
        if !self.is_usable() {
            trace!(field, "invalid global range override skipped");
            return None;
        }
        Some((self.min, self.max))
    }
}

/// Resolves the range for `field` for one render pass.
///
/// Order: applicable global override, then the `subset` of rows (all rows
/// when `None`), then the full dataset, then a degenerate range at zero.
#[must_use]
pub fn resolve_axis_range(
    field: &str,
    rows: &[Row],
    subset: Option<&[usize]>,
    range_override: RangeOverride,
    override_excluded: &[String],
) -> AxisRange {
    if let Some((min, max)) = range_override.bounds_for(field, override_excluded) {
        return AxisRange {
            field: field.to_owned(),
            min,
            max,
        };
    }

    let from_subset = match subset {
        Some(indices) => {
            AxisRange::from_rows(field, indices.iter().filter_map(|&index| rows.get(index)))
        }
        None => AxisRange::from_rows(field, rows),
    };
    from_subset
        .or_else(|| AxisRange::from_rows(field, rows))
        .unwrap_or_else(|| AxisRange::degenerate(field, 0.0))
}

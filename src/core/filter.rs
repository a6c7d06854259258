use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Row;

/// One axis's active brush in both pixel space and data space.
///
/// `top`/`bottom`/`height` are relative to the axis's usable pixel span
/// (gutter already removed). `min`/`max` are derived from the axis range in
/// effect when the brush was last updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub field: String,
    pub top: f64,
    pub bottom: f64,
    pub height: f64,
    pub min: f64,
    pub max: f64,
}

impl Filter {
    /// Inclusive data-space test. Rows without a value for `field` fail.
    #[must_use]
    pub fn accepts(&self, row: &Row) -> bool {
        row.value(&self.field)
            .is_some_and(|value| value >= self.min && value <= self.max)
    }
}

/// Outcome of a filter-set mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChange {
    Unchanged,
    Changed,
}

impl FilterChange {
    #[must_use]
    pub const fn is_changed(self) -> bool {
        matches!(self, Self::Changed)
    }

    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        if self.is_changed() || other.is_changed() {
            Self::Changed
        } else {
            Self::Unchanged
        }
    }
}

/// Mapping from column name to its active filter.
///
/// Insertion order is kept so snapshots stay stable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterSet {
    filters: IndexMap<String, Filter>,
}

impl FilterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the filter for `filter.field`.
    pub fn add(&mut self, filter: Filter) -> FilterChange {
        if self.filters.get(&filter.field) == Some(&filter) {
            return FilterChange::Unchanged;
        }
        self.filters.insert(filter.field.clone(), filter);
        FilterChange::Changed
    }

    pub fn remove(&mut self, field: &str) -> FilterChange {
        match self.filters.shift_remove(field) {
            Some(_) => FilterChange::Changed,
            None => FilterChange::Unchanged,
        }
    }

    pub fn clear(&mut self) -> FilterChange {
        if self.filters.is_empty() {
            return FilterChange::Unchanged;
        }
        self.filters.clear();
        FilterChange::Changed
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Filter> {
        self.filters.get(field)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.filters.contains_key(field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.filters.values()
    }

    /// True when `row` satisfies every filter (intersection).
    #[must_use]
    pub fn accepts(&self, row: &Row) -> bool {
        self.filters.values().all(|filter| filter.accepts(row))
    }
}

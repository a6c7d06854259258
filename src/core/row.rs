use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Stable row identity used for the selected-row highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowId(u64);

impl RowId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Categorical row level. Only used for stroke color selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Low,
    Mid,
    High,
    /// A raw level outside the known set. Rendered with the fallback stroke.
    Unknown(i64),
}

impl Level {
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        match raw {
            1 => Self::Low,
            2 => Self::Mid,
            3 => Self::High,
            other => Self::Unknown(other),
        }
    }

    #[must_use]
    pub const fn raw(self) -> i64 {
        match self {
            Self::Low => 1,
            Self::Mid => 2,
            Self::High => 3,
            Self::Unknown(raw) => raw,
        }
    }

    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

/// One immutable dataset record: numeric values keyed by column name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    pub level: Level,
    values: IndexMap<String, f64>,
}

impl Row {
    #[must_use]
    pub fn new(id: RowId, level: Level) -> Self {
        Self {
            id,
            level,
            values: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, column: impl Into<String>, value: f64) -> Self {
        self.values.insert(column.into(), value);
        self
    }

    /// Returns the finite value stored for `column`.
    ///
    /// Missing and non-finite values both read as `None`.
    #[must_use]
    pub fn value(&self, column: &str) -> Option<f64> {
        self.values
            .get(column)
            .copied()
            .filter(|value| value.is_finite())
    }

    #[must_use]
    pub fn values(&self) -> &IndexMap<String, f64> {
        &self.values
    }
}

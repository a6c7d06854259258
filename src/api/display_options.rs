use serde::{Deserialize, Serialize};

use crate::core::{RangeOverride, RowId};

/// How consecutive axis points of a row are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineDrawMode {
    Straight,
    /// Cubic curve with control points at 70%/30% of the gap between axes.
    #[default]
    Curved,
}

/// Rows an axis range is computed from when no override applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisRangeSource {
    /// Currently filtered rows; axes zoom into the brushed subset.
    #[default]
    Filtered,
    /// Full dataset; axes stay fixed while brushing.
    AllRows,
}

/// Host-controlled display inputs read at render time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayOptions {
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default = "RangeOverride::disabled")]
    pub range_override: RangeOverride,
    #[serde(default)]
    pub range_source: AxisRangeSource,
    #[serde(default)]
    pub density_enabled: bool,
    #[serde(default)]
    pub line_draw_mode: LineDrawMode,
    #[serde(default)]
    pub selected_row: Option<RowId>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            opacity: default_opacity(),
            range_override: RangeOverride::disabled(),
            range_source: AxisRangeSource::default(),
            density_enabled: false,
            line_draw_mode: LineDrawMode::default(),
            selected_row: None,
        }
    }
}

fn default_opacity() -> f64 {
    0.2
}

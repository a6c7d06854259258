use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Gutter, Point, Viewport};
use crate::error::{ChartError, ChartResult};

use super::{DensityColorMap, DisplayOptions, RenderStyle};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can keep chart setup in a
/// config file instead of inventing their own format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    /// Initial axis order. Also the full set of axes the chart can show.
    pub columns: Vec<String>,
    #[serde(default)]
    pub gutter: Gutter,
    /// Display names keyed by column.
    #[serde(default)]
    pub aliases: IndexMap<String, String>,
    /// Columns the global range override never applies to.
    #[serde(default = "default_override_excluded_columns")]
    pub override_excluded_columns: Vec<String>,
    #[serde(default)]
    pub display: DisplayOptions,
    #[serde(default)]
    pub style: RenderStyle,
    #[serde(default)]
    pub density_color_map: DensityColorMap,
    /// Page-space position of the chart container's top-left corner.
    #[serde(default)]
    pub container_origin: Option<Point>,
}

impl ChartEngineConfig {
    /// Creates a config with default gutter, style and display options.
    #[must_use]
    pub fn new<I, S>(viewport: Viewport, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            viewport,
            columns: columns.into_iter().map(Into::into).collect(),
            gutter: Gutter::default(),
            aliases: IndexMap::new(),
            override_excluded_columns: default_override_excluded_columns(),
            display: DisplayOptions::default(),
            style: RenderStyle::default(),
            density_color_map: DensityColorMap::default(),
            container_origin: None,
        }
    }

    #[must_use]
    pub fn with_gutter(mut self, gutter: Gutter) -> Self {
        self.gutter = gutter;
        self
    }

    /// Sets the label shown above `column` instead of its raw name.
    #[must_use]
    pub fn with_alias(mut self, column: impl Into<String>, alias: impl Into<String>) -> Self {
        self.aliases.insert(column.into(), alias.into());
        self
    }

    #[must_use]
    pub fn with_override_excluded_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.override_excluded_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_display_options(mut self, display: DisplayOptions) -> Self {
        self.display = display;
        self
    }

    #[must_use]
    pub fn with_render_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_density_color_map(mut self, color_map: DensityColorMap) -> Self {
        self.density_color_map = color_map;
        self
    }

    #[must_use]
    pub fn with_container_origin(mut self, origin: Point) -> Self {
        self.container_origin = Some(origin);
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse engine config: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize engine config: {e}")))
    }
}

fn default_override_excluded_columns() -> Vec<String> {
    ["Level", "Subject", "Question_Number"]
        .into_iter()
        .map(str::to_owned)
        .collect()
}

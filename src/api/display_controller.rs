use tracing::{debug, warn};

use crate::core::{RangeOverride, RowId, RowModel};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::validation::{validate_density_color_map, validate_opacity, validate_render_style};
use super::{
    AxisRangeSource, ChartEngine, DensityColorMap, DensityGradient, DisplayOptions,
    InvalidationLevel, LineDrawMode, RenderStyle,
};

impl<R: Renderer, M: RowModel> ChartEngine<R, M> {
    #[must_use]
    pub fn display_options(&self) -> DisplayOptions {
        self.display
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    #[must_use]
    pub fn density_color_map(&self) -> DensityColorMap {
        self.density_color_map
    }

    #[must_use]
    pub fn density_gradient(&self) -> &DensityGradient {
        &self.density_gradient
    }

    /// Sets the stroke alpha used for rows with a known level.
    pub fn set_opacity(&mut self, opacity: f64) -> ChartResult<()> {
        let opacity = validate_opacity(opacity)?;
        if opacity == self.display.opacity {
            return Ok(());
        }
        self.display.opacity = opacity;
        debug!(opacity, "opacity changed");
        self.flush_redraw(InvalidationLevel::Full);
        Ok(())
    }

    /// Installs a global range override. Invalid bounds are accepted here,
    /// logged once, and ignored by the range pass.
    pub fn set_range_override(&mut self, range_override: RangeOverride) {
        warn_if_unusable(range_override);
        self.update_display(|display| display.range_override = range_override);
    }

    pub fn set_range_source(&mut self, range_source: AxisRangeSource) {
        self.update_display(|display| display.range_source = range_source);
    }

    pub fn set_density_enabled(&mut self, enabled: bool) {
        self.update_display(|display| display.density_enabled = enabled);
    }

    pub fn set_line_draw_mode(&mut self, mode: LineDrawMode) {
        self.update_display(|display| display.line_draw_mode = mode);
    }

    /// Highlights one row; `None` removes the highlight.
    pub fn set_selected_row(&mut self, row: Option<RowId>) {
        self.update_display(|display| display.selected_row = row);
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        let style = validate_render_style(style)?;
        self.style = style;
        self.flush_redraw(InvalidationLevel::Full);
        Ok(())
    }

    /// Replaces the density colors and rebuilds the gradient table.
    pub fn set_density_color_map(&mut self, color_map: DensityColorMap) -> ChartResult<()> {
        validate_density_color_map(color_map)?;
        self.density_color_map = color_map;
        self.density_gradient = DensityGradient::new(color_map);
        let level = if self.display.density_enabled {
            InvalidationLevel::Full
        } else {
            InvalidationLevel::None
        };
        self.flush_redraw(level);
        Ok(())
    }

    fn update_display(&mut self, update: impl FnOnce(&mut DisplayOptions)) {
        let previous = self.display;
        update(&mut self.display);
        if self.display != previous {
            debug!(display = ?self.display, "display options changed");
            self.flush_redraw(InvalidationLevel::Full);
        }
    }
}

pub(super) fn warn_if_unusable(range_override: RangeOverride) {
    if range_override.enabled && !range_override.is_usable() {
        warn!(
            min = range_override.min,
            max = range_override.max,
            "global range override has invalid bounds and will be ignored"
        );
    }
}

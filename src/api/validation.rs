use crate::error::{ChartError, ChartResult};
use crate::interaction::AXIS_HIT_PADDING;

use super::{ChartEngineConfig, DensityColorMap, DisplayOptions, RenderStyle};

pub(super) fn validate_engine_config(config: &ChartEngineConfig) -> ChartResult<()> {
    if !config.viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }
    config.gutter.validate()?;
    if config.gutter.y < AXIS_HIT_PADDING {
        return Err(ChartError::InvalidData(format!(
            "vertical gutter must be >= {AXIS_HIT_PADDING}px to fit the axis hit padding"
        )));
    }
    let pixel_span = f64::from(config.viewport.height) - 2.0 * config.gutter.y;
    if pixel_span <= 0.0 {
        return Err(ChartError::InvalidData(
            "viewport height must exceed twice the vertical gutter".to_owned(),
        ));
    }
    if f64::from(config.viewport.width) <= config.gutter.x {
        return Err(ChartError::InvalidData(
            "viewport width must exceed the horizontal gutter".to_owned(),
        ));
    }
    if let Some(origin) = config.container_origin {
        if !origin.x.is_finite() || !origin.y.is_finite() {
            return Err(ChartError::InvalidData(
                "container origin must be finite".to_owned(),
            ));
        }
    }
    for (column, alias) in &config.aliases {
        if alias.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "alias for column `{column}` must not be empty"
            )));
        }
    }
    validate_display_options(config.display)?;
    validate_render_style(config.style)?;
    validate_density_color_map(config.density_color_map)
}

pub(super) fn validate_opacity(opacity: f64) -> ChartResult<f64> {
    if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
        return Err(ChartError::InvalidData(
            "opacity must be finite and in [0, 1]".to_owned(),
        ));
    }
    Ok(opacity)
}

/// Range overrides are not validated here: invalid bounds are ignored per
/// render pass instead.
pub(super) fn validate_display_options(options: DisplayOptions) -> ChartResult<DisplayOptions> {
    validate_opacity(options.opacity)?;
    Ok(options)
}

pub(super) fn validate_render_style(style: RenderStyle) -> ChartResult<RenderStyle> {
    for color in [
        style.palette.low,
        style.palette.mid,
        style.palette.high,
        style.fallback_stroke_color,
        style.highlight_color,
        style.point_color,
        style.text_color,
        style.selection_fill_color,
    ] {
        color.validate()?;
    }
    for (name, value) in [
        ("line_stroke_width", style.line_stroke_width),
        ("highlight_stroke_width", style.highlight_stroke_width),
        ("point_size_px", style.point_size_px),
        ("axis_label_font_size_px", style.axis_label_font_size_px),
        ("range_label_font_size_px", style.range_label_font_size_px),
        ("density_mark_height_px", style.density_mark_height_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "render style `{name}` must be finite and > 0"
            )));
        }
    }
    Ok(style)
}

pub(super) fn validate_density_color_map(map: DensityColorMap) -> ChartResult<()> {
    map.sparse.validate()?;
    map.dense.validate()?;
    validate_opacity(map.alpha).map_err(|_| {
        ChartError::InvalidData("density alpha must be finite and in [0, 1]".to_owned())
    })?;
    Ok(())
}

//! Per-frame render pipeline: axis ranges, density strips, points, row paths
//! and labels.
//!
//! Everything here is a pure function of its inputs. Anomalies degrade the
//! frame (fallback colors, midpoint placement) instead of failing it.

use indexmap::IndexMap;
use tracing::{trace, warn};

use crate::core::{
    AxisRange, ChartLayout, Gutter, Row, Viewport, resolve_axis_range, value_to_pixel,
};
use crate::interaction::{AXIS_HIT_PADDING, AXIS_STRIP_WIDTH, SelectionRect};
use crate::render::{
    AxisSurfaceFrame, Color, PathPrimitive, PathSegment, PathSegments, RectPrimitive, RenderFrame,
    SurfaceFrame, TextHAlign, TextPrimitive,
};

use super::{AxisRangeSource, DensityGradient, DisplayOptions, LineDrawMode, RenderStyle, density};

/// Horizontal offset of the control points of a curved segment, as a share
/// of the gap between consecutive axes.
const CURVE_LEAD: f64 = 0.7;
const CURVE_TRAIL: f64 = 0.3;

const AXIS_LABEL_Y: f64 = 12.0;
const MAX_LABEL_Y: f64 = 28.0;
const MIN_LABEL_BOTTOM_OFFSET: f64 = 24.0;

/// Borrowed inputs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderPipeline<'a> {
    pub viewport: Viewport,
    pub gutter: Gutter,
    pub layout: &'a ChartLayout,
    pub ranges: &'a IndexMap<String, AxisRange>,
    pub rows: &'a [Row],
    pub filtered: &'a [usize],
    pub aliases: &'a IndexMap<String, String>,
    pub display: &'a DisplayOptions,
    pub style: &'a RenderStyle,
    pub density_gradient: &'a DensityGradient,
    pub selection: Option<SelectionRect>,
}

/// Range pass: one `AxisRange` per active column.
#[must_use]
pub fn resolve_ranges(
    layout: &ChartLayout,
    rows: &[Row],
    filtered: &[usize],
    display: &DisplayOptions,
    override_excluded: &[String],
) -> IndexMap<String, AxisRange> {
    let subset = match display.range_source {
        AxisRangeSource::Filtered => Some(filtered),
        AxisRangeSource::AllRows => None,
    };
    layout
        .columns()
        .map(|column| {
            (
                column.to_owned(),
                resolve_axis_range(
                    column,
                    rows,
                    subset,
                    display.range_override,
                    override_excluded,
                ),
            )
        })
        .collect()
}

/// Selection preview surface. Empty when no rectangle is being dragged.
#[must_use]
pub fn overlay_surface(selection: Option<SelectionRect>, style: &RenderStyle) -> SurfaceFrame {
    let mut overlay = SurfaceFrame::new();
    if let Some(rect) = selection {
        overlay.rects.push(RectPrimitive::new(
            rect.min.x,
            rect.min.y,
            rect.width(),
            rect.height(),
            style.selection_fill_color,
        ));
    }
    overlay
}

impl RenderPipeline<'_> {
    #[must_use]
    pub fn build(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        frame.axes = self
            .layout
            .positions()
            .iter()
            .filter_map(|(column, &x)| {
                let range = self.ranges.get(column)?;
                Some(self.axis_surface(column, x, range))
            })
            .collect();
        self.line_pass(&mut frame.chart);
        self.label_pass(&mut frame.chart);
        frame.overlay = overlay_surface(self.selection, self.style);
        trace!(
            paths = frame.chart.paths.len(),
            axes = frame.axes.len(),
            "built render frame"
        );
        frame
    }

    fn chart_height(&self) -> f64 {
        f64::from(self.viewport.height)
    }

    fn filtered_rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.filtered
            .iter()
            .filter_map(|&index| self.rows.get(index))
    }

    fn row_y(&self, row: &Row, column: &str, range: &AxisRange) -> f64 {
        value_to_pixel(row.value(column), self.gutter.y, self.chart_height(), range)
    }

    /// Density and point passes for one axis strip.
    fn axis_surface(&self, column: &str, x: f64, range: &AxisRange) -> AxisSurfaceFrame {
        let strip_top = self.gutter.y - AXIS_HIT_PADDING;
        let strip_height = self.chart_height() - 2.0 * strip_top;
        let center = AXIS_STRIP_WIDTH / 2.0;
        let ys: Vec<f64> = self
            .filtered_rows()
            .map(|row| self.row_y(row, column, range) - strip_top)
            .collect();

        let mut surface = SurfaceFrame::new();
        if self.display.density_enabled {
            let half_mark = self.style.density_mark_height_px / 2.0;
            for (bucket, count) in density::bucket_counts(ys.iter().copied()) {
                let stop = self.density_gradient.stop(count);
                surface.rects.push(RectPrimitive::new(
                    center - stop.width / 2.0,
                    bucket as f64 - half_mark,
                    stop.width,
                    self.style.density_mark_height_px,
                    stop.color,
                ));
            }
        }

        let size = self.style.point_size_px;
        surface.rects.extend(ys.iter().map(|&y| {
            RectPrimitive::new(
                center - size / 2.0 - 0.5,
                y - size / 2.0,
                size,
                size,
                self.style.point_color,
            )
        }));

        AxisSurfaceFrame {
            field: column.to_owned(),
            left: x - center,
            top: strip_top,
            width: AXIS_STRIP_WIDTH,
            height: strip_height,
            surface,
        }
    }

    /// Row paths. The selected row is drawn after every other row.
    fn line_pass(&self, chart: &mut SurfaceFrame) {
        let filtered_len = self.filtered.len();
        if filtered_len == 0 {
            return;
        }
        let fallback = self
            .style
            .fallback_stroke_color
            .with_alpha((3.0 / (filtered_len as f64).sqrt()).min(1.0));

        let mut unknown_levels = 0_usize;
        let mut highlighted = Vec::new();
        for row in self.filtered_rows() {
            if self.display.selected_row == Some(row.id) {
                highlighted.push(row);
                continue;
            }
            let color = match self.style.palette.color_for(row.level) {
                Some(color) => color.with_alpha(self.display.opacity),
                None => {
                    unknown_levels += 1;
                    trace!(row = row.id.raw(), level = row.level.raw(), "unknown row level");
                    fallback
                }
            };
            if let Some(path) = self.row_path(row, self.style.line_stroke_width, color) {
                chart.paths.push(path);
            }
        }
        if unknown_levels > 0 {
            warn!(
                rows = unknown_levels,
                "rows with unknown level drawn with fallback stroke"
            );
        }

        for row in highlighted {
            if let Some(path) = self.row_path(
                row,
                self.style.highlight_stroke_width,
                self.style.highlight_color,
            ) {
                chart.paths.push(path);
            }
        }
    }

    fn row_path(&self, row: &Row, stroke_width: f64, color: Color) -> Option<PathPrimitive> {
        let mut segments = PathSegments::new();
        let mut previous: Option<(f64, f64)> = None;
        for (column, &x) in self.layout.positions() {
            let Some(range) = self.ranges.get(column) else {
                continue;
            };
            let y = self.row_y(row, column, range);
            let segment = match (previous, self.display.line_draw_mode) {
                (None, _) => PathSegment::MoveTo { x, y },
                (Some(_), LineDrawMode::Straight) => PathSegment::LineTo { x, y },
                (Some((x0, y0)), LineDrawMode::Curved) => PathSegment::CubicTo {
                    c1x: x - CURVE_LEAD * (x - x0),
                    c1y: y0,
                    c2x: x - CURVE_TRAIL * (x - x0),
                    c2y: y,
                    x,
                    y,
                },
            };
            segments.push(segment);
            previous = Some((x, y));
        }
        if segments.is_empty() {
            return None;
        }
        Some(PathPrimitive::new(segments, stroke_width, color))
    }

    /// Axis name (or alias) on top, then the range max and min.
    fn label_pass(&self, chart: &mut SurfaceFrame) {
        let min_label_y = self.chart_height() - MIN_LABEL_BOTTOM_OFFSET;
        for (column, &x) in self.layout.positions() {
            let name = self
                .aliases
                .get(column)
                .map_or(column.as_str(), String::as_str);
            chart.texts.push(
                TextPrimitive::new(
                    name,
                    x,
                    AXIS_LABEL_Y,
                    self.style.axis_label_font_size_px,
                    self.style.text_color,
                    TextHAlign::Left,
                )
                .bold(),
            );

            let Some(range) = self.ranges.get(column) else {
                continue;
            };
            for (value, y) in [(range.max, MAX_LABEL_Y), (range.min, min_label_y)] {
                chart.texts.push(TextPrimitive::new(
                    format_axis_value(value),
                    x,
                    y,
                    self.style.range_label_font_size_px,
                    self.style.text_color,
                    TextHAlign::Left,
                ));
            }
        }
    }
}

/// Integers without decimals, everything else with up to four decimals.
#[must_use]
pub fn format_axis_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{value:.0}");
    }
    let text = format!("{value:.4}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_owned()
    } else {
        text.to_owned()
    }
}

use indexmap::IndexMap;
use tracing::debug;

use crate::core::{
    AxisRange, ChartLayout, Gutter, InMemoryRowModel, Point, Row, RowModel, Viewport,
};
use crate::error::ChartResult;
use crate::extensions::ChartPlugin;
use crate::interaction::{AxisFilter, InteractionMode, SelectionController, SelectionRect};
use crate::render::{RenderFrame, Renderer};

use super::display_controller::warn_if_unusable;
use super::render_pipeline::{RenderPipeline, resolve_ranges};
use super::validation::validate_engine_config;
use super::{ChartEngineConfig, DensityColorMap, DensityGradient, DisplayOptions, PluginEvent, RenderStyle};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the axis layout, per-axis brushes and the rectangle
/// selection, publishes filter changes to the row model and turns the
/// latest state into render frames.
pub struct ChartEngine<R: Renderer, M: RowModel = InMemoryRowModel> {
    pub(super) renderer: R,
    pub(super) model: M,
    pub(super) viewport: Viewport,
    pub(super) gutter: Gutter,
    pub(super) container_origin: Option<Point>,
    pub(super) layout: ChartLayout,
    pub(super) axes: IndexMap<String, AxisFilter>,
    pub(super) ranges: IndexMap<String, AxisRange>,
    pub(super) selection: SelectionController,
    pub(super) aliases: IndexMap<String, String>,
    pub(super) override_excluded_columns: Vec<String>,
    pub(super) display: DisplayOptions,
    pub(super) style: RenderStyle,
    pub(super) density_color_map: DensityColorMap,
    pub(super) density_gradient: DensityGradient,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
}

impl<R: Renderer> ChartEngine<R, InMemoryRowModel> {
    /// Builds an engine over an in-memory model holding `rows`.
    pub fn with_rows(renderer: R, rows: Vec<Row>, config: ChartEngineConfig) -> ChartResult<Self> {
        Self::new(renderer, InMemoryRowModel::new(rows), config)
    }
}

impl<R: Renderer, M: RowModel> ChartEngine<R, M> {
    pub fn new(renderer: R, model: M, config: ChartEngineConfig) -> ChartResult<Self> {
        validate_engine_config(&config)?;
        warn_if_unusable(config.display.range_override);
        let layout = ChartLayout::new(
            config.columns,
            f64::from(config.viewport.width),
            config.gutter.x,
        )?;
        let axes = layout
            .all_columns()
            .iter()
            .map(|column| (column.clone(), AxisFilter::new(column.clone())))
            .collect();

        let mut engine = Self {
            renderer,
            model,
            viewport: config.viewport,
            gutter: config.gutter,
            container_origin: config.container_origin,
            layout,
            axes,
            ranges: IndexMap::new(),
            selection: SelectionController::default(),
            aliases: config.aliases,
            override_excluded_columns: config.override_excluded_columns,
            display: config.display,
            style: config.style,
            density_gradient: DensityGradient::new(config.density_color_map),
            density_color_map: config.density_color_map,
            plugins: Vec::new(),
        };
        engine.refresh_axis_ranges();
        debug!(
            columns = engine.layout.len(),
            rows = engine.model.rows().len(),
            "chart engine initialized"
        );
        Ok(engine)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn gutter(&self) -> Gutter {
        self.gutter
    }

    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    #[must_use]
    pub fn axis(&self, column: &str) -> Option<&AxisFilter> {
        self.axes.get(column)
    }

    /// Every axis, visible or hidden, in original column order.
    #[must_use]
    pub fn axes(&self) -> &IndexMap<String, AxisFilter> {
        &self.axes
    }

    /// Ranges from the latest range pass, keyed by active column.
    #[must_use]
    pub fn axis_ranges(&self) -> &IndexMap<String, AxisRange> {
        &self.ranges
    }

    #[must_use]
    pub fn axis_range(&self, column: &str) -> Option<&AxisRange> {
        self.ranges.get(column)
    }

    #[must_use]
    pub fn aliases(&self) -> &IndexMap<String, String> {
        &self.aliases
    }

    #[must_use]
    pub fn override_excluded_columns(&self) -> &[String] {
        &self.override_excluded_columns
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        if self.selection.is_selecting() {
            return InteractionMode::Selecting;
        }
        self.axes
            .values()
            .find(|axis| axis.is_dragging())
            .map_or(InteractionMode::Idle, |axis| {
                InteractionMode::Brushing(axis.field().to_owned())
            })
    }

    /// Rectangle currently being dragged, container-relative.
    #[must_use]
    pub fn selection_rectangle(&self) -> Option<SelectionRect> {
        self.selection.rectangle()
    }

    /// Height of the usable vertical span shared by every axis.
    #[must_use]
    pub fn pixel_span(&self) -> f64 {
        f64::from(self.viewport.height) - 2.0 * self.gutter.y
    }

    /// Range pass: recomputes every active axis range and hands it to the
    /// axis so later gestures map pixels against the range on screen.
    pub(super) fn refresh_axis_ranges(&mut self) {
        self.ranges = resolve_ranges(
            &self.layout,
            self.model.rows(),
            self.model.filtered_indices(),
            &self.display,
            &self.override_excluded_columns,
        );
        for (column, range) in &self.ranges {
            if let Some(axis) = self.axes.get_mut(column) {
                axis.set_range(range.clone());
            }
        }
    }

    /// Runs every render pass against the latest state.
    pub fn build_render_frame(&mut self) -> RenderFrame {
        self.refresh_axis_ranges();
        RenderPipeline {
            viewport: self.viewport,
            gutter: self.gutter,
            layout: &self.layout,
            ranges: &self.ranges,
            rows: self.model.rows(),
            filtered: self.model.filtered_indices(),
            aliases: &self.aliases,
            display: &self.display,
            style: &self.style,
            density_gradient: &self.density_gradient,
            selection: self.selection.rectangle(),
        }
        .build()
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)?;
        debug!(
            paths = frame.chart.paths.len(),
            axes = frame.axes.len(),
            filtered = self.model.filtered_indices().len(),
            "rendered chart"
        );
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by toolkit draw callbacks while keeping the renderer
    /// implementation decoupled from toolkit-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame();
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }
}

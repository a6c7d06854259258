use cairo::{Context, Format, ImageSurface, Operator};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, PathSegment, RenderFrame, Renderer, SurfaceFrame, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub paths_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
    pub axis_surfaces_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a toolkit draw callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// The chart and axis strips are drawn onto one image surface; the selection
/// overlay has its own transparent surface so it can be redrawn alone while a
/// rectangle drag is in progress.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    overlay: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let overlay = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create overlay surface", err))?;
        Ok(Self {
            surface,
            overlay,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn overlay_surface(&self) -> &ImageSurface {
        &self.overlay
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        draw_surface(context, &frame.chart, &mut stats)?;

        for axis in &frame.axes {
            context
                .save()
                .map_err(|err| map_backend_error("failed to save context", err))?;
            context.translate(axis.left, axis.top);
            context.rectangle(0.0, 0.0, axis.width, axis.height);
            context.clip();
            draw_surface(context, &axis.surface, &mut stats)?;
            context
                .restore()
                .map_err(|err| map_backend_error("failed to restore context", err))?;
            stats.axis_surfaces_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }

    fn render_overlay_surface(&mut self, overlay: &SurfaceFrame) -> ChartResult<()> {
        overlay.validate()?;
        let context = Context::new(&self.overlay)
            .map_err(|err| map_backend_error("failed to create overlay context", err))?;
        context.set_operator(Operator::Clear);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear overlay", err))?;
        context.set_operator(Operator::Over);
        let mut stats = CairoRenderStats::default();
        draw_surface(&context, overlay, &mut stats)
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)?;
        self.render_overlay_surface(&frame.overlay)
    }

    fn render_overlay(&mut self, overlay: &SurfaceFrame) -> ChartResult<()> {
        self.render_overlay_surface(overlay)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)?;
        let mut stats = self.last_stats;
        draw_surface(context, &frame.overlay, &mut stats)?;
        self.last_stats = stats;
        Ok(())
    }
}

fn draw_surface(
    context: &Context,
    surface: &SurfaceFrame,
    stats: &mut CairoRenderStats,
) -> ChartResult<()> {
    for rect in &surface.rects {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        apply_color(context, rect.fill_color);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        stats.rects_drawn += 1;
    }

    for path in &surface.paths {
        context.new_path();
        for segment in &path.segments {
            match *segment {
                PathSegment::MoveTo { x, y } => context.move_to(x, y),
                PathSegment::LineTo { x, y } => context.line_to(x, y),
                PathSegment::CubicTo {
                    c1x,
                    c1y,
                    c2x,
                    c2y,
                    x,
                    y,
                } => context.curve_to(c1x, c1y, c2x, c2y, x, y),
            }
        }
        apply_color(context, path.color);
        context.set_line_width(path.stroke_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke path", err))?;
        stats.paths_drawn += 1;
    }

    for text in &surface.texts {
        let layout = pangocairo::functions::create_layout(context);
        let mut font_description =
            FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        if text.bold {
            font_description.set_weight(pango::Weight::Bold);
        }
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, _text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };

        apply_color(context, text.color);
        context.move_to(x, text.y);
        pangocairo::functions::show_layout(context, &layout);
        stats.texts_drawn += 1;
    }

    Ok(())
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}

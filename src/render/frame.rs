use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{PathPrimitive, RectPrimitive, TextPrimitive};

/// Primitives for one drawing surface, in that surface's local pixel space.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SurfaceFrame {
    pub paths: Vec<PathPrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl SurfaceFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_path(mut self, path: PathPrimitive) -> Self {
        self.paths.push(path);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        for path in &self.paths {
            path.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}

/// 40px-wide strip drawn behind one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSurfaceFrame {
    pub field: String,
    /// Chart-space left edge of the strip.
    pub left: f64,
    /// Chart-space top edge of the strip.
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub surface: SurfaceFrame,
}

/// Backend-agnostic scene for one chart draw pass.
///
/// `chart` holds the row paths and labels, `axes` the per-axis point and
/// density strips, `overlay` the rectangle-selection preview.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub chart: SurfaceFrame,
    pub axes: Vec<AxisSurfaceFrame>,
    pub overlay: SurfaceFrame,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            chart: SurfaceFrame::new(),
            axes: Vec::new(),
            overlay: SurfaceFrame::new(),
        }
    }

    #[must_use]
    pub fn axis(&self, field: &str) -> Option<&AxisSurfaceFrame> {
        self.axes.iter().find(|axis| axis.field == field)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        self.chart.validate()?;
        for axis in &self.axes {
            if !axis.left.is_finite() || !axis.top.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "axis surface `{}` position must be finite",
                    axis.field
                )));
            }
            axis.surface.validate()?;
        }
        self.overlay.validate()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chart.is_empty()
            && self.overlay.is_empty()
            && self.axes.iter().all(|axis| axis.surface.is_empty())
    }
}

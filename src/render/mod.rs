mod frame;
mod null_renderer;
mod primitives;

pub use frame::{AxisSurfaceFrame, RenderFrame, SurfaceFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, PathPrimitive, PathSegment, PathSegments, RectPrimitive, TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` so drawing code stays
/// isolated from filter and interaction logic.
pub trait Renderer {
    /// Clears and redraws every surface.
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;

    /// Clears and redraws only the selection overlay.
    fn render_overlay(&mut self, overlay: &SurfaceFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};

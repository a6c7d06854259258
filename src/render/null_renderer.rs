use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer, SurfaceFrame};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests catch invalid geometry (for
/// example `NaN` coordinates) without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub overlays_rendered: usize,
    pub last_path_count: usize,
    pub last_text_count: usize,
    pub last_overlay_rect_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_path_count = frame.chart.paths.len();
        self.last_text_count = frame.chart.texts.len();
        self.last_overlay_rect_count = frame.overlay.rects.len();
        self.last_frame = Some(frame.clone());
        Ok(())
    }

    fn render_overlay(&mut self, overlay: &SurfaceFrame) -> ChartResult<()> {
        overlay.validate()?;
        self.overlays_rendered += 1;
        self.last_overlay_rect_count = overlay.rects.len();
        Ok(())
    }
}

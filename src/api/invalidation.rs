use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::RowModel;
use crate::render::Renderer;

use super::ChartEngine;
use super::render_pipeline::overlay_surface;

/// Ordered repaint classes. Each handler folds its requests into one level
/// and redraws once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum InvalidationLevel {
    #[default]
    None,
    /// Only the selection overlay changed.
    Overlay,
    /// Filters, ranges, layout or style changed.
    Full,
}

impl InvalidationLevel {
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self as u8 >= other as u8 {
            self
        } else {
            other
        }
    }
}

impl<R: Renderer, M: RowModel> ChartEngine<R, M> {
    /// Redraws for an interaction or setter.
    ///
    /// Renderer failures are logged and swallowed so a broken backend never
    /// leaves a gesture half applied.
    pub(super) fn flush_redraw(&mut self, level: InvalidationLevel) {
        match level {
            InvalidationLevel::None => {}
            InvalidationLevel::Overlay => {
                let overlay = overlay_surface(self.selection.rectangle(), &self.style);
                trace!(rects = overlay.rects.len(), "redraw selection overlay");
                if let Err(err) = self.renderer.render_overlay(&overlay) {
                    warn!(error = %err, "overlay redraw failed");
                }
            }
            InvalidationLevel::Full => {
                if let Err(err) = self.render() {
                    warn!(error = %err, "chart redraw failed");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::InvalidationLevel;

    #[test]
    fn levels_coalesce_to_strongest() {
        assert_eq!(
            InvalidationLevel::None.max(InvalidationLevel::Overlay),
            InvalidationLevel::Overlay
        );
        assert_eq!(
            InvalidationLevel::Full.max(InvalidationLevel::Overlay),
            InvalidationLevel::Full
        );
        assert_eq!(
            InvalidationLevel::None.max(InvalidationLevel::None),
            InvalidationLevel::None
        );
    }
}

use serde::{Deserialize, Serialize};

use crate::core::Level;
use crate::render::Color;

/// Stroke color per known row level. Alpha comes from the global opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelPalette {
    pub low: Color,
    pub mid: Color,
    pub high: Color,
}

impl Default for LevelPalette {
    fn default() -> Self {
        Self {
            low: Color::rgb8(239, 64, 166),
            mid: Color::rgb8(177, 191, 51),
            high: Color::rgb8(64, 208, 239),
        }
    }
}

impl LevelPalette {
    /// Color for a known level, or `None` for `Level::Unknown`.
    #[must_use]
    pub fn color_for(self, level: Level) -> Option<Color> {
        match level {
            Level::Low => Some(self.low),
            Level::Mid => Some(self.mid),
            Level::High => Some(self.high),
            Level::Unknown(_) => None,
        }
    }
}

/// Style contract for every render frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub palette: LevelPalette,
    /// Stroke for rows whose level is unknown. Its alpha is replaced by
    /// `min(1, 3 / sqrt(filtered_rows))`.
    pub fallback_stroke_color: Color,
    pub line_stroke_width: f64,
    pub highlight_color: Color,
    pub highlight_stroke_width: f64,
    pub point_color: Color,
    pub point_size_px: f64,
    pub text_color: Color,
    pub axis_label_font_size_px: f64,
    pub range_label_font_size_px: f64,
    pub selection_fill_color: Color,
    /// Height of one density mark.
    pub density_mark_height_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            palette: LevelPalette::default(),
            fallback_stroke_color: Color::rgb(0.2, 0.2, 0.2),
            line_stroke_width: 1.0,
            highlight_color: Color::rgb(1.0, 0.0, 0.0),
            highlight_stroke_width: 5.0,
            point_color: Color::rgb8(50, 50, 50).with_alpha(0.35),
            point_size_px: 2.0,
            text_color: Color::rgb8(0x22, 0x22, 0x22),
            axis_label_font_size_px: 10.0,
            range_label_font_size_px: 12.0,
            selection_fill_color: Color::rgb8(255, 235, 55).with_alpha(0.4),
            density_mark_height_px: 9.0,
        }
    }
}

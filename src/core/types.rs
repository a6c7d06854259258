use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel size of the chart container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Pixel inset between the container edge and the usable axis drawing area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gutter {
    pub x: f64,
    pub y: f64,
}

impl Gutter {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (name, value) in [("x", self.x), ("y", self.y)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "gutter `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Gutter {
    fn default() -> Self {
        Self::new(40.0, 40.0)
    }
}

/// Pixel position, either page-absolute or relative to some container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

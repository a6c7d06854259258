use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Number of entries in the density gradient; larger buckets reuse the last one.
pub const DENSITY_GRADIENT_STEPS: usize = 70;

/// Two-stop color map the density gradient is interpolated from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityColorMap {
    pub sparse: Color,
    pub dense: Color,
    pub alpha: f64,
}

impl Default for DensityColorMap {
    fn default() -> Self {
        Self {
            sparse: Color::rgb(0.0, 0.0, 1.0),
            dense: Color::rgb(1.0, 0.0, 0.0),
            alpha: 0.8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityStop {
    pub width: f64,
    pub color: Color,
}

/// Bucket-count to mark width/color lookup table.
///
/// Built once per color map; entry `i` is the mark for a bucket of `i` rows.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityGradient {
    stops: Vec<DensityStop>,
}

impl DensityGradient {
    #[must_use]
    pub fn new(color_map: DensityColorMap) -> Self {
        let stops = (0..DENSITY_GRADIENT_STEPS)
            .map(|count| {
                let width = mark_width(count);
                let intensity = (width * 8.0).floor().min(255.0) / 255.0;
                DensityStop {
                    width,
                    color: lerp(color_map.sparse, color_map.dense, intensity)
                        .with_alpha(color_map.alpha),
                }
            })
            .collect();
        Self { stops }
    }

    /// Mark for a bucket holding `count` rows, clamped to the table.
    #[must_use]
    pub fn stop(&self, count: usize) -> DensityStop {
        let index = count.min(self.stops.len().saturating_sub(1));
        self.stops[index]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

impl Default for DensityGradient {
    fn default() -> Self {
        Self::new(DensityColorMap::default())
    }
}

fn mark_width(count: usize) -> f64 {
    2.0 + count as f64 / 2.0
}

fn lerp(from: Color, to: Color, t: f64) -> Color {
    Color::rgba(
        from.red + (to.red - from.red) * t,
        from.green + (to.green - from.green) * t,
        from.blue + (to.blue - from.blue) * t,
        from.alpha + (to.alpha - from.alpha) * t,
    )
}

/// Counts y coordinates per truncated pixel row.
#[must_use]
pub fn bucket_counts(ys: impl IntoIterator<Item = f64>) -> BTreeMap<i64, usize> {
    let mut buckets = BTreeMap::new();
    for y in ys {
        if !y.is_finite() {
            continue;
        }
        *buckets.entry(y.trunc() as i64).or_insert(0) += 1;
    }
    buckets
}

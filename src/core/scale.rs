use serde::{Deserialize, Serialize};

use crate::core::primitives::ensure_unit_ratio;
use crate::core::{Series, Viewport};
use crate::error::{ChartError, ChartResult};

/// Inclusive value extent of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ChartError::InvalidData(
                "value range must be finite with min <= max".to_owned(),
            ));
        }
        if !(max - min).is_finite() {
            return Err(ChartError::InvalidData(format!(
                "value range span overflows f64: min={min}, max={max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Normalization denominator.
    ///
    /// A flat range (`max == min`) reports `1.0`. Every sample then normalizes
    /// to `0` and the plot is drawn as a flat line instead of dividing by zero.
    #[must_use]
    pub fn span(self) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 { 1.0 } else { span }
    }

    #[must_use]
    pub fn is_flat(self) -> bool {
        self.max == self.min
    }

    /// Widens the range so that it contains `value`.
    pub fn including(self, value: f64) -> ChartResult<Self> {
        Self::new(self.min.min(value), self.max.max(value))
    }

    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }
}

/// Scans all series values once and returns their extent.
pub fn scale_range(series: &Series) -> ChartResult<ValueRange> {
    series.require_len(1)?;

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in series.values() {
        min = min.min(value);
        max = max.max(value);
    }

    ValueRange::new(min, max)
}

/// Forward and inverse mapping between series space and the drawing surface.
///
/// X spreads sample indices evenly across the full width. Y is inverted so the
/// largest value lands at the top, and `vertical_inset_ratio` reserves half of
/// the given share of the height above and below the plotted band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotMapping {
    range: ValueRange,
    viewport: Viewport,
    vertical_inset_ratio: f64,
    sample_count: usize,
}

impl PlotMapping {
    pub fn new(
        range: ValueRange,
        viewport: Viewport,
        vertical_inset_ratio: f64,
        sample_count: usize,
    ) -> ChartResult<Self> {
        let range = ValueRange::new(range.min, range.max)?;
        viewport.validate()?;
        ensure_unit_ratio(vertical_inset_ratio, "vertical inset ratio")?;
        if sample_count < 2 {
            return Err(ChartError::InsufficientData {
                required: 2,
                actual: sample_count,
            });
        }

        Ok(Self {
            range,
            viewport,
            vertical_inset_ratio,
            sample_count,
        })
    }

    pub fn for_series(
        series: &Series,
        viewport: Viewport,
        vertical_inset_ratio: f64,
    ) -> ChartResult<Self> {
        series.require_len(2)?;
        let range = scale_range(series)?;
        Self::new(range, viewport, vertical_inset_ratio, series.len())
    }

    #[must_use]
    pub fn range(self) -> ValueRange {
        self.range
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn vertical_inset_ratio(self) -> f64 {
        self.vertical_inset_ratio
    }

    #[must_use]
    pub fn sample_count(self) -> usize {
        self.sample_count
    }

    #[must_use]
    pub fn index_to_x(self, index: usize) -> f64 {
        let last = (self.sample_count - 1) as f64;
        index as f64 / last * self.viewport.width_px()
    }

    #[must_use]
    pub fn value_to_y(self, value: f64) -> f64 {
        let height = self.viewport.height_px();
        let inset = self.vertical_inset_ratio;
        height
            - self.range.normalize(value) * height * (1.0 - inset)
            - height * (inset / 2.0)
    }

    /// Inverse of [`PlotMapping::value_to_y`].
    #[must_use]
    pub fn y_to_value(self, y: f64) -> f64 {
        let height = self.viewport.height_px();
        let inset = self.vertical_inset_ratio;
        let normalized = (height - height * (inset / 2.0) - y) / (height * (1.0 - inset));
        self.range.min + normalized * self.range.span()
    }

    /// Y coordinate of the lowest plotted value.
    #[must_use]
    pub fn bottom_y(self) -> f64 {
        self.value_to_y(self.range.min)
    }
}

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::primitives::ensure_unit_ratio;
use crate::core::{Series, Viewport, scale_range};
use crate::error::ChartResult;

/// Bar rectangle in pixel coordinates, anchored at the zero line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// `true` when the sample is below zero and the bar hangs under the zero line.
    pub negative: bool,
}

/// Projects a series into evenly spaced bars.
///
/// The vertical domain always includes `0`, so positive bars grow up from the
/// zero line and negative bars grow down from it. `gap_ratio` is the share of
/// each slot left empty between neighbouring bars.
pub fn project_bars(
    series: &Series,
    viewport: Viewport,
    gap_ratio: f64,
) -> ChartResult<Vec<BarRect>> {
    series.require_len(1)?;
    viewport.validate()?;
    ensure_unit_ratio(gap_ratio, "bar gap ratio")?;

    let range = scale_range(series)?.including(0.0)?;
    let height = viewport.height_px();
    let slot = viewport.width_px() / series.len() as f64;
    let gap = slot * gap_ratio;
    let to_y = |value: f64| height - range.normalize(value) * height;
    let zero_y = to_y(0.0);

    let bars: Vec<BarRect> = series
        .values()
        .enumerate()
        .map(|(index, value)| {
            let value_y = to_y(value);
            BarRect {
                x: index as f64 * slot + gap / 2.0,
                y: value_y.min(zero_y),
                width: slot - gap,
                height: (zero_y - value_y).abs(),
                negative: value < 0.0,
            }
        })
        .collect();

    trace!(count = bars.len(), slot, "project bars");
    Ok(bars)
}

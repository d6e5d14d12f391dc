use tracing::trace;

use crate::core::{PlotMapping, PlotPoint, Series, Viewport};
use crate::error::ChartResult;

/// Projects a series into plot points for line charts and sparklines.
///
/// `x = i / (n - 1) * width` and
/// `y = height - norm(v) * height * (1 - inset) - height * inset / 2`.
/// Output order follows the series. Series shorter than two samples are
/// rejected since a single point has no direction.
pub fn project_line(
    series: &Series,
    viewport: Viewport,
    vertical_inset_ratio: f64,
) -> ChartResult<Vec<PlotPoint>> {
    let mapping = PlotMapping::for_series(series, viewport, vertical_inset_ratio)?;
    let points = project_with_mapping(series, mapping);
    trace!(
        count = points.len(),
        flat = mapping.range().is_flat(),
        "project line"
    );
    Ok(points)
}

/// Maps every sample through an already-resolved mapping.
#[must_use]
pub fn project_with_mapping(series: &Series, mapping: PlotMapping) -> Vec<PlotPoint> {
    #[cfg(feature = "parallel-projection")]
    {
        use rayon::prelude::*;

        return series
            .points()
            .par_iter()
            .enumerate()
            .map(|(index, point)| {
                PlotPoint::new(mapping.index_to_x(index), mapping.value_to_y(point.value))
            })
            .collect();
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        series
            .values()
            .enumerate()
            .map(|(index, value)| {
                PlotPoint::new(mapping.index_to_x(index), mapping.value_to_y(value))
            })
            .collect()
    }
}

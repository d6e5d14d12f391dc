use serde::{Deserialize, Serialize};

use crate::core::PlotPoint;
use crate::core::path::Path;
use crate::error::{ChartError, ChartResult};

/// Deterministic geometry for a filled area under a line.
///
/// `line_points` follows the projected line.
/// `fill_polygon` is an explicitly closed polygon against the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub line_points: Vec<PlotPoint>,
    pub fill_polygon: Vec<PlotPoint>,
    pub baseline_y: f64,
}

impl AreaGeometry {
    /// Fill outline as a closed path: baseline start, line, baseline end, close.
    #[must_use]
    pub fn to_path(&self) -> Path {
        let mut path = Path::new();
        // The last polygon vertex repeats the first; `close` covers it.
        let open = &self.fill_polygon[..self.fill_polygon.len().saturating_sub(1)];
        if let Some((first, rest)) = open.split_first() {
            path.move_to(*first);
            for vertex in rest {
                path.line_to(*vertex);
            }
            path.close();
        }
        path
    }
}

/// Closes projected line points back along `baseline_y`.
///
/// The polygon is `[baseline-start, line..., baseline-end, baseline-start]`, so
/// its x-extent matches the line's first and last x exactly and it is closed
/// exactly once.
pub fn project_area(line_points: &[PlotPoint], baseline_y: f64) -> ChartResult<AreaGeometry> {
    if line_points.is_empty() {
        return Err(ChartError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    if !baseline_y.is_finite() {
        return Err(ChartError::InvalidData(
            "area baseline must be finite".to_owned(),
        ));
    }
    if line_points.iter().any(|point| !point.is_finite()) {
        return Err(ChartError::InvalidData(
            "area line points must be finite".to_owned(),
        ));
    }

    let first_x = line_points[0].x;
    let last_x = line_points[line_points.len() - 1].x;

    let mut fill_polygon = Vec::with_capacity(line_points.len() + 3);
    fill_polygon.push(PlotPoint::new(first_x, baseline_y));
    fill_polygon.extend_from_slice(line_points);
    fill_polygon.push(PlotPoint::new(last_x, baseline_y));
    fill_polygon.push(PlotPoint::new(first_x, baseline_y));

    Ok(AreaGeometry {
        line_points: line_points.to_vec(),
        fill_polygon,
        baseline_y,
    })
}

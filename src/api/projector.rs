use indexmap::IndexMap;
use tracing::debug;

use crate::core::{
    AreaGeometry, ArcGeometry, BarRect, Path, PlotMapping, PlotPoint, RingSegments, Series,
    Viewport, line_path, project_arc, project_area, project_bars, project_ring,
    project_ring_from_amounts, project_with_mapping, smooth_path,
};
use crate::error::ChartResult;

use super::ProjectionConfig;

/// Applies one [`ProjectionConfig`] to every projection kind.
///
/// Stateless apart from its config: every call re-derives geometry from the
/// series it is given.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeriesProjector {
    config: ProjectionConfig,
}

impl SeriesProjector {
    pub fn new(config: ProjectionConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    #[must_use]
    pub fn config(&self) -> ProjectionConfig {
        self.config
    }

    pub fn mapping(&self, series: &Series, viewport: Viewport) -> ChartResult<PlotMapping> {
        PlotMapping::for_series(series, viewport, self.config.vertical_inset_ratio)
    }

    pub fn line(&self, series: &Series, viewport: Viewport) -> ChartResult<Vec<PlotPoint>> {
        let mapping = self.mapping(series, viewport)?;
        Ok(project_with_mapping(series, mapping))
    }

    /// Line path, smoothed when the config asks for a non-zero tension.
    pub fn line_path(&self, series: &Series, viewport: Viewport) -> ChartResult<Path> {
        let points = self.line(series, viewport)?;
        if self.config.smoothing_tension > 0.0 {
            smooth_path(&points, self.config.smoothing_tension)
        } else {
            line_path(&points)
        }
    }

    /// Area under the line, closed along the bottom edge of the viewport.
    pub fn area(&self, series: &Series, viewport: Viewport) -> ChartResult<AreaGeometry> {
        let points = self.line(series, viewport)?;
        let geometry = project_area(&points, viewport.height_px())?;
        debug!(
            points = geometry.line_points.len(),
            baseline = geometry.baseline_y,
            "project area"
        );
        Ok(geometry)
    }

    pub fn bars(&self, series: &Series, viewport: Viewport) -> ChartResult<Vec<BarRect>> {
        project_bars(series, viewport, self.config.bar_gap_ratio)
    }

    pub fn arc(&self, fraction: f64, radius: f64) -> ChartResult<ArcGeometry> {
        project_arc(fraction, radius, self.config.ring_cutout_ratio)
    }

    pub fn ring<I, L>(&self, categories: I, radius: f64) -> ChartResult<RingSegments>
    where
        I: IntoIterator<Item = (L, f64)>,
        L: Into<String>,
    {
        project_ring(categories, radius, self.config.ring_cutout_ratio)
    }

    pub fn ring_from_amounts(
        &self,
        amounts: &IndexMap<String, f64>,
        radius: f64,
    ) -> ChartResult<RingSegments> {
        project_ring_from_amounts(amounts, radius, self.config.ring_cutout_ratio)
    }
}

use serde::{Deserialize, Serialize};

use crate::animation::AnimationConfig;
use crate::core::primitives::ensure_unit_ratio;
use crate::error::{ChartError, ChartResult};

/// Geometry knobs shared by every projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Share of the plot height kept clear above and below the line, split evenly.
    #[serde(default = "default_vertical_inset_ratio")]
    pub vertical_inset_ratio: f64,
    #[serde(default = "default_ring_cutout_ratio")]
    pub ring_cutout_ratio: f64,
    #[serde(default = "default_bar_gap_ratio")]
    pub bar_gap_ratio: f64,
    /// `0` draws straight polylines.
    #[serde(default)]
    pub smoothing_tension: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            vertical_inset_ratio: default_vertical_inset_ratio(),
            ring_cutout_ratio: default_ring_cutout_ratio(),
            bar_gap_ratio: default_bar_gap_ratio(),
            smoothing_tension: 0.0,
        }
    }
}

impl ProjectionConfig {
    #[must_use]
    pub fn with_vertical_inset_ratio(mut self, ratio: f64) -> Self {
        self.vertical_inset_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_ring_cutout_ratio(mut self, ratio: f64) -> Self {
        self.ring_cutout_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_bar_gap_ratio(mut self, ratio: f64) -> Self {
        self.bar_gap_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_smoothing_tension(mut self, tension: f64) -> Self {
        self.smoothing_tension = tension;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        ensure_unit_ratio(self.vertical_inset_ratio, "vertical inset ratio")?;
        ensure_unit_ratio(self.ring_cutout_ratio, "ring cutout ratio")?;
        ensure_unit_ratio(self.bar_gap_ratio, "bar gap ratio")?;
        if !self.smoothing_tension.is_finite() || !(0.0..=1.0).contains(&self.smoothing_tension)
        {
            return Err(ChartError::InvalidData(
                "smoothing tension must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Public engine configuration.
///
/// Serializable so host applications can keep chart setup next to their own
/// settings instead of inventing an ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartMotionConfig {
    #[serde(default)]
    pub projection: ProjectionConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl ChartMotionConfig {
    #[must_use]
    pub fn new(projection: ProjectionConfig, animation: AnimationConfig) -> Self {
        Self {
            projection,
            animation,
        }
    }

    #[must_use]
    pub fn with_projection(mut self, projection: ProjectionConfig) -> Self {
        self.projection = projection;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.projection.validate()?;
        self.animation.validate()?;
        Ok(self)
    }

    /// Parses and validates a JSON config; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config json: {e}")))
    }
}

fn default_vertical_inset_ratio() -> f64 {
    0.1
}

fn default_ring_cutout_ratio() -> f64 {
    0.75
}

fn default_bar_gap_ratio() -> f64 {
    0.2
}

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Timing for one animated display value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: f64,
    /// Time a task stays `Idle` before its first frame timer is armed.
    #[serde(default)]
    pub start_delay_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            frame_interval_ms: default_frame_interval_ms(),
            start_delay_ms: 0,
        }
    }
}

impl AnimationConfig {
    #[must_use]
    pub fn new(duration_ms: u64, frame_interval_ms: f64) -> Self {
        Self {
            duration_ms,
            frame_interval_ms,
            start_delay_ms: 0,
        }
    }

    #[must_use]
    pub fn with_start_delay_ms(mut self, start_delay_ms: u64) -> Self {
        self.start_delay_ms = start_delay_ms;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if self.duration_ms == 0 {
            return Err(ChartError::InvalidAnimation(
                "duration must be > 0 ms".to_owned(),
            ));
        }
        if !self.frame_interval_ms.is_finite() || self.frame_interval_ms <= 0.0 {
            return Err(ChartError::InvalidAnimation(
                "frame interval must be finite and > 0 ms".to_owned(),
            ));
        }
        self.frame_interval()?;
        Ok(self)
    }

    /// `round(duration / frame_interval)`, never less than one step.
    #[must_use]
    pub fn step_count(self) -> u32 {
        let steps = (self.duration_ms as f64 / self.frame_interval_ms).round();
        if steps >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            (steps as u32).max(1)
        }
    }

    #[must_use]
    pub fn duration(self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Frame cadence as a timer interval.
    ///
    /// Fails when `frame_interval_ms` has no non-zero `Duration` representation.
    pub fn frame_interval(self) -> ChartResult<Duration> {
        match Duration::try_from_secs_f64(self.frame_interval_ms / 1_000.0) {
            Ok(interval) if !interval.is_zero() => Ok(interval),
            _ => Err(ChartError::InvalidAnimation(format!(
                "frame interval of {} ms is not representable as a timer interval",
                self.frame_interval_ms
            ))),
        }
    }

    #[must_use]
    pub fn start_delay(self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }
}

fn default_duration_ms() -> u64 {
    1_000
}

fn default_frame_interval_ms() -> f64 {
    16.0
}

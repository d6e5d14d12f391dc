use crate::animation::{
    AnimatedValue, AnimationConfig, AnimationFrame, AnimationState, TimerDriver, TimerId,
};
use crate::core::{clamp_percent, clamp_unit};
use crate::error::{ChartError, ChartResult};

/// Animated percentage behind a progress bar or ring fill.
///
/// Targets are clamped into `[0, 100]`. The host sizes the bar from
/// [`ProgressFill::fill_fraction`].
#[derive(Debug, Clone)]
pub struct ProgressFill {
    percent: AnimatedValue,
}

impl ProgressFill {
    /// Starts empty.
    pub fn new(config: AnimationConfig) -> ChartResult<Self> {
        Ok(Self {
            percent: AnimatedValue::new(0.0, config)?,
        })
    }

    pub fn animate_to_percent<D: TimerDriver + ?Sized>(
        &mut self,
        percent: f64,
        driver: &mut D,
    ) -> ChartResult<()> {
        if !percent.is_finite() {
            return Err(ChartError::InvalidAnimation(
                "progress percent must be finite".to_owned(),
            ));
        }
        self.percent.animate_to(clamp_percent(percent), driver)
    }

    /// Animates to `part / whole`, e.g. spent against budget.
    pub fn animate_to_ratio<D: TimerDriver + ?Sized>(
        &mut self,
        part: f64,
        whole: f64,
        driver: &mut D,
    ) -> ChartResult<()> {
        if !part.is_finite() || !whole.is_finite() || whole <= 0.0 {
            return Err(ChartError::InvalidAnimation(
                "progress ratio requires finite part and whole > 0".to_owned(),
            ));
        }
        self.animate_to_percent(part / whole * 100.0, driver)
    }

    pub fn on_timer<D: TimerDriver + ?Sized>(
        &mut self,
        id: TimerId,
        driver: &mut D,
    ) -> ChartResult<Option<AnimationFrame>> {
        self.percent.on_timer(id, driver)
    }

    pub fn cancel<D: TimerDriver + ?Sized>(&mut self, driver: &mut D) -> bool {
        self.percent.cancel(driver)
    }

    #[must_use]
    pub fn percent(&self) -> f64 {
        self.percent.value()
    }

    #[must_use]
    pub fn fill_fraction(&self) -> f64 {
        clamp_unit(self.percent.value() / 100.0)
    }

    #[must_use]
    pub fn state(&self) -> AnimationState {
        self.percent.state()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.percent.is_animating()
    }

    #[must_use]
    pub fn timer_id(&self) -> Option<TimerId> {
        self.percent.timer_id()
    }
}

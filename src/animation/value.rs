use tracing::{debug, trace};

use crate::animation::{
    AnimationConfig, AnimationFrame, AnimationState, AnimationTask, TimerDriver, TimerId,
    TimerKind,
};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Delay,
    Frames,
}

#[derive(Debug, Clone)]
struct ActiveTask {
    task: AnimationTask,
    timer: TimerId,
    phase: Phase,
}

/// One displayed number and the single task allowed to write it.
///
/// Retargeting cancels the running task and its timer before arming a new
/// one, so at most one timer per slot is ever live. The new task starts from
/// whatever value is currently displayed.
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    config: AnimationConfig,
    value: f64,
    last_state: AnimationState,
    active: Option<ActiveTask>,
}

impl AnimatedValue {
    pub fn new(initial: f64, config: AnimationConfig) -> ChartResult<Self> {
        if !initial.is_finite() {
            return Err(ChartError::InvalidAnimation(
                "initial value must be finite".to_owned(),
            ));
        }
        Ok(Self {
            config: config.validate()?,
            value: initial,
            last_state: AnimationState::Idle,
            active: None,
        })
    }

    /// Currently displayed value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.active
            .as_ref()
            .map_or(self.value, |active| active.task.current_value())
    }

    #[must_use]
    pub fn config(&self) -> AnimationConfig {
        self.config
    }

    /// Timing for tasks started after this call. A running task keeps its own.
    pub fn set_config(&mut self, config: AnimationConfig) -> ChartResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> AnimationState {
        self.active
            .as_ref()
            .map_or(self.last_state, |active| active.task.state())
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn target(&self) -> Option<f64> {
        self.active.as_ref().map(|active| active.task.target_value())
    }

    #[must_use]
    pub fn timer_id(&self) -> Option<TimerId> {
        self.active.as_ref().map(|active| active.timer)
    }

    #[must_use]
    pub fn task(&self) -> Option<&AnimationTask> {
        self.active.as_ref().map(|active| &active.task)
    }

    /// Starts animating toward `target`, replacing any running task.
    pub fn animate_to<D: TimerDriver + ?Sized>(
        &mut self,
        target: f64,
        driver: &mut D,
    ) -> ChartResult<()> {
        let mut task = AnimationTask::new(self.value(), target, self.config)?;
        let interval = self.config.frame_interval()?;
        self.cancel(driver);

        let delay = self.config.start_delay();
        let (timer, phase) = if delay.is_zero() {
            task.start()?;
            (driver.schedule(TimerKind::Repeating, interval), Phase::Frames)
        } else {
            (driver.schedule(TimerKind::Once, delay), Phase::Delay)
        };

        debug!(
            from = task.start_value(),
            target,
            timer = timer.raw(),
            delayed = phase == Phase::Delay,
            "animate value"
        );
        self.last_state = task.state();
        self.active = Some(ActiveTask { task, timer, phase });
        Ok(())
    }

    /// Handles a fired timer. Callbacks for timers this slot no longer owns
    /// are ignored, so a cancelled task never delivers another frame.
    pub fn on_timer<D: TimerDriver + ?Sized>(
        &mut self,
        id: TimerId,
        driver: &mut D,
    ) -> ChartResult<Option<AnimationFrame>> {
        let Some(active) = self.active.as_mut() else {
            trace!(timer = id.raw(), "ignoring timer for idle slot");
            return Ok(None);
        };
        if active.timer != id {
            trace!(
                timer = id.raw(),
                owned = active.timer.raw(),
                "ignoring stale timer"
            );
            return Ok(None);
        }

        if active.phase == Phase::Delay {
            let interval = self.config.frame_interval()?;
            active.task.start()?;
            active.timer = driver.schedule(TimerKind::Repeating, interval);
            active.phase = Phase::Frames;
            self.last_state = AnimationState::Running;
            return Ok(None);
        }

        let Some(frame) = active.task.tick() else {
            return Ok(None);
        };
        self.value = frame.value;
        if frame.settled {
            driver.cancel(active.timer);
            debug!(value = frame.value, steps = frame.step, "animated value settled");
            self.last_state = AnimationState::Settled;
            self.active = None;
        }
        Ok(Some(frame))
    }

    /// Cancels the running task and its timer, keeping the displayed value.
    ///
    /// Returns `false` when nothing was running.
    pub fn cancel<D: TimerDriver + ?Sized>(&mut self, driver: &mut D) -> bool {
        let Some(mut active) = self.active.take() else {
            return false;
        };
        driver.cancel(active.timer);
        active.task.cancel();
        self.value = active.task.current_value();
        self.last_state = AnimationState::Cancelled;
        trace!(
            timer = active.timer.raw(),
            value = self.value,
            "cancel animated value"
        );
        true
    }

    /// Releases the slot's timer and returns the last displayed value.
    pub fn teardown<D: TimerDriver + ?Sized>(mut self, driver: &mut D) -> f64 {
        self.cancel(driver);
        self.value
    }
}

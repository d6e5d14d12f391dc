use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::animation::AnimationConfig;
use crate::error::{ChartError, ChartResult};

/// Lifecycle of one animation task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationState {
    /// Created but not started, e.g. while a start delay is pending.
    Idle,
    /// Advancing one increment per tick.
    Running,
    /// Reached its target exactly. Terminal.
    Settled,
    /// Torn down before settling. Terminal.
    Cancelled,
}

impl AnimationState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Settled | Self::Cancelled)
    }
}

/// Value emitted by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationFrame {
    pub value: f64,
    pub step: u32,
    pub settled: bool,
}

/// Linear interpolation of a scalar from `start_value` to `target_value`.
///
/// The task owns no timer; whoever drives it calls [`AnimationTask::tick`] once
/// per frame. The final frame always assigns the target exactly instead of
/// relying on accumulated increments.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationTask {
    start_value: f64,
    target_value: f64,
    config: AnimationConfig,
    step_count: u32,
    increment: f64,
    current_value: f64,
    elapsed_steps: u32,
    state: AnimationState,
}

impl AnimationTask {
    pub fn new(start_value: f64, target_value: f64, config: AnimationConfig) -> ChartResult<Self> {
        if !start_value.is_finite() || !target_value.is_finite() {
            return Err(ChartError::InvalidAnimation(
                "start and target values must be finite".to_owned(),
            ));
        }
        let config = config.validate()?;

        Ok(Self {
            start_value,
            target_value,
            config,
            step_count: 0,
            increment: 0.0,
            current_value: start_value,
            elapsed_steps: 0,
            state: AnimationState::Idle,
        })
    }

    /// Moves `Idle -> Running` and resolves the step plan.
    pub fn start(&mut self) -> ChartResult<()> {
        if self.state != AnimationState::Idle {
            return Err(ChartError::InvalidAnimation(format!(
                "cannot start task in state {:?}",
                self.state
            )));
        }

        self.step_count = self.config.step_count();
        self.increment = (self.target_value - self.start_value) / f64::from(self.step_count);
        self.state = AnimationState::Running;
        trace!(
            start = self.start_value,
            target = self.target_value,
            steps = self.step_count,
            increment = self.increment,
            "start animation task"
        );
        Ok(())
    }

    /// Advances one frame. Returns `None` unless the task is running.
    pub fn tick(&mut self) -> Option<AnimationFrame> {
        if self.state != AnimationState::Running {
            return None;
        }

        self.elapsed_steps = self.elapsed_steps.saturating_add(1);
        let next = self.current_value + self.increment;
        let reached = if self.increment > 0.0 {
            next >= self.target_value
        } else if self.increment < 0.0 {
            next <= self.target_value
        } else {
            true
        };

        if reached || self.elapsed_steps >= self.step_count {
            self.current_value = self.target_value;
            self.state = AnimationState::Settled;
        } else {
            self.current_value = next;
        }

        Some(AnimationFrame {
            value: self.current_value,
            step: self.elapsed_steps,
            settled: self.state == AnimationState::Settled,
        })
    }

    /// Stops a live task. Returns `false` when it had already finished.
    pub fn cancel(&mut self) -> bool {
        if self.state.is_terminal() {
            return false;
        }
        self.state = AnimationState::Cancelled;
        true
    }

    #[must_use]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        !self.state.is_terminal()
    }

    #[must_use]
    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    #[must_use]
    pub fn start_value(&self) -> f64 {
        self.start_value
    }

    #[must_use]
    pub fn target_value(&self) -> f64 {
        self.target_value
    }

    #[must_use]
    pub fn config(&self) -> AnimationConfig {
        self.config
    }

    /// Planned frame count; `0` until started.
    #[must_use]
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    #[must_use]
    pub fn elapsed_steps(&self) -> u32 {
        self.elapsed_steps
    }

    #[must_use]
    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Share of the distance covered, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let distance = self.target_value - self.start_value;
        if distance == 0.0 {
            return if self.state == AnimationState::Settled { 1.0 } else { 0.0 };
        }
        ((self.current_value - self.start_value) / distance).clamp(0.0, 1.0)
    }
}

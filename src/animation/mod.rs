//! Timer-driven interpolation of displayed values.
//!
//! Scheduling is single-threaded and cooperative: the host owns the timers
//! (see [`TimerDriver`]) and forwards every fired [`TimerId`] to the slot that
//! armed it.

mod config;
mod progress;
mod task;
mod timer;
mod value;

pub use config::AnimationConfig;
pub use progress::ProgressFill;
pub use task::{AnimationFrame, AnimationState, AnimationTask};
pub use timer::{ManualTimerDriver, TimerDriver, TimerId, TimerKind};
pub use value::AnimatedValue;

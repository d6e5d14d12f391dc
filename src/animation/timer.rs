use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Handle of a timer armed through a [`TimerDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(u64);

impl TimerId {
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerKind {
    /// Fires once after the interval and is then disarmed.
    Once,
    /// Fires every interval until cancelled.
    Repeating,
}

/// Host-owned timer source.
///
/// Animated values request and cancel timers through this trait and are
/// handed the fired [`TimerId`] back by the host. A UI toolkit backs it with
/// its own interval API; headless hosts and tests use [`ManualTimerDriver`].
pub trait TimerDriver {
    fn schedule(&mut self, kind: TimerKind, interval: Duration) -> TimerId;

    /// Disarms `id`. Returns `false` when it was not armed.
    fn cancel(&mut self, id: TimerId) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ArmedTimer {
    kind: TimerKind,
    interval: Duration,
    due: Duration,
}

/// Deterministic virtual clock implementing [`TimerDriver`].
///
/// Time only moves through [`ManualTimerDriver::advance`]; due timers fire in
/// deadline order, ties broken by creation order.
#[derive(Debug, Default)]
pub struct ManualTimerDriver {
    now: Duration,
    next_id: u64,
    armed: BTreeMap<TimerId, ArmedTimer>,
}

impl ManualTimerDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn live_timer_count(&self) -> usize {
        self.armed.len()
    }

    #[must_use]
    pub fn is_armed(&self, id: TimerId) -> bool {
        self.armed.contains_key(&id)
    }

    /// Fires the earliest timer due at or before `deadline`, moving the clock to it.
    pub fn fire_next(&mut self, deadline: Duration) -> Option<TimerId> {
        let (id, timer) = self
            .armed
            .iter()
            .filter(|(_, timer)| timer.due <= deadline)
            .min_by_key(|(id, timer)| (timer.due, **id))
            .map(|(id, timer)| (*id, *timer))?;

        self.now = self.now.max(timer.due);
        match timer.kind {
            TimerKind::Once => {
                self.armed.remove(&id);
            }
            TimerKind::Repeating => {
                if let Some(armed) = self.armed.get_mut(&id) {
                    armed.due = timer.due + timer.interval;
                }
            }
        }
        Some(id)
    }

    /// Moves the clock forward by `elapsed`, invoking `on_fire` for every timer
    /// that comes due. The callback may schedule or cancel timers.
    ///
    /// Returns the number of fired callbacks.
    pub fn advance<F>(&mut self, elapsed: Duration, mut on_fire: F) -> usize
    where
        F: FnMut(&mut Self, TimerId),
    {
        let deadline = self.now + elapsed;
        let mut fired = 0;
        while let Some(id) = self.fire_next(deadline) {
            fired += 1;
            on_fire(self, id);
        }
        self.now = deadline;
        trace!(fired, now_ms = self.now.as_secs_f64() * 1_000.0, "advance manual timers");
        fired
    }
}

impl TimerDriver for ManualTimerDriver {
    fn schedule(&mut self, kind: TimerKind, interval: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        // A zero interval would starve `advance`; clamp to one nanosecond.
        let interval = interval.max(Duration::from_nanos(1));
        self.armed.insert(
            id,
            ArmedTimer {
                kind,
                interval,
                due: self.now + interval,
            },
        );
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        self.armed.remove(&id).is_some()
    }
}

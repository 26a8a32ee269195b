//! Cancellable scheduled tasks driven by an external clock
//!
//! Components own their timers as plain values. Arming a task replaces any
//! previous deadline, so an owner can never hold two live timers in the same
//! slot. The host advances time by passing `now` into the owner's `tick`.

use std::time::{Duration, Instant};

/// Lower bound for repeating periods so a misconfigured zero interval cannot
/// spin a tick loop forever.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A one-shot or repeating deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduledTask {
    due: Option<Instant>,
    period: Option<Duration>,
}

impl ScheduledTask {
    /// A task with no deadline.
    pub const fn idle() -> Self {
        Self {
            due: None,
            period: None,
        }
    }

    /// Fire once, `delay` after `now`. Replaces any pending deadline.
    pub fn schedule_once(&mut self, now: Instant, delay: Duration) {
        self.due = Some(now + delay);
        self.period = None;
    }

    /// Fire every `period`, first at `now + period`. Replaces any pending
    /// deadline.
    pub fn schedule_repeating(&mut self, now: Instant, period: Duration) {
        let period = period.max(MIN_PERIOD);
        self.due = Some(now + period);
        self.period = Some(period);
    }

    /// Returns true when a pending deadline was dropped.
    pub fn cancel(&mut self) -> bool {
        self.period = None;
        self.due.take().is_some()
    }

    /// Whether a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    /// Whether the task re-arms after firing.
    pub fn is_repeating(&self) -> bool {
        self.period.is_some()
    }

    /// Pending deadline, if any.
    pub fn due(&self) -> Option<Instant> {
        self.due
    }

    /// Deadline if it has passed by `now`.
    pub fn due_by(&self, now: Instant) -> Option<Instant> {
        self.due.filter(|due| *due <= now)
    }

    /// Consume one due firing. Returns the instant the task was due at, and
    /// re-arms repeating tasks one period after that instant so a late poll
    /// does not drift the cadence.
    pub fn fire(&mut self, now: Instant) -> Option<Instant> {
        let due = self.due_by(now)?;
        self.due = self.period.map(|period| due + period);
        Some(due)
    }
}

/// Latest-wins debounce: only the last value pushed within `wait` of the
/// previous push is released.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<T>,
    task: ScheduledTask,
}

impl<T> Debouncer<T> {
    /// Create an empty instance.
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
            task: ScheduledTask::idle(),
        }
    }

    /// Record a new value and restart the quiet window.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some(value);
        self.task.schedule_once(now, self.wait);
    }

    /// Release the pending value once the quiet window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        self.task.fire(now)?;
        self.pending.take()
    }

    /// Whether a value is waiting for the quiet window.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value without releasing it.
    pub fn cancel(&mut self) {
        self.task.cancel();
        self.pending = None;
    }

    /// When the pending value will be released.
    pub fn due(&self) -> Option<Instant> {
        self.task.due()
    }
}

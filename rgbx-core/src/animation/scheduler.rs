//! Timer seam between the explorer and whatever drives its ticks.

use std::collections::BTreeMap;
use std::time::Duration;

/// Identifies one scheduled tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// One-shot timer service, in the style of a GUI toolkit's `after`/`cancel`.
pub trait Scheduler {
    /// Arrange for a single callback after `delay`.
    fn schedule(&mut self, delay: Duration) -> TimerHandle;

    /// Make sure `handle` is never delivered. Unknown handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

/// A timer that is due for delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueTimer {
    pub handle: TimerHandle,
    /// Delay requested at scheduling time.
    pub delay: Duration,
}

/// In-memory scheduler driven by the caller's own loop.
///
/// Timers come out of [`ManualScheduler::next_due`] ordered by their
/// deadline on a virtual clock, which only advances as timers are popped.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    // keyed by (deadline, id) so equal deadlines keep scheduling order
    pending: BTreeMap<(Duration, u64), Duration>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed so far.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.keys().any(|&(_, id)| id == handle.0)
    }

    /// Pop the earliest pending timer and advance the clock to its deadline.
    pub fn next_due(&mut self) -> Option<DueTimer> {
        let ((deadline, id), delay) = self.pending.pop_first()?;
        self.now = deadline;
        Some(DueTimer {
            handle: TimerHandle(id),
            delay,
        })
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.insert((self.now + delay, id), delay);
        TimerHandle(id)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|&(_, id), _| id != handle.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_due_in_deadline_order() {
        let mut sched = ManualScheduler::new();
        let slow = sched.schedule(ms(100));
        let fast = sched.schedule(ms(20));

        assert_eq!(sched.next_due().map(|t| t.handle), Some(fast));
        assert_eq!(sched.now(), ms(20));
        assert_eq!(sched.next_due().map(|t| t.handle), Some(slow));
        assert_eq!(sched.now(), ms(100));
        assert!(sched.next_due().is_none());
    }

    #[test]
    fn test_deadline_is_relative_to_now() {
        let mut sched = ManualScheduler::new();
        sched.schedule(ms(50));
        sched.next_due();
        sched.schedule(ms(50));
        sched.next_due();
        assert_eq!(sched.now(), ms(100));
    }

    #[test]
    fn test_cancelled_timer_never_delivered() {
        let mut sched = ManualScheduler::new();
        let a = sched.schedule(ms(10));
        let b = sched.schedule(ms(20));
        sched.cancel(a);

        assert!(!sched.is_pending(a));
        assert_eq!(sched.pending_count(), 1);
        assert_eq!(sched.next_due().map(|t| t.handle), Some(b));
        assert!(sched.next_due().is_none());
    }

    #[test]
    fn test_handles_are_unique() {
        let mut sched = ManualScheduler::new();
        let a = sched.schedule(ms(0));
        sched.next_due();
        let b = sched.schedule(ms(0));
        assert_ne!(a, b);
        assert_eq!(b.id(), a.id() + 1);
    }
}

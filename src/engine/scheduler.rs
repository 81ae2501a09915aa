//! Cancellable one-shot timers on a virtual clock
//!
//! Time only moves when the caller advances it, so tests drive timers
//! deterministically and the terminal front end feeds in wall-clock time.

use std::time::Duration;

use crate::schemas::Destination;

/// Handle to a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Work performed when a timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    /// Redirect after a simulated network round trip
    Navigate(Destination),
    /// Mark the session idle
    MarkIdle,
}

#[derive(Debug, Clone)]
struct PendingTimer {
    id: TimerId,
    due: Duration,
    task: TimerTask,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Arm a timer that fires once, `delay` after the current time
    pub fn schedule(&mut self, delay: Duration, task: TimerTask) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTimer {
            id,
            due: self.now.saturating_add(delay),
            task,
        });
        id
    }

    /// Cancel a pending timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        self.pending.len() != before
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Move the clock to `now` and return every timer that came due, in due order.
    ///
    /// The clock never moves backwards.
    pub fn advance_to(&mut self, now: Duration) -> Vec<(TimerId, TimerTask)> {
        if now > self.now {
            self.now = now;
        }
        let current = self.now;
        let (mut due, rest): (Vec<PendingTimer>, Vec<PendingTimer>) =
            self.pending.drain(..).partition(|t| t.due <= current);
        self.pending = rest;
        due.sort_by_key(|t| (t.due, t.id));
        due.into_iter().map(|t| (t.id, t.task)).collect()
    }

    pub fn advance_by(&mut self, delta: Duration) -> Vec<(TimerId, TimerTask)> {
        self.advance_to(self.now.saturating_add(delta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_timer_fires_once_when_due() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule(SECOND, TimerTask::Navigate(Destination::Dashboard));

        assert!(scheduler.advance_by(Duration::from_millis(999)).is_empty());
        assert!(scheduler.is_pending(id));

        let fired = scheduler.advance_by(Duration::from_millis(1));
        assert_eq!(fired, vec![(id, TimerTask::Navigate(Destination::Dashboard))]);
        assert!(scheduler.advance_by(SECOND * 10).is_empty());
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule(SECOND, TimerTask::MarkIdle);
        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.advance_by(SECOND * 2).is_empty());
    }

    #[test]
    fn test_timers_fire_in_due_order() {
        let mut scheduler = Scheduler::new();
        let late = scheduler.schedule(SECOND * 3, TimerTask::MarkIdle);
        let early = scheduler.schedule(SECOND, TimerTask::Navigate(Destination::Dashboard));

        let fired: Vec<TimerId> = scheduler.advance_by(SECOND * 5).into_iter().map(|(id, _)| id).collect();
        assert_eq!(fired, vec![early, late]);
        assert_eq!(scheduler.pending_len(), 0);
    }

    #[test]
    fn test_far_future_timer_saturates() {
        let mut scheduler = Scheduler::new();
        scheduler.advance_to(SECOND);
        let id = scheduler.schedule(Duration::MAX, TimerTask::MarkIdle);
        assert!(scheduler.is_pending(id));
        assert!(scheduler.advance_by(SECOND * 1000).is_empty());
    }

    #[test]
    fn test_clock_never_moves_backwards() {
        let mut scheduler = Scheduler::new();
        scheduler.advance_to(SECOND * 5);
        scheduler.advance_to(SECOND);
        assert_eq!(scheduler.now(), SECOND * 5);

        scheduler.schedule(SECOND, TimerTask::MarkIdle);
        assert!(scheduler.advance_to(SECOND * 5).is_empty());
        assert_eq!(scheduler.advance_to(SECOND * 6).len(), 1);
    }
}

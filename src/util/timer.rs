//! Deferred callbacks on the single UI thread.
//!
//! Scheduled tasks are fire-and-forget: there is no handle to cancel them,
//! matching how chat bubbles expire on the overlay.
//!
//! Design goals for [`ManualScheduler`]:
//! - **Host-driven time**: the embedder advances a virtual clock explicitly.
//! - **Deterministic order**: due tasks run by due time, ties by scheduling order.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::cell::RefCell;
use std::time::Duration;

/// A deferred unit of work.
pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Run `task` once, `delay` from now, in a later turn of the event loop.
    fn schedule(&self, delay: Duration, task: Task);
}

struct PendingTask {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_seq: u64,
    pending: Vec<PendingTask>,
}

/// Virtual-time scheduler advanced by the host.
#[derive(Default)]
pub struct ManualScheduler {
    state: RefCell<ManualState>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Move the clock forward by `by`, running every task that falls due.
    ///
    /// Tasks may schedule further tasks; those run in the same call if they
    /// become due before the new time.
    pub fn advance(&self, by: Duration) {
        let target = self.state.borrow().now + by;
        while let Some(task) = self.pop_due(target) {
            task();
        }
        self.state.borrow_mut().now = target;
    }

    fn pop_due(&self, target: Duration) -> Option<Task> {
        let mut state = self.state.borrow_mut();
        let index = state
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= target)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        let pending = state.pending.swap_remove(index);
        state.now = pending.due;
        Some(pending.task)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut state = self.state.borrow_mut();
        let due = state.now + delay;
        let seq = state.next_seq;
        state.next_seq += 1;
        state.pending.push(PendingTask { due, seq, task });
    }
}

/// Largest delay `setTimeout` honors; anything longer fires immediately.
#[cfg(any(test, feature = "hydrate"))]
const MAX_TIMEOUT_MS: u32 = i32::MAX.unsigned_abs();

/// `delay` in whole milliseconds, clamped to what `setTimeout` accepts.
#[cfg(any(test, feature = "hydrate"))]
fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).map_or(MAX_TIMEOUT_MS, |ms| ms.min(MAX_TIMEOUT_MS))
}

/// Scheduler backed by `setTimeout`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        gloo_timers::callback::Timeout::new(timeout_millis(delay), task).forget();
    }
}

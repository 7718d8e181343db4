//! One-shot reset scheduling for the trigger cycle.
//!
//! The state machine never touches the clock directly: it hands a callback
//! and a cancellation token to a [`ResetScheduler`] and cancels by firing
//! the token. Production code uses [`TokioResetScheduler`]; tests drive the
//! deterministic [`ManualResetScheduler`] instead of waiting on wall time.

use parking_lot::Mutex;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Boxed one-shot reset callback.
pub type ResetFn = Box<dyn FnOnce() + Send + 'static>;

/// Capability for running a reset callback once after a delay.
///
/// The caller owns `cancel`: cancelling it before the delay elapses must
/// prevent `reset` from running. Implementations must not invoke `reset`
/// from inside `schedule` itself — the caller may hold its state lock while
/// scheduling.
pub trait ResetScheduler: Send + Sync + 'static {
    fn schedule(&self, delay: Duration, cancel: CancellationToken, reset: ResetFn);
}

/// Scheduler backed by the tokio timer.
///
/// `schedule` spawns a task that races the delay against the cancellation
/// token, so it must be called from within a tokio runtime.
#[derive(Debug, Default)]
pub struct TokioResetScheduler;

impl TokioResetScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl ResetScheduler for TokioResetScheduler {
    fn schedule(&self, delay: Duration, cancel: CancellationToken, reset: ResetFn) {
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = tokio::time::sleep(delay) => reset(),
            }
        });
    }
}

/// Deterministic scheduler for tests: queues resets until told to fire.
///
/// Nothing runs until [`fire_all`](Self::fire_all) is called, which stands
/// in for the delay elapsing. Cancelled entries stay queued (so tests can
/// still inspect them) but never run.
#[derive(Default)]
pub struct ManualResetScheduler {
    queue: Mutex<Vec<QueuedReset>>,
}

struct QueuedReset {
    delay: Duration,
    cancel: CancellationToken,
    reset: ResetFn,
}

impl ManualResetScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued resets, including cancelled ones.
    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }

    /// Delay of the most recently scheduled reset.
    pub fn last_delay(&self) -> Option<Duration> {
        self.queue.lock().last().map(|entry| entry.delay)
    }

    /// Fire every queued reset in schedule order, skipping cancelled ones.
    ///
    /// Returns how many callbacks actually ran. Callbacks run outside the
    /// queue lock, so they are free to schedule again.
    pub fn fire_all(&self) -> usize {
        let queued = std::mem::take(&mut *self.queue.lock());
        let mut fired = 0;
        for entry in queued {
            if !entry.cancel.is_cancelled() {
                (entry.reset)();
                fired += 1;
            }
        }
        fired
    }
}

impl ResetScheduler for ManualResetScheduler {
    fn schedule(&self, delay: Duration, cancel: CancellationToken, reset: ResetFn) {
        self.queue.lock().push(QueuedReset {
            delay,
            cancel,
            reset,
        });
    }
}

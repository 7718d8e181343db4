//! The trigger cycle state machine.
//!
//! One switch, N motion sensors, one reset timer. Activating the switch
//! advances the active sensor index through 1, 2, …, N, none, 1, … and arms
//! a one-shot reset that turns the switch back off after [`RESET_DELAY`].
//! The active sensor stays latched across the reset; only the next
//! activation moves it.
//!
//! All operations and the timer callback serialize on one internal mutex,
//! so the machine behaves as a single logical thread of control no matter
//! how the host dispatcher threads its calls.

use crate::host::HostBridge;
use crate::trigger::scheduler::ResetScheduler;
use log::{info, warn};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Fixed delay before an activated switch resets to off.
///
/// Deliberately NOT the configured `delay` field: the original accessory
/// reads `delay` from its config block but always schedules 1000 ms. That
/// behavior is preserved here and pinned by tests; the configured value is
/// only surfaced via [`TriggerCycle::configured_delay`].
pub const RESET_DELAY: Duration = Duration::from_millis(1000);

/// Mutable state guarded by the cycle's mutex.
struct CycleState {
    switch_on: bool,
    /// 0 = no sensor active, k in [1, sensors] = sensor k detecting.
    active_index: usize,
    /// Cancellation token of the pending reset, if one is armed.
    reset: Option<CancellationToken>,
}

/// The trigger cycle state machine.
///
/// Owns the switch state, the active sensor index and at most one pending
/// reset. Characteristic changes are pushed out through the injected
/// [`HostBridge`]; reset timing goes through the injected
/// [`ResetScheduler`] so tests can run on a deterministic fake.
pub struct TriggerCycle {
    name: String,
    sensors: usize,
    configured_delay: Duration,
    state: Mutex<CycleState>,
    host: Arc<dyn HostBridge>,
    scheduler: Arc<dyn ResetScheduler>,
    /// Handed to reset callbacks so a timer outliving the accessory
    /// upgrades to nothing instead of keeping it alive.
    weak_self: Weak<Self>,
}

impl TriggerCycle {
    /// Create a trigger cycle with `sensors` motion sensors.
    ///
    /// A sensor count of zero is normalized to 1 rather than rejected.
    /// `configured_delay` is retained for observability only; scheduling
    /// always uses [`RESET_DELAY`].
    pub fn new(
        name: impl Into<String>,
        sensors: usize,
        configured_delay: Duration,
        host: Arc<dyn HostBridge>,
        scheduler: Arc<dyn ResetScheduler>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|weak_self| Self {
            name: name.into(),
            sensors: sensors.max(1),
            configured_delay,
            state: Mutex::new(CycleState {
                switch_on: false,
                active_index: 0,
                reset: None,
            }),
            host,
            scheduler,
            weak_self: weak_self.clone(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of motion sensors. Always at least 1.
    pub fn sensors(&self) -> usize {
        self.sensors
    }

    /// The delay the config block asked for. Never applied to the timer.
    pub fn configured_delay(&self) -> Duration {
        self.configured_delay
    }

    /// Current switch state. No side effects.
    pub fn switch_on(&self) -> bool {
        self.state.lock().switch_on
    }

    /// Currently active sensor index, 0 meaning none.
    pub fn active_index(&self) -> usize {
        self.state.lock().active_index
    }

    /// Whether sensor `sensor_id` (1-based) is the active one.
    ///
    /// Out-of-range ids are a caller contract violation; they read as
    /// `false` (the never-active default) and log at warn. Id 0 is invalid
    /// too, so the "no sensor active" state can never read as a detection.
    pub fn motion_detected(&self, sensor_id: usize) -> bool {
        if sensor_id == 0 || sensor_id > self.sensors {
            warn!(
                "Motion query for invalid sensor id {} (accessory has {} sensors)",
                sensor_id, self.sensors
            );
            return false;
        }
        self.state.lock().active_index == sensor_id
    }

    /// Set the switch state.
    ///
    /// `true` advances the active sensor index (wrapping through "none"
    /// every (N+1)-th activation), pushes every sensor's new value to the
    /// host and arms the reset timer, replacing any pending one. `false`
    /// turns the switch off and disarms the timer, leaving the active
    /// sensor latched.
    pub fn set_switch(&self, value: bool) {
        if value {
            self.activate();
        } else {
            self.deactivate();
        }
        info!(
            "Switch state was set to: {}",
            if value { "ON" } else { "OFF" }
        );
    }

    fn activate(&self) {
        let mut state = self.state.lock();
        state.active_index = (state.active_index + 1) % (self.sensors + 1);
        state.switch_on = true;

        // All N sensors get their value pushed, not just the ones that
        // changed, matching the original accessory's update sweep.
        for sensor_id in 1..=self.sensors {
            self.host
                .update_motion(sensor_id, state.active_index == sensor_id);
        }

        // Cancel-then-reschedule under the lock so the old and new reset
        // can never both fire.
        if let Some(pending) = state.reset.take() {
            pending.cancel();
        }
        let token = CancellationToken::new();
        state.reset = Some(token.clone());

        let cycle = self.weak_self.clone();
        let guard = token.clone();
        self.scheduler.schedule(
            RESET_DELAY,
            token,
            Box::new(move || {
                if let Some(cycle) = cycle.upgrade() {
                    cycle.reset_switch(&guard);
                }
            }),
        );
    }

    fn deactivate(&self) {
        let mut state = self.state.lock();
        state.switch_on = false;
        if let Some(pending) = state.reset.take() {
            pending.cancel();
        }
        // active_index stays latched; the host commanded the value itself,
        // so nothing is pushed back.
    }

    /// Reset timer callback: turn the switch off and tell the host.
    ///
    /// `token` is the cancellation token this reset was armed with. A
    /// callback that was superseded after leaving the scheduler finds its
    /// token cancelled and becomes a no-op.
    fn reset_switch(&self, token: &CancellationToken) {
        let mut state = self.state.lock();
        if token.is_cancelled() {
            return;
        }
        state.switch_on = false;
        state.reset = None;
        self.host.update_switch(false);
    }
}

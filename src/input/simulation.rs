//! Trigger simulation for development and demos.
//!
//! Periodically activates the switch the way a host command would, so the
//! cycle and the reset timer can be watched without a real control plane.

use crate::trigger::TriggerCycle;
use log::info;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, interval};

/// Spawn a task that activates the trigger switch every `period`.
///
/// The first activation happens immediately. Returns a `JoinHandle` that
/// can be used to abort the simulation on shutdown.
pub fn run_trigger_simulation(trigger: Arc<TriggerCycle>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = interval(period);
        loop {
            interval.tick().await;
            trigger.set_switch(true);
            info!(
                "[Sim] Trigger activated, active sensor is now: {}",
                trigger.active_index()
            );
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::LogHostBridge;
    use crate::trigger::{ManualResetScheduler, RESET_DELAY, TriggerCycle};

    #[tokio::test(start_paused = true)]
    async fn test_simulation_activates_on_the_period() {
        let cycle = TriggerCycle::new(
            "Sim",
            3,
            RESET_DELAY,
            Arc::new(LogHostBridge::new()),
            Arc::new(ManualResetScheduler::new()),
        );

        let task = run_trigger_simulation(cycle.clone(), Duration::from_secs(30));

        // First tick fires immediately.
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(cycle.active_index(), 1);

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(cycle.active_index(), 2);

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(cycle.active_index(), 3);

        task.abort();
    }
}

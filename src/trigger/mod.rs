//! Trigger cycle state machine and its reset scheduling.

pub mod cycle;
pub mod scheduler;

pub use cycle::{RESET_DELAY, TriggerCycle};
pub use scheduler::{ManualResetScheduler, ResetFn, ResetScheduler, TokioResetScheduler};

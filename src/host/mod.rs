//! Host platform bridge for pushing characteristic changes.
//!
//! The accessory never calls into the smart-home transport directly. It
//! pushes value changes through a [`HostBridge`] capability injected at
//! construction, so the surrounding platform (and the tests) decide what a
//! push actually does.

use log::info;

/// Capability the accessory uses to report characteristic changes to the
/// host platform.
///
/// Calls arrive synchronously from within [`set_switch`] and from the reset
/// timer callback, already serialized by the trigger state machine.
/// Implementations must not call back into the accessory.
///
/// [`set_switch`]: crate::trigger::TriggerCycle::set_switch
pub trait HostBridge: Send + Sync + 'static {
    /// The switch On characteristic changed.
    fn update_switch(&self, on: bool);

    /// The MotionDetected characteristic of sensor `sensor_id` (1-based)
    /// changed or was re-asserted.
    fn update_motion(&self, sensor_id: usize, detected: bool);
}

/// Host bridge that renders every push as a log line.
///
/// Stands in for the real control plane in the demo binary.
#[derive(Debug, Default)]
pub struct LogHostBridge;

impl LogHostBridge {
    pub fn new() -> Self {
        Self
    }
}

impl HostBridge for LogHostBridge {
    fn update_switch(&self, on: bool) {
        info!("[Host] Switch value changed: {}", if on { "ON" } else { "OFF" });
    }

    fn update_motion(&self, sensor_id: usize, detected: bool) {
        info!("[Host] Motion sensor {} value changed: {}", sensor_id, detected);
    }
}

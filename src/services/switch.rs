//! The trigger switch service (On characteristic).

use super::{ServiceDescriptor, ServiceKind};
use crate::trigger::TriggerCycle;
use log::debug;
use std::sync::Arc;

/// Handle for the accessory's single switch service.
///
/// The host calls [`on`](Self::on) for characteristic reads and
/// [`set_on`](Self::set_on) for writes; both go straight through to the
/// shared trigger cycle.
pub struct SwitchService {
    descriptor: ServiceDescriptor,
    cycle: Arc<TriggerCycle>,
}

impl SwitchService {
    /// The switch carries the accessory's own name, subtype "Switch".
    pub fn new(cycle: Arc<TriggerCycle>) -> Self {
        let descriptor = ServiceDescriptor::new(ServiceKind::Switch, cycle.name(), "Switch");
        Self { descriptor, cycle }
    }

    pub fn descriptor(&self) -> &ServiceDescriptor {
        &self.descriptor
    }

    /// GET handler for the On characteristic.
    pub fn on(&self) -> bool {
        let on = self.cycle.switch_on();
        debug!(
            "Current state of the switch was returned: {}",
            if on { "ON" } else { "OFF" }
        );
        on
    }

    /// SET handler for the On characteristic.
    pub fn set_on(&self, value: bool) {
        self.cycle.set_switch(value);
    }
}

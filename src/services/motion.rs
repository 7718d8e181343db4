//! Motion sensor services (MotionDetected characteristic, read only).

use super::{ServiceDescriptor, ServiceKind};
use crate::trigger::TriggerCycle;
use std::sync::Arc;

/// Handle for one of the accessory's motion sensor services.
///
/// Sensor ids are 1-based; the display name and subtype keep the
/// original accessory's pattern ("<name> Trigger <k>" / "Motion<k-1>").
pub struct MotionSensorService {
    descriptor: ServiceDescriptor,
    sensor_id: usize,
    cycle: Arc<TriggerCycle>,
}

impl MotionSensorService {
    pub fn new(cycle: Arc<TriggerCycle>, sensor_id: usize) -> Self {
        let descriptor = ServiceDescriptor::new(
            ServiceKind::MotionSensor,
            format!("{} Trigger {}", cycle.name(), sensor_id),
            format!("Motion{}", sensor_id - 1),
        );
        Self {
            descriptor,
            sensor_id,
            cycle,
        }
    }

    pub fn descriptor(&self) -> &ServiceDescriptor {
        &self.descriptor
    }

    pub fn sensor_id(&self) -> usize {
        self.sensor_id
    }

    /// GET handler for the MotionDetected characteristic.
    pub fn motion_detected(&self) -> bool {
        self.cycle.motion_detected(self.sensor_id)
    }
}

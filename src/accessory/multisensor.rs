//! The multisensor trigger accessory.
//!
//! Bundles the information service, the trigger switch and N motion
//! sensors around one shared [`TriggerCycle`], implementing the
//! construction contract the host platform drives.

use crate::accessory::AccessoryInformation;
use crate::config::AccessoryConfig;
use crate::host::HostBridge;
use crate::services::{MotionSensorService, ServiceDescriptor, SwitchService};
use crate::trigger::{ResetScheduler, TriggerCycle};
use log::info;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// One switch plus N motion sensors, cycled by the trigger state machine.
pub struct MultisensorTriggerAccessory {
    uuid: Uuid,
    information: AccessoryInformation,
    switch: SwitchService,
    motion: Vec<MotionSensorService>,
    trigger: Arc<TriggerCycle>,
}

impl MultisensorTriggerAccessory {
    /// Build the accessory from its config block.
    ///
    /// The host capability and the reset scheduler are injected rather
    /// than bound process-wide. The configured delay is logged but the
    /// reset timer runs on the fixed delay regardless.
    pub fn new(
        config: &AccessoryConfig,
        host: Arc<dyn HostBridge>,
        scheduler: Arc<dyn ResetScheduler>,
    ) -> Self {
        let uuid = Uuid::new_v5(&Uuid::NAMESPACE_OID, config.name.as_bytes());
        let trigger = TriggerCycle::new(
            &config.name,
            config.sensors,
            Duration::from_millis(config.delay),
            host,
            scheduler,
        );

        let switch = SwitchService::new(trigger.clone());
        let motion = (1..=trigger.sensors())
            .map(|sensor_id| MotionSensorService::new(trigger.clone(), sensor_id))
            .collect();
        let information = AccessoryInformation::new(&config.name, uuid);

        info!(
            "Accessory '{}' finished initializing ({} motion sensors, configured delay {} ms)",
            config.name,
            trigger.sensors(),
            config.delay
        );

        Self {
            uuid,
            information,
            switch,
            motion,
            trigger,
        }
    }

    /// Stable id derived from the accessory name: same name, same id.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn information(&self) -> &AccessoryInformation {
        &self.information
    }

    pub fn switch(&self) -> &SwitchService {
        &self.switch
    }

    pub fn motion_sensors(&self) -> &[MotionSensorService] {
        &self.motion
    }

    /// Shared handle to the underlying trigger state machine.
    pub fn trigger(&self) -> Arc<TriggerCycle> {
        self.trigger.clone()
    }

    /// Services in presentation order: information, switch, motion 1..N.
    pub fn services(&self) -> Vec<ServiceDescriptor> {
        let mut services = Vec::with_capacity(2 + self.motion.len());
        services.push(self.information.descriptor());
        services.push(self.switch.descriptor().clone());
        services.extend(self.motion.iter().map(|m| m.descriptor().clone()));
        services
    }

    /// Diagnostic hook the host fires during pairing. Logs only.
    pub fn identify(&self) {
        info!("Identify!");
    }
}

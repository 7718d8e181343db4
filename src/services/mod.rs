//! Typed service handles the host platform drives.
//!
//! Each handle is a thin view over the shared [`TriggerCycle`] exposing the
//! get/set surface of exactly one service, mirroring how the host's data
//! model groups characteristics into services.
//!
//! [`TriggerCycle`]: crate::trigger::TriggerCycle

pub mod motion;
pub mod switch;

pub use motion::MotionSensorService;
pub use switch::SwitchService;

use serde::Serialize;
use strum::Display;

/// Kind of service in the host's data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
pub enum ServiceKind {
    /// Manufacturer/model/serial metadata service.
    AccessoryInformation,
    /// The trigger switch (On characteristic, get/set).
    Switch,
    /// One motion sensor (MotionDetected characteristic, get only).
    MotionSensor,
}

/// Identity of one service as presented to the host platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDescriptor {
    pub kind: ServiceKind,
    /// Name shown in the host's UI.
    pub display_name: String,
    /// Disambiguates services of the same kind within an accessory.
    pub subtype: String,
}

impl ServiceDescriptor {
    pub fn new(kind: ServiceKind, display_name: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self {
            kind,
            display_name: display_name.into(),
            subtype: subtype.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_kind_display() {
        assert_eq!(ServiceKind::Switch.to_string(), "Switch");
        assert_eq!(ServiceKind::MotionSensor.to_string(), "MotionSensor");
        assert_eq!(
            ServiceKind::AccessoryInformation.to_string(),
            "AccessoryInformation"
        );
    }

    #[test]
    fn test_descriptor_serializes_with_kind() {
        let descriptor =
            ServiceDescriptor::new(ServiceKind::MotionSensor, "Hall Trigger 1", "Motion0");
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["kind"], "MotionSensor");
        assert_eq!(json["display_name"], "Hall Trigger 1");
        assert_eq!(json["subtype"], "Motion0");
    }
}

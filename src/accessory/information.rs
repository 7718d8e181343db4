//! AccessoryInformation service values.

use crate::services::{ServiceDescriptor, ServiceKind};
use uuid::Uuid;

/// Manufacturer string carried over from the original accessory.
pub const MANUFACTURER: &str = "Nidy86@Git";

/// Model string carried over from the original accessory.
pub const MODEL: &str = "Multisensor Trigger";

/// Static metadata the host reads from the information service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessoryInformation {
    pub manufacturer: &'static str,
    pub model: &'static str,
    /// Simple form of the accessory's name-derived id.
    pub serial_number: String,
    pub firmware_revision: &'static str,
    pub display_name: String,
}

impl AccessoryInformation {
    pub fn new(display_name: impl Into<String>, accessory_id: Uuid) -> Self {
        Self {
            manufacturer: MANUFACTURER,
            model: MODEL,
            serial_number: accessory_id.simple().to_string(),
            firmware_revision: env!("CARGO_PKG_VERSION"),
            display_name: display_name.into(),
        }
    }

    pub fn descriptor(&self) -> ServiceDescriptor {
        ServiceDescriptor::new(
            ServiceKind::AccessoryInformation,
            self.display_name.clone(),
            "Information",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_information_values() {
        let id = Uuid::new_v5(&Uuid::NAMESPACE_OID, b"Hall");
        let info = AccessoryInformation::new("Hall", id);
        assert_eq!(info.manufacturer, "Nidy86@Git");
        assert_eq!(info.model, "Multisensor Trigger");
        assert_eq!(info.serial_number, id.simple().to_string());
        assert_eq!(info.firmware_revision, env!("CARGO_PKG_VERSION"));
        assert_eq!(info.descriptor().kind, ServiceKind::AccessoryInformation);
    }
}

//! The accessory bundle exposed to the host platform.

pub mod information;
pub mod multisensor;

pub use information::AccessoryInformation;
pub use multisensor::MultisensorTriggerAccessory;

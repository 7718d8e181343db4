//! Multisensor trigger accessory library.
//!
//! Exposes one trigger switch and N motion sensors to a smart-home control
//! plane. Activating the switch cycles which single sensor (if any) reports
//! detection; a fixed 1000 ms timer resets the switch to off while the
//! active sensor stays latched. Transport, pairing and discovery belong to
//! the host platform, which drives the [`accessory`] surface and receives
//! pushes through the injected [`host::HostBridge`].

pub mod accessory;
pub mod config;
pub mod error;
pub mod host;
pub mod input;
pub mod services;
pub mod trigger;

pub use error::{AccessoryError, Result};

//! Input sources that drive the accessory outside of host commands.

pub mod simulation;

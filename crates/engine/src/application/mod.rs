//! Application layer: wizard and roster services over the repository port.

pub mod ports;
pub mod roster;
pub mod wizard;

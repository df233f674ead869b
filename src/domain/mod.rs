//! Domain layer: receipt types, the points rule engine and the storage ports.

pub mod points;
pub mod ports;
pub mod receipt;

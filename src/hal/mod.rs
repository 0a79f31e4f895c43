//! Hardware Abstraction Layer for RustI2sMicProbe.
//!
//! Thin wrappers around ESP-IDF peripherals.
//! Acquisition logic stays in core modules, HAL is just I/O.

pub mod i2s;

#[cfg(target_os = "espidf")]
pub use i2s::I2sMic;

//! Core copter functionality
//!
//! Shared state registry and the logging macros used across the firmware.

pub mod logging;
pub mod shm;

//! Communication Protocols
//!
//! Ground-station side of the copter state registry.
//!
//! # Protocols
//!
//! - **Remote variables**: tag-addressed reads and writes of shm variables
//!   - Set with echo (SET)
//!   - Single read and full listing for telemetry
//!   - Link watchdog engaging `switches.softKill` on loss
//!
//! Framing and the radio transport sit below this module.

pub mod remote;

pub use remote::{LinkState, RemoteError, RemoteHandler, VarUpdate};

//! copter_core - Pure no_std state registry for the copter flight controller
//!
//! This crate contains the platform-agnostic shared-memory registry that
//! holds every control, telemetry and configuration variable. It can be
//! tested on host without any feature flags.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies, no allocator
//! - **Fixed capacity**: All containers are `heapless`
//!
//! # Modules
//!
//! - [`shm`]: Variable declarations, storage, groups and the registry

#![no_std]

pub mod shm;

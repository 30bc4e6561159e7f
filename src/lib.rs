#![cfg_attr(not(test), no_std)]

//! copter - Flight controller state registry
//!
//! This library provides the shared variable registry that couples the
//! flight control loop, sensor drivers, and the radio link.

// Core systems (shm registry, logging)
pub mod core;

// Ground-station variable protocol
pub mod communication;

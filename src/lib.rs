//! Relay bank firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod bank;
pub mod config;
pub mod error;
pub mod patterns;
pub mod pins;
pub mod ports;

// The adapter compiles everywhere; the espidf implementation is guarded
// by cfg attributes inside.
pub mod adapters;

//! Application core — pure panel logic, zero I/O.
//!
//! This module holds the rules behind every panel gesture: trap cycling,
//! pump and fan clamping, and the air-input-driven table refresh.  All
//! interaction with the outside world happens through the **port traits**
//! in [`ports`], keeping this layer testable without a UI or sensors.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;

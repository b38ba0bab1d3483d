//! Adapters — concrete implementations of the port traits and the console
//! front end.
//!
//! | Adapter     | Implements | Connects to                   |
//! |-------------|------------|-------------------------------|
//! | `activity`  | EventSink  | Recent-activity ring buffer   |
//! | `console`   | —          | stdin lines → `PanelCommand`  |
//! | `log_sink`  | EventSink  | `log` facade                  |
//!
//! The reading source lives with the sensors:
//! [`SimulatedSource`](crate::sensors::simulated::SimulatedSource).

pub mod activity;
pub mod console;
pub mod log_sink;

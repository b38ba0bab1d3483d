//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a slice of the panel
//! against mock ports.  Nothing here needs a terminal or a real sensor.

mod console_flow_tests;
mod mock_ports;
mod panel_service_tests;

//! Port traits — the boundary between panel logic and the outside world.
//!
//! ```text
//!   ReadingSource ──▶ ClimateControlPanel ──▶ EventSink
//! ```
//!
//! Adapters implement these traits.  The
//! [`ClimateControlPanel`](super::service::ClimateControlPanel) takes them
//! as generic parameters at each call site, so the core never knows whether
//! its temperatures are simulated or its log goes to a terminal.

use crate::sensors::SensorReadings;

use super::events::PanelEvent;

// ───────────────────────────────────────────────────────────────
// Reading source (driven adapter: sensors → domain)
// ───────────────────────────────────────────────────────────────

/// Supplies a fresh set of hub and soil temperatures for an air input.
///
/// Called once per air input change.  Implementations must return a new
/// set each time; the panel keeps no history.
pub trait ReadingSource {
    fn sample(&mut self, air_temp_c: u8) -> SensorReadings;
}

// ───────────────────────────────────────────────────────────────
// Event sink (driven adapter: domain → log / display)
// ───────────────────────────────────────────────────────────────

/// The panel emits every [`PanelEvent`] through this port.
pub trait EventSink {
    fn emit(&mut self, event: &PanelEvent);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: &PanelEvent) {
        (**self).emit(event);
    }
}

/// Fan out to two sinks, first then second.
impl<A: EventSink, B: EventSink> EventSink for (A, B) {
    fn emit(&mut self, event: &PanelEvent) {
        self.0.emit(event);
        self.1.emit(event);
    }
}

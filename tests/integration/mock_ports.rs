//! Mock ports for integration tests.
//!
//! `RecordingSink` keeps every event so tests can assert on the full
//! history; `FixedSource` returns a known reading set so table contents
//! are predictable.

use climate_panel::app::events::PanelEvent;
use climate_panel::app::ports::{EventSink, ReadingSource};
use climate_panel::sensors::SensorReadings;

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<PanelEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    pub fn last(&self) -> Option<&PanelEvent> {
        self.events.last()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &PanelEvent) {
        self.events.push(event.clone());
    }
}

// ── FixedSource ───────────────────────────────────────────────

/// Readings offset from the air input by fixed amounts:
/// base = air − 7, hub i = base + 0.5·i, soil i = base − 1 + 0.25·i.
pub struct FixedSource {
    pub samples: u32,
}

#[allow(dead_code)]
impl FixedSource {
    pub fn new() -> Self {
        Self { samples: 0 }
    }
}

impl Default for FixedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingSource for FixedSource {
    fn sample(&mut self, air_temp_c: u8) -> SensorReadings {
        self.samples += 1;
        let base = f32::from(air_temp_c) - 7.0;
        let hubs = core::array::from_fn(|i| base + 0.5 * i as f32);
        let soil = core::array::from_fn(|i| base - 1.0 + 0.25 * i as f32);
        SensorReadings::new(air_temp_c, base, hubs, soil)
    }
}

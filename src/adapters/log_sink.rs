//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing every panel event to the `log`
//! facade, one line per event with a short category tag.  Purely visual
//! feedback (slider swatches, dial turns, table refreshes) goes out at
//! `debug` so the default console stays readable.

use log::{debug, info};

use crate::app::events::PanelEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`PanelEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &PanelEvent) {
        match event {
            PanelEvent::Started => info!("START | {event}"),
            PanelEvent::TrapOpened { shade, .. } => info!("TRAP  | {event} ({shade})"),
            PanelEvent::TrapReset { .. } => info!("TRAP  | {event}"),
            PanelEvent::TrapPositioned { .. } => debug!("TRAP  | {event}"),
            PanelEvent::VentilatorSwitched { .. } => info!("VENT  | {event}"),
            PanelEvent::PumpAdjusted { .. } => info!("PUMP  | {event}"),
            PanelEvent::AirTemperatureSet { .. } => info!("AIR   | {event}"),
            PanelEvent::ReadingsRefreshed(r) => debug!(
                "SENS  | base={:.1} hubs={:?} soil={:?} avg={:.1}",
                r.base_c, r.hubs_c, r.soil_c, r.soil_average_c
            ),
            PanelEvent::HeatPumpStepped { .. } => info!("HPUMP | {event}"),
            PanelEvent::FanPowerSet { .. } => debug!("FAN   | {event}"),
            PanelEvent::FanModeSwitched { mode, .. } => info!("FAN   | {event} [{mode}]"),
            PanelEvent::AirIntake(_) => info!("INTAKE| {event}"),
        }
    }
}

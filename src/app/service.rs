//! Climate control panel — the application core.
//!
//! [`ClimateControlPanel`] owns every piece of panel state: the trap bank,
//! the air input setting, the latest sensor readings, and the temperature
//! control unit.  Gestures arrive as [`PanelCommand`]s; ports are injected
//! at call sites so the whole panel is testable with fakes.
//!
//! ```text
//!  ReadingSource ──▶ ┌───────────────────────────┐ ──▶ EventSink
//!                    │   ClimateControlPanel     │
//!   PanelCommand ──▶ │ Traps · Air · TempControl │ ──▶ PanelView
//!                    └───────────────────────────┘
//! ```

use log::{debug, info};

use crate::config::{AIR_TEMP_MAX, PanelConfig};
use crate::control::clamp_u8;
use crate::control::temp_unit::TempControlUnit;
use crate::control::trap::TrapBank;
use crate::error::Result;
use crate::sensors::SensorReadings;
use crate::view::PanelView;

use super::commands::PanelCommand;
use super::events::PanelEvent;
use super::ports::{EventSink, ReadingSource};

// ───────────────────────────────────────────────────────────────
// ClimateControlPanel
// ───────────────────────────────────────────────────────────────

/// The panel core.  One instance per launch; all state starts at defaults.
pub struct ClimateControlPanel {
    config: PanelConfig,
    traps: TrapBank,
    air_temp_c: u8,
    /// `None` until the air input first moves; the tables read 0 until then.
    readings: Option<SensorReadings>,
    temp_unit: TempControlUnit,
    command_count: u64,
}

impl ClimateControlPanel {
    /// Construct the panel from configuration.  Every trap closed, every
    /// pump and the fan at 0.
    pub fn new(config: PanelConfig) -> Self {
        let temp_unit = TempControlUnit::new(config.fan_presets);
        Self {
            config,
            traps: TrapBank::new(),
            air_temp_c: 0,
            readings: None,
            temp_unit,
            command_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&PanelEvent::Started);
        info!("Panel started with {} traps", self.traps.iter().count());
    }

    // ── Command handling ──────────────────────────────────────

    /// Apply one gesture.
    ///
    /// Bounded values are clamped, never rejected.  The only error is a
    /// ventilator or pump gesture aimed at a trap without one; state is
    /// left untouched in that case.
    pub fn handle_command(
        &mut self,
        cmd: PanelCommand,
        source: &mut impl ReadingSource,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        self.command_count += 1;
        debug!("CMD #{} {:?}", self.command_count, cmd);

        let event = match cmd {
            PanelCommand::CycleTrap(id) => Some(self.traps.cycle_open(id)),
            PanelCommand::ResetTrap(id) => Some(self.traps.reset(id)),
            PanelCommand::SetTrapPosition(id, level) => Some(self.traps.set_position(id, level)),
            PanelCommand::SetVentilator(id, on) => Some(self.traps.set_ventilator(id, on)?),
            PanelCommand::SetPumpLevel(id, value) => Some(self.traps.set_pump_level(id, value)?),
            PanelCommand::NudgePump(id, delta) => self.traps.increment_pump(id, delta)?,
            PanelCommand::SetAirTemperature(value) => {
                self.set_air_temperature(value, source, sink);
                None
            }
            PanelCommand::IncreaseHeatPump => self.temp_unit.increase_heat_pump(),
            PanelCommand::DecreaseHeatPump => self.temp_unit.decrease_heat_pump(),
            PanelCommand::SetHeatPumpPower(value) => {
                self.temp_unit.set_heat_pump_power(value);
                None
            }
            PanelCommand::SetFanPower(value) => Some(self.temp_unit.set_fan_power(value)),
            PanelCommand::SwitchFanMode => Some(self.temp_unit.switch_mode()),
            PanelCommand::OpenAirIntake => Some(self.temp_unit.open_air_intake()),
            PanelCommand::CloseAirIntake => Some(self.temp_unit.close_air_intake()),
        };

        if let Some(event) = event {
            sink.emit(&event);
        }
        Ok(())
    }

    /// Move the air input slider and recompute both temperature tables.
    ///
    /// Always draws a new reading set, even when the clamped value is
    /// unchanged.
    pub fn set_air_temperature(
        &mut self,
        value: i32,
        source: &mut impl ReadingSource,
        sink: &mut impl EventSink,
    ) {
        self.air_temp_c = clamp_u8(value, AIR_TEMP_MAX);
        sink.emit(&PanelEvent::AirTemperatureSet {
            celsius: self.air_temp_c,
        });

        let readings = source.sample(self.air_temp_c);
        self.readings = Some(readings);
        sink.emit(&PanelEvent::ReadingsRefreshed(readings));
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn traps(&self) -> &TrapBank {
        &self.traps
    }

    pub fn temp_unit(&self) -> &TempControlUnit {
        &self.temp_unit
    }

    /// Current air input setting (°C).
    pub fn air_temperature(&self) -> u8 {
        self.air_temp_c
    }

    pub fn air_label(&self) -> String {
        format!("Air Input Temperature (\u{00b0}C): {}", self.air_temp_c)
    }

    /// Latest readings, `None` before the air input first moved.
    pub fn readings(&self) -> Option<&SensorReadings> {
        self.readings.as_ref()
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Commands handled since startup, including rejected ones.
    pub fn command_count(&self) -> u64 {
        self.command_count
    }

    /// Everything the UI layer needs to draw the panel.
    pub fn view(&self) -> PanelView {
        PanelView::from_panel(self)
    }
}

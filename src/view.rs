//! Render-ready snapshot of the panel.
//!
//! The UI layer never reads domain structs directly; it draws a
//! [`PanelView`].  Every label string here matches what the panel
//! widgets display.  The view serialises to JSON for the console `json`
//! command.

use core::fmt;

use serde::Serialize;

use crate::app::service::ClimateControlPanel;
use crate::config::{HUB_COUNT, SOIL_SENSOR_COUNT};
use crate::control::temp_unit::FanMode;
use crate::control::trap::{PumpReading, Rgb, Trap};
use crate::sensors::format_celsius;

/// One row of a two-column temperature table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub label: String,
    pub value: String,
}

/// Heat pump block shown under an equipped trap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PumpView {
    pub label: String,
    pub reading: PumpReading,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrapView {
    pub name: &'static str,
    pub position: u8,
    pub percent: u8,
    pub open_label: String,
    pub shade: Rgb,
    pub ventilator_on: Option<bool>,
    pub pump: Option<PumpView>,
}

impl TrapView {
    fn from_trap(trap: &Trap) -> Self {
        Self {
            name: trap.id().name(),
            position: trap.position(),
            percent: trap.percent(),
            open_label: trap.open_label(),
            shade: trap.shade(),
            ventilator_on: trap.ventilator_on(),
            pump: trap.pump_reading().map(|reading| PumpView {
                label: format!("Temperature (\u{00b0}C): {}", reading.level),
                reading,
            }),
        }
    }
}

/// Everything needed to draw the panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub traps: Vec<TrapView>,
    pub air_label: String,
    pub hubs: Vec<TableRow>,
    /// Nine sensor rows followed by the "Average" row.
    pub soil: Vec<TableRow>,
    pub heat_pump_step: u8,
    pub fan_speed_label: String,
    pub fan_power_label: String,
    pub fan_mode: FanMode,
}

impl PanelView {
    pub fn from_panel(panel: &ClimateControlPanel) -> Self {
        let readings = panel.readings();

        // Tables read a bare "0" until the first air input change.
        let cell = |value: Option<f32>| value.map_or_else(|| "0".to_owned(), format_celsius);

        let hubs = (0..HUB_COUNT)
            .map(|i| TableRow {
                label: format!("Hub {}", i + 1),
                value: cell(readings.map(|r| r.hubs_c[i])),
            })
            .collect();

        let mut soil: Vec<TableRow> = (0..SOIL_SENSOR_COUNT)
            .map(|i| TableRow {
                label: format!("Sensor {}", i + 1),
                value: cell(readings.map(|r| r.soil_c[i])),
            })
            .collect();
        soil.push(TableRow {
            label: "Average".to_owned(),
            value: cell(readings.map(|r| r.soil_average_c)),
        });

        let unit = panel.temp_unit();
        Self {
            traps: panel.traps().iter().map(TrapView::from_trap).collect(),
            air_label: panel.air_label(),
            hubs,
            soil,
            heat_pump_step: unit.heat_pump_step(),
            fan_speed_label: unit.fan_speed_label(),
            fan_power_label: unit.fan_power_label(),
            fan_mode: unit.fan_mode(),
        }
    }
}

impl fmt::Display for PanelView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Air Intake Control:")?;
        for t in &self.traps {
            writeln!(
                f,
                "  {:<26} {:>3}%  [{}]  {}",
                t.name, t.percent, t.open_label, t.shade
            )?;
            if let Some(on) = t.ventilator_on {
                writeln!(f, "      ventilator {}", if on { "ON" } else { "OFF" })?;
            }
            if let Some(p) = &t.pump {
                writeln!(
                    f,
                    "      heat pump  {}  ({:.1}W, {}%)",
                    p.label, p.reading.power_w, p.reading.efficiency_pct
                )?;
            }
        }
        writeln!(f, "Heat Pump Power: {}", self.heat_pump_step)?;
        writeln!(
            f,
            "{}  |  {}  (mode: {})",
            self.fan_speed_label, self.fan_power_label, self.fan_mode
        )?;
        writeln!(f, "{}", self.air_label)?;
        writeln!(f, "{:<10} Temperature (\u{00b0}C)", "Hub")?;
        for row in &self.hubs {
            writeln!(f, "{:<10} {}", row.label, row.value)?;
        }
        writeln!(f, "{:<10} Temperature (\u{00b0}C)", "Sensor")?;
        for row in &self.soil {
            writeln!(f, "{:<10} {}", row.label, row.value)?;
        }
        Ok(())
    }
}

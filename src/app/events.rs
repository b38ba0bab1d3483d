//! Outbound panel events.
//!
//! [`ClimateControlPanel`](super::service::ClimateControlPanel) emits these
//! through the [`EventSink`](super::ports::EventSink) port after every state
//! change.  `Display` renders the operator-facing log line; adapters decide
//! where it goes (console log, recent-activity pane, ...).

use core::fmt;

use crate::control::temp_unit::{FanMode, IntakeAction, StepDirection};
use crate::control::trap::{PumpReading, Rgb, TrapId, percent_for_level};
use crate::sensors::SensorReadings;

/// Structured events emitted by the panel core.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    /// The panel came up with default state.
    Started,

    /// "Open +25%" pressed; the trap moved one step (possibly wrapping).
    TrapOpened { trap: TrapId, level: u8, shade: Rgb },

    /// "Close" pressed; the trap is fully closed.
    TrapReset { trap: TrapId, shade: Rgb },

    /// The trap slider was dragged to `level`.
    TrapPositioned { trap: TrapId, level: u8, shade: Rgb },

    VentilatorSwitched { trap: TrapId, on: bool },

    /// A per-trap heat pump changed level.
    PumpAdjusted { trap: TrapId, reading: PumpReading },

    /// The air input slider moved.
    AirTemperatureSet { celsius: u8 },

    /// Hub and soil tables were recomputed.
    ReadingsRefreshed(SensorReadings),

    /// The heat pump unit stepped one power level.
    HeatPumpStepped { step: u8, direction: StepDirection },

    /// The fan dial was turned.
    FanPowerSet { watts: u16 },

    /// "Switch Mode" moved the fan to the next preset.
    FanModeSwitched { mode: FanMode, watts: u16 },

    AirIntake(IntakeAction),
}

impl fmt::Display for PanelEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started => write!(f, "Fan Control Application started"),
            Self::TrapOpened { trap, level, .. } => {
                write!(f, "{trap} set to {}%", percent_for_level(*level))
            }
            Self::TrapReset { trap, .. } => write!(f, "{trap} reset to 0%"),
            Self::TrapPositioned { trap, level, shade } => {
                write!(f, "{trap} slider at {}% ({shade})", percent_for_level(*level))
            }
            Self::VentilatorSwitched { trap, on } => {
                write!(f, "Ventilator for {trap} is {}", if *on { "ON" } else { "OFF" })
            }
            Self::PumpAdjusted { trap, reading } => write!(
                f,
                "Heat Pump for {trap} - Temperature: {}\u{00b0}C, Power: {:.1}W, Efficiency: {}%",
                reading.level, reading.power_w, reading.efficiency_pct
            ),
            Self::AirTemperatureSet { celsius } => {
                write!(f, "Air input temperature set to {celsius}\u{00b0}C")
            }
            Self::ReadingsRefreshed(r) => write!(
                f,
                "Temperatures refreshed: {} hubs, {} soil sensors, soil average {:.1}\u{00b0}C",
                r.hubs_c.len(),
                r.soil_c.len(),
                r.soil_average_c
            ),
            Self::HeatPumpStepped { step, direction } => {
                let verb = match direction {
                    StepDirection::Up => "increased",
                    StepDirection::Down => "decreased",
                };
                write!(f, "Heat Pump Power {verb} to {step}")
            }
            Self::FanPowerSet { watts } => write!(f, "Fan Power: {watts}W"),
            Self::FanModeSwitched { watts, .. } => write!(f, "Switched to mode with {watts}W"),
            Self::AirIntake(IntakeAction::Open) => write!(f, "Opening air intake"),
            Self::AirIntake(IntakeAction::Close) => write!(f, "Closing air intake"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::trap::shade_for_level;

    #[test]
    fn ventilator_lines() {
        let on = PanelEvent::VentilatorSwitched {
            trap: TrapId::Front,
            on: true,
        };
        let off = PanelEvent::VentilatorSwitched {
            trap: TrapId::Back,
            on: false,
        };
        assert_eq!(on.to_string(), "Ventilator for Trap 1 - Front is ON");
        assert_eq!(off.to_string(), "Ventilator for Trap 2 - Back is OFF");
    }

    #[test]
    fn positioned_line_carries_swatch() {
        let ev = PanelEvent::TrapPositioned {
            trap: TrapId::AutoVentilation,
            level: 2,
            shade: shade_for_level(2),
        };
        assert_eq!(
            ev.to_string(),
            "Trap 3 - Auto Ventilation slider at 50% (#96BEFF)"
        );
    }

    #[test]
    fn air_line() {
        let ev = PanelEvent::AirTemperatureSet { celsius: 40 };
        assert_eq!(ev.to_string(), "Air input temperature set to 40\u{00b0}C");
    }
}

//! Temperature control unit: heat-pump power stepper, fan dial, and the
//! two air-intake buttons.
//!
//! The heat pump has four discrete power steps (0–3).  The fan dial runs
//! 0–220 W and "Switch Mode" walks it through a fixed preset ring:
//!
//! ```text
//!   Off(0) ─▶ Low(60) ─▶ Medium(120) ─▶ High(180) ─▶ Max(220) ─┐
//!    ▲──────────────────────────────────────────────────────────┘
//! ```
//!
//! The fan "power" shown on the panel is the dial value itself.

use core::fmt;

use serde::Serialize;

use crate::app::events::PanelEvent;
use crate::config::{FAN_MODE_COUNT, FAN_POWER_MAX, HEAT_PUMP_STEP_MAX};

use super::{clamp_u8, clamp_u16};

// ---------------------------------------------------------------------------
// Fan modes
// ---------------------------------------------------------------------------

/// Named positions in the fan preset ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum FanMode {
    Off = 0,
    Low = 1,
    Medium = 2,
    High = 3,
    Max = 4,
}

impl FanMode {
    pub const ALL: [Self; FAN_MODE_COUNT] = [
        Self::Off,
        Self::Low,
        Self::Medium,
        Self::High,
        Self::Max,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// The following mode, wrapping from `Max` to `Off`.
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % FAN_MODE_COUNT]
    }
}

impl fmt::Display for FanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Off => "off",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Max => "max",
        };
        f.write_str(name)
    }
}

/// Direction of a heat-pump power step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StepDirection {
    Up,
    Down,
}

/// The two stateless air-intake actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IntakeAction {
    Open,
    Close,
}

// ---------------------------------------------------------------------------
// Temperature control unit
// ---------------------------------------------------------------------------

/// Heat pump power step plus fan dial state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempControlUnit {
    heat_pump_step: u8,
    fan_power: u16,
    fan_mode: FanMode,
    presets: [u16; FAN_MODE_COUNT],
}

impl TempControlUnit {
    /// Heat pump at step 0, fan dial at 0, mode ring at `Off`.
    pub fn new(presets: [u16; FAN_MODE_COUNT]) -> Self {
        Self {
            heat_pump_step: 0,
            fan_power: 0,
            fan_mode: FanMode::Off,
            presets,
        }
    }

    // ── Heat pump ─────────────────────────────────────────────

    pub fn heat_pump_step(&self) -> u8 {
        self.heat_pump_step
    }

    /// Step up one power level.  `None` when already at the top.
    pub fn increase_heat_pump(&mut self) -> Option<PanelEvent> {
        if self.heat_pump_step >= HEAT_PUMP_STEP_MAX {
            return None;
        }
        self.heat_pump_step += 1;
        Some(PanelEvent::HeatPumpStepped {
            step: self.heat_pump_step,
            direction: StepDirection::Up,
        })
    }

    /// Step down one power level.  `None` when already at 0.
    pub fn decrease_heat_pump(&mut self) -> Option<PanelEvent> {
        if self.heat_pump_step == 0 {
            return None;
        }
        self.heat_pump_step -= 1;
        Some(PanelEvent::HeatPumpStepped {
            step: self.heat_pump_step,
            direction: StepDirection::Down,
        })
    }

    /// Drag the power slider directly.  Silent, like the slider itself.
    pub fn set_heat_pump_power(&mut self, value: i32) -> u8 {
        self.heat_pump_step = clamp_u8(value, HEAT_PUMP_STEP_MAX);
        self.heat_pump_step
    }

    // ── Fan ───────────────────────────────────────────────────

    /// Current dial value (W).  Power equals the dial value.
    pub fn fan_power(&self) -> u16 {
        self.fan_power
    }

    pub fn fan_mode(&self) -> FanMode {
        self.fan_mode
    }

    pub fn fan_speed_label(&self) -> String {
        format!("Fan Speed: {}W", self.fan_power)
    }

    pub fn fan_power_label(&self) -> String {
        format!("Fan Power: {}W", self.fan_power)
    }

    /// Turn the dial.  Does not move the preset ring.
    pub fn set_fan_power(&mut self, value: i32) -> PanelEvent {
        self.fan_power = clamp_u16(value, FAN_POWER_MAX);
        PanelEvent::FanPowerSet {
            watts: self.fan_power,
        }
    }

    /// Advance the preset ring and move the dial to the new preset.
    pub fn switch_mode(&mut self) -> PanelEvent {
        self.fan_mode = self.fan_mode.next();
        let preset = self.presets[self.fan_mode.index()];
        self.fan_power = preset.min(FAN_POWER_MAX);
        PanelEvent::FanModeSwitched {
            mode: self.fan_mode,
            watts: self.fan_power,
        }
    }

    // ── Air intake ────────────────────────────────────────────

    pub fn open_air_intake(&self) -> PanelEvent {
        PanelEvent::AirIntake(IntakeAction::Open)
    }

    pub fn close_air_intake(&self) -> PanelEvent {
        PanelEvent::AirIntake(IntakeAction::Close)
    }
}

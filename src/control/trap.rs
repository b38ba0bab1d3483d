//! Air-intake traps.
//!
//! Four traps sit along the greenhouse wall.  Each has a discrete open
//! position (0–4, i.e. 0–100 % in 25 % steps).  The front and back traps
//! additionally carry a ventilator and a heat pump; the other two do not,
//! and addressing those devices on them is rejected with
//! [`Error::NotEquipped`].
//!
//! ```text
//!   cycle_open:  0 ─▶ 1 ─▶ 2 ─▶ 3 ─▶ 4 ─┐
//!                ▲──────────────────────┘
//!   reset:       * ─▶ 0
//! ```

use core::fmt;

use serde::Serialize;

use crate::app::events::PanelEvent;
use crate::config::{PUMP_LEVEL_MAX, TRAP_POSITION_MAX, TRAP_STEP_PERCENT};
use crate::error::{Device, Error, Result};

use super::clamp_u8;

// ---------------------------------------------------------------------------
// Trap identity
// ---------------------------------------------------------------------------

/// Identifies one of the four traps.  Used as the dispatch key for every
/// trap gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum TrapId {
    Front = 0,
    Back = 1,
    AutoVentilation = 2,
    NaturalAir = 3,
}

impl TrapId {
    /// Number of traps on the panel.
    pub const COUNT: usize = 4;

    /// All traps in panel order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Front,
        Self::Back,
        Self::AutoVentilation,
        Self::NaturalAir,
    ];

    /// Zero-based table index.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Convert a zero-based index coming from the UI side.
    pub fn from_index(idx: usize) -> Result<Self> {
        Self::ALL.get(idx).copied().ok_or(Error::UnknownTrap(idx))
    }

    /// Label shown next to the trap on the panel.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Front => "Trap 1 - Front",
            Self::Back => "Trap 2 - Back",
            Self::AutoVentilation => "Trap 3 - Auto Ventilation",
            Self::NaturalAir => "Trap 4 - Natural Air",
        }
    }

    /// Whether this trap carries a ventilator and a heat pump.
    pub const fn is_equipped(self) -> bool {
        matches!(self, Self::Front | Self::Back)
    }
}

impl fmt::Display for TrapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Position colour feedback
// ---------------------------------------------------------------------------

/// An sRGB colour swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Swatch per position level: white when closed, then four deepening blues.
pub const TRAP_PALETTE: [Rgb; TRAP_POSITION_MAX as usize + 1] = [
    Rgb::new(255, 255, 255),
    Rgb::new(200, 220, 255),
    Rgb::new(150, 190, 255),
    Rgb::new(100, 160, 255),
    Rgb::new(50, 130, 255),
];

/// Colour for a position level.  Levels above the maximum saturate.
pub fn shade_for_level(level: u8) -> Rgb {
    TRAP_PALETTE[level.min(TRAP_POSITION_MAX) as usize]
}

/// Open percentage for a position level.
pub const fn percent_for_level(level: u8) -> u8 {
    level * TRAP_STEP_PERCENT
}

// ---------------------------------------------------------------------------
// Heat pump metrics
// ---------------------------------------------------------------------------

/// Derived figures for a per-trap heat pump level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PumpReading {
    /// Pump level in °C-equivalent (0–30).
    pub level: u8,
    /// Estimated electrical draw (W).
    pub power_w: f32,
    /// Estimated efficiency (%).  Not clamped.
    pub efficiency_pct: i32,
}

impl PumpReading {
    pub fn for_level(level: u8) -> Self {
        Self {
            level,
            power_w: power_consumption(level),
            efficiency_pct: efficiency(level),
        }
    }
}

/// 1.5 W per pump step.
pub fn power_consumption(level: u8) -> f32 {
    f32::from(level) * 1.5
}

/// Efficiency falls 2 % per pump step from 100 %.
pub fn efficiency(level: u8) -> i32 {
    100 - i32::from(level) * 2
}

// ---------------------------------------------------------------------------
// Trap state
// ---------------------------------------------------------------------------

/// Ventilator and heat pump mounted on an equipped trap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct AuxUnits {
    ventilator_on: bool,
    pump_level: u8,
}

/// State of one trap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trap {
    id: TrapId,
    position: u8,
    /// Open presses since the last reset, mod 5.  The slider never moves it.
    open_count: u8,
    /// Percentage shown on the open button.
    open_label_pct: u8,
    aux: Option<AuxUnits>,
}

impl Trap {
    /// A closed trap with its ventilator off and heat pump at 0.
    pub fn new(id: TrapId) -> Self {
        Self {
            id,
            position: 0,
            open_count: 0,
            open_label_pct: TRAP_STEP_PERCENT,
            aux: id.is_equipped().then(AuxUnits::default),
        }
    }

    pub fn id(&self) -> TrapId {
        self.id
    }

    /// Position level (0–4).
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Open percentage (0–100).
    pub fn percent(&self) -> u8 {
        percent_for_level(self.position)
    }

    /// Colour swatch for the current position.
    pub fn shade(&self) -> Rgb {
        shade_for_level(self.position)
    }

    /// Open presses since the last reset, mod 5.
    pub fn open_count(&self) -> u8 {
        self.open_count
    }

    /// Text on the trap's open button.  Reads "+25%" after a reset and
    /// the open count's percentage after each press, "+0%" on the wrap.
    pub fn open_label(&self) -> String {
        format!("Open +{}%", self.open_label_pct)
    }

    /// Ventilator flag, `None` on traps without one.
    pub fn ventilator_on(&self) -> Option<bool> {
        self.aux.map(|a| a.ventilator_on)
    }

    /// Heat pump level, `None` on traps without one.
    pub fn pump_level(&self) -> Option<u8> {
        self.aux.map(|a| a.pump_level)
    }

    /// Heat pump metrics, `None` on traps without one.
    pub fn pump_reading(&self) -> Option<PumpReading> {
        self.pump_level().map(PumpReading::for_level)
    }

    fn aux_mut(&mut self, device: Device) -> Result<&mut AuxUnits> {
        let trap = self.id;
        self.aux
            .as_mut()
            .ok_or(Error::NotEquipped { trap, device })
    }
}

// ---------------------------------------------------------------------------
// Trap bank
// ---------------------------------------------------------------------------

/// Owns every trap, indexed by [`TrapId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrapBank {
    traps: [Trap; TrapId::COUNT],
}

impl TrapBank {
    pub fn new() -> Self {
        Self {
            traps: TrapId::ALL.map(Trap::new),
        }
    }

    pub fn get(&self, id: TrapId) -> &Trap {
        &self.traps[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trap> {
        self.traps.iter()
    }

    fn get_mut(&mut self, id: TrapId) -> &mut Trap {
        &mut self.traps[id.index()]
    }

    /// Advance the open count one 25 % step, wrapping from 100 % back to
    /// closed, and move the position to it.
    pub fn cycle_open(&mut self, id: TrapId) -> PanelEvent {
        let trap = self.get_mut(id);
        trap.open_count = (trap.open_count + 1) % (TRAP_POSITION_MAX + 1);
        trap.position = trap.open_count;
        trap.open_label_pct = percent_for_level(trap.open_count);
        PanelEvent::TrapOpened {
            trap: id,
            level: trap.position,
            shade: trap.shade(),
        }
    }

    /// Close the trap fully and clear its open count.
    pub fn reset(&mut self, id: TrapId) -> PanelEvent {
        let trap = self.get_mut(id);
        trap.position = 0;
        trap.open_count = 0;
        trap.open_label_pct = TRAP_STEP_PERCENT;
        PanelEvent::TrapReset {
            trap: id,
            shade: trap.shade(),
        }
    }

    /// Slider-driven position set, clamped to 0–4.  Leaves the open count
    /// and the button label alone.
    pub fn set_position(&mut self, id: TrapId, level: i32) -> PanelEvent {
        let trap = self.get_mut(id);
        trap.position = clamp_u8(level, TRAP_POSITION_MAX);
        PanelEvent::TrapPositioned {
            trap: id,
            level: trap.position,
            shade: trap.shade(),
        }
    }

    pub fn set_ventilator(&mut self, id: TrapId, on: bool) -> Result<PanelEvent> {
        self.get_mut(id).aux_mut(Device::Ventilator)?.ventilator_on = on;
        Ok(PanelEvent::VentilatorSwitched { trap: id, on })
    }

    /// Set the trap's heat pump, clamped to 0–30.
    pub fn set_pump_level(&mut self, id: TrapId, value: i32) -> Result<PanelEvent> {
        let aux = self.get_mut(id).aux_mut(Device::HeatPump)?;
        aux.pump_level = clamp_u8(value, PUMP_LEVEL_MAX);
        Ok(PanelEvent::PumpAdjusted {
            trap: id,
            reading: PumpReading::for_level(aux.pump_level),
        })
    }

    /// Nudge the trap's heat pump by `delta`, clamped to 0–30.
    ///
    /// Returns `Ok(None)` when the clamped level equals the current one:
    /// the slider does not move, so nothing is reported.
    pub fn increment_pump(&mut self, id: TrapId, delta: i32) -> Result<Option<PanelEvent>> {
        let current = self.get_mut(id).aux_mut(Device::HeatPump)?.pump_level;
        let target = clamp_u8(i32::from(current).saturating_add(delta), PUMP_LEVEL_MAX);
        if target == current {
            return Ok(None);
        }
        self.set_pump_level(id, i32::from(target)).map(Some)
    }
}

impl Default for TrapBank {
    fn default() -> Self {
        Self::new()
    }
}

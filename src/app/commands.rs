//! Inbound commands to the panel core.
//!
//! One variant per user gesture.  Trap gestures carry an explicit
//! [`TrapId`]; the front end never binds a handler per trap, it builds a
//! command and hands it to
//! [`ClimateControlPanel::handle_command`](super::service::ClimateControlPanel::handle_command).
//!
//! Numeric payloads are raw widget values and may be out of range; the
//! core clamps them.

use crate::control::trap::TrapId;

/// Gestures that the UI layer can send into the panel core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
    /// "Open +25%" on a trap.
    CycleTrap(TrapId),

    /// "Close" on a trap.
    ResetTrap(TrapId),

    /// Trap slider moved to a position level (0–4).
    SetTrapPosition(TrapId, i32),

    /// Ventilator "Turn On" / "Turn Off" (front and back traps only).
    SetVentilator(TrapId, bool),

    /// Per-trap heat pump slider moved (0–30).
    SetPumpLevel(TrapId, i32),

    /// Per-trap heat pump "+10°C" / "-10°C" buttons carry ±delta.
    NudgePump(TrapId, i32),

    /// Air input temperature slider moved (0–120).
    SetAirTemperature(i32),

    /// Heat pump unit "Increase".
    IncreaseHeatPump,

    /// Heat pump unit "Decrease".
    DecreaseHeatPump,

    /// Heat pump unit slider dragged (0–3).
    SetHeatPumpPower(i32),

    /// Fan dial turned (0–220).
    SetFanPower(i32),

    /// "Switch Mode" on the fan.
    SwitchFanMode,

    OpenAirIntake,
    CloseAirIntake,
}

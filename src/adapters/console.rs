//! Line-oriented console front end.
//!
//! Stands in for the widget layer: each stdin line is one gesture.  Trap
//! numbers are 1-based, as printed on the panel.  Parsing is the only job
//! here; dispatch and rendering stay with the caller.

use crate::app::commands::PanelCommand;
use crate::control::trap::TrapId;
use crate::error::{CommandError, Result};

/// Help text printed by `help` and at startup.
pub const HELP: &str = "\
commands:
  open N               open trap N one more step (+25%)
  close N              close trap N
  trap N LEVEL         set trap N slider (0-4)
  vent N on|off        ventilator for trap 1 or 2
  pump N VALUE         set heat pump of trap 1 or 2 (0-30)
  pump N +|-           nudge heat pump of trap 1 or 2
  air VALUE            set air input temperature (0-120)
  hp +|-               step heat pump power
  hp VALUE             set heat pump power (0-3)
  fan VALUE            set fan dial (0-220)
  mode                 switch fan mode
  intake open|close    air intake action
  show | json | log    print panel, panel as JSON, recent activity
  help | quit";

/// What one console line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleInput {
    Command(PanelCommand),
    Show,
    Json,
    Log,
    Help,
    Quit,
}

/// Parse one console line.  `pump_nudge` is the magnitude used by
/// `pump N +` / `pump N -`.
pub fn parse_line(line: &str, pump_nudge: u8) -> Result<ConsoleInput> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err(CommandError::Empty.into());
    };
    let verb = verb.to_ascii_lowercase();
    let mut arg = |what: &'static str| words.next().ok_or(CommandError::MissingArgument(what));

    let input = match verb.as_str() {
        "open" => ConsoleInput::Command(PanelCommand::CycleTrap(trap(arg("trap number")?)?)),
        "close" => ConsoleInput::Command(PanelCommand::ResetTrap(trap(arg("trap number")?)?)),
        "trap" => {
            let id = trap(arg("trap number")?)?;
            let level = number(arg("position level")?, "position level")?;
            ConsoleInput::Command(PanelCommand::SetTrapPosition(id, level))
        }
        "vent" => {
            let id = trap(arg("trap number")?)?;
            let on = match arg("on|off")?.to_ascii_lowercase().as_str() {
                "on" => true,
                "off" => false,
                _ => return Err(CommandError::InvalidArgument("on|off").into()),
            };
            ConsoleInput::Command(PanelCommand::SetVentilator(id, on))
        }
        "pump" => {
            let id = trap(arg("trap number")?)?;
            let cmd = match arg("pump value")? {
                "+" => PanelCommand::NudgePump(id, i32::from(pump_nudge)),
                "-" => PanelCommand::NudgePump(id, -i32::from(pump_nudge)),
                v => PanelCommand::SetPumpLevel(id, number(v, "pump value")?),
            };
            ConsoleInput::Command(cmd)
        }
        "air" => ConsoleInput::Command(PanelCommand::SetAirTemperature(number(
            arg("temperature")?,
            "temperature",
        )?)),
        "hp" => {
            let cmd = match arg("+|- or power")? {
                "+" => PanelCommand::IncreaseHeatPump,
                "-" => PanelCommand::DecreaseHeatPump,
                v => PanelCommand::SetHeatPumpPower(number(v, "heat pump power")?),
            };
            ConsoleInput::Command(cmd)
        }
        "fan" => ConsoleInput::Command(PanelCommand::SetFanPower(number(
            arg("fan power")?,
            "fan power",
        )?)),
        "mode" => ConsoleInput::Command(PanelCommand::SwitchFanMode),
        "intake" => match arg("open|close")?.to_ascii_lowercase().as_str() {
            "open" => ConsoleInput::Command(PanelCommand::OpenAirIntake),
            "close" => ConsoleInput::Command(PanelCommand::CloseAirIntake),
            _ => return Err(CommandError::InvalidArgument("open|close").into()),
        },
        "show" => ConsoleInput::Show,
        "json" => ConsoleInput::Json,
        "log" => ConsoleInput::Log,
        "help" | "?" => ConsoleInput::Help,
        "quit" | "exit" => ConsoleInput::Quit,
        _ => return Err(CommandError::UnknownVerb.into()),
    };
    Ok(input)
}

/// 1-based trap number → [`TrapId`].
fn trap(word: &str) -> Result<TrapId> {
    let n: usize = word
        .parse()
        .map_err(|_| CommandError::InvalidArgument("trap number"))?;
    let idx = n
        .checked_sub(1)
        .ok_or(CommandError::InvalidArgument("trap number"))?;
    TrapId::from_index(idx)
}

/// Widget values are integers; range checks are the core's job.
fn number(word: &str, what: &'static str) -> Result<i32> {
    word.parse::<i32>()
        .map_err(|_| CommandError::InvalidArgument(what).into())
}

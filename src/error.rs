//! Unified error types for the climate panel core.
//!
//! Bounded panel values never fail: they are clamped on every mutation.
//! The variants below cover the few requests that cannot be honoured at
//! all, such as addressing a ventilator on a trap that has none, or a
//! console line that does not parse.  Every variant is `Copy` so it can be
//! returned from the hot dispatch path without allocation.

use core::fmt;

use crate::control::trap::TrapId;

// ---------------------------------------------------------------------------
// Top-level panel error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The addressed trap has no such auxiliary device.
    NotEquipped { trap: TrapId, device: Device },
    /// A trap index outside `0..TrapId::COUNT` came in from the UI side.
    UnknownTrap(usize),
    /// A console line could not be turned into a command.
    Command(CommandError),
    /// Configuration is internally inconsistent.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEquipped { trap, device } => {
                write!(f, "{} has no {device}", trap.name())
            }
            Self::UnknownTrap(idx) => write!(f, "unknown trap index {idx}"),
            Self::Command(e) => write!(f, "command: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Auxiliary devices
// ---------------------------------------------------------------------------

/// Devices that only the front and back traps carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Ventilator,
    HeatPump,
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ventilator => write!(f, "ventilator"),
            Self::HeatPump => write!(f, "heat pump"),
        }
    }
}

// ---------------------------------------------------------------------------
// Console command errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Blank line.
    Empty,
    /// First word is not a known verb.
    UnknownVerb,
    /// A required argument is absent.
    MissingArgument(&'static str),
    /// An argument is present but malformed.
    InvalidArgument(&'static str),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty input"),
            Self::UnknownVerb => write!(f, "unknown command (try `help`)"),
            Self::MissingArgument(what) => write!(f, "missing {what}"),
            Self::InvalidArgument(what) => write!(f, "invalid {what}"),
        }
    }
}

impl From<CommandError> for Error {
    fn from(e: CommandError) -> Self {
        Self::Command(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;

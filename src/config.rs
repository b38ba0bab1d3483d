//! Panel configuration parameters
//!
//! Hard range limits of the panel controls live here as `const`s; the
//! tunable behaviour (fan presets, pump nudge step, simulator offsets)
//! lives in [`PanelConfig`].  Nothing is loaded from disk: every launch
//! starts from [`PanelConfig::default()`].

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// --- Control ranges ---

/// Highest trap position level (4 = 100 %).
pub const TRAP_POSITION_MAX: u8 = 4;
/// Percentage represented by one trap position step.
pub const TRAP_STEP_PERCENT: u8 = 25;
/// Highest per-trap heat pump level (°C-equivalent).
pub const PUMP_LEVEL_MAX: u8 = 30;
/// Highest air input temperature the slider offers (°C).
pub const AIR_TEMP_MAX: u8 = 120;
/// Highest heat pump unit power step.
pub const HEAT_PUMP_STEP_MAX: u8 = 3;
/// Highest fan dial value (W).
pub const FAN_POWER_MAX: u16 = 220;

// --- Display tables ---

pub const HUB_COUNT: usize = 4;
pub const SOIL_SENSOR_COUNT: usize = 9;

/// Number of fan presets ("modes").
pub const FAN_MODE_COUNT: usize = 5;

/// Log lines retained by the recent-activity view.
pub const ACTIVITY_CAPACITY: usize = 16;

/// Tunable panel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    // --- Fan ---
    /// Fan dial values visited by "Switch Mode", in order (W)
    pub fan_presets: [u16; FAN_MODE_COUNT],

    // --- Per-trap heat pumps ---
    /// Step applied by the +/- buttons next to each pump slider (°C)
    pub pump_nudge_c: u8,

    // --- Sensor simulation ---
    /// Smallest drop from air input to the base temperature (°C, inclusive)
    pub base_drop_min_c: u8,
    /// Largest drop from air input to the base temperature (°C, inclusive)
    pub base_drop_max_c: u8,
    /// Upper bound of the uniform noise added to each hub reading (°C)
    pub hub_jitter_c: f32,
    /// Lower bound of the uniform drop applied to each soil reading (°C)
    pub soil_drop_min_c: f32,
    /// Upper bound of the uniform drop applied to each soil reading (°C)
    pub soil_drop_max_c: f32,
    /// Upper bound of the uniform noise added to each soil reading (°C)
    pub soil_jitter_c: f32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            // Fan
            fan_presets: [0, 60, 120, 180, 220],

            // Pumps
            pump_nudge_c: 10,

            // Simulation
            base_drop_min_c: 5,
            base_drop_max_c: 10,
            hub_jitter_c: 2.0,
            soil_drop_min_c: 1.0,
            soil_drop_max_c: 3.0,
            soil_jitter_c: 2.0,
        }
    }
}

impl PanelConfig {
    /// Reject configurations the controls or the simulator cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.fan_presets.iter().any(|&p| p > FAN_POWER_MAX) {
            return Err(Error::Config("fan preset above dial maximum"));
        }
        if self.pump_nudge_c == 0 || self.pump_nudge_c > PUMP_LEVEL_MAX {
            return Err(Error::Config("pump nudge outside 1..=30"));
        }
        if self.base_drop_min_c > self.base_drop_max_c {
            return Err(Error::Config("base drop range inverted"));
        }
        let bounds = [
            self.hub_jitter_c,
            self.soil_drop_min_c,
            self.soil_drop_max_c,
            self.soil_jitter_c,
        ];
        if bounds.iter().any(|b| b.is_nan() || *b < 0.0) {
            return Err(Error::Config("negative or NaN noise bound"));
        }
        if self.soil_drop_min_c > self.soil_drop_max_c {
            return Err(Error::Config("soil drop range inverted"));
        }
        Ok(())
    }
}

//! Greenhouse temperature readings.
//!
//! A [`SensorReadings`] is recomputed from scratch every time the air input
//! temperature changes; nothing carries over from the previous set.  Where
//! the numbers come from is the business of a
//! [`ReadingSource`](crate::app::ports::ReadingSource).  The only one
//! shipped today is [`simulated::SimulatedSource`].

pub mod simulated;

use serde::Serialize;

use crate::config::{HUB_COUNT, SOIL_SENSOR_COUNT};

/// One full set of hub and soil temperatures (°C, unrounded).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorReadings {
    /// Air input temperature the set was derived from.
    pub air_temp_c: u8,
    /// Common base all readings were offset from.
    pub base_c: f32,
    pub hubs_c: [f32; HUB_COUNT],
    pub soil_c: [f32; SOIL_SENSOR_COUNT],
    /// Mean of `soil_c`.
    pub soil_average_c: f32,
}

impl SensorReadings {
    /// Assemble a set, computing the soil average.
    pub fn new(
        air_temp_c: u8,
        base_c: f32,
        hubs_c: [f32; HUB_COUNT],
        soil_c: [f32; SOIL_SENSOR_COUNT],
    ) -> Self {
        Self {
            air_temp_c,
            base_c,
            hubs_c,
            soil_c,
            soil_average_c: mean(&soil_c),
        }
    }
}

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f32>() / values.len() as f32
}

/// Panel text for a temperature: one decimal digit.
pub fn format_celsius(value: f32) -> String {
    format!("{value:.1}")
}

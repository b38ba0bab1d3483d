//! Simulated hub and soil sensors.
//!
//! There is no telemetry hardware behind the panel yet, so readings are
//! synthesised from the air input temperature:
//!
//! ```text
//!   base  = air − U{5..=10}
//!   hub   = base + U[0, 2]                 (× 4)
//!   soil  = base − U[1, 3] + U[0, 2]       (× 9)
//!   avg   = mean(soil)
//! ```
//!
//! Offsets come from [`PanelConfig`].  The generator defaults to
//! `ChaCha8Rng` so a seed reproduces a run exactly across platforms.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::app::ports::ReadingSource;
use crate::config::PanelConfig;

use super::SensorReadings;

/// Offset bounds copied out of [`PanelConfig`] at construction.
#[derive(Debug, Clone, Copy)]
struct Offsets {
    base_drop_min_c: u8,
    base_drop_max_c: u8,
    hub_jitter_c: f32,
    soil_drop_min_c: f32,
    soil_drop_max_c: f32,
    soil_jitter_c: f32,
}

/// Random-noise stand-in for real hub and soil sensors.
pub struct SimulatedSource<R = ChaCha8Rng> {
    rng: R,
    offsets: Offsets,
}

impl SimulatedSource<ChaCha8Rng> {
    /// Seed from OS entropy; every launch differs.
    pub fn from_entropy(config: &PanelConfig) -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy(), config)
    }

    /// Deterministic source for tests and replays.
    pub fn from_seed_u64(seed: u64, config: &PanelConfig) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed), config)
    }
}

impl<R: Rng> SimulatedSource<R> {
    /// Use an arbitrary generator.  `config` should already be validated;
    /// inverted ranges are reordered rather than panicking.
    pub fn with_rng(rng: R, config: &PanelConfig) -> Self {
        let (dmin, dmax) = ordered(config.base_drop_min_c, config.base_drop_max_c);
        let (smin, smax) = ordered(config.soil_drop_min_c, config.soil_drop_max_c);
        Self {
            rng,
            offsets: Offsets {
                base_drop_min_c: dmin,
                base_drop_max_c: dmax,
                hub_jitter_c: config.hub_jitter_c.max(0.0),
                soil_drop_min_c: smin,
                soil_drop_max_c: smax,
                soil_jitter_c: config.soil_jitter_c.max(0.0),
            },
        }
    }
}

impl<R: Rng> ReadingSource for SimulatedSource<R> {
    fn sample(&mut self, air_temp_c: u8) -> SensorReadings {
        let o = self.offsets;
        let drop = self.rng.gen_range(o.base_drop_min_c..=o.base_drop_max_c);
        let base = f32::from(air_temp_c) - f32::from(drop);

        let hubs = core::array::from_fn(|_| base + self.rng.gen_range(0.0..=o.hub_jitter_c));
        let soil = core::array::from_fn(|_| {
            base - self.rng.gen_range(o.soil_drop_min_c..=o.soil_drop_max_c)
                + self.rng.gen_range(0.0..=o.soil_jitter_c)
        });

        let readings = SensorReadings::new(air_temp_c, base, hubs, soil);
        debug!(
            "SIM | air={}\u{00b0}C base={:.1} soil_avg={:.1}",
            air_temp_c, readings.base_c, readings.soil_average_c
        );
        readings
    }
}

fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

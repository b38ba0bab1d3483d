//! Control units driven by panel gestures.
//!
//! - [`trap`]: the four air-intake traps, their ventilators and heat pumps.
//! - [`temp_unit`]: the shared heat-pump power stepper and fan dial.
//!
//! Every bounded field is a clamped counter.  Out-of-range input never
//! fails; it saturates at the nearest bound.

pub mod temp_unit;
pub mod trap;

/// Saturate a raw UI value into `0..=max`.
#[inline]
pub(crate) fn clamp_u8(value: i32, max: u8) -> u8 {
    value.clamp(0, i32::from(max)) as u8
}

/// Saturate a raw UI value into `0..=max`.
#[inline]
pub(crate) fn clamp_u16(value: i32, max: u16) -> u16 {
    value.clamp(0, i32::from(max)) as u16
}

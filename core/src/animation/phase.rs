//! Frame math for the two timed animations.

use super::palette::{GREEN, RED};
use crate::lamps::LampChange;

/// Length of the explosion animation in ticks.
pub const EXPLOSION_TICKS: u32 = 50;

/// Round pulse length is `PULSE_PERIOD / divisor` ticks; the orange frame sits
/// at half of it.
pub const PULSE_PERIOD: u32 = 48;

/// Strikes below 3 pulse at the 3-strike speed.
pub fn pulse_divisor(strikes: u8) -> u32 {
    1 + u32::from(strikes.max(3))
}

/// True when `pulse == 24 / divisor` holds exactly. Fractional midpoints never
/// match, so at some strike counts the orange frame is skipped.
pub fn is_orange_frame(pulse: u32, divisor: u32) -> bool {
    pulse * divisor * 2 == PULSE_PERIOD
}

/// True once `pulse >= 48 / divisor`, compared without rounding.
pub fn pulse_phase_complete(pulse: u32, divisor: u32) -> bool {
    pulse * divisor >= PULSE_PERIOD
}

/// Lamp change for the given explosion frame; only frames 0, 2 and 4 change
/// anything, the fade between them comes from the transition time.
pub fn explosion_frame(pulse: u32) -> Option<LampChange> {
    match pulse {
        0 => Some(LampChange::default().with_brightness(251).with_color(RED)),
        2 => Some(LampChange::default().with_brightness(251).with_color(GREEN)),
        4 => Some(LampChange::default().with_brightness(10).with_color(RED)),
        _ => None,
    }
}

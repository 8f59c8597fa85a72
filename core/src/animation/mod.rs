//! Game-state animation: classifying log messages and driving the lamps.

mod action;
mod controller;
pub mod palette;
mod phase;
mod state;


pub use action::{GameAction, StrikeCount, classify};
pub use controller::AnimationController;
pub use phase::{EXPLOSION_TICKS, PULSE_PERIOD, explosion_frame, pulse_divisor};
pub use state::{AnimationState, GameState};

//! Lamp animation state machine.
//!
//! States, derived from [`AnimationState`]:
//! - Menu: lamps show the menu preset, nothing animates
//! - RoundActive: color lamps pulse between mild orange and orange, faster with
//!   more strikes
//! - Exploding: a 50-tick red/green/dim-red flash
//! - PostMortem: lamps show the post-mortem preset until the next round
//!
//! Actions arrive through [`AnimationController::dispatch`]; the animation
//! advances one frame per [`AnimationController::tick`]. Lamp changes queue up
//! as [`LampCommand`]s and are collected with [`AnimationController::drain_commands`].

use super::palette::{self, AMBIENT_BRIGHTNESS, MILD_ORANGE, ORANGE, Preset};
use super::phase::{
    EXPLOSION_TICKS, explosion_frame, is_orange_frame, pulse_divisor, pulse_phase_complete,
};
use super::{AnimationState, GameAction, GameState};
use crate::lamps::{LampChange, LampCommand, LampId, LampInfo, TransitionTime};

pub struct AnimationController {
    state: AnimationState,
    /// Fade time attached to color-lamp commands. `None` until first chosen.
    transition: Option<TransitionTime>,
    color_lamps: Vec<LampId>,
    pending: Vec<LampCommand>,
}

impl AnimationController {
    /// Take control of the lamps named in `color_lamp_names` and put them in
    /// the menu preset. Every other lamp is dimmed to the ambient brightness.
    pub fn new<S: AsRef<str>>(lamps: &[LampInfo], color_lamp_names: &[S]) -> Self {
        let mut controller = Self {
            state: AnimationState::default(),
            transition: None,
            color_lamps: Vec::new(),
            pending: Vec::new(),
        };

        for lamp in lamps {
            if color_lamp_names.iter().any(|n| n.as_ref() == lamp.name) {
                controller.color_lamps.push(lamp.id.clone());
                controller.command(lamp.id.clone(), palette::MENU.change());
            } else {
                controller.pending.push(LampCommand {
                    lamp: lamp.id.clone(),
                    change: LampChange::default().with_brightness(AMBIENT_BRIGHTNESS),
                    transition: None,
                });
            }
        }

        tracing::debug!(
            color_lamps = controller.color_lamps.len(),
            ambient_lamps = lamps.len() - controller.color_lamps.len(),
            "animation controller initialized"
        );
        controller
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn game_state(&self) -> GameState {
        self.state.game_state()
    }

    pub fn transition(&self) -> Option<TransitionTime> {
        self.transition
    }

    pub fn color_lamps(&self) -> &[LampId] {
        &self.color_lamps
    }

    /// Commands produced since the last drain, in order.
    pub fn drain_commands(&mut self) -> Vec<LampCommand> {
        std::mem::take(&mut self.pending)
    }

    /// Apply a game action. Guards make repeated actions harmless, which is
    /// what allows the log to be replayed on every read.
    pub fn dispatch(&mut self, action: GameAction) {
        match action {
            GameAction::RoundStarted => {
                if !self.state.round_started {
                    self.start_round();
                }
            }
            GameAction::RoundEnded => {
                if !self.state.exploded {
                    self.stop_round();
                }
            }
            GameAction::Explode => {
                if !self.state.exploded {
                    tracing::debug!("exploded");
                    self.state.exploded = true;
                    self.transition = Some(TransitionTime::Quickest);
                    self.state.pulse = 0;
                }
            }
            GameAction::Win => self.state.won = true,
            GameAction::ResultScreenDismissedToMenu => self.stop_round(),
            GameAction::ResultScreenDismissedRetry => {
                self.stop_round();
                self.start_round();
            }
            GameAction::Strike(count) => {
                let strikes = count.get();
                if strikes != self.state.strikes {
                    tracing::debug!(strike = strikes, "Detected strike");
                    self.state.strikes = strikes;
                    match strikes {
                        1 => self.transition = Some(TransitionTime::Half),
                        2 => self.transition = Some(TransitionTime::Quarter),
                        _ => {}
                    }
                }
            }
            GameAction::MenuOpened | GameAction::PostMortem | GameAction::Unknown => {}
        }
    }

    /// Advance the running animation by one frame.
    pub fn tick(&mut self) {
        if self.state.exploded {
            self.explosion_tick();
        } else if self.state.round_started {
            self.pulse_tick();
        }
    }

    fn explosion_tick(&mut self) {
        if self.state.pulse == 1 {
            self.transition = Some(TransitionTime::Normal);
        }

        if let Some(change) = explosion_frame(self.state.pulse) {
            self.command_all(change);
        }

        self.state.pulse += 1;
        if self.state.pulse >= EXPLOSION_TICKS {
            self.state.round_started = false;
            self.state.exploded = false;
            self.state.pulse = 0;
            self.post_mortem();
        }
    }

    fn pulse_tick(&mut self) {
        let divisor = pulse_divisor(self.state.strikes);

        if self.state.pulse == 0 {
            self.command_all(LampChange::default().with_color(MILD_ORANGE));
        } else if is_orange_frame(self.state.pulse, divisor) {
            self.command_all(LampChange::default().with_color(ORANGE));
        }

        self.state.pulse += 1;
        if pulse_phase_complete(self.state.pulse, divisor) {
            self.state.pulse = 0;
        }
    }

    fn start_round(&mut self) {
        tracing::debug!("start_round()");
        self.transition = Some(TransitionTime::Normal);
        self.state.exploded = false;
        self.state.won = false;
        self.state.strikes = 0;
        self.state.post_mortem = false;
        self.state.round_started = true;
    }

    fn stop_round(&mut self) {
        tracing::debug!("Stopped round");
        self.state.round_started = false;
        self.state.post_mortem = false;
        self.transition = Some(TransitionTime::Normal);
        self.apply_preset(palette::MENU);
    }

    fn post_mortem(&mut self) {
        tracing::debug!("post-mortem mode");
        self.state.post_mortem = true;
        self.apply_preset(palette::POST_MORTEM);
    }

    fn apply_preset(&mut self, preset: Preset) {
        self.command_all(preset.change());
    }

    fn command_all(&mut self, change: LampChange) {
        let transition = self.transition;
        self.pending
            .extend(self.color_lamps.iter().map(|lamp| LampCommand {
                lamp: lamp.clone(),
                change,
                transition,
            }));
    }

    fn command(&mut self, lamp: LampId, change: LampChange) {
        self.pending.push(LampCommand {
            lamp,
            change,
            transition: self.transition,
        });
    }
}

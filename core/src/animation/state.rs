/// Mutable session state of the animation controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationState {
    /// A bomb round is running.
    pub round_started: bool,
    /// The explosion animation is playing. Takes priority over the round pulse.
    pub exploded: bool,
    pub won: bool,
    /// 0..=5
    pub strikes: u8,
    /// Frame counter within the current animation phase.
    pub pulse: u32,
    /// Set when an explosion finished, cleared by the next round or menu.
    pub post_mortem: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Menu,
    RoundActive,
    Exploding,
    PostMortem,
}

impl AnimationState {
    pub fn game_state(&self) -> GameState {
        if self.exploded {
            GameState::Exploding
        } else if self.round_started {
            GameState::RoundActive
        } else if self.post_mortem {
            GameState::PostMortem
        } else {
            GameState::Menu
        }
    }
}

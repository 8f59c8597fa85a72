//! Fixed colors and lamp presets used by the animations.

use crate::lamps::{Color, LampChange};

pub const COOL_WHITE: Color = Color::new(35535, 200);
pub const WARM_WHITE: Color = Color::new(30535, 0);
pub const RED: Color = Color::new(65535, 254);
pub const ORANGE: Color = Color::new(13535, 254);
pub const MILD_ORANGE: Color = Color::new(13535, 100);
pub const GREEN: Color = Color::new(25650, 254);

/// Brightness of lamps outside the color set.
pub const AMBIENT_BRIGHTNESS: u8 = 40;

/// Named on/brightness/color combination applied in one go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub on: bool,
    pub brightness: u8,
    pub color: Color,
}

impl Preset {
    pub fn change(self) -> LampChange {
        LampChange::default()
            .with_on(self.on)
            .with_brightness(self.brightness)
            .with_color(self.color)
    }
}

/// Main menu and bomb selection.
pub const MENU: Preset = Preset {
    on: true,
    brightness: 200,
    color: WARM_WHITE,
};

/// Debriefing after an explosion.
pub const POST_MORTEM: Preset = Preset {
    on: true,
    brightness: 200,
    color: COOL_WHITE,
};

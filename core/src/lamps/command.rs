use std::fmt;

/// Identifier the sink uses to address a lamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LampId(pub String);

impl fmt::Display for LampId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LampId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LampInfo {
    pub id: LampId,
    pub name: String,
}

impl LampInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: LampId(id.into()),
            name: name.into(),
        }
    }
}

/// Hue/saturation pair. Hue spans 0–65535, saturation 0–254.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub hue: u16,
    pub saturation: u8,
}

impl Color {
    pub const fn new(hue: u16, saturation: u8) -> Self {
        Self { hue, saturation }
    }
}

/// Fade duration attached to a lamp change, in tenths of a second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionTime {
    Quickest,
    Quarter,
    Half,
    Normal,
}

impl TransitionTime {
    pub fn deciseconds(self) -> u16 {
        match self {
            Self::Quickest => 0,
            Self::Quarter => 2,
            Self::Half => 5,
            Self::Normal => 10,
        }
    }
}

/// Properties to change on a lamp. `None` leaves the property alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LampChange {
    pub on: Option<bool>,
    /// 0–254
    pub brightness: Option<u8>,
    pub hue: Option<u16>,
    pub saturation: Option<u8>,
}

impl LampChange {
    pub fn with_on(mut self, on: bool) -> Self {
        self.on = Some(on);
        self
    }

    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = Some(brightness);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.hue = Some(color.hue);
        self.saturation = Some(color.saturation);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LampCommand {
    pub lamp: LampId,
    pub change: LampChange,
    /// Sticky fade time last chosen for the lamp, if any.
    pub transition: Option<TransitionTime>,
}

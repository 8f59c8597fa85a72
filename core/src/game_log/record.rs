use chrono::NaiveDateTime;
use std::fmt;

/// Bracketed tag naming the game subsystem that wrote a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    State,
    Bomb,
    PostGameState,
}

impl Component {
    pub const ALL: [Component; 3] = [Component::State, Component::Bomb, Component::PostGameState];

    /// The tag as it appears in the log, brackets included.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::State => "[State]",
            Self::Bomb => "[Bomb]",
            Self::PostGameState => "[PostGameState]",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "State" => Some(Self::State),
            "Bomb" => Some(Self::Bomb),
            "PostGameState" => Some(Self::PostGameState),
            _ => None,
        }
    }

    /// True when the line mentions any component of interest.
    pub fn line_has_marker(line: &str) -> bool {
        Self::ALL.iter().any(|c| line.contains(c.marker()))
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// One log line of interest, split into its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub line_number: u64,
    pub level: String,
    /// Log time converted to the local time zone.
    pub timestamp: NaiveDateTime,
    pub component: Component,
    pub message: String,
}

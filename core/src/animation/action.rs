use regex::Regex;
use std::sync::LazyLock;

/// "Strike! 2 / 3 strikes"
static STRIKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bstrike!?\s*(?P<count>\d+)").expect("valid strike regex"));

/// Strike count of a running round, always 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrikeCount(u8);

impl StrikeCount {
    pub const MAX: u8 = 5;

    pub fn new(count: u8) -> Option<Self> {
        (1..=Self::MAX).contains(&count).then_some(Self(count))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// A recognized game event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MenuOpened,
    RoundStarted,
    RoundEnded,
    Explode,
    Win,
    PostMortem,
    ResultScreenDismissedToMenu,
    Strike(StrikeCount),
    ResultScreenDismissedRetry,
    Unknown,
}

impl GameAction {
    pub fn strike(count: u8) -> Option<Self> {
        StrikeCount::new(count).map(Self::Strike)
    }
}

/// Map a log message to the action it announces. Unrecognized text is `Unknown`.
pub fn classify(message: &str) -> GameAction {
    match message {
        "Enter GameplayState" => GameAction::RoundStarted,
        "OnRoundEnd()" => GameAction::RoundEnded,
        "Boom" => GameAction::Explode,
        "A winner is you!!" => GameAction::Win,
        "Results screen bomb binder dismissed (continue). Restarting..." => {
            GameAction::ResultScreenDismissedToMenu
        }
        "Results screen bomb binder dismissed (retry). Retrying same mission..." => {
            GameAction::ResultScreenDismissedRetry
        }
        _ if message.contains("strike") => classify_strike(message),
        _ => GameAction::Unknown,
    }
}

fn classify_strike(message: &str) -> GameAction {
    STRIKE_RE
        .captures(message)
        .and_then(|caps| caps["count"].parse::<u8>().ok())
        .and_then(GameAction::strike)
        .unwrap_or(GameAction::Unknown)
}

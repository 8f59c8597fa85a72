pub mod animation;
pub mod context;
pub mod game_log;
pub mod lamps;

// Re-exports for convenience
pub use animation::{AnimationController, AnimationState, GameAction, GameState, classify};
pub use context::{AppConfig, AppConfigExt, Session, SessionError};
pub use game_log::{LogParser, LogReader, LogRecord, ReaderOptions};
pub use lamps::{HueBridge, LampSink, Lamps, MemoryLamps};

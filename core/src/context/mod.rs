mod config;
mod error;
mod session;

pub use config::{APP_NAME, AppConfig, AppConfigExt, BridgeSettings, SinkKind};
pub use error::{ConfigError, SessionError};
pub use session::Session;

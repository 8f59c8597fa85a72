//! Lamp sinks: where animation commands end up.
//!
//! The animation controller only produces [`LampCommand`]s. A [`LampSink`]
//! discovers the available lamps and executes commands against them.

mod command;
mod error;
mod hue;
mod memory;

pub use command::{Color, LampChange, LampCommand, LampId, LampInfo, TransitionTime};
pub use error::LampError;
pub use hue::HueBridge;
pub use memory::{LampState, MemoryLamps};

/// Something that owns a set of lamps and can change their properties.
#[allow(async_fn_in_trait)]
pub trait LampSink {
    /// Lamps currently known to the sink.
    fn lamps(&self) -> Vec<LampInfo>;

    /// Apply a single command.
    async fn apply(&mut self, command: &LampCommand) -> Result<(), LampError>;

    /// Apply commands in order. Failures are logged and do not stop the batch.
    /// Returns the number of commands that failed.
    async fn apply_all(&mut self, commands: &[LampCommand]) -> usize {
        let mut failed = 0;
        for command in commands {
            if let Err(e) = self.apply(command).await {
                tracing::warn!(lamp = %command.lamp, error = %e, "failed to apply lamp command");
                failed += 1;
            }
        }
        failed
    }
}

/// Sink selected at runtime from configuration.
pub enum Lamps {
    Hue(HueBridge),
    Memory(MemoryLamps),
}

impl LampSink for Lamps {
    fn lamps(&self) -> Vec<LampInfo> {
        match self {
            Self::Hue(bridge) => bridge.lamps(),
            Self::Memory(lamps) => lamps.lamps(),
        }
    }

    async fn apply(&mut self, command: &LampCommand) -> Result<(), LampError> {
        match self {
            Self::Hue(bridge) => bridge.apply(command).await,
            Self::Memory(lamps) => lamps.apply(command).await,
        }
    }
}

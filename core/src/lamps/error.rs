//! Error types for lamp sinks

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LampError {
    #[error("failed to reach bridge at {address}")]
    Unreachable {
        address: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected response from bridge at {address}: {detail}")]
    InvalidResponse { address: String, detail: String },

    #[error("bridge error {code} at {address}: {description}")]
    Bridge {
        address: String,
        code: u64,
        description: String,
    },

    #[error("unknown lamp '{id}'")]
    UnknownLamp { id: String },
}

impl LampError {
    /// Hue answers 101 when pairing is attempted without pressing the link button.
    pub fn is_link_button_not_pressed(&self) -> bool {
        matches!(self, Self::Bridge { code: 101, .. })
    }
}

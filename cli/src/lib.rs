pub mod context;
pub mod lamps;
pub mod logging;

pub use context::CliContext;

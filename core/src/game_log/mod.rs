mod error;
mod parser;
mod reader;
mod record;

pub use error::{ParseError, ReaderError};
pub use parser::LogParser;
pub use reader::{LogReader, ReadSummary, ReaderOptions};
pub use record::*;

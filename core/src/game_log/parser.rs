use super::*;
use chrono::{Duration, FixedOffset, Local, NaiveDateTime, Offset, TimeZone};
use regex::Regex;
use std::sync::LazyLock;

#[cfg(test)]
mod tests;

// DEBUG 2015-12-24 18:57:49,884 [State] Enter GameplayState
static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?P<level>[A-Z]+) (?P<timestamp>\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2},\d{3}) \[(?P<component>State|Bomb|PostGameState)\] (?P<message>.*)$",
    )
    .expect("valid line regex")
});

/// Splits game log lines into records. Timestamps in the log are UTC; the
/// parser shifts them by a fixed offset captured at construction.
pub struct LogParser {
    utc_offset: FixedOffset,
}

impl Default for LogParser {
    fn default() -> Self {
        Self::local()
    }
}

impl LogParser {
    pub fn new(utc_offset: FixedOffset) -> Self {
        Self { utc_offset }
    }

    /// Parser using the process's current local UTC offset.
    pub fn local() -> Self {
        Self::new(Local::now().offset().fix())
    }

    /// Parse a single line.
    ///
    /// Returns `Ok(None)` for lines without a component marker. A line that
    /// carries a marker but does not follow the grammar is an error.
    pub fn parse_line(&self, line_number: u64, line: &str) -> Result<Option<LogRecord>, ParseError> {
        if !Component::line_has_marker(line) {
            return Ok(None);
        }

        let caps = LINE_RE
            .captures(line)
            .ok_or_else(|| ParseError::InvalidLineFormat {
                line_number,
                line: line.to_string(),
            })?;

        let timestamp = self.parse_timestamp(line_number, &caps["timestamp"])?;
        let component = Component::from_tag(&caps["component"]).ok_or_else(|| {
            ParseError::InvalidLineFormat {
                line_number,
                line: line.to_string(),
            }
        })?;

        Ok(Some(LogRecord {
            line_number,
            level: caps["level"].to_string(),
            timestamp,
            component,
            message: caps["message"].to_string(),
        }))
    }

    // parse YYYY-MM-DD HH:MM:SS,mmm (UTC) into local time
    fn parse_timestamp(&self, line_number: u64, segment: &str) -> Result<NaiveDateTime, ParseError> {
        let invalid = || ParseError::InvalidTimestamp {
            line_number,
            segment: segment.to_string(),
        };

        let (seconds, millis) = segment.split_once(',').ok_or_else(invalid)?;
        let millis: i64 = millis.parse().map_err(|_| invalid())?;
        let utc = NaiveDateTime::parse_from_str(seconds, "%Y-%m-%d %H:%M:%S")
            .map_err(|_| invalid())?
            + Duration::milliseconds(millis);

        Ok(self.utc_offset.from_utc_datetime(&utc).naive_local())
    }
}

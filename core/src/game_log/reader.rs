use crate::animation::{AnimationController, classify};
use crate::game_log::{LogParser, ParseError, ReaderError};
use chrono::{Duration, Local, NaiveDateTime};
use ktane_hue_types::DEFAULT_LINE_LIMIT;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Only the first `line_limit` lines of the file are examined.
    pub line_limit: usize,
    /// When set, records further than this from the wall clock are dropped.
    pub max_event_age: Option<Duration>,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            line_limit: DEFAULT_LINE_LIMIT,
            max_event_age: None,
        }
    }
}

/// Counters for a single pass over the log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadSummary {
    pub lines_examined: usize,
    pub records: usize,
    pub dispatched: usize,
}

/// Re-reads the whole game log on every call and feeds the recognized
/// actions to the animation controller, in file order.
pub struct LogReader {
    path: PathBuf,
    parser: LogParser,
    options: ReaderOptions,
}

impl LogReader {
    pub fn new(path: PathBuf, options: ReaderOptions) -> Self {
        Self::with_parser(path, LogParser::local(), options)
    }

    pub fn with_parser(path: PathBuf, parser: LogParser, options: ReaderOptions) -> Self {
        LogReader {
            path,
            parser,
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current file contents and dispatch every action found.
    ///
    /// A malformed marker line aborts the pass; actions before it have
    /// already been dispatched.
    pub async fn read_and_dispatch(
        &self,
        controller: &mut AnimationController,
    ) -> Result<ReadSummary, ReaderError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| ReaderError::ReadFile {
                path: self.path.clone(),
                source,
            })?;

        self.dispatch_bytes(&bytes, Local::now().naive_local(), controller)
            .map_err(|source| ReaderError::Parse {
                path: self.path.clone(),
                source,
            })
    }

    /// Parse `bytes` as log content and dispatch to `controller`.
    /// `now` is the local wall-clock time used by the freshness window.
    pub fn dispatch_bytes(
        &self,
        bytes: &[u8],
        now: NaiveDateTime,
        controller: &mut AnimationController,
    ) -> Result<ReadSummary, ParseError> {
        let mut summary = ReadSummary::default();
        let text = String::from_utf8_lossy(bytes);

        for (idx, line) in split_lines(&text, self.options.line_limit).into_iter().enumerate() {
            summary.lines_examined += 1;

            let Some(record) = self.parser.parse_line(idx as u64 + 1, line)? else {
                continue;
            };
            summary.records += 1;
            tracing::debug!(line = record.line_number, "--------> {}", line.trim());

            let action = classify(&record.message);
            tracing::debug!(?action, component = %record.component, "classified log record");

            if let Some(max_age) = self.options.max_event_age
                && (record.timestamp - now).abs() > max_age
            {
                tracing::trace!(line = record.line_number, "stale record skipped");
                continue;
            }

            controller.dispatch(action);
            summary.dispatched += 1;
        }

        Ok(summary)
    }
}

/// The first `limit` lines of `text`, terminators excluded.
///
/// `\r\n` is one break; a lone `\r` and the other Unicode line boundaries
/// also end a line. Empty lines count towards the limit.
fn split_lines(text: &str, limit: usize) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while lines.len() < limit {
        let Some((idx, ch)) = chars.next() else {
            break;
        };
        if !is_line_break(ch) {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + ch.len_utf8();
        if ch == '\r'
            && let Some(&(next, '\n')) = chars.peek()
        {
            chars.next();
            start = next + 1;
        }
    }

    if start < text.len() && lines.len() < limit {
        lines.push(&text[start..]);
    }
    lines
}

fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

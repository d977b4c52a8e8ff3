//! Per-call records: opened at a severity, filled by chained appends, and handed
//! back to the logger exactly once when they leave scope.

use crate::error::Error;
use crate::internal;
use crate::level::Level;
use crate::logger::Logger;
use chrono::{DateTime, Local};
use std::fmt::{self, Display, Write};
use std::thread::{self, ThreadId};

/// Second granularity, local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A finished record, moved from the builder into the logger for dispatch.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    pub file: &'static str,
    pub line: u32,
    /// Thread that opened the record, not the one that happens to dispatch it.
    pub thread: ThreadId,
    pub message: String,
}

impl LogRecord {
    /// Renders `[<code> <date time> <thread> <file>:<line>]<message>` without a terminator.
    #[must_use]
    pub fn format_line(&self, now: &DateTime<Local>) -> String {
        let mut line = String::with_capacity(self.message.len() + 48 + self.file.len());
        let _ = write!(
            line,
            "[{} {} {} {}:{}]",
            self.level.code(),
            now.format(TIMESTAMP_FORMAT),
            thread_tag(self.thread),
            self.file,
            self.line
        );
        line.push_str(&self.message);
        line
    }
}

/// `ThreadId` has no stable numeric accessor; its debug form `ThreadId(N)` is unique per live thread.
#[must_use]
pub fn thread_tag(id: ThreadId) -> String {
    let debug = format!("{id:?}");
    let digits = debug
        .strip_prefix("ThreadId(")
        .and_then(|s| s.strip_suffix(')'))
        .map(str::to_owned);
    digits.unwrap_or(debug)
}

/// Scope guard for one in-flight log message.
///
/// Not `Clone`: a copy would dispatch twice. Every way out of the owning scope
/// (end of statement, early return, `?`, panic unwind) runs `Drop`, which hands
/// the record to the logger unless [`Record::finish`] already did.
///
/// A sink error that reaches `Drop` panics on the calling thread, since there is
/// no caller left to return it to. Use [`Record::finish`] to handle it instead.
#[derive(Debug)]
pub struct Record<'a> {
    logger: Option<&'a Logger>,
    enabled: bool,
    level: Level,
    file: &'static str,
    line: u32,
    thread: ThreadId,
    message: String,
}

impl<'a> Record<'a> {
    pub(crate) fn new(logger: &'a Logger, level: Level, file: &'static str, line: u32) -> Self {
        Self {
            logger: Some(logger),
            enabled: logger.enabled(level),
            level,
            file,
            line,
            thread: thread::current().id(),
            message: String::new(),
        }
    }

    /// Appends `value` with no separator; chains by moving the record along.
    pub fn append(mut self, value: impl Display) -> Self {
        let _ = write!(self, "{value}");
        self
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    #[must_use]
    pub const fn thread(&self) -> ThreadId {
        self.thread
    }

    /// Body accumulated so far. Stays empty for records below the logger's threshold.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Dispatches now and returns the sink's error instead of panicking on drop.
    ///
    /// # Errors
    /// Whatever the sink reports, e.g. a rotation that could not open its new file.
    pub fn finish(mut self) -> Result<(), Error> {
        self.dispatch().unwrap_or(Ok(()))
    }

    /// `None` once the record has been handed over.
    fn dispatch(&mut self) -> Option<Result<(), Error>> {
        let logger = self.logger.take()?;
        let record = LogRecord {
            level: self.level,
            file: self.file,
            line: self.line,
            thread: self.thread,
            message: std::mem::take(&mut self.message),
        };
        Some(logger.finalize(record))
    }
}

impl fmt::Write for Record<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.enabled {
            self.message.push_str(s);
        }
        Ok(())
    }

    // Filtered records skip argument formatting entirely.
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        if self.enabled {
            self.message.write_fmt(args)
        } else {
            Ok(())
        }
    }
}

impl Drop for Record<'_> {
    fn drop(&mut self) {
        let Some(Err(e)) = self.dispatch() else {
            return;
        };

        // A second panic while unwinding would abort the process.
        if thread::panicking() {
            internal::error("RECORD", &format!("Log write failed during unwind: {e}"));
            eprintln!("rotalog: log write failed during unwind: {e}");
        } else {
            panic!("rotalog: log write failed: {e}");
        }
    }
}

//! The logger owns a severity threshold and one mutex around its sink. Records are
//! built lock-free on the caller's stack and only take the lock for the write itself.

mod builder;
mod from_config;

pub use builder::{ConsoleBuilder, FileBuilder, LoggerBuilder};

use crate::error::Error;
use crate::level::Level;
use crate::record::{LogRecord, Record};
use crate::sink::{ConsoleSink, FileSink, Sink};
use chrono::Local;
use std::fmt::{self, Display};
use std::panic::Location;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Shared by reference across threads; one lock per instance, so independent loggers never contend.
pub struct Logger {
    min_level: Level,
    sink: Mutex<Box<dyn Sink>>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Stepwise construction for sink options (colors, size ceiling).
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Wraps any sink, including ones defined outside this crate.
    #[must_use]
    pub fn new(min_level: Level, sink: impl Sink + 'static) -> Self {
        Self::from_boxed(min_level, Box::new(sink))
    }

    pub(crate) fn from_boxed(min_level: Level, sink: Box<dyn Sink>) -> Self {
        Self {
            min_level,
            sink: Mutex::new(sink),
        }
    }

    /// Colored output on stdout.
    #[must_use]
    pub fn console(min_level: Level) -> Self {
        Self::new(min_level, ConsoleSink::new())
    }

    /// File output rotating at the default 1 MiB ceiling.
    ///
    /// # Errors
    /// Returns [`Error::Open`] if the first log file cannot be opened.
    pub fn file(prefix: impl AsRef<Path>, min_level: Level) -> Result<Self, Error> {
        Ok(Self::new(min_level, FileSink::with_default_limit(prefix)?))
    }

    /// File output rotating once `size_limit` bytes would be exceeded.
    ///
    /// # Errors
    /// Returns [`Error::Open`] if the first log file cannot be opened.
    pub fn file_with_limit(
        prefix: impl AsRef<Path>,
        min_level: Level,
        size_limit: u64,
    ) -> Result<Self, Error> {
        Ok(Self::new(min_level, FileSink::new(prefix, size_limit)?))
    }

    /// Opens a record at the caller's source location. Never fails and costs the
    /// same whether or not the record will be filtered.
    #[track_caller]
    #[must_use = "the record is written when dropped; dropping it immediately logs an empty message"]
    pub fn stream(&self, level: Level) -> Record<'_> {
        let caller = Location::caller();
        Record::new(self, level, caller.file(), caller.line())
    }

    /// Opens a record at an explicit source location (used by the `stream!` and `log!` macros).
    #[must_use = "the record is written when dropped; dropping it immediately logs an empty message"]
    pub fn stream_at(&self, level: Level, file: &'static str, line: u32) -> Record<'_> {
        Record::new(self, level, file, line)
    }

    /// One-shot record that returns the sink error instead of panicking.
    ///
    /// # Errors
    /// Whatever the sink reports, e.g. a failed rotation.
    #[track_caller]
    pub fn log(&self, level: Level, msg: impl Display) -> Result<(), Error> {
        self.stream(level).append(msg).finish()
    }

    #[track_caller]
    pub fn debug(&self, msg: impl Display) {
        let _record = self.stream(Level::Debug).append(msg);
    }

    #[track_caller]
    pub fn info(&self, msg: impl Display) {
        let _record = self.stream(Level::Info).append(msg);
    }

    #[track_caller]
    pub fn warning(&self, msg: impl Display) {
        let _record = self.stream(Level::Warning).append(msg);
    }

    #[track_caller]
    pub fn error(&self, msg: impl Display) {
        let _record = self.stream(Level::Error).append(msg);
    }

    /// Only tags the line; the process keeps running.
    #[track_caller]
    pub fn fatal(&self, msg: impl Display) {
        let _record = self.stream(Level::Fatal).append(msg);
    }

    /// Filters, formats, then writes under the lock. Called exactly once per record.
    pub(crate) fn finalize(&self, record: LogRecord) -> Result<(), Error> {
        if record.level < self.min_level {
            return Ok(());
        }

        let line = record.format_line(&Local::now());
        self.lock_sink().write_line(&line, record.level)
    }

    /// A sink that panicked mid-write leaves no torn state worth refusing later writes over.
    fn lock_sink(&self) -> MutexGuard<'_, Box<dyn Sink>> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Pushes anything the sink still holds to its destination.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    pub fn flush(&self) -> Result<(), Error> {
        self.lock_sink().flush()
    }

    /// The severity threshold fixed at construction.
    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    /// Whether a record at `level` would reach the sink.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }
}

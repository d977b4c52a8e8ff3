//! Sink options (colors, prefix, size ceiling) differ per sink — the builder hides
//! that behind a stepwise API and opens files only in `build`.

use super::Logger;
use crate::error::Error;
use crate::internal;
use crate::level::Level;
use crate::sink::{ConsoleSink, DEFAULT_SIZE_LIMIT, FileSink, Sink};
use std::path::PathBuf;

/// What `build` should construct; files are opened lazily so configuring stays infallible.
enum SinkPlan {
    Console(ConsoleSink),
    File { prefix: PathBuf, size_limit: u64 },
    Custom(Box<dyn Sink>),
}

/// Collects the threshold and sink choice before anything touches the filesystem.
pub struct LoggerBuilder {
    min_level: Level,
    sink: Option<SinkPlan>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Info is a safe default for production; Debug is opt-in.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_level: Level::Info,
            sink: None,
        }
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Console output has its own concern (colors) needing a dedicated sub-builder.
    #[must_use]
    pub fn console(self) -> ConsoleBuilder {
        ConsoleBuilder {
            parent: self,
            sink: ConsoleSink::new(),
        }
    }

    /// File output has its own concerns (prefix, ceiling) needing a dedicated sub-builder.
    #[must_use]
    pub fn file(self, prefix: impl Into<PathBuf>) -> FileBuilder {
        FileBuilder {
            parent: self,
            prefix: prefix.into(),
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }

    /// The two built-in sinks can't cover every use case.
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Some(SinkPlan::Custom(Box::new(sink)));
        self
    }

    /// Falls back to a colored console sink when none was chosen.
    ///
    /// # Errors
    /// Returns [`Error::Open`] if a file sink cannot open its first file.
    pub fn build(self) -> Result<Logger, Error> {
        let sink: Box<dyn Sink> = match self.sink {
            None => Box::new(ConsoleSink::new()),
            Some(SinkPlan::Console(console)) => Box::new(console),
            Some(SinkPlan::File { prefix, size_limit }) => {
                Box::new(FileSink::new(prefix, size_limit)?)
            }
            Some(SinkPlan::Custom(sink)) => sink,
        };
        internal::debug(
            "LOGGER",
            &format!("Logger ready (min level: {})", self.min_level),
        );
        Ok(Logger::from_boxed(self.min_level, sink))
    }
}

/// Console-specific options, separate from file options.
pub struct ConsoleBuilder {
    parent: LoggerBuilder,
    sink: ConsoleSink,
}

impl ConsoleBuilder {
    /// Piped output and CI logs often can't render ANSI escape codes.
    #[must_use]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.sink = self.sink.colors(enabled);
        self
    }

    /// Sub-builder consumes self, so there must be a way back.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.sink = Some(SinkPlan::Console(self.sink));
        self.parent
    }
}

/// File-specific options, separate from console options.
pub struct FileBuilder {
    parent: LoggerBuilder,
    prefix: PathBuf,
    size_limit: u64,
}

impl FileBuilder {
    /// Bytes a single file may reach before the next write rotates it.
    #[must_use]
    pub const fn size_limit(mut self, bytes: u64) -> Self {
        self.size_limit = bytes;
        self
    }

    /// Sub-builder consumes self, so there must be a way back.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.sink = Some(SinkPlan::File {
            prefix: self.prefix,
            size_limit: self.size_limit,
        });
        self.parent
    }
}

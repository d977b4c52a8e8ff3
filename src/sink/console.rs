//! Console sink: colored lines on stdout, best effort.

use super::Sink;
use crate::level::Level;
use std::fmt;
use std::io::{self, Write};

const YELLOW: &str = "\x1b[33m";
const BOLD_RED: &str = "\x1b[31;1m";
const RESET: &str = "\x1b[0m";

/// Escape code that opens a line at `level`; empty for plain levels.
const fn color_code(level: Level) -> &'static str {
    match level {
        Level::Debug | Level::Info => "",
        Level::Warning => YELLOW,
        Level::Error | Level::Fatal => BOLD_RED,
    }
}

/// Writes each line to stdout (or any `Write` target), wrapping Warning and above
/// in ANSI color. Write failures are dropped: a broken pipe must not take the
/// host application down.
pub struct ConsoleSink<W = io::Stdout> {
    writer: W,
    colors_enabled: bool,
}

impl<W> fmt::Debug for ConsoleSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("colors_enabled", &self.colors_enabled)
            .finish_non_exhaustive()
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink {
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    /// Any writer, e.g. a shared buffer in tests.
    #[must_use]
    pub const fn with_writer(writer: W) -> Self {
        Self {
            writer,
            colors_enabled: true,
        }
    }

    /// Piped output and CI logs often can't render ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    /// Builds the exact bytes for one line so it reaches the writer in a single call.
    fn render(&self, line: &str, level: Level) -> String {
        let color = if self.colors_enabled {
            color_code(level)
        } else {
            ""
        };

        if color.is_empty() {
            format!("{line}\n")
        } else {
            format!("{color}{line}{RESET}\n")
        }
    }
}

impl<W: Write + Send> Sink for ConsoleSink<W> {
    fn write_line(&mut self, line: &str, level: Level) -> Result<(), crate::Error> {
        let rendered = self.render(line, level);
        let _ = self.writer.write_all(rendered.as_bytes());
        let _ = self.writer.flush();
        Ok(())
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        let _ = self.writer.flush();
        Ok(())
    }
}

//! The two built-in sinks (console, rotating file) can't cover every use case — the
//! `Sink` trait lets embedders add their own without touching the logger's locking.

mod console;
mod file;

pub use console::ConsoleSink;
pub use file::{DEFAULT_SIZE_LIMIT, FileSink, file_name};

use crate::level::Level;

/// Destination for finished lines.
///
/// Methods take `&mut self` because the logger calls them only while holding its
/// mutex; implementations need no locking of their own. `Send` lets the logger
/// itself be shared across threads.
pub trait Sink: Send {
    /// Writes one formatted line (no terminator) at `level`.
    ///
    /// # Errors
    /// I/O errors the sink considers fatal; the logger passes them to the caller.
    fn write_line(&mut self, line: &str, level: Level) -> Result<(), crate::Error>;

    /// Pushes anything still held by the sink to its destination.
    ///
    /// # Errors
    /// I/O errors from the underlying destination.
    fn flush(&mut self) -> Result<(), crate::Error> {
        Ok(())
    }
}

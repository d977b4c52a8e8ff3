//! `rotalog` - Leveled, thread-safe logging to the console and size-rotated files.
//!
//! A record is opened at a severity, filled through chained appends, and written
//! when it goes out of scope:
//! - Below-threshold records are dropped before any formatting or locking
//! - Each logger serializes its sink behind a single mutex, so lines never interleave
//! - The file sink rotates to a fresh time-stamped file before a write would exceed its ceiling
//!
//! # Example
//!
//! ```
//! use rotalog::{Level, Logger};
//!
//! let logger = Logger::console(Level::Info);
//!
//! logger.stream(Level::Info).append("This is INFO").append(5);
//! logger.stream(Level::Debug).append("filtered");
//! rotalog::log!(logger, Warning, "disk at {}%", 91);
//! ```

pub mod config;
pub mod error;
pub mod internal;
pub mod level;
pub mod logger;
mod macros;
pub mod record;
pub mod sink;

pub use config::{Config, format_size, parse_size};
pub use error::Error;
pub use level::{Level, ParseLevelError};
pub use logger::{ConsoleBuilder, FileBuilder, Logger, LoggerBuilder};
pub use record::{LogRecord, Record};
pub use sink::{ConsoleSink, DEFAULT_SIZE_LIMIT, FileSink, Sink};

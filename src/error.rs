//! Unified error type for all rotalog operations.

use std::path::PathBuf;

/// Error type for rotalog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while writing to or flushing a sink.
    Io(std::io::Error),
    /// A log file could not be opened, at construction or at rotation.
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Invalid log level string.
    InvalidLevel(String),
    /// Invalid size string (e.g. `size_limit = "lots"`).
    InvalidSize(String),
    /// Sink kind other than `console` or `file`.
    UnknownSink(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Open { path, source } => {
                write!(f, "log file open failed: {}: {source}", path.display())
            }
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::InvalidLevel(level) => write!(f, "invalid level: {level}"),
            Self::InvalidSize(size) => write!(f, "invalid size: {size}"),
            Self::UnknownSink(kind) => write!(f, "unknown sink: {kind}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::Open { source: e, .. } => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

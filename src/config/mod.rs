//! TOML configuration for building a logger without code changes.
//!
//! Every struct is `#[serde(default)]`, so an empty file yields a console logger at Info.

mod size;
mod structs;

pub use size::{format_size, parse_size};
pub use structs::{ConsoleConfig, FileConfig, GeneralConfig};

use crate::error::Error;
use crate::internal;
use crate::level::Level;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level config file layout: `[general]`, `[console]`, `[file]`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub console: ConsoleConfig,
    pub file: FileConfig,
}

/// The sink a config selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Console,
    File,
}

impl Config {
    /// A missing file is not an error — defaults are a working console logger.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            internal::debug(
                "CONFIG",
                &format!("{} not found, using defaults", path.display()),
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        internal::info(
            "CONFIG",
            &format!("Config loaded from {}", path.display()),
        );
        Ok(config)
    }

    /// # Errors
    /// Returns [`Error::ConfigParse`] on invalid TOML.
    pub fn parse(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    /// # Errors
    /// Returns [`Error::InvalidLevel`] for an unknown level name.
    pub fn parse_level(&self) -> Result<Level, Error> {
        Ok(self.general.level.parse()?)
    }

    /// `None` when internal diagnostics are not requested.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLevel`] for an unknown level name.
    pub fn parse_internal_level(&self) -> Result<Option<Level>, Error> {
        self.general
            .internal_level
            .as_deref()
            .map(|level| level.parse().map_err(Error::from))
            .transpose()
    }

    /// # Errors
    /// Returns [`Error::UnknownSink`] for anything but `console` or `file`.
    pub fn parse_sink(&self) -> Result<SinkKind, Error> {
        match self.general.sink.trim().to_lowercase().as_str() {
            "console" | "stdout" => Ok(SinkKind::Console),
            "file" => Ok(SinkKind::File),
            other => Err(Error::UnknownSink(other.to_string())),
        }
    }

    /// # Errors
    /// Returns [`Error::InvalidSize`] if the string is not a size.
    pub fn parse_size_limit(&self) -> Result<u64, Error> {
        parse_size(&self.file.size_limit)
            .filter(|&bytes| bytes > 0)
            .ok_or_else(|| Error::InvalidSize(self.file.size_limit.clone()))
    }

    /// The file prefix with a leading `~` replaced by the home directory.
    #[must_use]
    pub fn expanded_prefix(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.file.prefix).as_ref())
    }
}

//! Rotating file sink. Each file is named from the prefix, the local time down to
//! the millisecond and a random salt, so rotations never reuse a name.

use super::Sink;
use crate::error::Error;
use crate::internal;
use crate::level::Level;
use chrono::{DateTime, Local};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// 1 MiB.
pub const DEFAULT_SIZE_LIMIT: u64 = 1024 * 1024;

/// `<prefix>_<YYYYMMDD>_<HHMMSS>.<mmm>.<salt>`, no extension.
#[must_use]
pub fn file_name(prefix: &Path, now: &DateTime<Local>, salt: u32) -> PathBuf {
    let mut name = prefix.as_os_str().to_owned();
    name.push(format!("_{}.{salt}", now.format("%Y%m%d_%H%M%S%.3f")));
    PathBuf::from(name)
}

/// Appends lines to the current file and swaps in a fresh one before a write
/// would push it past `size_limit`.
///
/// Not synchronized: the logger only calls it with its mutex held.
#[derive(Debug)]
pub struct FileSink {
    file: File,
    path: PathBuf,
    prefix: PathBuf,
    size_limit: u64,
    /// Bytes written to `file`, terminators included.
    cur_size: u64,
    rotations: u64,
}

impl FileSink {
    /// Opens the first file right away so a bad prefix fails at construction.
    ///
    /// # Errors
    /// Returns [`Error::Open`] if the file cannot be created.
    pub fn new(prefix: impl AsRef<Path>, size_limit: u64) -> Result<Self, Error> {
        let prefix = prefix.as_ref().to_path_buf();
        let (file, path) = open_next(&prefix)?;
        internal::debug(
            "FILE",
            &format!("Opened {} (limit {size_limit} bytes)", path.display()),
        );

        Ok(Self {
            file,
            path,
            prefix,
            size_limit,
            cur_size: 0,
            rotations: 0,
        })
    }

    /// # Errors
    /// Returns [`Error::Open`] if the file cannot be created.
    pub fn with_default_limit(prefix: impl AsRef<Path>) -> Result<Self, Error> {
        Self::new(prefix, DEFAULT_SIZE_LIMIT)
    }

    /// File currently receiving lines.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn size_limit(&self) -> u64 {
        self.size_limit
    }

    /// Bytes written to the current file since it was opened.
    #[must_use]
    pub const fn current_size(&self) -> u64 {
        self.cur_size
    }

    /// How many times a new file has replaced the current one.
    #[must_use]
    pub const fn rotations(&self) -> u64 {
        self.rotations
    }

    /// On failure the current file stays open and the error goes to the writing thread.
    fn rotate(&mut self, incoming: u64) -> Result<(), Error> {
        internal::debug(
            "FILE",
            &format!(
                "Size limit reached: cur_size={}, line={incoming}, limit={}",
                self.cur_size, self.size_limit
            ),
        );

        let (file, path) = open_next(&self.prefix)?;
        // Replacing the handle closes the old file.
        self.file = file;
        self.path = path;
        self.cur_size = 0;
        self.rotations += 1;

        internal::debug("FILE", &format!("Rotated to {}", self.path.display()));
        Ok(())
    }
}

impl Sink for FileSink {
    fn write_line(&mut self, line: &str, _level: Level) -> Result<(), Error> {
        let incoming = line.len() as u64 + 1;

        // A fresh file always takes its first line, however long.
        if self.cur_size > 0 && self.cur_size.saturating_add(incoming) > self.size_limit {
            self.rotate(incoming)?;
        }
        if incoming > self.size_limit {
            internal::warn(
                "FILE",
                &format!(
                    "Line of {incoming} bytes exceeds limit {} in {}",
                    self.size_limit,
                    self.path.display()
                ),
            );
        }
        self.cur_size += incoming;

        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        self.file.write_all(buf.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.file.flush()?;
        Ok(())
    }
}

/// Appends rather than truncates, though the salted name is new every time.
fn open_next(prefix: &Path) -> Result<(File, PathBuf), Error> {
    let path = file_name(prefix, &Local::now(), rand::random());
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => Ok((file, path)),
        Err(source) => {
            internal::error(
                "FILE",
                &format!("Log file open failed: {}: {source}", path.display()),
            );
            Err(Error::Open { path, source })
        }
    }
}

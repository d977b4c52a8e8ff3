//! rotalog's own diagnostic logger — reports rotations, config loading and
//! errors that surface while a thread is already unwinding.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if several
//! threads race to call `init`. It is a separate console logger, so writing a
//! diagnostic never takes the lock of the logger whose sink produced it.

use crate::level::Level;
use crate::logger::Logger;
use std::fmt::Write;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Only the first call takes effect; later calls are no-ops.
pub fn init(level: Level) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| Logger::console(level));
    if !was_init {
        debug("INTERNAL", &format!("Internal logger ready (level: {level})"));
    }
}

/// Whether `init` has run.
#[must_use]
pub fn is_initialized() -> bool {
    INTERNAL_LOGGER.get().is_some()
}

/// Pre-init calls silently vanish rather than crashing — safe during early startup.
#[track_caller]
fn log(level: Level, scope: &str, msg: &str) {
    let Some(logger) = INTERNAL_LOGGER.get() else {
        return;
    };
    if !logger.enabled(level) {
        return;
    }

    let mut record = logger.stream(level);
    let _ = write!(record, "[rotalog:{scope}] {msg}");
    // Console sinks never fail; nothing to report if one somehow did.
    let _ = record.finish();
}

#[track_caller]
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

#[track_caller]
pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

#[track_caller]
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warning, scope, msg);
}

#[track_caller]
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}

//! Logger construction from a loaded config file.

use super::{Logger, LoggerBuilder};
use crate::config::{Config, SinkKind, format_size};
use crate::error::Error;
use crate::internal;

impl Logger {
    /// Builds the sink the config selects. If `general.internal_level` is set,
    /// rotalog's own diagnostics are switched on first so sink setup is reported too.
    ///
    /// # Errors
    /// Invalid level, sink or size values, or a file sink that cannot open its first file.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        if let Some(level) = config.parse_internal_level()? {
            internal::init(level);
        }

        let level = config.parse_level()?;
        let builder = LoggerBuilder::new().level(level);

        let builder = match config.parse_sink()? {
            SinkKind::Console => {
                internal::debug(
                    "LOGGER",
                    &format!("Console sink, colors={}", config.console.colors),
                );
                builder.console().colors(config.console.colors).done()
            }
            SinkKind::File => {
                let prefix = config.expanded_prefix();
                let size_limit = config.parse_size_limit()?;
                internal::debug(
                    "LOGGER",
                    &format!(
                        "File sink, prefix={}, limit={}",
                        prefix.display(),
                        format_size(size_limit)
                    ),
                );
                builder.file(prefix).size_limit(size_limit).done()
            }
        };

        builder.build()
    }
}

//! Configuration struct definitions.

use serde::Deserialize;

/// Settings that apply whichever sink is chosen.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum log level.
    pub level: String,
    /// Sink kind: `console` or `file`.
    pub sink: String,
    /// Enables rotalog's own diagnostics on the console at this level.
    pub internal_level: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            sink: "console".to_string(),
            internal_level: None,
        }
    }
}

/// Console sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Enable ANSI colors for warning and above.
    pub colors: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { colors: true }
    }
}

/// File sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// File name prefix; `~` is expanded.
    pub prefix: String,
    /// Rotation ceiling, e.g. `"1M"`, `"512K"` or `"4096"`.
    pub size_limit: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        let prefix = directories::ProjectDirs::from("", "", "rotalog").map_or_else(
            || "logs/rotalog".to_string(),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("logs")
                    .join("rotalog")
                    .to_string_lossy()
                    .into_owned()
            },
        );

        Self {
            prefix,
            size_limit: "1M".to_string(),
        }
    }
}

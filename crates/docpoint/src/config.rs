//! Optional workspace configuration, read from a `docpoint.toml` next to
//! (or above) the queried file. Absent file means defaults; unknown keys
//! are rejected so typos surface instead of being ignored.

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const SETTINGS_FILE_NAME: &str = "docpoint.toml";
pub const LOG_LEVEL_ENV: &str = "DOCPOINT_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderSettings {
    /// Extra roots to resolve imports against when no module marker is
    /// found above the queried file.
    pub source_roots: Vec<PathBuf>,
    /// Load `_test.go` files even when the queried file is not one.
    pub include_tests: bool,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            source_roots: Vec::new(),
            include_tests: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingSettings {
    pub level: LogLevel,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub loader: LoaderSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsPatch {
    loader: Option<LoaderPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct LoaderPatch {
    source_roots: Option<Vec<PathBuf>>,
    include_tests: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LoggingPatch {
    level: Option<LogLevel>,
}

impl Settings {
    /// Walk up from `start` looking for a settings file, apply it over the
    /// defaults, then apply the environment override.
    pub fn discover(start: &Path) -> Settings {
        let mut settings = Settings::default();

        let mut current = Some(start);
        while let Some(dir) = current {
            let candidate = dir.join(SETTINGS_FILE_NAME);
            if candidate.is_file() {
                match std::fs::read_to_string(&candidate)
                    .map_err(|err| err.to_string())
                    .and_then(|text| Settings::from_toml(&text).map_err(|err| err.to_string()))
                {
                    Ok(parsed) => settings = parsed,
                    Err(err) => {
                        tracing::warn!(file = %candidate.display(), error = %err, "ignoring settings file");
                    },
                }
                break;
            }
            current = dir.parent();
        }

        if let Ok(level) = std::env::var(LOG_LEVEL_ENV)
            && let Some(level) = LogLevel::parse(&level)
        {
            settings.logging.level = level;
        }
        settings
    }

    pub fn from_toml(text: &str) -> Result<Settings, toml::de::Error> {
        let patch: SettingsPatch = toml::from_str(text)?;
        let mut settings = Settings::default();
        if let Some(loader) = patch.loader {
            if let Some(source_roots) = loader.source_roots {
                settings.loader.source_roots = source_roots;
            }
            if let Some(include_tests) = loader.include_tests {
                settings.loader.include_tests = include_tests;
            }
        }
        if let Some(logging) = patch.logging
            && let Some(level) = logging.level
        {
            settings.logging.level = level;
        }
        Ok(settings)
    }
}

#[cfg(test)]
#[path = "../tests/src/config_tests.rs"]
mod tests;

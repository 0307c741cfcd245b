use crate::timestamp::{validate_time_format, TimeFormatError, DEFAULT_TIME_FORMAT};
use crate::url_model::{FilenameTemplate, TemplateError, DEFAULT_TEMPLATE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default per-request fetch timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Unknown setting: {0}")]
    UnknownKey(String),
    #[error("Invalid filename template: {0}")]
    Template(#[from] TemplateError),
    #[error("Invalid time format: {0}")]
    TimeFormat(#[from] TimeFormatError),
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// User settings loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Filename template applied by `get`.
    pub filename_template: String,
    /// strftime format for the `{timestamp}` placeholder.
    pub time_format: String,
    /// Total timeout for one HTTP request, in seconds.
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            filename_template: DEFAULT_TEMPLATE.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    pub const KEYS: [&'static str; 3] = ["filename_template", "time_format", "timeout_secs"];

    /// All settings as `(key, value)` pairs, in [`Settings::KEYS`] order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|k| self.get(k).ok().map(|v| (*k, v)))
            .collect()
    }

    pub fn get(&self, key: &str) -> Result<String, SettingsError> {
        match key {
            "filename_template" => Ok(self.filename_template.clone()),
            "time_format" => Ok(self.time_format.clone()),
            "timeout_secs" => Ok(self.timeout_secs.to_string()),
            _ => Err(SettingsError::UnknownKey(key.to_string())),
        }
    }

    /// Sets `key` after validating `value`; on error nothing changes.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        match key {
            "filename_template" => {
                FilenameTemplate::parse(value)?;
                self.filename_template = value.to_string();
            }
            "time_format" => {
                validate_time_format(value)?;
                self.time_format = value.to_string();
            }
            "timeout_secs" => {
                let secs = value
                    .parse::<u64>()
                    .ok()
                    .filter(|s| *s > 0)
                    .ok_or_else(|| SettingsError::InvalidValue {
                        key: key.to_string(),
                        value: value.to_string(),
                    })?;
                self.timeout_secs = secs;
            }
            _ => return Err(SettingsError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Compiles the configured filename template.
    pub fn template(&self) -> Result<FilenameTemplate, SettingsError> {
        Ok(FilenameTemplate::parse(&self.filename_template)?)
    }
}

/// Default settings location: `$XDG_CONFIG_HOME/urload/config.toml`.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urload")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Loads settings from `path`, falling back to defaults if it does not exist.
pub fn load(path: &Path) -> Result<Settings> {
    if !path.exists() {
        tracing::info!("no config at {}, using defaults", path.display());
        return Ok(Settings::default());
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let settings: Settings = toml::from_str(&data)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    tracing::debug!("loaded settings from {}: {:?}", path.display(), settings);
    Ok(settings)
}

/// Writes `settings` to `path`, creating parent directories as needed.
pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(settings)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("failed to write config: {}", path.display()))?;
    tracing::debug!("saved settings to {}", path.display());
    Ok(())
}

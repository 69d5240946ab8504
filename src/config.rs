//! Configuration for the profile page generator.
//!
//! Stored as TOML at `$PROFILEPAGE_CONFIG` when set, otherwise at
//!   %APPDATA%/profilepage/config.toml on Windows
//!   $XDG_CONFIG_HOME/profilepage/config.toml on Linux
//!   ~/Library/Application Support/profilepage/config.toml on macOS
//!
//! Command-line flags override anything loaded here.

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Standard file name of the config file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable that points at an explicit config file.
pub const CONFIG_ENV_VAR: &str = "PROFILEPAGE_CONFIG";

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the profile is read from and the page written to.
    #[serde(default)]
    pub paths: PathSettings,
    /// Page-level rendering options.
    #[serde(default)]
    pub render: RenderSettings,
    /// Log level and output format.
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathSettings {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("profile.json")
}

fn default_output() -> PathBuf {
    PathBuf::from("profile.html")
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderSettings {
    /// `<html lang>` attribute.
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Optional script file inlined into the page.
    #[serde(default)]
    pub script: Option<PathBuf>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            script: None,
        }
    }
}

fn default_lang() -> String {
    "en".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingSettings {
    /// trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,
    /// text or json
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Path to the config file.
///
/// Order of precedence:
/// 1. `PROFILEPAGE_CONFIG` environment variable.
/// 2. OS-specific config directory via `directories::BaseDirs`.
pub fn config_file_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS config directory")?;
    Ok(base_dirs
        .config_dir()
        .join("profilepage")
        .join(CONFIG_FILE_NAME))
}

/// Loads the configuration from its default location or returns defaults.
pub fn load_or_default() -> Result<AppConfig> {
    let path = config_file_path()?;
    if path.exists() {
        load_from(&path)
    } else {
        Ok(AppConfig::default())
    }
}

/// Loads the configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<AppConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    let cfg: AppConfig =
        toml::from_str(&data).with_context(|| format!("Failed to parse config file {:?}", path))?;
    Ok(cfg)
}

/// Persists the configuration to `path`.
pub fn save_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let data = toml::to_string_pretty(config)?;
    fs::write(path, data).with_context(|| format!("Failed to write config file {:?}", path))?;
    Ok(())
}

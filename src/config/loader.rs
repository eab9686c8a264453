//! Configuration file loading with precedence handling.

use crate::hover::IconMetrics;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "PETHOVER_CONFIG";

/// Environment variable toggling the pets tooltip.
pub const PETS_TOOLTIP_ENV_VAR: &str = "PETHOVER_PETS_TOOLTIP";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting parsed but its value is unusable.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Setting name.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; missing ones fall back to defaults.
/// Corresponds to `~/.config/pethover/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Show a tooltip naming the hovered pet.
    #[serde(default)]
    pub pets_tooltip: Option<bool>,

    /// Rendered width of one pet icon in pixels.
    #[serde(default)]
    pub icon_width: Option<i32>,

    /// Rendered height of one pet icon in pixels.
    #[serde(default)]
    pub icon_height: Option<i32>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Show a tooltip naming the hovered pet.
    pub pets_tooltip: bool,
    /// Pet icon size.
    pub icons: IconMetrics,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            pets_tooltip: true,
            icons: IconMetrics::DEFAULT,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/pethover/pethover.log` on Linux, or the platform
/// state directory elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("pethover").join("pethover.log")
    } else {
        PathBuf::from("pethover.log")
    }
}

/// Resolve default config file path.
///
/// Returns `None` if the platform config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pethover").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist.
///
/// # Errors
///
/// Returns error if the file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `PETHOVER_CONFIG` environment variable
/// 3. Default path `~/.config/pethover/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Build icon metrics, reporting the offending setting on failure.
fn icon_metrics(width: i32, height: i32) -> Result<IconMetrics, ConfigError> {
    IconMetrics::new(width, height).map_err(|e| ConfigError::InvalidValue {
        field: if width <= 0 { "icon_width" } else { "icon_height" },
        reason: e.to_string(),
    })
}

/// Merge config file into defaults to create resolved config.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for non-positive icon dimensions.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let icons = icon_metrics(
        config.icon_width.unwrap_or(defaults.icons.width()),
        config.icon_height.unwrap_or(defaults.icons.height()),
    )?;

    Ok(ResolvedConfig {
        pets_tooltip: config.pets_tooltip.unwrap_or(defaults.pets_tooltip),
        icons,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Parse a boolean switch the way shells usually spell them.
fn parse_switch(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `PETHOVER_PETS_TOOLTIP`; unrecognized values are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(PETS_TOOLTIP_ENV_VAR) {
        match parse_switch(&raw) {
            Some(enabled) => config.pets_tooltip = enabled,
            None => warn!(
                var = PETS_TOOLTIP_ENV_VAR,
                value = %raw,
                "Ignoring unrecognized boolean"
            ),
        }
    }

    config
}

/// Command-line overrides; `None` leaves the setting alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--no-pets-tooltip` maps to `Some(false)`.
    pub pets_tooltip: Option<bool>,
    /// `--icon-width`.
    pub icon_width: Option<i32>,
    /// `--icon-height`.
    pub icon_height: Option<i32>,
    /// `--log-file`.
    pub log_file_path: Option<PathBuf>,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for non-positive icon dimensions.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    overrides: CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    if let Some(enabled) = overrides.pets_tooltip {
        config.pets_tooltip = enabled;
    }

    if overrides.icon_width.is_some() || overrides.icon_height.is_some() {
        config.icons = icon_metrics(
            overrides.icon_width.unwrap_or(config.icons.width()),
            overrides.icon_height.unwrap_or(config.icons.height()),
        )?;
    }

    if let Some(path) = overrides.log_file_path {
        config.log_file_path = path;
    }

    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

//! Configuration loader
//!
//! ## Loading Strategy
//! 1. Environment variables, when `DESKCLOCK_PIXELS_PER_HOUR` is set
//! 2. Otherwise the first config file found by [`probe_config_paths`]
//! 3. JSON and TOML are both accepted, chosen by file extension
//!
//! Every successfully parsed configuration is validated before it is
//! returned.
//!
//! ## Environment Variables
//! - `DESKCLOCK_PIXELS_PER_HOUR`: Height of one hour row (required)
//! - `DESKCLOCK_MIN_HEIGHT_HOURS`: Minimum event height in hours
//! - `DESKCLOCK_SCROLL_LEAD_IN`: Space kept above the current hour
//! - `DESKCLOCK_REFRESH_INTERVAL`: Calendar refresh interval in seconds
//! - `DESKCLOCK_EVENTS_PATH`: Events file for the file-backed source
//! - `DESKCLOCK_LOG_LEVEL`: Default log filter
//! - `DESKCLOCK_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! Probed in order:
//! 1. `./config.{json,toml}`, then `./deskclock.{json,toml}`
//! 2. `../config.{json,toml}` and `../../config.{json,toml}`
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};
use std::str::FromStr;

use deskclock_domain::{
    CalendarConfig, Config, DeskClockError, LoggingConfig, Result, TimelineConfig,
};

use crate::errors::InfraError;

const CONFIG_FILE_NAMES: [&str; 8] = [
    "config.json",
    "config.toml",
    "deskclock.json",
    "deskclock.toml",
    "../config.json",
    "../config.toml",
    "../../config.json",
    "../../config.toml",
];

/// Load configuration, preferring the environment over config files.
///
/// # Errors
/// Returns `DeskClockError::Config` if neither source yields a valid
/// configuration.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Environment configuration unavailable, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from `DESKCLOCK_*` environment variables.
///
/// Only `DESKCLOCK_PIXELS_PER_HOUR` is required; every other value falls
/// back to its default.
///
/// # Errors
/// Returns `DeskClockError::Config` if the required variable is missing, a
/// value does not parse, or the result fails validation.
pub fn load_from_env() -> Result<Config> {
    let defaults = Config::default();

    let pixels_per_hour = env_var("DESKCLOCK_PIXELS_PER_HOUR")?;
    let timeline = TimelineConfig {
        pixels_per_hour: parse_var("DESKCLOCK_PIXELS_PER_HOUR", &pixels_per_hour)?,
        min_height_hours: env_parse_or(
            "DESKCLOCK_MIN_HEIGHT_HOURS",
            defaults.timeline.min_height_hours,
        )?,
        scroll_lead_in: env_parse_or("DESKCLOCK_SCROLL_LEAD_IN", defaults.timeline.scroll_lead_in)?,
    };

    let calendar = CalendarConfig {
        refresh_interval_seconds: env_parse_or(
            "DESKCLOCK_REFRESH_INTERVAL",
            defaults.calendar.refresh_interval_seconds,
        )?,
        events_path: std::env::var("DESKCLOCK_EVENTS_PATH").ok().filter(|p| !p.trim().is_empty()),
    };

    let logging = LoggingConfig {
        level: std::env::var("DESKCLOCK_LOG_LEVEL").unwrap_or(defaults.logging.level),
        json: env_bool("DESKCLOCK_LOG_JSON", defaults.logging.json),
    };

    let config = Config { timeline, calendar, logging };
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file.
///
/// If `path` is `None`, the standard locations are probed with
/// [`probe_config_paths`].
///
/// # Errors
/// Returns `DeskClockError::Config` if the file is missing, unreadable, not
/// valid JSON/TOML, or fails validation.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DeskClockError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DeskClockError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DeskClockError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration text; the format follows the file extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => Ok(toml::from_str(contents).map_err(InfraError::from)?),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DeskClockError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(DeskClockError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// First existing config file in the standard locations, if any.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        roots.push(exe_dir);
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|candidate| candidate.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        DeskClockError::Config(format!("Missing required environment variable: {key}"))
    })
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| DeskClockError::Config(format!("Invalid value for {key}: {e}")))
}

/// Parse an optional variable, using `default` when it is unset.
fn env_parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => parse_var(key, &raw),
        Err(_) => Ok(default),
    }
}

/// Accepts `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

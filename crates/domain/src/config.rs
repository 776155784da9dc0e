//! Configuration structures
//!
//! Every section defaults independently so partial config files are valid.
//! Loading lives in `deskclock-infra`; validation lives here so that every
//! loader applies the same rules.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LOG_LEVEL, DEFAULT_PIXELS_PER_HOUR, DEFAULT_SCROLL_LEAD_IN, MIN_EVENT_HEIGHT_HOURS,
    TIMELINE_REFRESH_INTERVAL_SECS,
};
use crate::errors::{DeskClockError, Result};

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timeline: TimelineConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validate every section.
    ///
    /// # Errors
    /// Returns `DeskClockError::Config` describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        self.timeline.validate()?;
        self.calendar.validate()
    }
}

/// Geometry of the day timeline, in abstract length units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Height of one hour row.
    pub pixels_per_hour: f32,
    /// Minimum event height, as a fraction of an hour row.
    pub min_height_hours: f32,
    /// Distance kept above the current hour when the timeline first scrolls.
    pub scroll_lead_in: f32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            pixels_per_hour: DEFAULT_PIXELS_PER_HOUR,
            min_height_hours: MIN_EVENT_HEIGHT_HOURS,
            scroll_lead_in: DEFAULT_SCROLL_LEAD_IN,
        }
    }
}

impl TimelineConfig {
    /// Create a config with the given hour height and default everything else
    pub fn with_pixels_per_hour(pixels_per_hour: f32) -> Self {
        Self { pixels_per_hour, ..Self::default() }
    }

    /// Minimum visible height of an event, in length units.
    pub fn min_event_height(&self) -> f32 {
        self.pixels_per_hour * self.min_height_hours
    }

    /// # Errors
    /// Returns `DeskClockError::Config` for non-finite, non-positive hour
    /// heights and for negative or non-finite minimum height / lead-in.
    pub fn validate(&self) -> Result<()> {
        if !self.pixels_per_hour.is_finite() || self.pixels_per_hour <= 0.0 {
            return Err(DeskClockError::Config(format!(
                "pixels_per_hour must be a positive number, got {}",
                self.pixels_per_hour
            )));
        }
        if !self.min_height_hours.is_finite() || self.min_height_hours < 0.0 {
            return Err(DeskClockError::Config(format!(
                "min_height_hours must be zero or positive, got {}",
                self.min_height_hours
            )));
        }
        if !self.scroll_lead_in.is_finite() || self.scroll_lead_in < 0.0 {
            return Err(DeskClockError::Config(format!(
                "scroll_lead_in must be zero or positive, got {}",
                self.scroll_lead_in
            )));
        }
        Ok(())
    }
}

/// Calendar access settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// How often the caller should re-query the calendar source.
    pub refresh_interval_seconds: u64,
    /// Path of the JSON events file used by the file-backed source.
    pub events_path: Option<String>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self { refresh_interval_seconds: TIMELINE_REFRESH_INTERVAL_SECS, events_path: None }
    }
}

impl CalendarConfig {
    /// # Errors
    /// Returns `DeskClockError::Config` when the refresh interval is zero.
    pub fn validate(&self) -> Result<()> {
        if self.refresh_interval_seconds == 0 {
            return Err(DeskClockError::Config(
                "refresh_interval_seconds must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Logging output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string(), json: false }
    }
}

//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Timeline geometry
pub const DEFAULT_PIXELS_PER_HOUR: f32 = 80.0;
pub const MIN_EVENT_HEIGHT_HOURS: f32 = 0.5;
pub const DEFAULT_SCROLL_LEAD_IN: f32 = 100.0;
pub const MINUTES_PER_HOUR: f32 = 60.0;

// Calendar source normalization
pub const UNTITLED_EVENT_TITLE: &str = "Untitled Event";
pub const DEFAULT_EVENT_DURATION_MINUTES: i64 = 60;

// Refresh cadence expected from the host's timer
pub const TIMELINE_REFRESH_INTERVAL_SECS: u64 = 60;

// Logging
pub const DEFAULT_LOG_LEVEL: &str = "info";

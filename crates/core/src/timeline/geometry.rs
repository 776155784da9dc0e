//! Time-to-length mapping for the day timeline
//!
//! Pure numeric helpers. Lengths are abstract units; the renderer decides
//! what one unit is on screen.

use chrono::{NaiveTime, Timelike};
use deskclock_domain::constants::{MINUTES_PER_HOUR, MIN_EVENT_HEIGHT_HOURS};
use deskclock_domain::CalendarEvent;

/// Vertical offset of a time of day: `(hour*60 + minute) / 60 * pixels_per_hour`.
///
/// Seconds are ignored, matching the minute granularity of the timeline.
pub fn vertical_offset(time: NaiveTime, pixels_per_hour: f32) -> f32 {
    let minutes = time.hour() * 60 + time.minute();
    minutes as f32 / MINUTES_PER_HOUR * pixels_per_hour
}

/// Height of an event with the default half-hour minimum.
pub fn event_height(event: &CalendarEvent, pixels_per_hour: f32) -> f32 {
    event_height_with_minimum(event, pixels_per_hour, MIN_EVENT_HEIGHT_HOURS)
}

/// Height of an event, never below `pixels_per_hour * min_height_hours`.
///
/// Zero and negative durations count as zero and clamp to the minimum.
pub fn event_height_with_minimum(
    event: &CalendarEvent,
    pixels_per_hour: f32,
    min_height_hours: f32,
) -> f32 {
    let natural = event.duration_minutes() as f32 / MINUTES_PER_HOUR * pixels_per_hour;
    natural.max(pixels_per_hour * min_height_hours)
}

/// Scroll position that shows the current hour with `lead_in` units of
/// context above it. Never negative.
pub fn initial_scroll_offset(now: NaiveTime, pixels_per_hour: f32, lead_in: f32) -> f32 {
    (now.hour() as f32 * pixels_per_hour - lead_in).max(0.0)
}

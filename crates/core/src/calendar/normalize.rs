//! Normalization of provider events into `CalendarEvent`s
//!
//! Providers may omit titles and end times or report non-positive spans.
//! The timeline expects a title and `end > start` for every timed event.

use chrono::{Duration, NaiveDateTime};
use deskclock_domain::constants::{DEFAULT_EVENT_DURATION_MINUTES, UNTITLED_EVENT_TITLE};
use deskclock_domain::CalendarEvent;
use tracing::debug;

use super::ports::RawCalendarEvent;

/// Turn a provider event into a `CalendarEvent`.
///
/// - missing or blank title becomes `"Untitled Event"`
/// - missing end, or `end <= start`, becomes `start + 1 hour`
pub fn normalize_event(raw: RawCalendarEvent) -> CalendarEvent {
    let title = match raw.title {
        Some(title) if !title.trim().is_empty() => title,
        _ => UNTITLED_EVENT_TITLE.to_string(),
    };

    let end = match raw.end {
        Some(end) if end > raw.start => end,
        reported => {
            debug!(
                event_id = %raw.id,
                reported_end = ?reported,
                "defaulting event duration to one hour"
            );
            default_end(raw.start)
        }
    };

    CalendarEvent::new(raw.id, title, raw.start, end).all_day(raw.is_all_day)
}

/// Normalize a batch and sort it by start time (stable).
pub fn normalize_events(raw: Vec<RawCalendarEvent>) -> Vec<CalendarEvent> {
    let mut events: Vec<CalendarEvent> = raw.into_iter().map(normalize_event).collect();
    events.sort_by_key(CalendarEvent::start);
    events
}

fn default_end(start: NaiveDateTime) -> NaiveDateTime {
    start
        .checked_add_signed(Duration::minutes(DEFAULT_EVENT_DURATION_MINUTES))
        .unwrap_or(NaiveDateTime::MAX)
}

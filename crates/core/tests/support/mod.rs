//! Shared test helpers for `deskclock-core` integration tests.
//!
//! Fixtures build events on a fixed day so scenarios read as clock times, and
//! the calendar mock lets service tests script provider behaviour.

#![allow(dead_code)]

pub mod calendar;

use chrono::{NaiveDate, NaiveDateTime};
use deskclock_domain::CalendarEvent;

/// The day every fixture lives on.
pub fn fixture_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 24).unwrap()
}

/// `hour:minute` on the fixture day.
pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
    fixture_date().and_hms_opt(hour, minute, 0).unwrap()
}

/// Event spanning `start..end` (as `(hour, minute)` pairs) on the fixture day.
pub fn event(id: &str, start: (u32, u32), end: (u32, u32)) -> CalendarEvent {
    CalendarEvent::new(id, format!("Meeting {id}"), at(start.0, start.1), at(end.0, end.1))
}

//! Calendar source port interfaces

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use deskclock_domain::Result;
use serde::{Deserialize, Serialize};

/// Event as delivered by a calendar provider, before normalization
///
/// Recurrences are already expanded into concrete occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCalendarEvent {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub start: NaiveDateTime,
    #[serde(default)]
    pub end: Option<NaiveDateTime>,
    #[serde(default)]
    pub is_all_day: bool,
}

/// Half-open local-time window `[start, end)` covering one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DayWindow {
    /// Window from midnight of `date` to midnight of the following day
    pub fn for_date(date: NaiveDate) -> Self {
        let start = date.and_time(NaiveTime::MIN);
        let end = start.checked_add_signed(Duration::days(1)).unwrap_or(NaiveDateTime::MAX);
        Self { start, end }
    }

    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn contains(&self, t: NaiveDateTime) -> bool {
        t >= self.start && t < self.end
    }

    /// Whether `[start, end)` shares any time with the window.
    ///
    /// Zero-length spans count when their instant lies inside the window.
    pub fn intersects(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        if end <= start {
            return self.contains(start);
        }
        start < self.end && end > self.start
    }
}

/// Trait for calendar provider access
///
/// Implementations report a missing OS grant as
/// `DeskClockError::PermissionDenied` and any other provider failure as
/// `DeskClockError::CalendarSource`.
#[async_trait]
pub trait CalendarSource: Send + Sync {
    /// Fetch the occurrences that intersect `window`
    async fn fetch_day(&self, window: DayWindow) -> Result<Vec<RawCalendarEvent>>;
}

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use deskclock_core::{CalendarSource, DayWindow, RawCalendarEvent};
use deskclock_domain::{DeskClockError, Result as DomainResult};

/// In-memory mock for `CalendarSource`.
///
/// Returns every stored event regardless of the requested window (so the
/// service's own filtering is exercised), or a scripted error. Records the
/// windows it was asked for.
#[derive(Default)]
pub struct MockCalendarSource {
    events: Mutex<Vec<RawCalendarEvent>>,
    failure: Mutex<Option<DeskClockError>>,
    windows: Mutex<Vec<DayWindow>>,
    calls: AtomicUsize,
}

impl MockCalendarSource {
    /// Create a new mock seeded with the provided events.
    pub fn new(events: Vec<RawCalendarEvent>) -> Self {
        Self { events: Mutex::new(events), ..Self::default() }
    }

    /// Mock that fails every fetch with `error`.
    pub fn failing(error: DeskClockError) -> Self {
        Self { failure: Mutex::new(Some(error)), ..Self::default() }
    }

    /// Convenience helper for adding a single event to the mock.
    pub fn with_event(self, event: RawCalendarEvent) -> Self {
        self.events.lock().unwrap().push(event);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested_windows(&self) -> Vec<DayWindow> {
        self.windows.lock().unwrap().clone()
    }
}

#[async_trait]
impl CalendarSource for MockCalendarSource {
    async fn fetch_day(&self, window: DayWindow) -> DomainResult<Vec<RawCalendarEvent>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.windows.lock().unwrap().push(window);

        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.events.lock().unwrap().clone())
    }
}

/// Raw provider event with every field present.
pub fn raw(id: &str, title: &str, start: NaiveDateTime, end: NaiveDateTime) -> RawCalendarEvent {
    RawCalendarEvent {
        id: id.to_string(),
        title: Some(title.to_string()),
        start,
        end: Some(end),
        is_all_day: false,
    }
}

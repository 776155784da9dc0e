//! Agenda service - loads one day of events and lays it out

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use deskclock_domain::{CalendarEvent, DeskClockError};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use super::normalize::normalize_events;
use super::ports::{CalendarSource, DayWindow};
use crate::timeline::{TimelineLayout, TimelineSnapshot};

/// Outcome of the last agenda load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgendaState {
    Ready,
    PermissionRequired,
    Unavailable,
}

deskclock_domain::impl_status_conversions!(AgendaState {
    Ready => "ready",
    PermissionRequired => "permission_required",
    Unavailable => "unavailable",
});

/// One day of events, ready for rendering
///
/// Failed loads carry an empty event list; `state` tells the caller whether
/// asking for calendar access again could help.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAgenda {
    pub date: NaiveDate,
    pub state: AgendaState,
    pub events: Vec<CalendarEvent>,
    pub timeline: TimelineSnapshot,
}

/// Agenda service
pub struct AgendaService {
    source: Arc<dyn CalendarSource>,
    layout: TimelineLayout,
    permission_granted: AtomicBool,
}

impl AgendaService {
    /// Create a new agenda service
    ///
    /// Calendar permission starts out granted; platforms that gate calendar
    /// access should call [`Self::set_calendar_permission`] with the real
    /// state before the first load.
    pub fn new(source: Arc<dyn CalendarSource>, layout: TimelineLayout) -> Self {
        Self { source, layout, permission_granted: AtomicBool::new(true) }
    }

    /// Builder variant of [`Self::set_calendar_permission`]
    pub fn with_permission(self, granted: bool) -> Self {
        self.set_calendar_permission(granted);
        self
    }

    pub fn set_calendar_permission(&self, granted: bool) {
        info!(granted, "calendar permission updated");
        self.permission_granted.store(granted, Ordering::SeqCst);
    }

    pub fn has_calendar_permission(&self) -> bool {
        self.permission_granted.load(Ordering::SeqCst)
    }

    pub fn layout(&self) -> &TimelineLayout {
        &self.layout
    }

    /// Load and lay out the events of `date` as seen at `now`.
    ///
    /// Never fails: source errors are logged and reported through
    /// [`DayAgenda::state`] with an empty event list.
    pub async fn load_day(&self, date: NaiveDate, now: NaiveDateTime) -> DayAgenda {
        if !self.has_calendar_permission() {
            debug!(%date, "calendar permission not granted; skipping fetch");
            return self.agenda(date, now, AgendaState::PermissionRequired, Vec::new());
        }

        let window = DayWindow::for_date(date);
        match self.source.fetch_day(window).await {
            Ok(raw) => {
                let fetched = raw.len();
                let events: Vec<CalendarEvent> = normalize_events(raw)
                    .into_iter()
                    .filter(|event| window.intersects(event.start(), event.end()))
                    .collect();
                if events.len() < fetched {
                    warn!(
                        %date,
                        dropped = fetched - events.len(),
                        "calendar source returned events outside the requested day"
                    );
                }
                info!(%date, events = events.len(), "loaded day agenda");
                self.agenda(date, now, AgendaState::Ready, events)
            }
            Err(DeskClockError::PermissionDenied(reason)) => {
                warn!(%date, %reason, "calendar permission denied by source");
                self.agenda(date, now, AgendaState::PermissionRequired, Vec::new())
            }
            Err(err) => {
                error!(%date, error = %err, kind = err.label(), "failed to fetch calendar events");
                self.agenda(date, now, AgendaState::Unavailable, Vec::new())
            }
        }
    }

    fn agenda(
        &self,
        date: NaiveDate,
        now: NaiveDateTime,
        state: AgendaState,
        events: Vec<CalendarEvent>,
    ) -> DayAgenda {
        let timeline = self.layout.snapshot(&events, now);
        DayAgenda { date, state, events, timeline }
    }
}

//! JSON file calendar source
//!
//! Reads a JSON array of raw events from disk on every fetch, so edits to
//! the file show up on the next refresh without a restart.
//!
//! ```json
//! [
//!   { "id": "standup", "title": "Standup", "start": "2024-10-24T09:00:00", "end": "2024-10-24T09:15:00" },
//!   { "id": "focus", "start": "2024-10-24T13:00:00" }
//! ]
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use deskclock_core::{CalendarSource, DayWindow, RawCalendarEvent};
use deskclock_domain::{CalendarConfig, DeskClockError, Result};
use tracing::{debug, instrument};

use crate::errors::InfraError;

/// Calendar source backed by a local JSON file
#[derive(Debug, Clone)]
pub struct JsonCalendarSource {
    path: PathBuf,
}

impl JsonCalendarSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Build the source from `calendar.events_path`.
    ///
    /// # Errors
    /// Returns `DeskClockError::Config` when no events path is configured.
    pub fn from_config(config: &CalendarConfig) -> Result<Self> {
        config
            .events_path
            .as_deref()
            .map(Self::new)
            .ok_or_else(|| DeskClockError::Config("calendar.events_path is not set".to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<RawCalendarEvent>> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(InfraError::from)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&contents).map_err(InfraError::from)?)
    }
}

#[async_trait]
impl CalendarSource for JsonCalendarSource {
    #[instrument(skip(self), fields(path = %self.path.display(), date = %window.date()))]
    async fn fetch_day(&self, window: DayWindow) -> Result<Vec<RawCalendarEvent>> {
        let all = self.read_all().await?;
        let total = all.len();

        // Missing ends are checked as instants; normalization extends them later
        let events: Vec<RawCalendarEvent> = all
            .into_iter()
            .filter(|raw| window.intersects(raw.start, raw.end.unwrap_or(raw.start)))
            .collect();

        debug!(total, matched = events.len(), "read events file");
        Ok(events)
    }
}

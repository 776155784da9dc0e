//! Timeline layout - composes clustering, column assignment and geometry
//!
//! Every call recomputes from scratch and owns all of its intermediate
//! state, so a `TimelineLayout` can be shared freely between threads.

use std::collections::HashMap;

use ahash::AHashSet;
use chrono::NaiveDateTime;
use deskclock_domain::{CalendarEvent, ColumnInfo, EventLayout, PositionedEvent, TimelineConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::clustering::{cluster_overlapping, placement_key};
use super::columns::assign_columns;
use super::geometry;

/// Column info for every event, keyed by event id.
///
/// Shorthand for [`TimelineLayout::columns`] with default geometry.
pub fn layout(events: &[CalendarEvent]) -> HashMap<String, ColumnInfo> {
    TimelineLayout::default().columns(events)
}

/// Day timeline layout engine
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimelineLayout {
    config: TimelineConfig,
}

/// Layout of a whole day at a given instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSnapshot {
    pub taken_at: NaiveDateTime,
    /// Events in placement order (start, then input position).
    pub events: Vec<PositionedEvent>,
    /// Offset of the current-time marker.
    pub now_offset: f32,
    /// Where the timeline should scroll to on first display.
    pub scroll_offset: f32,
}

impl TimelineSnapshot {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn find(&self, event_id: &str) -> Option<&PositionedEvent> {
        self.events.iter().find(|positioned| positioned.layout.event_id == event_id)
    }
}

impl TimelineLayout {
    pub fn new(config: TimelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Column info per event id.
    ///
    /// Ids are expected to be unique; if one repeats, the entry of the later
    /// event in placement order wins.
    pub fn columns(&self, events: &[CalendarEvent]) -> HashMap<String, ColumnInfo> {
        let assigned = assign_all(events);
        let mut by_id = HashMap::with_capacity(events.len());
        for (index, info) in assigned {
            by_id.insert(events[index].id().to_string(), info);
        }
        by_id
    }

    /// Full layout record for every event, in placement order.
    pub fn arrange(&self, events: &[CalendarEvent]) -> Vec<EventLayout> {
        assign_all(events)
            .into_iter()
            .map(|(index, info)| self.record(&events[index], info))
            .collect()
    }

    /// Layout plus per-event status and marker positions for `now`.
    pub fn snapshot(&self, events: &[CalendarEvent], now: NaiveDateTime) -> TimelineSnapshot {
        let positioned = assign_all(events)
            .into_iter()
            .map(|(index, info)| {
                let event = &events[index];
                PositionedEvent { layout: self.record(event, info), status: event.status_at(now) }
            })
            .collect();

        TimelineSnapshot {
            taken_at: now,
            events: positioned,
            now_offset: self.vertical_offset(now),
            scroll_offset: geometry::initial_scroll_offset(
                now.time(),
                self.config.pixels_per_hour,
                self.config.scroll_lead_in,
            ),
        }
    }

    /// Offset of the time-of-day part of `time`.
    pub fn vertical_offset(&self, time: NaiveDateTime) -> f32 {
        geometry::vertical_offset(time.time(), self.config.pixels_per_hour)
    }

    pub fn event_height(&self, event: &CalendarEvent) -> f32 {
        geometry::event_height_with_minimum(
            event,
            self.config.pixels_per_hour,
            self.config.min_height_hours,
        )
    }

    fn record(&self, event: &CalendarEvent, info: ColumnInfo) -> EventLayout {
        EventLayout {
            event_id: event.id().to_string(),
            vertical_offset: self.vertical_offset(event.start()),
            height: self.event_height(event),
            column: info.column,
            total_columns: info.total_columns,
        }
    }
}

/// Cluster, then colour each cluster. Pairs are `(input_index, ColumnInfo)`
/// in placement order across the whole day.
fn assign_all(events: &[CalendarEvent]) -> Vec<(usize, ColumnInfo)> {
    warn_on_anomalies(events);

    let clusters = cluster_overlapping(events);
    let mut assigned = Vec::with_capacity(events.len());
    let mut widest = 0;
    for cluster in &clusters {
        let columns = assign_columns(cluster);
        widest = columns.first().map_or(widest, |(_, info)| widest.max(info.total_columns));
        assigned.extend(columns);
    }

    // Clusters are each sorted; merge them back into one placement order
    assigned.sort_by_key(|&(index, _)| placement_key(events, index));

    debug!(
        events = events.len(),
        clusters = clusters.len(),
        max_columns = widest,
        "timeline_layout_computed"
    );
    assigned
}

fn warn_on_anomalies(events: &[CalendarEvent]) {
    let mut seen = AHashSet::with_capacity(events.len());
    for event in events {
        if !seen.insert(event.id()) {
            warn!(event_id = event.id(), "duplicate event id in timeline input");
        }
        if event.end() < event.start() {
            warn!(
                event_id = event.id(),
                start = %event.start(),
                end = %event.end(),
                "event ends before it starts; laying out as zero-length"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use deskclock_domain::EventStatus;

    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 10, 24).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    fn event(id: &str, start: (u32, u32), end: (u32, u32)) -> CalendarEvent {
        CalendarEvent::new(id, id, at(start.0, start.1), at(end.0, end.1))
    }

    #[test]
    fn test_empty_input_yields_empty_outputs() {
        let engine = TimelineLayout::default();
        assert!(engine.columns(&[]).is_empty());
        assert!(engine.arrange(&[]).is_empty());

        let snapshot = engine.snapshot(&[], at(9, 0));
        assert!(snapshot.is_empty());
        assert!((snapshot.now_offset - 720.0).abs() < 1e-3);
    }

    #[test]
    fn test_arrange_orders_by_start() {
        let events = vec![event("late", (14, 0), (15, 0)), event("early", (8, 0), (9, 0))];
        let arranged = TimelineLayout::default().arrange(&events);
        let ids: Vec<&str> = arranged.iter().map(|l| l.event_id.as_str()).collect();
        assert_eq!(ids, vec!["early", "late"]);
    }

    #[test]
    fn test_records_combine_geometry_and_columns() {
        let events = vec![event("a", (9, 0), (10, 0)), event("b", (9, 30), (9, 40))];
        let engine = TimelineLayout::new(TimelineConfig::with_pixels_per_hour(60.0));
        let arranged = engine.arrange(&events);

        assert_eq!(arranged[0].event_id, "a");
        assert!((arranged[0].vertical_offset - 540.0).abs() < 1e-3);
        assert!((arranged[0].height - 60.0).abs() < 1e-3);
        assert_eq!(arranged[0].column_info(), ColumnInfo::new(0, 2));

        assert_eq!(arranged[1].event_id, "b");
        assert!((arranged[1].vertical_offset - 570.0).abs() < 1e-3);
        assert!((arranged[1].height - 30.0).abs() < 1e-3, "clamped to half an hour");
        assert_eq!(arranged[1].column_info(), ColumnInfo::new(1, 2));
    }

    #[test]
    fn test_snapshot_reports_status_and_scroll() {
        let events = vec![
            event("done", (7, 0), (8, 0)),
            event("now", (9, 0), (10, 0)),
            event("next", (11, 0), (12, 0)),
        ];
        let snapshot = TimelineLayout::default().snapshot(&events, at(9, 30));

        assert_eq!(snapshot.find("done").unwrap().status, EventStatus::Ended);
        assert_eq!(snapshot.find("now").unwrap().status, EventStatus::InProgress);
        assert_eq!(snapshot.find("next").unwrap().status, EventStatus::Upcoming);
        assert!((snapshot.now_offset - 760.0).abs() < 1e-3);
        assert!((snapshot.scroll_offset - 620.0).abs() < 1e-3);
        assert!(snapshot.find("missing").is_none());
    }

    #[test]
    fn test_duplicate_ids_still_laid_out() {
        let events = vec![event("dup", (9, 0), (10, 0)), event("dup", (9, 30), (10, 30))];
        let engine = TimelineLayout::default();

        assert_eq!(engine.arrange(&events).len(), 2);
        let by_id = engine.columns(&events);
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id["dup"], ColumnInfo::new(1, 2));
    }

    #[test]
    fn test_free_function_matches_engine() {
        let events = vec![event("a", (9, 0), (10, 0)), event("b", (10, 0), (11, 0))];
        assert_eq!(layout(&events), TimelineLayout::default().columns(&events));
    }
}

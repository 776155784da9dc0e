//! Calendar event model
//!
//! Times are local wall-clock values (`NaiveDateTime`); the calendar source
//! resolves time zones and recurrences before events reach this type.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One concrete calendar occurrence
///
/// `end` is exclusive. Fields are immutable once constructed; malformed spans
/// (`end < start`) are accepted and treated as zero-length by the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarEvent {
    id: String,
    title: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    #[serde(default)]
    is_all_day: bool,
}

impl CalendarEvent {
    /// Create a timed event
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self { id: id.into(), title: title.into(), start, end, is_all_day: false }
    }

    /// Mark the event as spanning the whole day
    pub fn all_day(mut self, is_all_day: bool) -> Self {
        self.is_all_day = is_all_day;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn is_all_day(&self) -> bool {
        self.is_all_day
    }

    /// End of the span as laid out: malformed events collapse onto their
    /// start instant.
    pub fn effective_end(&self) -> NaiveDateTime {
        self.end.max(self.start)
    }

    /// Span length, clamped to zero for malformed events.
    pub fn duration(&self) -> Duration {
        self.effective_end() - self.start
    }

    /// Whole minutes covered by the event, never negative.
    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }

    /// `t` lies strictly inside the event.
    pub fn is_happening_now(&self, t: NaiveDateTime) -> bool {
        t > self.start && t < self.end
    }

    /// `t` lies strictly after the end of the event.
    pub fn has_ended(&self, t: NaiveDateTime) -> bool {
        t > self.end
    }

    /// Strict interval overlap; touching endpoints are adjacent, not
    /// overlapping.
    ///
    /// Zero-length events follow the same formula: they overlap an event
    /// that strictly contains their instant, but never themselves and never
    /// an event they only touch. Malformed events overlap exactly like a
    /// zero-length event at their start.
    pub fn overlaps(&self, other: &CalendarEvent) -> bool {
        self.start < other.effective_end() && self.effective_end() > other.start
    }

    /// Status of the event relative to `t`
    pub fn status_at(&self, t: NaiveDateTime) -> EventStatus {
        if t <= self.start {
            EventStatus::Upcoming
        } else if self.is_happening_now(t) {
            EventStatus::InProgress
        } else {
            EventStatus::Ended
        }
    }

    /// Human-readable length, e.g. `"1 hours 30 minutes"`
    pub fn duration_label(&self) -> String {
        format_duration(self.start, self.end)
    }
}

/// Where an event sits relative to the current time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Upcoming,
    InProgress,
    Ended,
}

crate::impl_status_conversions!(EventStatus {
    Upcoming => "upcoming",
    InProgress => "in_progress",
    Ended => "ended",
});

/// Format the span between two times as hours and minutes.
///
/// Negative spans are reported as `"0 minutes"`.
pub fn format_duration(start: NaiveDateTime, end: NaiveDateTime) -> String {
    let duration = (end - start).max(Duration::zero());
    let hours = duration.num_hours();
    let minutes = duration.num_minutes() % 60;

    match (hours, minutes) {
        (h, m) if h > 0 && m > 0 => format!("{h} hours {m} minutes"),
        (h, _) if h > 0 => format!("{h} hours"),
        (_, m) => format!("{m} minutes"),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 10, 24).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    fn event(id: &str, start: NaiveDateTime, end: NaiveDateTime) -> CalendarEvent {
        CalendarEvent::new(id, format!("Event {id}"), start, end)
    }

    #[test]
    fn test_overlap_is_strict_at_boundaries() {
        let a = event("a", at(9, 0), at(10, 0));
        let b = event("b", at(10, 0), at(11, 0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_partial_and_nested_overlap() {
        let outer = event("outer", at(9, 0), at(12, 0));
        let partial = event("partial", at(11, 30), at(13, 0));
        let nested = event("nested", at(10, 0), at(10, 15));

        assert!(outer.overlaps(&partial));
        assert!(partial.overlaps(&outer));
        assert!(outer.overlaps(&nested));
        assert!(nested.overlaps(&outer));
        assert!(!nested.overlaps(&partial));
    }

    #[test]
    fn test_self_overlap_depends_on_duration() {
        let timed = event("timed", at(9, 0), at(9, 30));
        let instant = event("instant", at(9, 0), at(9, 0));
        assert!(timed.overlaps(&timed));
        assert!(!instant.overlaps(&instant));
    }

    #[test]
    fn test_zero_length_event_overlap_rules() {
        let instant = event("instant", at(9, 30), at(9, 30));
        let containing = event("containing", at(9, 0), at(10, 0));
        let ending_there = event("ending", at(9, 0), at(9, 30));
        let starting_there = event("starting", at(9, 30), at(10, 0));
        let twin = event("twin", at(9, 30), at(9, 30));

        assert!(instant.overlaps(&containing));
        assert!(containing.overlaps(&instant));
        assert!(!instant.overlaps(&ending_there));
        assert!(!instant.overlaps(&starting_there));
        assert!(!instant.overlaps(&twin));
    }

    #[test]
    fn test_happening_now_excludes_endpoints() {
        let meeting = event("m", at(9, 0), at(10, 0));
        assert!(!meeting.is_happening_now(at(9, 0)));
        assert!(meeting.is_happening_now(at(9, 1)));
        assert!(!meeting.is_happening_now(at(10, 0)));
    }

    #[test]
    fn test_has_ended_is_strict() {
        let meeting = event("m", at(9, 0), at(10, 0));
        assert!(!meeting.has_ended(at(9, 30)));
        assert!(!meeting.has_ended(at(10, 0)));
        assert!(meeting.has_ended(at(10, 1)));
    }

    #[test]
    fn test_status_partitions_time() {
        let meeting = event("m", at(9, 0), at(10, 0));
        assert_eq!(meeting.status_at(at(8, 0)), EventStatus::Upcoming);
        assert_eq!(meeting.status_at(at(9, 0)), EventStatus::Upcoming);
        assert_eq!(meeting.status_at(at(9, 30)), EventStatus::InProgress);
        assert_eq!(meeting.status_at(at(10, 0)), EventStatus::Ended);
        assert_eq!(meeting.status_at(at(11, 0)), EventStatus::Ended);
    }

    #[test]
    fn test_status_labels_round_trip() {
        assert_eq!(EventStatus::InProgress.to_string(), "in_progress");
        assert_eq!("ENDED".parse::<EventStatus>().unwrap(), EventStatus::Ended);
    }

    #[test]
    fn test_malformed_span_has_zero_duration() {
        let backwards = event("b", at(10, 0), at(9, 0));
        assert_eq!(backwards.duration_minutes(), 0);
        assert_eq!(backwards.duration_label(), "0 minutes");
    }

    #[test]
    fn test_backwards_event_overlaps_like_its_start_instant() {
        let backwards = event("backwards", at(10, 0), at(8, 0));
        let block = event("block", at(9, 0), at(11, 0));
        let earlier = event("earlier", at(8, 0), at(9, 0));
        let touching = event("touching", at(10, 0), at(10, 30));

        assert_eq!(backwards.effective_end(), at(10, 0));
        assert!(backwards.overlaps(&block));
        assert!(block.overlaps(&backwards));
        // the raw end reaches back into 08:00-09:00 but the clamped span does not
        assert!(!backwards.overlaps(&earlier));
        assert!(!earlier.overlaps(&backwards));
        assert!(!backwards.overlaps(&touching));
        assert!(!backwards.overlaps(&backwards));
    }

    #[test]
    fn test_format_duration_variants() {
        assert_eq!(format_duration(at(9, 0), at(10, 30)), "1 hours 30 minutes");
        assert_eq!(format_duration(at(9, 0), at(11, 0)), "2 hours");
        assert_eq!(format_duration(at(9, 0), at(9, 45)), "45 minutes");
        assert_eq!(format_duration(at(9, 0), at(9, 0)), "0 minutes");
    }

    #[test]
    fn test_all_day_flag_builder() {
        let holiday = event("h", at(0, 0), at(23, 59)).all_day(true);
        assert!(holiday.is_all_day());
        assert!(!event("x", at(0, 0), at(1, 0)).is_all_day());
    }

    #[test]
    fn test_deserialize_defaults_all_day() {
        let json = r#"{
            "id": "42",
            "title": "Standup",
            "start": "2024-10-24T09:00:00",
            "end": "2024-10-24T09:15:00"
        }"#;
        let parsed: CalendarEvent = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id(), "42");
        assert_eq!(parsed.end(), at(9, 15));
        assert!(!parsed.is_all_day());
    }
}

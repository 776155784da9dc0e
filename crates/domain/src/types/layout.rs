//! Layout records handed to the rendering surface

use serde::{Deserialize, Serialize};

use super::event::EventStatus;

/// Horizontal slot of an event inside its overlap cluster
///
/// Invariant: `column < total_columns`, and `total_columns` is shared by
/// every event of the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub column: usize,
    pub total_columns: usize,
}

impl ColumnInfo {
    /// Slot of an event that overlaps nothing
    pub const FULL_WIDTH: Self = Self { column: 0, total_columns: 1 };

    pub fn new(column: usize, total_columns: usize) -> Self {
        Self { column, total_columns }
    }

    /// Split `available_width` evenly across the cluster's columns.
    ///
    /// Returns `(x, width)`.
    pub fn horizontal_span(&self, available_width: f32) -> (f32, f32) {
        let width = available_width / self.total_columns.max(1) as f32;
        (width * self.column as f32, width)
    }
}

/// Everything the renderer needs to place one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventLayout {
    pub event_id: String,
    pub vertical_offset: f32,
    pub height: f32,
    pub column: usize,
    pub total_columns: usize,
}

impl EventLayout {
    pub fn column_info(&self) -> ColumnInfo {
        ColumnInfo::new(self.column, self.total_columns)
    }

    /// See [`ColumnInfo::horizontal_span`].
    pub fn horizontal_span(&self, available_width: f32) -> (f32, f32) {
        self.column_info().horizontal_span(available_width)
    }
}

/// Layout record plus the event's status at the snapshot time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedEvent {
    pub layout: EventLayout,
    pub status: EventStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_width_span() {
        assert_eq!(ColumnInfo::FULL_WIDTH.horizontal_span(300.0), (0.0, 300.0));
    }

    #[test]
    fn test_shared_width_span() {
        let info = ColumnInfo::new(2, 3);
        let (x, width) = info.horizontal_span(300.0);
        assert!((width - 100.0).abs() < f32::EPSILON);
        assert!((x - 200.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_event_layout_delegates_to_column_info() {
        let layout = EventLayout {
            event_id: "e1".to_string(),
            vertical_offset: 720.0,
            height: 80.0,
            column: 1,
            total_columns: 2,
        };
        assert_eq!(layout.column_info(), ColumnInfo::new(1, 2));
        assert_eq!(layout.horizontal_span(200.0), (100.0, 100.0));
    }
}

//! Domain types and models

pub mod event;
pub mod layout;

pub use event::{format_duration, CalendarEvent, EventStatus};
pub use layout::{ColumnInfo, EventLayout, PositionedEvent};

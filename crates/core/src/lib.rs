//! # DeskClock Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The day-timeline layout engine (overlap clustering, column assignment,
//!   geometry)
//! - The calendar source port and event normalization
//! - The agenda service that feeds the timeline
//!
//! ## Architecture Principles
//! - Only depends on `deskclock-domain`
//! - No file, network, or platform code
//! - All external dependencies via traits
//! - Layout is synchronous and side-effect free; callers re-run it on their
//!   own clock tick

pub mod calendar;
pub mod timeline;

pub use calendar::{
    AgendaService, AgendaState, CalendarSource, DayAgenda, DayWindow, RawCalendarEvent,
};
pub use timeline::{layout, TimelineLayout, TimelineSnapshot};

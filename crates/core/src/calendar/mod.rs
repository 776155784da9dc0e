//! Calendar access: provider port, normalization, and the agenda service

pub mod normalize;
pub mod ports;
pub mod service;

pub use normalize::{normalize_event, normalize_events};
pub use ports::{CalendarSource, DayWindow, RawCalendarEvent};
pub use service::{AgendaService, AgendaState, DayAgenda};

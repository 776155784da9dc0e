//! Calendar source adapters

pub mod file_source;

pub use file_source::JsonCalendarSource;

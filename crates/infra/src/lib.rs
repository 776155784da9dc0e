//! # DeskClock Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Configuration loading (environment, JSON and TOML files)
//! - Tracing subscriber bootstrap
//! - File-backed calendar source
//! - Conversions from external errors into `DeskClockError`
//!
//! ## Architecture
//! - Implements traits defined in `deskclock-core`
//! - Contains all "impure" code (filesystem, environment, global subscriber)

pub mod calendar;
pub mod config;
pub mod errors;
pub mod logging;

// Re-export commonly used items
pub use calendar::JsonCalendarSource;
pub use errors::InfraError;
pub use logging::init_tracing;

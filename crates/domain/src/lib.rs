//! # DeskClock Domain
//!
//! Value types shared by every DeskClock crate.
//!
//! This crate contains:
//! - Calendar event model and its time predicates
//! - Layout records handed to the rendering surface
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other DeskClock crates
//! - Only external dependencies allowed
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;

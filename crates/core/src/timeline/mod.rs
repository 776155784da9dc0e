//! Day timeline layout
//!
//! Events flow through [`clustering`] (connected components under overlap),
//! then [`columns`] (greedy column per cluster), and are positioned by
//! [`geometry`]. [`layout`] ties the three together for the renderer.

pub mod clustering;
pub mod columns;
pub mod geometry;
pub mod layout;

pub use clustering::{cluster_overlapping, OverlapCluster};
pub use columns::assign_columns;
pub use layout::{layout, TimelineLayout, TimelineSnapshot};

#![forbid(unsafe_code)]

//! Responsive masonry placement.
//!
//! # Role in the workspace
//! `vibe-layout` decides *where* feed items go; it never draws them. Two
//! pure functions make up the core:
//!
//! - [`resolve_column_count`]: viewport width → column count via a
//!   [`BreakpointTable`].
//! - [`assign_columns`]: item sequence + column count → [`ColumnSet`],
//!   greedy shortest-column-first.
//!
//! Around them sit [`ResponsiveMasonry`] (the persisted column count across
//! resize events), [`column_tracks`] (column x offsets and widths for a
//! gap), and [`MasonryConfig`] (the same knobs loaded from TOML / JSON).
//!
//! # Concurrency
//! Everything here is synchronous and allocation-only. Each call is
//! independent and supersedes the previous result.

pub mod breakpoint;
pub mod config;
pub mod masonry;
pub mod responsive;
pub mod tracks;

pub use breakpoint::{Breakpoint, BreakpointError, BreakpointTable, resolve_column_count};
pub use config::{ConfigError, MasonryConfig};
pub use masonry::{
    ColumnSet, Item, MAX_COLUMNS, PlacementStrategy, assign_columns, assign_columns_weighted,
};
pub use responsive::{ColumnChange, DEFAULT_GAP, ResponsiveMasonry};
pub use tracks::{Track, column_tracks};

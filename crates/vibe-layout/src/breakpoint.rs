#![forbid(unsafe_code)]

//! Breakpoint resolution: map a viewport width to a column count.
//!
//! A [`BreakpointTable`] is an ordered list of `(min_width, columns)`
//! thresholds. For a given width the entry with the largest `min_width`
//! that is `<= width` applies; if none qualifies, the caller's default is
//! used.
//!
//! # Usage
//!
//! ```
//! use vibe_layout::{Breakpoint, BreakpointTable, resolve_column_count};
//!
//! let table = BreakpointTable::new([
//!     Breakpoint::new(640, 2),
//!     Breakpoint::new(1024, 3),
//!     Breakpoint::new(1280, 4),
//! ]);
//!
//! assert_eq!(resolve_column_count(500, &table, 1), 1);
//! assert_eq!(resolve_column_count(700, &table, 1), 2);
//! assert_eq!(resolve_column_count(1200, &table, 1), 3);
//! assert_eq!(resolve_column_count(1400, &table, 1), 4);
//! ```
//!
//! # Invariants
//!
//! 1. Table entries are always held sorted by `min_width` (stable, so
//!    duplicates keep their declaration order).
//! 2. When two entries share a `min_width`, the later-declared one wins.
//! 3. Resolution is a non-decreasing step function of width over the
//!    matched threshold index.
//! 4. Widths below every threshold resolve to the default, unchanged.
//!
//! # Failure Modes
//!
//! None for resolution: negative widths are clamped to 0. Only
//! [`BreakpointTable::strict`] can fail, and only on malformed input.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::masonry::MAX_COLUMNS;

/// A single width threshold and the column count it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    /// Smallest width (inclusive) at which this entry applies.
    pub min_width: u32,
    /// Column count selected at or above `min_width`.
    pub columns: usize,
}

impl Breakpoint {
    #[must_use]
    pub const fn new(min_width: u32, columns: usize) -> Self {
        Self { min_width, columns }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px+={}", self.min_width, self.columns)
    }
}

/// Malformed input rejected by [`BreakpointTable::strict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BreakpointError {
    #[error("breakpoint at min_width {min_width} has zero columns")]
    ZeroColumns { min_width: u32 },

    #[error(
        "breakpoint at min_width {min_width} selects {columns} columns (max {max})",
        max = MAX_COLUMNS
    )]
    TooManyColumns { min_width: u32, columns: usize },

    #[error("duplicate breakpoint min_width {min_width}")]
    DuplicateMinWidth { min_width: u32 },

    #[error("breakpoint min_width {next} follows {previous}; thresholds must increase")]
    NotIncreasing { previous: u32, next: u32 },
}

/// Ordered set of breakpoints, sorted ascending by `min_width`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Breakpoint>", into = "Vec<Breakpoint>")]
pub struct BreakpointTable {
    entries: Vec<Breakpoint>,
}

impl BreakpointTable {
    /// Build a table from entries in any order.
    ///
    /// Entries are stable-sorted by `min_width`. Duplicates are kept; the
    /// later-declared one wins during resolution.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = Breakpoint>) -> Self {
        let mut entries: Vec<Breakpoint> = entries.into_iter().collect();
        entries.sort_by_key(|bp| bp.min_width);
        Self { entries }
    }

    /// Build a table, rejecting column counts outside `1..=MAX_COLUMNS` and
    /// thresholds that are not strictly increasing in declaration order.
    pub fn strict(entries: impl IntoIterator<Item = Breakpoint>) -> Result<Self, BreakpointError> {
        let entries: Vec<Breakpoint> = entries.into_iter().collect();
        for bp in &entries {
            if bp.columns == 0 {
                return Err(BreakpointError::ZeroColumns {
                    min_width: bp.min_width,
                });
            }
            if bp.columns > MAX_COLUMNS {
                return Err(BreakpointError::TooManyColumns {
                    min_width: bp.min_width,
                    columns: bp.columns,
                });
            }
        }
        for pair in entries.windows(2) {
            let (previous, next) = (pair[0].min_width, pair[1].min_width);
            if previous == next {
                return Err(BreakpointError::DuplicateMinWidth { min_width: next });
            }
            if next < previous {
                return Err(BreakpointError::NotIncreasing { previous, next });
            }
        }
        Ok(Self { entries })
    }

    /// A table with no thresholds; every width resolves to the default.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Entries in ascending `min_width` order.
    #[must_use]
    pub fn entries(&self) -> &[Breakpoint] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry that applies at `width`, if any.
    ///
    /// Scans from the largest threshold downward, so among equal
    /// thresholds the one declared last is found first.
    #[must_use]
    pub fn matching(&self, width: i64) -> Option<&Breakpoint> {
        let width = width.max(0);
        self.entries
            .iter()
            .rev()
            .find(|bp| i64::from(bp.min_width) <= width)
    }

    /// Index of the applying entry, if any.
    #[must_use]
    pub fn matching_index(&self, width: i64) -> Option<usize> {
        let width = width.max(0);
        self.entries
            .iter()
            .rposition(|bp| i64::from(bp.min_width) <= width)
    }

    /// Resolve the column count for `width`, falling back to `default_columns`.
    #[must_use]
    pub fn resolve(&self, width: i64, default_columns: usize) -> usize {
        let matched = self.matching(width);
        let columns = matched.map_or(default_columns, |bp| bp.columns);

        #[cfg(feature = "tracing")]
        vibe_core::debug!(
            message = "breakpoint.resolve",
            width,
            min_width = ?matched.map(|bp| bp.min_width),
            columns
        );

        columns
    }
}

impl Default for BreakpointTable {
    /// 640 → 2, 1024 → 3, 1280 → 4.
    fn default() -> Self {
        Self::new([
            Breakpoint::new(640, 2),
            Breakpoint::new(1024, 3),
            Breakpoint::new(1280, 4),
        ])
    }
}

impl From<Vec<Breakpoint>> for BreakpointTable {
    fn from(entries: Vec<Breakpoint>) -> Self {
        Self::new(entries)
    }
}

impl From<BreakpointTable> for Vec<Breakpoint> {
    fn from(table: BreakpointTable) -> Self {
        table.entries
    }
}

impl FromIterator<Breakpoint> for BreakpointTable {
    fn from_iter<I: IntoIterator<Item = Breakpoint>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for BreakpointTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Breakpoints(")?;
        for (i, bp) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{bp}")?;
        }
        write!(f, ")")
    }
}

/// Map a viewport width to a column count.
///
/// Returns the `columns` of the entry with the largest `min_width <= width`,
/// or `default_columns` exactly when no entry qualifies. Negative widths
/// are treated as 0.
#[must_use]
pub fn resolve_column_count(width: i64, table: &BreakpointTable, default_columns: usize) -> usize {
    table.resolve(width, default_columns)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

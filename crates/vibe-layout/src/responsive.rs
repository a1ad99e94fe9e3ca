#![forbid(unsafe_code)]

//! Responsive masonry: re-resolve the column count on every width event.
//!
//! [`ResponsiveMasonry`] owns the one value that survives between layout
//! passes, the resolved column count. Each width notification re-runs
//! breakpoint resolution and replaces that count; the column assignment
//! itself is recomputed from scratch whenever it is asked for.
//!
//! # Usage
//!
//! ```
//! use vibe_layout::{BreakpointTable, ColumnChange, ResponsiveMasonry};
//!
//! let mut masonry = ResponsiveMasonry::new(BreakpointTable::default(), 1);
//! assert_eq!(masonry.columns(), 1);
//!
//! let change = masonry.on_width(1100);
//! assert_eq!(change, Some(ColumnChange { from: 1, to: 3, width: 1100 }));
//!
//! // Same breakpoint tier: nothing changes.
//! assert_eq!(masonry.on_width(1200), None);
//!
//! let set = masonry.layout(&["a", "b", "c", "d"]);
//! assert_eq!(set.column_count(), 3);
//! ```
//!
//! # Invariants
//!
//! 1. Before any width is seen, the column count is the default.
//! 2. Each call supersedes the previous one (last call wins); nothing is
//!    queued.
//! 3. A [`ColumnChange`] is reported only when the count actually changes.
//! 4. Reconfiguring the table or default re-resolves against the last seen
//!    width.
//!
//! # Failure Modes
//!
//! None. A default of zero columns is carried as-is and clamped to one
//! only when items are placed or tracks are computed.

use vibe_core::ResizeCoalescer;

use crate::breakpoint::BreakpointTable;
use crate::masonry::{ColumnSet, PlacementStrategy, assign_columns, assign_columns_weighted};
use crate::tracks::{Track, column_tracks};

/// Default spacing between columns and between stacked items.
pub const DEFAULT_GAP: u32 = 16;

/// Reported when a width event moves the layout to a different column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnChange {
    pub from: usize,
    pub to: usize,
    /// Width (after clamping) that triggered the change, or the last seen
    /// width when the change came from reconfiguration (0 if none yet).
    pub width: i64,
}

/// Breakpoint-aware masonry layout state.
#[derive(Debug, Clone)]
pub struct ResponsiveMasonry {
    table: BreakpointTable,
    default_columns: usize,
    gap: u32,
    strategy: PlacementStrategy,
    /// Current resolved column count.
    columns: usize,
    last_width: Option<i64>,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl ResponsiveMasonry {
    /// Create a layout that resolves against `table`, falling back to
    /// `default_columns` below the smallest threshold.
    #[must_use]
    pub fn new(table: BreakpointTable, default_columns: usize) -> Self {
        Self {
            table,
            default_columns,
            gap: DEFAULT_GAP,
            strategy: PlacementStrategy::Count,
            columns: default_columns,
            last_width: None,
        }
    }

    /// Set the inter-column gap (builder pattern).
    #[must_use]
    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    /// Set the placement strategy (builder pattern).
    #[must_use]
    pub fn with_strategy(mut self, strategy: PlacementStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Replace the breakpoint table and re-resolve.
    pub fn set_table(&mut self, table: BreakpointTable) -> Option<ColumnChange> {
        self.table = table;
        self.reresolve()
    }

    /// Replace the fallback column count and re-resolve.
    pub fn set_default_columns(&mut self, default_columns: usize) -> Option<ColumnChange> {
        self.default_columns = default_columns;
        match self.last_width {
            Some(_) => self.reresolve(),
            None => self.apply(default_columns, 0),
        }
    }
}

// ---------------------------------------------------------------------------
// Width events
// ---------------------------------------------------------------------------

impl ResponsiveMasonry {
    /// Re-resolve the column count for a new width.
    ///
    /// Negative widths are clamped to 0.
    pub fn on_width(&mut self, width: i64) -> Option<ColumnChange> {
        let width = width.max(0);
        self.last_width = Some(width);
        let next = self.table.resolve(width, self.default_columns);
        self.apply(next, width)
    }

    /// Drain a coalesced resize stream and apply its latest width, if any.
    pub fn on_resize(&mut self, resize: &mut ResizeCoalescer) -> Option<ColumnChange> {
        let width = resize.flush()?;
        self.on_width(width)
    }

    fn reresolve(&mut self) -> Option<ColumnChange> {
        let width = self.last_width?;
        self.on_width(width)
    }

    fn apply(&mut self, next: usize, width: i64) -> Option<ColumnChange> {
        if next == self.columns {
            return None;
        }
        let change = ColumnChange {
            from: self.columns,
            to: next,
            width,
        };
        self.columns = next;

        #[cfg(feature = "tracing")]
        vibe_core::debug!(
            message = "masonry.columns_changed",
            from = change.from,
            to = change.to,
            width
        );

        Some(change)
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

impl ResponsiveMasonry {
    /// Place `items` into the current columns, balancing by count.
    #[must_use]
    pub fn layout<T>(&self, items: &[T]) -> ColumnSet {
        assign_columns(items, self.columns)
    }

    /// Place items with known sizes.
    ///
    /// Uses the weights only under [`PlacementStrategy::Height`]; under
    /// [`PlacementStrategy::Count`] they are treated as uniform.
    #[must_use]
    pub fn layout_measured(&self, weights: &[u64]) -> ColumnSet {
        match self.strategy {
            PlacementStrategy::Count => assign_columns(weights, self.columns),
            PlacementStrategy::Height => assign_columns_weighted(weights, self.columns),
        }
    }

    /// Column tracks for the current count across `container_width`.
    #[must_use]
    pub fn tracks(&self, container_width: u32) -> Vec<Track> {
        column_tracks(container_width, self.columns, self.gap)
    }

    /// Current resolved column count.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Most recent width seen (after clamping).
    #[must_use]
    pub fn last_width(&self) -> Option<i64> {
        self.last_width
    }

    #[must_use]
    pub fn table(&self) -> &BreakpointTable {
        &self.table
    }

    #[must_use]
    pub fn default_columns(&self) -> usize {
        self.default_columns
    }

    #[must_use]
    pub fn gap(&self) -> u32 {
        self.gap
    }

    #[must_use]
    pub fn strategy(&self) -> PlacementStrategy {
        self.strategy
    }
}

impl Default for ResponsiveMasonry {
    fn default() -> Self {
        Self::new(BreakpointTable::default(), 1)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#![forbid(unsafe_code)]

//! Masonry column assignment.
//!
//! [`assign_columns`] places a sequence of items into `column_count`
//! columns using a greedy shortest-column-first rule: each item, in input
//! order, goes to the column currently holding the fewest items, ties going
//! to the lowest column index.
//!
//! The default heuristic balances by *count*, not rendered height. Items
//! are assumed to be roughly uniform because nothing is measured before
//! placement. Callers that do have measured heights can opt into
//! [`assign_columns_weighted`], which applies the same rule to accumulated
//! weight instead.
//!
//! # Usage
//!
//! ```
//! use vibe_layout::assign_columns;
//!
//! let set = assign_columns(&["A", "B", "C", "D", "E"], 2);
//! let idx: Vec<Vec<usize>> = set
//!     .iter()
//!     .map(|col| col.iter().map(|item| item.source_index()).collect())
//!     .collect();
//! assert_eq!(idx, vec![vec![0, 2, 4], vec![1, 3]]);
//! ```
//!
//! # Invariants
//!
//! 1. Every input item lands in exactly one column.
//! 2. Within a column, items keep their relative input order.
//! 3. Under count balancing, column sizes differ by at most one.
//! 4. Identical inputs produce identical output.
//! 5. A column count below 1 is treated as 1; zero columns are never
//!    produced. A count above [`MAX_COLUMNS`] is treated as `MAX_COLUMNS`,
//!    so placement never fails on an absurd count.
//!
//! # Complexity
//!
//! O(n log k) for n items and k columns, using a min-heap keyed on
//! `(load, column_index)`.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

/// Largest column count placement and track geometry will honour.
///
/// Validated configs and strict breakpoint tables reject anything larger.
pub const MAX_COLUMNS: usize = 1024;

/// Opaque handle to one placed item: its position in the input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item {
    source_index: usize,
}

impl Item {
    #[must_use]
    pub const fn new(source_index: usize) -> Self {
        Self { source_index }
    }

    /// Position of this item in the sequence passed to the assigner.
    #[must_use]
    pub const fn source_index(self) -> usize {
        self.source_index
    }
}

/// What "shortest column" is measured by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementStrategy {
    /// Fewest items. Assumes uniform item size.
    #[default]
    Count,
    /// Smallest accumulated weight (e.g. measured height).
    Height,
}

/// Columns produced by one assignment pass.
///
/// Rebuilt from scratch on every pass; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSet {
    columns: Vec<Vec<Item>>,
    /// Per-column fill under `strategy`: item count or summed weight.
    loads: Vec<u64>,
    strategy: PlacementStrategy,
}

impl ColumnSet {
    /// All columns, left to right.
    #[must_use]
    pub fn columns(&self) -> &[Vec<Item>] {
        &self.columns
    }

    /// Items in column `index`, or `None` if out of range.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&[Item]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    /// Number of columns (always at least 1).
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Total number of placed items across all columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Vec::is_empty)
    }

    /// Fill of each column under the strategy used for this pass.
    #[must_use]
    pub fn column_loads(&self) -> &[u64] {
        &self.loads
    }

    #[must_use]
    pub fn strategy(&self) -> PlacementStrategy {
        self.strategy
    }

    /// Column holding the item at `source_index`.
    #[must_use]
    pub fn column_of(&self, source_index: usize) -> Option<usize> {
        self.columns
            .iter()
            .position(|col| col.iter().any(|item| item.source_index == source_index))
    }

    /// Difference between the longest and shortest column, by item count.
    #[must_use]
    pub fn spread(&self) -> usize {
        let max = self.columns.iter().map(Vec::len).max().unwrap_or(0);
        let min = self.columns.iter().map(Vec::len).min().unwrap_or(0);
        max - min
    }

    /// Iterate columns left to right.
    pub fn iter(&self) -> impl Iterator<Item = &[Item]> {
        self.columns.iter().map(Vec::as_slice)
    }

    /// Map handles back to the caller's items.
    ///
    /// Handles whose index falls outside `items` are skipped, so projecting
    /// onto a shorter slice than the one assigned never panics.
    #[must_use]
    pub fn project<'a, T>(&self, items: &'a [T]) -> Vec<Vec<&'a T>> {
        self.columns
            .iter()
            .map(|col| {
                col.iter()
                    .filter_map(|item| items.get(item.source_index))
                    .collect()
            })
            .collect()
    }

    /// Consume the set, returning the raw columns.
    #[must_use]
    pub fn into_columns(self) -> Vec<Vec<Item>> {
        self.columns
    }
}

/// Place `items` into `column_count` columns, balancing by item count.
///
/// The items themselves are never inspected; only their positions matter.
/// An empty input yields `column_count` empty columns. A `column_count` of
/// zero is treated as one, and one above [`MAX_COLUMNS`] as `MAX_COLUMNS`.
#[must_use]
pub fn assign_columns<T>(items: &[T], column_count: usize) -> ColumnSet {
    place_greedy(items.len(), column_count, PlacementStrategy::Count, |_| 1)
}

/// Place items into columns, balancing by accumulated weight.
///
/// `weights[i]` is the size of item `i` (typically its measured height).
/// Ties between equally loaded columns go to the lowest index, so equal
/// weights reproduce [`assign_columns`] exactly.
#[must_use]
pub fn assign_columns_weighted(weights: &[u64], column_count: usize) -> ColumnSet {
    place_greedy(weights.len(), column_count, PlacementStrategy::Height, |i| {
        weights[i]
    })
}

fn place_greedy(
    len: usize,
    column_count: usize,
    strategy: PlacementStrategy,
    weight: impl Fn(usize) -> u64,
) -> ColumnSet {
    let count = column_count.clamp(1, MAX_COLUMNS);
    let per_column = len.div_ceil(count);

    let mut columns: Vec<Vec<Item>> = (0..count).map(|_| Vec::with_capacity(per_column)).collect();
    let mut loads = vec![0u64; count];
    // Min-heap on (load, index): lowest load first, lowest index on ties.
    let mut heap: BinaryHeap<Reverse<(u64, usize)>> = (0..count).map(|c| Reverse((0, c))).collect();

    for i in 0..len {
        let Some(Reverse((load, col))) = heap.pop() else {
            break;
        };
        let next = load.saturating_add(weight(i));
        columns[col].push(Item::new(i));
        loads[col] = next;
        heap.push(Reverse((next, col)));
    }

    #[cfg(feature = "tracing")]
    vibe_core::trace!(
        message = "masonry.assign",
        items = len,
        columns = count,
        strategy = ?strategy
    );

    ColumnSet {
        columns,
        loads,
        strategy,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#![forbid(unsafe_code)]

//! Width-change coalescing for resize notification streams.
//!
//! Browsers and host shells can deliver dozens of resize notifications per
//! second while a window is dragged. The layout engine only cares about the
//! most recent width, so [`ResizeCoalescer`] keeps a single pending value:
//!
//! - **push**: replaces any pending width (latest wins).
//! - **flush**: hands the pending width to the caller and remembers it.
//!
//! Every pushed width is flushed, even one equal to the last flushed value;
//! deciding whether a width is a no-op is left to the consumer.
//!
//! # Usage
//!
//! ```
//! use vibe_core::ResizeCoalescer;
//!
//! let mut resize = ResizeCoalescer::new();
//! resize.push(700);
//! resize.push(820);
//! resize.push(1300);
//! assert_eq!(resize.flush(), Some(1300));
//! assert_eq!(resize.flush(), None);
//! ```

/// Coalesces a stream of width notifications into the latest one.
///
/// # Thread Safety
///
/// Not synchronized. Own it from the task that drives layout.
///
/// # Performance
///
/// All operations are O(1) and hold at most one pending width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResizeCoalescer {
    /// Latest width not yet flushed.
    pending: Option<i64>,
    /// Width handed out by the most recent flush.
    last_flushed: Option<i64>,
}

impl ResizeCoalescer {
    /// Create an empty coalescer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a width notification, replacing any pending one.
    ///
    /// Returns the width it superseded, if one was still pending.
    pub fn push(&mut self, width: i64) -> Option<i64> {
        self.pending.replace(width)
    }

    /// Take the pending width, if any.
    pub fn flush(&mut self) -> Option<i64> {
        let width = self.pending.take()?;
        self.last_flushed = Some(width);
        Some(width)
    }

    /// Peek at the pending width without consuming it.
    #[must_use]
    pub fn pending(&self) -> Option<i64> {
        self.pending
    }

    /// Width returned by the most recent [`flush`](Self::flush).
    #[must_use]
    pub fn last_flushed(&self) -> Option<i64> {
        self.last_flushed
    }

    /// Forget both the pending and the last flushed width.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

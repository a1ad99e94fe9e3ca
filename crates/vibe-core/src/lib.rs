#![forbid(unsafe_code)]

//! Core: logging setup and width-change coalescing for the vibes layout engine.
//!
//! # Role in the workspace
//! `vibe-core` is the ambient layer. It owns the tracing subscriber setup
//! used by binaries and tests, and the [`ResizeCoalescer`] that turns a
//! burst of viewport resize notifications into the single width the
//! layout engine should re-resolve against.
//!
//! # How it fits in the system
//! `vibe-layout` consumes widths produced here and re-exports the logging
//! macros when its own `tracing` feature is enabled. Nothing in this crate
//! performs I/O beyond reading the log filter from the environment.

pub mod logging;
pub mod resize;

pub use resize::ResizeCoalescer;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, info_span, trace, trace_span, warn};

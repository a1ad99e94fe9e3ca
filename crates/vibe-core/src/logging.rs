#![forbid(unsafe_code)]

//! Structured logging plumbing.
//!
//! With the `tracing` feature the usual macros are re-exported so layout
//! code can write `vibe_core::debug!(..)` without its own tracing import.
//! With `tracing-json` a JSON subscriber can be installed via [`init`].
//!
//! # Filter resolution
//!
//! The filter directive is read from `VIBE_LOG`, then `RUST_LOG`, and
//! falls back to [`DEFAULT_DIRECTIVE`].

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, error, info, info_span, trace, trace_span, warn};

/// Directive used when neither `VIBE_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Environment variable consulted first for the filter directive.
pub const ENV_VAR: &str = "VIBE_LOG";

/// Pick the filter directive from the two candidate environment values.
///
/// Empty values are treated as unset.
#[must_use]
pub fn select_directive(vibe_log: Option<String>, rust_log: Option<String>) -> String {
    vibe_log
        .filter(|s| !s.trim().is_empty())
        .or_else(|| rust_log.filter(|s| !s.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}

/// Read the filter directive from the process environment.
#[must_use]
pub fn directive_from_env() -> String {
    select_directive(std::env::var(ENV_VAR).ok(), std::env::var("RUST_LOG").ok())
}

/// Failure to install the global subscriber.
#[cfg(feature = "tracing-json")]
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter {directive:?}: {source}")]
    Filter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("global subscriber could not be installed: {0}")]
    Install(String),
}

/// Install a JSON `tracing` subscriber filtered by [`directive_from_env`].
///
/// Returns an error rather than panicking when a global subscriber is
/// already installed, so tests can call this repeatedly.
#[cfg(feature = "tracing-json")]
pub fn init() -> Result<(), LoggingError> {
    init_with_directive(&directive_from_env())
}

/// Install a JSON `tracing` subscriber with an explicit filter directive.
#[cfg(feature = "tracing-json")]
pub fn init_with_directive(directive: &str) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(directive).map_err(|source| LoggingError::Filter {
        directive: directive.to_string(),
        source,
    })?;

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vibe_log_takes_precedence() {
        let d = select_directive(Some("debug".into()), Some("warn".into()));
        assert_eq!(d, "debug");
    }

    #[test]
    fn rust_log_is_fallback() {
        let d = select_directive(None, Some("vibe_layout=trace".into()));
        assert_eq!(d, "vibe_layout=trace");
    }

    #[test]
    fn blank_values_are_ignored() {
        let d = select_directive(Some("   ".into()), Some(String::new()));
        assert_eq!(d, DEFAULT_DIRECTIVE);
    }

    #[test]
    fn default_when_unset() {
        assert_eq!(select_directive(None, None), "info");
    }

    #[cfg(feature = "tracing-json")]
    #[test]
    fn bad_directive_is_reported() {
        let err = init_with_directive("vibe_layout=bogus").unwrap_err();
        assert!(matches!(err, LoggingError::Filter { .. }));
    }
}

#![forbid(unsafe_code)]

//! Masonry configuration as data.
//!
//! [`MasonryConfig`] captures the caller-supplied knobs (breakpoint table,
//! fallback column count, gap, placement strategy) so they can be loaded
//! from TOML or JSON instead of being hardcoded in the host application.
//!
//! # Loading
//!
//! ```toml
//! # masonry.toml
//! defaultColumns = 1
//! gap = 12
//!
//! [[breakpoints]]
//! minWidth = 640
//! columns = 2
//!
//! [[breakpoints]]
//! minWidth = 1024
//! columns = 3
//! ```
//!
//! ```rust,ignore
//! let config = MasonryConfig::from_toml_file("masonry.toml")?;
//! let config = MasonryConfig::from_json_str(json)?;
//! let mut masonry = config.build();
//! ```
//!
//! # Defaults
//!
//! Missing fields take the values of [`MasonryConfig::default`]: thresholds
//! at 640 / 1024 / 1280 px selecting 2 / 3 / 4 columns, one column below
//! that, a 16 px gap, and count-based placement.

#[cfg(feature = "config")]
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::breakpoint::{Breakpoint, BreakpointError, BreakpointTable};
use crate::masonry::{MAX_COLUMNS, PlacementStrategy};
use crate::responsive::{DEFAULT_GAP, ResponsiveMasonry};

/// Tunable parameters for a responsive masonry surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MasonryConfig {
    /// Column count below the smallest threshold.
    pub default_columns: usize,

    /// Spacing between columns, in pixels.
    pub gap: u32,

    /// How the shortest column is chosen.
    pub strategy: PlacementStrategy,

    /// Width thresholds, in declaration order. Kept last so TOML output
    /// places the array of tables after the scalar keys.
    pub breakpoints: Vec<Breakpoint>,
}

impl Default for MasonryConfig {
    fn default() -> Self {
        Self {
            default_columns: 1,
            gap: DEFAULT_GAP,
            strategy: PlacementStrategy::Count,
            breakpoints: BreakpointTable::default().into(),
        }
    }
}

/// Why a configuration could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "config")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[cfg(feature = "config")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid breakpoints: {0}")]
    Breakpoints(#[from] BreakpointError),

    #[error("config validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

impl MasonryConfig {
    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.loaded("toml")
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.loaded("json")
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Serialize to a TOML string.
    #[cfg(feature = "config")]
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    #[cfg(feature = "config")]
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn loaded(self, source: &'static str) -> Result<Self, ConfigError> {
        self.check()?;

        #[cfg(feature = "tracing")]
        vibe_core::debug!(
            message = "config.loaded",
            source,
            breakpoints = self.breakpoints.len(),
            default_columns = self.default_columns
        );

        Ok(self)
    }

    /// Fail with the first structural breakpoint problem, or with every
    /// problem found by [`validate`](Self::validate).
    pub fn check(&self) -> Result<(), ConfigError> {
        BreakpointTable::strict(self.breakpoints.iter().copied())?;
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Validate all parameters.
    ///
    /// Returns a list of problems. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.default_columns == 0 {
            errors.push("defaultColumns must be > 0".into());
        }
        if self.default_columns > MAX_COLUMNS {
            errors.push(format!(
                "defaultColumns={} exceeds the maximum of {MAX_COLUMNS}",
                self.default_columns
            ));
        }

        for bp in &self.breakpoints {
            if bp.columns == 0 {
                errors.push(format!(
                    "breakpoint minWidth={} must select at least 1 column",
                    bp.min_width
                ));
            }
            if bp.columns > MAX_COLUMNS {
                errors.push(format!(
                    "breakpoint minWidth={} selects {} columns, more than {MAX_COLUMNS}",
                    bp.min_width, bp.columns
                ));
            }
        }

        for pair in self.breakpoints.windows(2) {
            if pair[1].min_width <= pair[0].min_width {
                errors.push(format!(
                    "breakpoint minWidth={} must be greater than the preceding {}",
                    pair[1].min_width, pair[0].min_width
                ));
            }
        }

        errors
    }

    /// Sorted breakpoint table for these thresholds.
    #[must_use]
    pub fn table(&self) -> BreakpointTable {
        BreakpointTable::new(self.breakpoints.iter().copied())
    }

    /// Build the responsive layout state described by this config.
    #[must_use]
    pub fn build(&self) -> ResponsiveMasonry {
        ResponsiveMasonry::new(self.table(), self.default_columns)
            .with_gap(self.gap)
            .with_strategy(self.strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = MasonryConfig::default();
        assert!(config.validate().is_empty());
        assert!(config.check().is_ok());
        assert_eq!(config.table(), BreakpointTable::default());
    }

    #[test]
    fn validate_reports_every_problem() {
        let config = MasonryConfig {
            breakpoints: vec![Breakpoint::new(1024, 0), Breakpoint::new(640, 2)],
            default_columns: 0,
            ..MasonryConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 3, "{errors:?}");
        assert!(errors[0].contains("defaultColumns"));
    }

    #[test]
    fn check_prefers_breakpoint_error() {
        let config = MasonryConfig {
            breakpoints: vec![Breakpoint::new(640, 2), Breakpoint::new(640, 3)],
            ..MasonryConfig::default()
        };
        let err = config.check().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Breakpoints(BreakpointError::DuplicateMinWidth { min_width: 640 })
        ));
    }

    #[test]
    fn check_reports_zero_default() {
        let config = MasonryConfig {
            default_columns: 0,
            ..MasonryConfig::default()
        };
        let err = config.check().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref e) if e.len() == 1));
        assert!(err.to_string().contains("defaultColumns"));
    }

    #[test]
    fn validate_enforces_column_limit() {
        let at_limit = MasonryConfig {
            default_columns: MAX_COLUMNS,
            breakpoints: vec![Breakpoint::new(640, MAX_COLUMNS)],
            ..MasonryConfig::default()
        };
        assert!(at_limit.validate().is_empty());

        let over = MasonryConfig {
            default_columns: MAX_COLUMNS + 1,
            breakpoints: vec![Breakpoint::new(640, usize::MAX)],
            ..MasonryConfig::default()
        };
        let errors = over.validate();
        assert_eq!(errors.len(), 2, "{errors:?}");
        assert!(errors[0].contains("defaultColumns"));
        assert!(errors[1].contains("minWidth=640"));
    }

    #[test]
    fn build_carries_every_field() {
        let config = MasonryConfig {
            gap: 8,
            strategy: PlacementStrategy::Height,
            default_columns: 2,
            ..MasonryConfig::default()
        };
        let m = config.build();
        assert_eq!(m.gap(), 8);
        assert_eq!(m.strategy(), PlacementStrategy::Height);
        assert_eq!(m.columns(), 2);
        assert_eq!(m.table().len(), 3);
    }

    #[cfg(feature = "config")]
    #[test]
    fn json_uses_recognized_shape() {
        let json = r#"{
            "breakpoints": [
                {"minWidth": 640, "columns": 2},
                {"minWidth": 1024, "columns": 3},
                {"minWidth": 1280, "columns": 4}
            ],
            "defaultColumns": 1
        }"#;
        let config = MasonryConfig::from_json_str(json).unwrap();
        assert_eq!(config, MasonryConfig::default());
    }

    #[cfg(feature = "config")]
    #[test]
    fn toml_partial_uses_defaults() {
        let config = MasonryConfig::from_toml_str("gap = 4\nstrategy = \"height\"\n").unwrap();
        assert_eq!(config.gap, 4);
        assert_eq!(config.strategy, PlacementStrategy::Height);
        assert_eq!(config.breakpoints.len(), 3);
    }

    #[cfg(feature = "config")]
    #[test]
    fn toml_array_of_tables() {
        let src = r#"
defaultColumns = 2

[[breakpoints]]
minWidth = 900
columns = 5
"#;
        let config = MasonryConfig::from_toml_str(src).unwrap();
        assert_eq!(config.breakpoints, vec![Breakpoint::new(900, 5)]);
        assert_eq!(config.default_columns, 2);
    }

    #[cfg(feature = "config")]
    #[test]
    fn toml_round_trip() {
        let config = MasonryConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(MasonryConfig::from_toml_str(&text).unwrap(), config);
    }

    #[cfg(feature = "config")]
    #[test]
    fn invalid_json_is_parse_error() {
        let err = MasonryConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[cfg(feature = "config")]
    #[test]
    fn unsorted_file_is_rejected() {
        let json = r#"{"breakpoints": [{"minWidth": 1024, "columns": 3}, {"minWidth": 640, "columns": 2}]}"#;
        let err = MasonryConfig::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Breakpoints(BreakpointError::NotIncreasing { .. })
        ));
    }

    #[cfg(feature = "config")]
    #[test]
    fn oversized_column_count_is_rejected_on_load() {
        let json = r#"{"breakpoints": [{"minWidth": 640, "columns": 18446744073709551615}]}"#;
        let err = MasonryConfig::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Breakpoints(BreakpointError::TooManyColumns { min_width: 640, .. })
        ));

        let err = MasonryConfig::from_toml_str("defaultColumns = 5000\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref e) if e.len() == 1));
    }

    #[cfg(feature = "config")]
    #[test]
    fn missing_file_is_io_error() {
        let err = MasonryConfig::from_toml_file("/definitely/not/here/masonry.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

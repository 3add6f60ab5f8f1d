//! # Health View Configuration
//!
//! Settings for the health view: the query a new view-model starts with, the
//! static column layout hint handed to the display layer, and logging.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use health_view_core::config::ConfigLoader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads config/health-view.toml, config/environments/<env>.toml
//! // and HEALTH_VIEW__* overrides
//! let config = ConfigLoader::load()?;
//! let columns = &config.layout.columns;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;

use crate::constants::layout;
use crate::models::Query;
use serde::{Deserialize, Serialize};

pub use error::{ConfigResult, ConfigurationError};
pub use loader::ConfigLoader;

/// Root configuration structure mirroring health-view.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HealthViewConfig {
    /// Query applied before the user edits the search controls
    pub default_query: Query,

    /// Display layout hint, passed through untouched
    pub layout: LayoutConfig,

    pub logging: LoggingConfig,
}

/// Static relative column widths of the instance listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub columns: Vec<u16>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: layout::DEFAULT_COLUMNS.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive; the environment's default level when unset
    pub level: Option<String>,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl HealthViewConfig {
    /// Check invariants that deserialization cannot express
    pub fn validate(&self) -> ConfigResult<()> {
        self.layout.validate()
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.columns.is_empty() {
            return Err(ConfigurationError::invalid_value(
                "layout.columns",
                "[]",
                "at least one column is required",
            ));
        }

        if self.columns.contains(&0) {
            return Err(ConfigurationError::invalid_value(
                "layout.columns",
                format!("{:?}", self.columns),
                "column widths must be positive",
            ));
        }

        let total: u32 = self.columns.iter().map(|&w| u32::from(w)).sum();
        if total != layout::COLUMN_WIDTH_TOTAL {
            return Err(ConfigurationError::invalid_value(
                "layout.columns",
                format!("{:?}", self.columns),
                format!(
                    "column widths must sum to {}, got {total}",
                    layout::COLUMN_WIDTH_TOTAL
                ),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HealthViewConfig::default();
        assert!(config.default_query.is_empty());
        assert_eq!(config.layout.columns, vec![25, 25, 25, 25]);
        assert_eq!(config.logging.level, None);
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_layout_validation() {
        let layout = LayoutConfig { columns: vec![] };
        assert!(layout.validate().is_err());

        let layout = LayoutConfig {
            columns: vec![50, 0, 50],
        };
        assert!(layout.validate().is_err());

        let layout = LayoutConfig {
            columns: vec![40, 40],
        };
        let err = layout.validate().unwrap_err();
        assert!(err.to_string().contains("must sum to 100, got 80"));

        let layout = LayoutConfig {
            columns: vec![40, 30, 30],
        };
        assert!(layout.validate().is_ok());
    }
}

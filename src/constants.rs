//! # Health View Constants
//!
//! Wire strings, status groupings and defaults shared by the filter engine,
//! the partitioner and the configuration layer.

/// Wire values of the defined check statuses
pub mod check_status {
    pub const PASSING: &str = "passing";
    pub const WARNING: &str = "warning";
    pub const CRITICAL: &str = "critical";
    pub const UNKNOWN: &str = "unknown";
}

/// Status groupings used by the health aggregate
pub mod status_groups {
    use super::check_status;

    /// Check statuses counted towards an instance's unhealthy total
    pub const UNHEALTHY_CHECK_STATUSES: &[&str] = &[check_status::WARNING, check_status::CRITICAL];
}

/// Page parameter names the query is read from
pub mod query_params {
    /// Free-text node name search
    pub const NAME_FILTER: &str = "s";
    /// Check status select
    pub const STATUS_FILTER: &str = "status";
}

/// Static display layout defaults
pub mod layout {
    /// Relative column widths of the instance listing
    pub const DEFAULT_COLUMNS: [u16; 4] = [25, 25, 25, 25];

    /// Column widths must add up to this total
    pub const COLUMN_WIDTH_TOTAL: u32 = 100;
}

/// Environment variable names
pub mod env {
    /// Primary environment selector
    pub const ENVIRONMENT: &str = "HEALTH_VIEW_ENV";
    /// Fallback environment selector
    pub const APP_ENVIRONMENT: &str = "APP_ENV";
    /// Prefix for configuration overrides (`HEALTH_VIEW__LAYOUT__COLUMNS`, ...)
    pub const CONFIG_PREFIX: &str = "HEALTH_VIEW";
    pub const DEFAULT_ENVIRONMENT: &str = "development";
}

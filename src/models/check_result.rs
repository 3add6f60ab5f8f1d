//! # Check Results
//!
//! A single health-check outcome and the status values it carries on the
//! wire. Classification into unhealthy statuses follows
//! [`status_groups::UNHEALTHY_CHECK_STATUSES`].

use crate::constants::{check_status, status_groups};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Outcome reported by a single health check
///
/// Unrecognized wire values are kept verbatim in `Other` rather than rejected,
/// so a new status introduced by the backend never breaks classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CheckStatus {
    /// Check succeeded
    Passing,
    /// Check reported a degraded but functioning service
    Warning,
    /// Check failed
    Critical,
    /// Check has not produced a result yet
    Unknown,
    /// Any status string outside the defined set
    Other(String),
}

impl CheckStatus {
    /// Wire representation, used for status filter comparison
    pub fn as_str(&self) -> &str {
        match self {
            Self::Passing => check_status::PASSING,
            Self::Warning => check_status::WARNING,
            Self::Critical => check_status::CRITICAL,
            Self::Unknown => check_status::UNKNOWN,
            Self::Other(raw) => raw,
        }
    }

    /// Whether this status counts towards an instance's unhealthy total
    pub fn is_unhealthy(&self) -> bool {
        self.is_recognized() && status_groups::UNHEALTHY_CHECK_STATUSES.contains(&self.as_str())
    }

    /// Whether this is one of the defined statuses
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for CheckStatus {
    fn from(s: &str) -> Self {
        match s {
            check_status::PASSING => Self::Passing,
            check_status::WARNING => Self::Warning,
            check_status::CRITICAL => Self::Critical,
            check_status::UNKNOWN => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for CheckStatus {
    fn from(s: String) -> Self {
        match Self::from(s.as_str()) {
            Self::Other(_) => Self::Other(s),
            known => known,
        }
    }
}

impl From<CheckStatus> for String {
    fn from(status: CheckStatus) -> Self {
        match status {
            CheckStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One health-check result attached to an instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    #[serde(alias = "Status")]
    pub status: CheckStatus,
}

impl CheckResult {
    pub fn new(status: impl Into<CheckStatus>) -> Self {
        Self {
            status: status.into(),
        }
    }

    /// Read a check from an untyped payload entry.
    ///
    /// Returns `None` for entries without a string status; callers skip them.
    pub fn from_value(value: &Value) -> Option<Self> {
        let status = value
            .get("status")
            .or_else(|| value.get("Status"))
            .and_then(Value::as_str)?;
        Some(Self::new(status))
    }
}

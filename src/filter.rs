//! # Instance Filtering
//!
//! Derives the filtered view of the instance listing from the source
//! collection and the current [`Query`].
//!
//! An instance matches when both hold:
//!
//! - its node name starts with the name filter, ignoring case
//! - the status filter is empty, or at least one of its checks reports
//!   exactly that status
//!
//! The status filter is an "any-of" test over the checks. It is independent
//! of the unhealthy aggregate in [`crate::health`]: an instance with checks
//! `[passing, critical]` matches `status = "passing"` and is still unhealthy.
//!
//! Filtering is stable and never fails. An instance without a node name only
//! matches an empty name filter.

use crate::models::{CheckResult, Instance, Query};
use tracing::trace;

/// Predicate seam the view-model is composed with
pub trait InstanceFilter {
    /// Whether `instance` belongs in the filtered view for `query`
    fn matches(&self, instance: &Instance, query: &Query) -> bool;

    /// Filtered view of `source`, in source order
    fn filtered(&self, source: &[Instance], query: &Query) -> Vec<Instance> {
        source
            .iter()
            .filter(|instance| self.matches(instance, query))
            .cloned()
            .collect()
    }
}

/// Node-prefix and check-status filter used by the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterEngine;

impl FilterEngine {
    pub fn new() -> Self {
        Self
    }
}

impl InstanceFilter for FilterEngine {
    fn matches(&self, instance: &Instance, query: &Query) -> bool {
        let name_matches = match instance.node_name() {
            Some(node) => prefix_match(node, &query.name_filter),
            None => query.name_filter.is_empty(),
        };
        let matched = name_matches && status_match(&instance.checks, &query.status_filter);

        trace!(
            node = instance.node_name(),
            name_filter = %query.name_filter,
            status_filter = %query.status_filter,
            matched,
            "instance filter evaluated"
        );
        matched
    }
}

/// Case-insensitive "starts with"; an empty prefix matches everything
pub fn prefix_match(value: &str, prefix: &str) -> bool {
    prefix.is_empty() || value.to_lowercase().starts_with(&prefix.to_lowercase())
}

/// True when `status_filter` is empty or any check reports exactly that status
pub fn status_match(checks: &[CheckResult], status_filter: &str) -> bool {
    status_filter.is_empty()
        || checks
            .iter()
            .any(|check| check.status.as_str() == status_filter)
}

/// Filtered view using the default [`FilterEngine`]
pub fn filtered(source: &[Instance], query: &Query) -> Vec<Instance> {
    FilterEngine.filtered(source, query)
}

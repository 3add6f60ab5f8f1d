//! # Health Partitioning
//!
//! Splits a filtered view into healthy and unhealthy instances.
//!
//! An instance is unhealthy when at least one of its checks is `warning` or
//! `critical`. Passing, unknown and unrecognized statuses never count, and an
//! instance with no checks is healthy. Every input instance lands in exactly
//! one group and both groups keep input order.

use crate::models::{CheckResult, Instance};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregate health classification of one instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthState {
    Healthy,
    Unhealthy,
}

impl HealthState {
    pub fn of(instance: &Instance) -> Self {
        if unhealthy_count(&instance.checks) > 0 {
            Self::Unhealthy
        } else {
            Self::Healthy
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healthy => write!(f, "healthy"),
            Self::Unhealthy => write!(f, "unhealthy"),
        }
    }
}

/// Number of checks in warning or critical status
pub fn unhealthy_count(checks: &[CheckResult]) -> usize {
    checks
        .iter()
        .filter(|check| check.status.is_unhealthy())
        .count()
}

/// Filtered instances split by aggregate health
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    pub healthy: Vec<Instance>,
    pub unhealthy: Vec<Instance>,
}

/// Group sizes for dashboard badges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSummary {
    pub total: usize,
    pub healthy: usize,
    pub unhealthy: usize,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.healthy.len() + self.unhealthy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.healthy.is_empty() && self.unhealthy.is_empty()
    }

    pub fn summary(&self) -> HealthSummary {
        HealthSummary {
            total: self.len(),
            healthy: self.healthy.len(),
            unhealthy: self.unhealthy.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HealthPartitioner;

impl HealthPartitioner {
    pub fn new() -> Self {
        Self
    }

    pub fn partition(&self, filtered: &[Instance]) -> Partition {
        let (unhealthy, healthy) = filtered
            .iter()
            .cloned()
            .partition(|instance| HealthState::of(instance) == HealthState::Unhealthy);

        Partition { healthy, unhealthy }
    }
}

/// Partition using the default [`HealthPartitioner`]
pub fn partition(filtered: &[Instance]) -> Partition {
    HealthPartitioner.partition(filtered)
}

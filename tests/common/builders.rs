//! Test data builders for instance listings

#![allow(dead_code)]

use health_view_core::{CheckResult, CheckStatus, Instance};

/// Builder pattern for creating test Instances
pub struct InstanceBuilder {
    node: Option<String>,
    checks: Vec<CheckResult>,
}

impl InstanceBuilder {
    pub fn new() -> Self {
        Self {
            node: None,
            checks: Vec::new(),
        }
    }

    pub fn on_node(mut self, node: &str) -> Self {
        self.node = Some(node.to_string());
        self
    }

    pub fn with_check(mut self, status: impl Into<CheckStatus>) -> Self {
        self.checks.push(CheckResult::new(status));
        self
    }

    pub fn build(self) -> Instance {
        Instance {
            node: self.node,
            checks: self.checks,
        }
    }
}

/// Instance on `node` with one check per status string
pub fn instance(node: &str, statuses: &[&str]) -> Instance {
    statuses
        .iter()
        .fold(InstanceBuilder::new().on_node(node), |builder, status| {
            builder.with_check(*status)
        })
        .build()
}

pub fn node_names(instances: &[Instance]) -> Vec<&str> {
    instances
        .iter()
        .map(|instance| instance.node_name().unwrap_or("<none>"))
        .collect()
}

//! # Service Instance
//!
//! One service running on one cluster node, with the health checks reported
//! for it.
//!
//! ## Payload Shapes
//!
//! Instances are read leniently from two JSON shapes:
//!
//! ```text
//! {"node": "node-1", "checks": [{"status": "passing"}]}
//! {"Node": {"Node": "node-1"}, "Checks": [{"Status": "passing"}]}
//! ```
//!
//! The second is the catalog shape served by the health endpoint. A missing
//! or non-string node name becomes `None`; a missing, null or non-array
//! checks collection becomes empty; check entries without a string status
//! are dropped. Deserializing an `Instance` from any JSON value succeeds.

use super::check_result::CheckResult;
use crate::error::{HealthViewError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Instance {
    /// Display name of the node the instance runs on
    pub node: Option<String>,
    pub checks: Vec<CheckResult>,
}

impl Instance {
    pub fn new(node: impl Into<String>, checks: Vec<CheckResult>) -> Self {
        Self {
            node: Some(node.into()),
            checks,
        }
    }

    /// Instance whose node name is absent from the payload
    pub fn without_node(checks: Vec<CheckResult>) -> Self {
        Self { node: None, checks }
    }

    pub fn node_name(&self) -> Option<&str> {
        self.node.as_deref()
    }

    /// Build an instance from an untyped payload entry
    pub fn from_value(value: &Value) -> Self {
        Self {
            node: node_name_from_value(value),
            checks: checks_from_value(value),
        }
    }
}

fn node_name_from_value(value: &Value) -> Option<String> {
    match value.get("node").or_else(|| value.get("Node"))? {
        Value::String(name) => Some(name.clone()),
        // Catalog shape nests the name: {"Node": {"Node": "..."}}
        Value::Object(node) => node
            .get("Node")
            .or_else(|| node.get("node"))
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

fn checks_from_value(value: &Value) -> Vec<CheckResult> {
    match value.get("checks").or_else(|| value.get("Checks")) {
        Some(Value::Array(entries)) => entries.iter().filter_map(CheckResult::from_value).collect(),
        _ => Vec::new(),
    }
}

impl<'de> Deserialize<'de> for Instance {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Parse a source payload into instances.
///
/// Only a payload that is not a JSON array is rejected; individual entries
/// are always accepted.
pub fn instances_from_json(payload: &str) -> Result<Vec<Instance>> {
    let value: Value = serde_json::from_str(payload)?;
    match value {
        Value::Array(entries) => Ok(entries.iter().map(Instance::from_value).collect()),
        other => Err(HealthViewError::InvalidInput(format!(
            "Expected a JSON array of instances, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

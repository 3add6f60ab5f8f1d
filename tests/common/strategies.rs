#![allow(dead_code)]

use health_view_core::{CheckResult, CheckStatus, Instance, Query};
use proptest::prelude::*;
use proptest::strategy::Just;

/// Strategy for check statuses, including values outside the defined set
pub fn check_status_strategy() -> impl Strategy<Value = CheckStatus> {
    prop_oneof![
        4 => Just(CheckStatus::Passing),
        2 => Just(CheckStatus::Warning),
        2 => Just(CheckStatus::Critical),
        1 => Just(CheckStatus::Unknown),
        1 => "[a-z]{1,8}".prop_map(CheckStatus::from),
    ]
}

pub fn checks_strategy() -> impl Strategy<Value = Vec<CheckResult>> {
    prop::collection::vec(check_status_strategy().prop_map(CheckResult::new), 0..5)
}

/// Node names mixing case so prefix matching is exercised case-insensitively
pub fn node_name_strategy() -> impl Strategy<Value = String> {
    "(Node|node|NODE|web|Web|db)-[a-zA-Z0-9]{0,4}"
}

pub fn instance_strategy() -> impl Strategy<Value = Instance> {
    (prop::option::weighted(0.9, node_name_strategy()), checks_strategy())
        .prop_map(|(node, checks)| Instance { node, checks })
}

pub fn source_strategy() -> impl Strategy<Value = Vec<Instance>> {
    prop::collection::vec(instance_strategy(), 0..24)
}

/// Name filters drawn from prefixes likely to hit generated node names
pub fn name_filter_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("node".to_string()),
        Just("NODE-".to_string()),
        Just("w".to_string()),
        "[a-zA-Z-]{0,5}",
    ]
}

pub fn status_filter_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("passing".to_string()),
        Just("warning".to_string()),
        Just("critical".to_string()),
        Just("unknown".to_string()),
        "[a-z]{1,8}",
    ]
}

pub fn query_strategy() -> impl Strategy<Value = Query> {
    (name_filter_strategy(), status_filter_strategy())
        .prop_map(|(name_filter, status_filter)| Query {
            name_filter,
            status_filter,
        })
}

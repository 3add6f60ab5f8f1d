//! Tests for status groupings and defaults

use health_view_core::constants::{layout, query_params};
use health_view_core::{check_status, status_groups, CheckStatus, LayoutConfig};

const DEFINED_STATUSES: [&str; 4] = [
    check_status::PASSING,
    check_status::WARNING,
    check_status::CRITICAL,
    check_status::UNKNOWN,
];

#[test]
fn test_unhealthy_group_drives_status_classification() {
    for status in DEFINED_STATUSES {
        assert_eq!(
            CheckStatus::from(status).is_unhealthy(),
            status_groups::UNHEALTHY_CHECK_STATUSES.contains(&status),
            "{status}"
        );
    }
    assert_eq!(
        status_groups::UNHEALTHY_CHECK_STATUSES,
        &[check_status::WARNING, check_status::CRITICAL]
    );
}

#[test]
fn test_unhealthy_group_only_holds_defined_statuses() {
    for status in status_groups::UNHEALTHY_CHECK_STATUSES {
        assert!(DEFINED_STATUSES.contains(status), "{status}");
        assert!(CheckStatus::from(*status).is_recognized(), "{status}");
    }
}

#[test]
fn test_query_param_names() {
    assert_eq!(query_params::NAME_FILTER, "s");
    assert_eq!(query_params::STATUS_FILTER, "status");
}

#[test]
fn test_default_columns_are_valid() {
    let layout_config = LayoutConfig {
        columns: layout::DEFAULT_COLUMNS.to_vec(),
    };
    assert!(layout_config.validate().is_ok());
    assert_eq!(layout_config, LayoutConfig::default());
}

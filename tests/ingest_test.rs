//! Source payload ingestion feeding the health view

mod common;

use common::node_names;
use health_view_core::{instances_from_json, HealthViewError, HealthViewModel, Query};

const CATALOG_PAYLOAD: &str = r#"[
    {
        "Node": {"Node": "Node-A", "Address": "10.0.0.1"},
        "Service": {"ID": "web-1", "Service": "web"},
        "Checks": [
            {"Node": "Node-A", "CheckID": "serfHealth", "Status": "passing"},
            {"Node": "Node-A", "CheckID": "service:web-1", "Status": "passing"}
        ]
    },
    {
        "Node": {"Node": "Node-B", "Address": "10.0.0.2"},
        "Service": {"ID": "web-2", "Service": "web"},
        "Checks": [
            {"Node": "Node-B", "CheckID": "serfHealth", "Status": "passing"},
            {"Node": "Node-B", "CheckID": "service:web-2", "Status": "critical"}
        ]
    },
    {
        "Node": {"Address": "10.0.0.3"},
        "Checks": null
    }
]"#;

#[test]
fn test_catalog_payload_through_view_model() {
    let source = instances_from_json(CATALOG_PAYLOAD).unwrap();
    assert_eq!(source.len(), 3);
    assert_eq!(source[2].node, None);
    assert!(source[2].checks.is_empty());

    let view = HealthViewModel::new();
    view.set_source(source);

    assert_eq!(node_names(&view.healthy()), vec!["Node-A", "<none>"]);
    assert_eq!(node_names(&view.unhealthy()), vec!["Node-B"]);

    view.set_query(Query::new("node", "critical"));
    assert_eq!(node_names(&view.filtered()), vec!["Node-B"]);
}

#[test]
fn test_flat_payload() {
    let source = instances_from_json(
        r#"[{"node": "db-1", "checks": [{"status": "warning"}]}, {"node": "db-2"}]"#,
    )
    .unwrap();

    let view = HealthViewModel::new();
    view.set_source(source);
    assert_eq!(node_names(&view.unhealthy()), vec!["db-1"]);
    assert_eq!(node_names(&view.healthy()), vec!["db-2"]);
}

#[test]
fn test_non_list_payload_is_rejected() {
    let err = instances_from_json(r#""Node-A""#).unwrap_err();
    assert!(matches!(err, HealthViewError::InvalidInput(_)));
}

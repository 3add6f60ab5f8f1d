#![allow(clippy::doc_markdown)] // Allow technical terms in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Health View Core
//!
//! Filtering and health partitioning core behind a dashboard that lists
//! service instances deployed on cluster nodes.
//!
//! ## Overview
//!
//! The dashboard shows every instance of a service together with its health
//! checks. Users narrow the listing with a node-name search box and a status
//! select; the listing is then split into healthy and unhealthy groups. This
//! crate derives those three views from the raw instance list and the query:
//!
//! ```text
//! source + query ──► filtered ──► healthy
//!                              └► unhealthy
//! ```
//!
//! ## Module Organization
//!
//! - [`models`] - Instances, check results and the query
//! - [`filter`] - Node-prefix and check-status match predicate
//! - [`health`] - Unhealthy aggregate and the healthy/unhealthy partition
//! - [`view_model`] - Memoized, observable composition of the two
//! - [`config`] - Default query, layout hint and logging settings
//! - [`logging`] - Structured logging setup
//! - [`error`] - Errors raised at the crate's edges
//!
//! ## Quick Start
//!
//! ```rust
//! use health_view_core::{CheckResult, CheckStatus, HealthViewModel, Instance, Query};
//!
//! let view = HealthViewModel::new();
//! view.set_source(vec![
//!     Instance::new("Node-A", vec![CheckResult::new(CheckStatus::Passing)]),
//!     Instance::new("Node-B", vec![CheckResult::new(CheckStatus::Critical)]),
//! ]);
//! view.set_query(Query::new("node", ""));
//!
//! assert_eq!(view.filtered().len(), 2);
//! assert_eq!(view.healthy()[0].node_name(), Some("Node-A"));
//! assert_eq!(view.unhealthy()[0].node_name(), Some("Node-B"));
//! ```
//!
//! Filtering and partitioning never fail: malformed instances are classified
//! by defined defaults instead of raising.

pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod health;
pub mod logging;
pub mod models;
pub mod view_model;

pub use config::{ConfigLoader, HealthViewConfig, LayoutConfig, LoggingConfig};
pub use constants::{check_status, status_groups};
pub use error::{HealthViewError, Result};
pub use filter::{prefix_match, status_match, FilterEngine, InstanceFilter};
pub use health::{unhealthy_count, HealthPartitioner, HealthState, HealthSummary, Partition};
pub use models::{instances_from_json, CheckResult, CheckStatus, Instance, Query};
pub use view_model::{HealthViewModel, ViewSnapshot, ViewState, ViewUpdate};

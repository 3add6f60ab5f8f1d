//! # Data Model
//!
//! Inputs of the health view: the instances supplied by the data-fetch
//! collaborator and the query bound to the dashboard's search controls.

pub mod check_result;
pub mod instance;
pub mod query;

pub use check_result::{CheckResult, CheckStatus};
pub use instance::{instances_from_json, Instance};
pub use query::Query;

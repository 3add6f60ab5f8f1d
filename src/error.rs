use crate::config::ConfigurationError;

/// Errors raised at the edges of the crate.
///
/// Filtering and partitioning never fail; these only surface while loading
/// configuration or ingesting a source payload that is not an instance list.
#[derive(Debug, thiserror::Error)]
pub enum HealthViewError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, HealthViewError>;

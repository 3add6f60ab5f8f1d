//! # Structured Logging Module
//!
//! Environment-aware structured logging for the health view. Console output
//! is human-readable by default and JSON lines when configured.

use crate::config::{ConfigLoader, LoggingConfig};
use crate::models::Query;
use chrono::Utc;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment defaults
pub fn init_structured_logging() {
    init_with_config(&LoggingConfig::default());
}

/// Initialize structured logging; later calls are no-ops
pub fn init_with_config(config: &LoggingConfig) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = ConfigLoader::detect_environment();
        let log_level = config
            .level
            .clone()
            .unwrap_or_else(|| get_log_level(&environment));

        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new(&log_level))
            .with(
                config.json.then(|| {
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_ansi(false)
                        .json()
                }),
            )
            .with((!config.json).then(|| {
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_ansi(true)
            }));

        // A global subscriber may already be installed by the host application
        if subscriber.try_init().is_err() {
            tracing::debug!(
                "Global tracing subscriber already initialized - continuing with existing subscriber"
            );
        }

        tracing::info!(
            environment = %environment,
            level = %log_level,
            json = config.json,
            "STRUCTURED LOGGING: Initialized"
        );
    });
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> String {
    match environment {
        "production" => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Log one recomputation of the derived views
pub fn log_view_recompute(
    generation: u64,
    query: &Query,
    source_count: usize,
    filtered_count: usize,
    healthy_count: usize,
    unhealthy_count: usize,
) {
    tracing::debug!(
        generation,
        name_filter = %query.name_filter,
        status_filter = %query.status_filter,
        source_count,
        filtered_count,
        healthy_count,
        unhealthy_count,
        timestamp = %Utc::now().to_rfc3339(),
        "VIEW_RECOMPUTE"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(get_log_level("test"), "debug");
        assert_eq!(get_log_level("development"), "debug");
        assert_eq!(get_log_level("production"), "info");
        assert_eq!(get_log_level("unknown"), "debug");
    }

    #[test]
    fn test_repeated_initialization_is_harmless() {
        init_structured_logging();
        init_with_config(&LoggingConfig {
            level: Some("trace".to_string()),
            json: true,
        });
    }
}

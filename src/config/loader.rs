//! Configuration Loader
//!
//! Environment-aware configuration loading. Layers, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. `<dir>/health-view.{toml,yaml,json}`
//! 3. `<dir>/environments/<environment>.{toml,yaml,json}`
//! 4. `HEALTH_VIEW__*` environment variables (`__` separates nested keys)
//!
//! Every file is optional. The merged result is validated before it is
//! returned.

use super::error::{ConfigResult, ConfigurationError};
use super::HealthViewConfig;
use crate::constants::env;
use config::{Config, Environment, File};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

const BASE_FILE_STEM: &str = "health-view";
const ENVIRONMENTS_DIR: &str = "environments";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with environment auto-detection
    pub fn load() -> ConfigResult<HealthViewConfig> {
        Self::load_from_directory(None)
    }

    /// Load configuration from a specific directory
    pub fn load_from_directory(config_dir: Option<PathBuf>) -> ConfigResult<HealthViewConfig> {
        let environment = Self::detect_environment();
        Self::load_from_directory_with_env(config_dir, &environment)
    }

    /// Load configuration from a specific directory with explicit environment
    pub fn load_from_directory_with_env(
        config_dir: Option<PathBuf>,
        environment: &str,
    ) -> ConfigResult<HealthViewConfig> {
        let config_directory = config_dir.unwrap_or_else(Self::default_config_directory);
        Self::build(&config_directory, environment, None)
    }

    /// Same as [`Self::load_from_directory_with_env`] but reads overrides from
    /// `vars` instead of the process environment
    pub fn load_with_env_vars(
        config_dir: &Path,
        environment: &str,
        vars: HashMap<String, String>,
    ) -> ConfigResult<HealthViewConfig> {
        Self::build(config_dir, environment, Some(vars))
    }

    /// Load a single explicit file; the file must exist
    pub fn load_file(path: &Path) -> ConfigResult<HealthViewConfig> {
        let source_name = path.display().to_string();
        let config = Config::builder()
            .add_source(File::from(path).required(true))
            .build()
            .map_err(|e| ConfigurationError::load_failed(&source_name, e))?
            .try_deserialize::<HealthViewConfig>()
            .map_err(|e| ConfigurationError::load_failed(&source_name, e))?;

        config.validate()?;
        Ok(config)
    }

    /// Current environment from `HEALTH_VIEW_ENV`, then `APP_ENV`
    pub fn detect_environment() -> String {
        std::env::var(env::ENVIRONMENT)
            .or_else(|_| std::env::var(env::APP_ENVIRONMENT))
            .unwrap_or_else(|_| env::DEFAULT_ENVIRONMENT.to_string())
    }

    fn default_config_directory() -> PathBuf {
        PathBuf::from("config")
    }

    fn build(
        config_directory: &Path,
        environment: &str,
        vars: Option<HashMap<String, String>>,
    ) -> ConfigResult<HealthViewConfig> {
        debug!(
            "Loading configuration for environment '{}' from directory: {}",
            environment,
            config_directory.display()
        );

        let base = config_directory.join(BASE_FILE_STEM);
        let overrides = config_directory.join(ENVIRONMENTS_DIR).join(environment);

        let mut env_source = Environment::with_prefix(env::CONFIG_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("layout.columns");
        if vars.is_some() {
            env_source = env_source.source(vars);
        }

        let source_name = config_directory.display().to_string();
        let config = Config::builder()
            .add_source(File::with_name(&base.to_string_lossy()).required(false))
            .add_source(File::with_name(&overrides.to_string_lossy()).required(false))
            .add_source(env_source)
            .build()
            .map_err(|e| ConfigurationError::load_failed(&source_name, e))?
            .try_deserialize::<HealthViewConfig>()
            .map_err(|e| ConfigurationError::load_failed(&source_name, e))?;

        config.validate()?;

        debug!(
            environment,
            columns = ?config.layout.columns,
            name_filter = %config.default_query.name_filter,
            status_filter = %config.default_query.status_filter,
            "Configuration loaded successfully"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_yields_defaults() {
        let config = ConfigLoader::load_with_env_vars(
            Path::new("does/not/exist"),
            "test",
            HashMap::new(),
        )
        .unwrap();
        assert_eq!(config, HealthViewConfig::default());
    }

    #[test]
    fn test_env_vars_override_defaults() {
        let vars = HashMap::from([
            (
                "HEALTH_VIEW__DEFAULT_QUERY__STATUS_FILTER".to_string(),
                "critical".to_string(),
            ),
            ("HEALTH_VIEW__LOGGING__JSON".to_string(), "true".to_string()),
        ]);
        let config =
            ConfigLoader::load_with_env_vars(Path::new("does/not/exist"), "test", vars).unwrap();

        assert_eq!(config.default_query.status_filter, "critical");
        assert!(config.logging.json);
    }
}

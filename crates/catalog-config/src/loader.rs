//! Configuration loader with layered sources.

use crate::validation::{format_validation_errors, ConfigValidator};
use crate::{AppConfig, DEFAULT_API_TOKEN};
use catalog_core::CatalogError;
use config::{Config, ConfigError, Environment, File};
use std::path::Path;
use tracing::{debug, info, warn};

/// Environment variable selecting the `config/{environment}.toml` layer.
pub const ENVIRONMENT_VAR: &str = "CATALOG_ENVIRONMENT";

/// Configuration loader with layered sources.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables such as `CATALOG__REDIS__ENABLED=false`
    pub fn new(config_dir: impl Into<String>) -> Result<Self, CatalogError> {
        let config_dir = config_dir.into();
        let environment =
            std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string());
        let config = Self::load_config(&config_dir, &environment)?;

        Ok(Self { config })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, CatalogError> {
        Self::new("./config")
    }

    /// Consumes the loader, returning the loaded configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    fn load_config(config_dir: &str, environment: &str) -> Result<AppConfig, CatalogError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder()
            .set_default("app.environment", environment)
            .map_err(config_error_to_catalog_error)?;

        for layer in ["default", environment, "local"] {
            let path = format!("{config_dir}/{layer}.toml");
            if Path::new(&path).exists() {
                debug!("Loading config layer from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("CATALOG")
                .separator("__")
                .try_parsing(true),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(Config::try_deserialize::<AppConfig>)
            .map_err(config_error_to_catalog_error)?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    fn validate_config(config: &AppConfig) -> Result<(), CatalogError> {
        if config.app.is_production() && config.security.api_token == DEFAULT_API_TOKEN {
            warn!("Using the default API token in production! This is a security risk.");
        }

        ConfigValidator::validate(config)
            .map_err(|errors| CatalogError::Configuration(format_validation_errors(&errors)))
    }
}

fn config_error_to_catalog_error(err: ConfigError) -> CatalogError {
    CatalogError::Configuration(err.to_string())
}

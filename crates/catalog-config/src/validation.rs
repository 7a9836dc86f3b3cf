//! Configuration validation.
//!
//! Collects every problem in one pass so a misconfigured deployment fails
//! at startup with the full list.

use crate::AppConfig;
use std::fmt;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Port number is invalid (must be 1-65535).
    InvalidPort { value: u16 },
    /// Pool size configuration is invalid (min must be <= max).
    InvalidPoolSize { min: u32, max: u32 },
    /// URL format is invalid.
    InvalidUrl { url_type: String, message: String },
    /// Timeout or lifetime must be positive.
    NonPositiveTimeout { name: String },
    /// Disk cache directory is empty.
    EmptyCacheDirectory,
    /// Bearer token is empty.
    EmptyApiToken,
    /// Log level is invalid.
    InvalidLogLevel { value: String },
    /// Log format is invalid.
    InvalidLogFormat { value: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort { value } => {
                write!(f, "Invalid server port: {value} (must be 1-65535)")
            }
            Self::InvalidPoolSize { min, max } => {
                write!(
                    f,
                    "Invalid pool size: min ({min}) cannot be greater than max ({max})"
                )
            }
            Self::InvalidUrl { url_type, message } => {
                write!(f, "Invalid {url_type} URL: {message}")
            }
            Self::NonPositiveTimeout { name } => write!(f, "{name} must be greater than zero"),
            Self::EmptyCacheDirectory => write!(f, "cache.directory cannot be empty"),
            Self::EmptyApiToken => write!(f, "security.api_token cannot be empty"),
            Self::InvalidLogLevel { value } => {
                write!(
                    f,
                    "Invalid log level: '{value}' (valid: trace, debug, info, warn, error)"
                )
            }
            Self::InvalidLogFormat { value } => {
                write!(f, "Invalid log format: '{value}' (valid: pretty, json)")
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];
    const VALID_LOG_FORMATS: &'static [&'static str] = &["pretty", "json"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_server(config, &mut errors);
        Self::validate_database(config, &mut errors);
        Self::validate_redis(config, &mut errors);
        Self::validate_cache(config, &mut errors);
        Self::validate_security(config, &mut errors);
        Self::validate_observability(config, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.server.port == 0 {
            errors.push(ConfigValidationError::InvalidPort { value: 0 });
        }
        if config.server.request_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "server.request_timeout_secs".to_string(),
            });
        }
    }

    fn validate_database(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        let database = &config.database;
        if database.url.is_empty() {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        } else if !database.url.starts_with("mysql://") {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL must start with mysql://".to_string(),
            });
        }

        if database.min_connections > database.max_connections {
            errors.push(ConfigValidationError::InvalidPoolSize {
                min: database.min_connections,
                max: database.max_connections,
            });
        }
        if database.connect_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "database.connect_timeout_secs".to_string(),
            });
        }
    }

    fn validate_redis(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        let redis = &config.redis;
        if !redis.enabled {
            return;
        }

        if !redis.url.starts_with("redis://") && !redis.url.starts_with("rediss://") {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "redis".to_string(),
                message: "URL must start with redis:// or rediss://".to_string(),
            });
        }
        if redis.probe_timeout_ms == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "redis.probe_timeout_ms".to_string(),
            });
        }
    }

    fn validate_cache(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.cache.directory.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyCacheDirectory);
        }
        if config.cache.ttl_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "cache.ttl_secs".to_string(),
            });
        }
    }

    fn validate_security(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.security.api_token.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyApiToken);
        }
    }

    fn validate_observability(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        let level = config.observability.log_level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.observability.log_level.clone(),
            });
        }

        let format = config.observability.log_format.to_lowercase();
        if !Self::VALID_LOG_FORMATS.contains(&format.as_str()) {
            errors.push(ConfigValidationError::InvalidLogFormat {
                value: config.observability.log_format.clone(),
            });
        }
    }
}

/// Formats validation errors for display.
#[must_use]
pub fn format_validation_errors(errors: &[ConfigValidationError]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, error) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, error));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes() {
        assert!(ConfigValidator::validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_cache_ttl_rejected() {
        let mut config = AppConfig::default();
        config.cache.ttl_secs = 0;

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ConfigValidationError::NonPositiveTimeout {
                name: "cache.ttl_secs".to_string()
            }]
        );
    }

    #[test]
    fn test_empty_cache_directory_rejected() {
        let mut config = AppConfig::default();
        config.cache.directory = "  ".to_string();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(errors.contains(&ConfigValidationError::EmptyCacheDirectory));
    }

    #[test]
    fn test_redis_checks_skipped_when_disabled() {
        let mut config = AppConfig::default();
        config.redis.url = "not-a-url".to_string();
        config.redis.probe_timeout_ms = 0;
        assert!(ConfigValidator::validate(&config).is_err());

        config.redis.enabled = false;
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_invalid_database_url() {
        let mut config = AppConfig::default();
        config.database.url = "postgres://localhost/catalog".to_string();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(errors[0], ConfigValidationError::InvalidUrl { .. }));
    }

    #[test]
    fn test_multiple_errors() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        config.database.min_connections = 100;
        config.observability.log_level = "verbose".to_string();
        config.security.api_token = String::new();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors.len(), 4);

        let output = format_validation_errors(&errors);
        assert!(output.contains("Invalid server port"));
        assert!(output.contains("Invalid log level: 'verbose'"));
        assert!(output.contains("  3. security.api_token cannot be empty"));
    }
}

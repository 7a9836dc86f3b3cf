//! Logging initialization.

use catalog_config::ObservabilityConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the log filter. `RUST_LOG` wins over the configured level.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=debug", config.log_level)))
}

/// Installs the global subscriber, pretty or JSON depending on `log_format`.
pub fn init_logging(
    config: &ObservabilityConfig,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let registry = tracing_subscriber::registry().with(build_filter(config));

    if config.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_uses_configured_level() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = ObservabilityConfig {
            log_level: "warn".to_string(),
            log_format: "pretty".to_string(),
        };
        assert!(build_filter(&config).to_string().contains("warn"));
    }
}

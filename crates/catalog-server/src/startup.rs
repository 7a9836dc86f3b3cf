//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
   ______      __        __
  / ____/___ _/ /_____ _/ /___  ____ _
 / /   / __ `/ __/ __ `/ / __ \/ __ `/
/ /___/ /_/ / /_/ /_/ / / /_/ / /_/ /
\____/\__,_/\__/\__,_/_/\____/\__, /
                             /____/
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(addr: &str, cache_backend: &str) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}/api/v1", addr);
    info!("Health:    http://{}/health", addr);
    info!("API Docs:  http://{}/api-docs/openapi.json", addr);
    info!("Cache:     {}", cache_backend);
    info!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_banner_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_banner();
    }

    #[test]
    fn test_print_startup_info_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_startup_info("0.0.0.0:8080", "file");
    }
}

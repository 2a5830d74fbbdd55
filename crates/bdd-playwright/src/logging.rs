//! Structured logging with environment variable configuration.
//!
//! Diagnostics go to stderr so the run report on stdout stays readable.

use tracing_subscriber::EnvFilter;

use crate::config::GeneratorConfig;

fn filter_from_config(config: &GeneratorConfig) -> EnvFilter {
    EnvFilter::default().add_directive(config.log_level.level_filter().into())
}

/// Initialise the logging subsystem based on configuration.
///
/// Log level precedence (highest to lowest):
///
/// 1. `BDD_PLAYWRIGHT_LOG_LEVEL` (parsed into `config.log_level`)
/// 2. Default configuration value
///
/// If a global subscriber is already set, the error is ignored; the first
/// subscriber wins.
pub fn init_logging(config: &GeneratorConfig) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn init_logging_is_idempotent() {
        let config = GeneratorConfig::new(".");
        init_logging(&config);
        init_logging(&config);
    }

    #[test]
    fn filter_uses_config_log_level() {
        let config = GeneratorConfig::new(".").with_log_level(LogLevel::Warn);
        let filter = filter_from_config(&config).to_string();
        assert_eq!(filter.to_ascii_lowercase(), "warn");
    }
}

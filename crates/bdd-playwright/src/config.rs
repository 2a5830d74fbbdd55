//! Generator configuration parsed from environment variables.
//!
//! The input (`features/`) and output (`tests/`) directories are fixed names
//! below a root directory. The root defaults to the current working directory
//! and, like the log level, can be overridden via environment variables
//! prefixed with `BDD_PLAYWRIGHT_`.

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::level_filters::LevelFilter;

use crate::error::GeneratorError;

/// Directory holding the `.feature` documents, relative to the root.
pub const FEATURES_DIR_NAME: &str = "features";
/// Directory receiving the generated test modules, relative to the root.
pub const TESTS_DIR_NAME: &str = "tests";
/// Extension of recognised input documents.
pub const FEATURE_EXTENSION: &str = "feature";
/// Suffix appended to a document's base name to form the output file name.
pub const OUTPUT_SUFFIX: &str = ".spec.js";

const ROOT_VAR: &str = "BDD_PLAYWRIGHT_ROOT";
const LOG_LEVEL_VAR: &str = "BDD_PLAYWRIGHT_LOG_LEVEL";

/// Verbosity of the diagnostics written to stderr.
///
/// Defaults to `Info`, which reports each generated or skipped document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Every classified step and dropped line.
    Trace,
    /// Per-step translation results.
    Debug,
    /// One line per generated document.
    #[default]
    Info,
    /// Skipped documents only.
    Warn,
    /// Per-document failures only.
    Error,
}

impl LogLevel {
    const NAMES: [(Self, &'static str); 5] = [
        (Self::Trace, "trace"),
        (Self::Debug, "debug"),
        (Self::Info, "info"),
        (Self::Warn, "warn"),
        (Self::Error, "error"),
    ];

    /// Lower-case name accepted by `BDD_PLAYWRIGHT_LOG_LEVEL`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        Self::NAMES
            .into_iter()
            .find_map(|(level, name)| (level == self).then_some(name))
            .unwrap_or("info")
    }

    /// The matching `tracing` level filter.
    #[must_use]
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Trace => LevelFilter::TRACE,
            Self::Debug => LevelFilter::DEBUG,
            Self::Info => LevelFilter::INFO,
            Self::Warn => LevelFilter::WARN,
            Self::Error => LevelFilter::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = GeneratorError;

    /// Parse a level name, ignoring case and surrounding whitespace. `warning`
    /// is accepted as an alias for `warn`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("warning") {
            return Ok(Self::Warn);
        }
        Self::NAMES
            .into_iter()
            .find_map(|(level, name)| name.eq_ignore_ascii_case(wanted).then_some(level))
            .ok_or_else(|| {
                GeneratorError::InvalidConfig(format!(
                    "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
                ))
            })
    }
}

/// Configuration for a generation run.
///
/// # Environment Variables
///
/// - `BDD_PLAYWRIGHT_ROOT`: directory containing `features/` and `tests/`
/// - `BDD_PLAYWRIGHT_LOG_LEVEL`: log level (trace, debug, info, warn, error)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory scanned for `.feature` documents.
    pub features_dir: PathBuf,
    /// Directory receiving generated `.spec.js` files.
    pub tests_dir: PathBuf,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: LogLevel,
}

impl GeneratorConfig {
    /// Create a configuration rooted at `root` with the default log level.
    #[must_use]
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            features_dir: root.join(FEATURES_DIR_NAME),
            tests_dir: root.join(TESTS_DIR_NAME),
            log_level: LogLevel::default(),
        }
    }

    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::InvalidConfig` if a variable holds an invalid
    /// value or the working directory cannot be determined.
    pub fn from_env() -> Result<Self, GeneratorError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Missing variables fall back to defaults; an empty root is treated as
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::InvalidConfig` if a variable holds an invalid
    /// value or the working directory cannot be determined.
    pub fn from_vars<F>(lookup: F) -> Result<Self, GeneratorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let root = match lookup(ROOT_VAR).filter(|value| !value.is_empty()) {
            Some(value) => PathBuf::from(value),
            None => env::current_dir().map_err(|e| {
                GeneratorError::InvalidConfig(format!("cannot determine working directory: {e}"))
            })?,
        };
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(value) => value.parse()?,
            None => LogLevel::default(),
        };
        Ok(Self::new(root).with_log_level(log_level))
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("debug", LogLevel::Debug)]
    #[case("INFO", LogLevel::Info)]
    #[case("Warning", LogLevel::Warn)]
    #[case(" error ", LogLevel::Error)]
    fn log_level_parses_case_insensitively(#[case] input: &str, #[case] expected: LogLevel) {
        assert_eq!(input.parse::<LogLevel>().ok(), Some(expected));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let result = "loud".parse::<LogLevel>();
        assert!(result.expect_err("invalid level").to_string().contains("unknown log level"));
    }

    #[rstest]
    #[case(LogLevel::Trace, LevelFilter::TRACE)]
    #[case(LogLevel::Info, LevelFilter::INFO)]
    #[case(LogLevel::Error, LevelFilter::ERROR)]
    fn log_level_maps_to_level_filter(#[case] level: LogLevel, #[case] expected: LevelFilter) {
        assert_eq!(level.level_filter(), expected);
        assert_eq!(level.as_str().parse::<LogLevel>().ok(), Some(level));
    }

    #[test]
    fn new_places_directories_below_root() {
        let config = GeneratorConfig::new("/work");
        assert_eq!(config.features_dir, PathBuf::from("/work/features"));
        assert_eq!(config.tests_dir, PathBuf::from("/work/tests"));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn from_vars_reads_root_and_level() {
        let config = GeneratorConfig::from_vars(|key| match key {
            "BDD_PLAYWRIGHT_ROOT" => Some("/srv/site".into()),
            "BDD_PLAYWRIGHT_LOG_LEVEL" => Some("debug".into()),
            _ => None,
        })
        .expect("valid configuration");
        assert_eq!(config, GeneratorConfig::new("/srv/site").with_log_level(LogLevel::Debug));
    }

    #[test]
    fn from_vars_defaults_to_working_directory() {
        let config = GeneratorConfig::from_vars(|_| None).expect("default configuration");
        let cwd = env::current_dir().expect("working directory");
        assert_eq!(config, GeneratorConfig::new(cwd));
    }

    #[test]
    fn from_vars_rejects_bad_level() {
        let result = GeneratorConfig::from_vars(|key| {
            (key == "BDD_PLAYWRIGHT_LOG_LEVEL").then(|| "chatty".to_string())
        });
        assert!(matches!(result, Err(GeneratorError::InvalidConfig(_))));
    }
}

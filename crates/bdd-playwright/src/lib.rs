//! Generate Playwright test skeletons from Given/When/Then feature files.
//!
//! Each `.feature` document in `features/` is reduced to a [`Feature`]
//! (title, description, scenarios and their step lines). Every step is then
//! translated by the ordered rules in [`bdd_playwright_steps`] and the result
//! is written to `tests/<name>.spec.js`.
//!
//! # Overview
//!
//! - [`feature`] extracts features with a line-by-line keyword matcher
//! - [`emit`] renders the Playwright test module
//! - [`discovery`] selects input documents and names outputs
//! - [`generate`] runs the batch with per-document error isolation
//! - [`report`] prints the run summary
//!
//! # Configuration
//!
//! - `BDD_PLAYWRIGHT_ROOT`: directory containing `features/` and `tests/`
//!   (defaults to the working directory)
//! - `BDD_PLAYWRIGHT_LOG_LEVEL`: log verbosity (trace, debug, info, warn,
//!   error)
//!
//! # Example
//!
//! ```no_run
//! use bdd_playwright::config::GeneratorConfig;
//! use bdd_playwright::generate::run;
//!
//! let config = GeneratorConfig::from_env()?;
//! let summary = run(&config, None)?;
//! assert_eq!(summary.failures.len(), 0);
//! # Ok::<(), bdd_playwright::error::GeneratorError>(())
//! ```
//!
//! [`Feature`]: feature::Feature

pub mod config;
pub mod discovery;
pub mod emit;
pub mod error;
pub mod feature;
pub mod generate;
pub mod logging;
pub mod report;

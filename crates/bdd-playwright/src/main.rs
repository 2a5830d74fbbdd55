//! Command line entrypoint for bdd-playwright.
//!
//! Reads `.feature` documents from `features/` and writes Playwright test
//! modules to `tests/`. With a file name argument only that document is
//! processed.

use std::io::{self, Write};

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use bdd_playwright::config::GeneratorConfig;
use bdd_playwright::generate::run;
use bdd_playwright::logging::init_logging;
use bdd_playwright::report::write_summary;

/// Generate Playwright test skeletons from Given/When/Then feature files.
#[derive(Parser, Debug)]
#[command(name = "bdd-playwright", version, about)]
struct Args {
    /// Feature file inside `features/` to process; all files when omitted.
    feature: Option<String>,
}

fn main() {
    let args = Args::parse();

    let config = match GeneratorConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&GeneratorConfig::new("."));
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        features = %config.features_dir.display(),
        tests = %config.tests_dir.display(),
        log_level = config.log_level.as_str(),
        "starting bdd-playwright"
    );

    if let Err(e) = generate(&config, args.feature.as_deref()) {
        tracing::error!(error = ?e, "generation failed");
        std::process::exit(1);
    }
}

fn generate(config: &GeneratorConfig, target: Option<&str>) -> Result<()> {
    let summary = run(config, target).wrap_err("generation run aborted")?;
    let mut stdout = io::stdout();
    write_summary(&mut stdout, &summary).wrap_err("failed to write run summary")?;
    stdout.flush().wrap_err("failed to flush run summary")
}

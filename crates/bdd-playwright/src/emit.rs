//! Playwright test-module emission.
//!
//! One `test.describe` group wraps the feature and each scenario becomes a
//! `test(...)` case holding the translated blocks of its steps.

use std::fmt::{self, Write};

use bdd_playwright_steps::{translate, write_js_string_content};

use crate::feature::{Feature, Scenario};

const MODULE_HEADER: &str = "import { test, expect } from '@playwright/test';\n\n";

/// Render the test module for `feature` into a new string.
///
/// # Examples
/// ```
/// use bdd_playwright::emit::render_feature;
/// use bdd_playwright::feature::extract_feature;
///
/// let module = render_feature(&extract_feature("Feature: F\nScenario: S\nWhen I wait\n"));
/// assert!(module.starts_with("import { test, expect } from '@playwright/test';"));
/// assert!(module.contains("  test('S', async ({ page }) => {\n"));
/// ```
#[must_use]
pub fn render_feature(feature: &Feature) -> String {
    let mut out = String::new();
    // Writing into a String only fails if a Display impl errors, which ours never do.
    let _ = write_feature(&mut out, feature);
    out
}

/// Write the test module for `feature`.
///
/// Emission does not check [`Feature::is_emittable`]; callers gate on it.
///
/// # Errors
/// Returns an error if writing to `writer` fails.
pub fn write_feature<W: Write>(writer: &mut W, feature: &Feature) -> fmt::Result {
    writer.write_str(MODULE_HEADER)?;
    writer.write_str("test.describe('")?;
    write_js_string_content(writer, &feature.title)?;
    writer.write_str("', () => {\n")?;
    for scenario in &feature.scenarios {
        write_scenario(writer, scenario)?;
    }
    writer.write_str("});\n")
}

fn write_scenario<W: Write>(writer: &mut W, scenario: &Scenario) -> fmt::Result {
    writer.write_str("  test('")?;
    write_js_string_content(writer, &scenario.name)?;
    writer.write_str("', async ({ page }) => {\n")?;
    for step in &scenario.steps {
        translate(step).write_to(writer)?;
    }
    writer.write_str("  });\n\n")
}

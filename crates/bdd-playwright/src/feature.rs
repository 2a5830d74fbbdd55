//! Line-oriented extraction of features and scenarios from `.feature` text.
//!
//! This is a keyword matcher, not a Gherkin parser: each trimmed line is
//! inspected in isolation and anything unrecognised is either folded into the
//! description or dropped. Extraction never fails.

use std::path::Path;

use bdd_playwright_steps::StepKeyword;
use tracing::trace;

use crate::error::DocumentError;

const COMMENT_PREFIX: &str = "#";
const FEATURE_PREFIX: &str = "Feature:";
const SCENARIO_PREFIX: &str = "Scenario:";

/// A named scenario and its step lines in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Scenario name following `Scenario:`.
    pub name: String,
    /// Full step lines, keyword included.
    pub steps: Vec<String>,
}

/// The result of extracting one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feature {
    /// Title following the first non-empty `Feature:` line.
    pub title: String,
    /// Free text found before the title, joined by single spaces.
    pub description: String,
    /// Scenarios in source order.
    pub scenarios: Vec<Scenario>,
}

impl Feature {
    /// Whether the feature can be turned into a test module: it needs a
    /// title and at least one scenario.
    #[must_use]
    pub fn is_emittable(&self) -> bool {
        !self.title.is_empty() && !self.scenarios.is_empty()
    }

    /// Total number of step lines across all scenarios.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.scenarios.iter().map(|s| s.steps.len()).sum()
    }
}

#[derive(Clone, Copy, Debug)]
enum LineKind<'a> {
    Skip,
    Title(&'a str),
    Scenario(&'a str),
    Step(StepKeyword),
    Other,
}

fn classify_line(line: &str) -> LineKind<'_> {
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return LineKind::Skip;
    }
    if let Some(rest) = line.strip_prefix(FEATURE_PREFIX) {
        return LineKind::Title(rest.trim());
    }
    if let Some(rest) = line.strip_prefix(SCENARIO_PREFIX) {
        return LineKind::Scenario(rest.trim());
    }
    StepKeyword::from_line(line).map_or(LineKind::Other, LineKind::Step)
}

/// Extract the title, description and scenarios from document text.
///
/// # Examples
/// ```
/// use bdd_playwright::feature::extract_feature;
///
/// let feature = extract_feature(
///     "Feature: Login\nScenario: Valid login\nGiven I am on \"https://example.com\"\n",
/// );
/// assert_eq!(feature.title, "Login");
/// assert_eq!(feature.scenarios[0].steps, ["Given I am on \"https://example.com\""]);
/// ```
#[must_use]
pub fn extract_feature(text: &str) -> Feature {
    let mut feature = Feature::default();
    let mut description: Vec<&str> = Vec::new();
    let mut open: Option<Scenario> = None;

    for line in text.lines().map(str::trim) {
        match classify_line(line) {
            LineKind::Skip => {}
            LineKind::Title(title) => {
                if feature.title.is_empty() {
                    feature.title = title.to_string();
                }
            }
            LineKind::Scenario(name) => {
                feature.scenarios.extend(open.take());
                open = Some(Scenario {
                    name: name.to_string(),
                    steps: Vec::new(),
                });
            }
            LineKind::Step(keyword) => {
                let Some(scenario) = open.as_mut() else {
                    trace!(%keyword, line, "dropping step outside a scenario");
                    continue;
                };
                scenario.steps.push(line.to_string());
            }
            LineKind::Other => {
                if feature.title.is_empty() {
                    description.push(line);
                }
            }
        }
    }
    feature.scenarios.extend(open);
    feature.description = description.join(" ");
    feature
}

/// Read a feature document from disk and extract it.
///
/// # Errors
///
/// Returns [`DocumentError::Read`] when the file cannot be read as UTF-8.
pub fn read_feature_file(path: &Path) -> Result<Feature, DocumentError> {
    let text = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_feature(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn scenario(name: &str, steps: &[&str]) -> Scenario {
        Scenario {
            name: name.to_string(),
            steps: steps.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn extracts_login_feature() {
        let feature = extract_feature(concat!(
            "Feature: Login\n",
            "Scenario: Valid login\n",
            "Given I am on \"https://example.com\"\n",
            "When I enter \"test@x.com\" in the email field\n",
            "Then I should see \"Welcome\"",
        ));
        assert_eq!(feature.title, "Login");
        assert_eq!(
            feature.scenarios,
            vec![scenario(
                "Valid login",
                &[
                    "Given I am on \"https://example.com\"",
                    "When I enter \"test@x.com\" in the email field",
                    "Then I should see \"Welcome\"",
                ]
            )]
        );
    }

    #[test]
    fn keeps_scenarios_and_steps_in_source_order() {
        let feature = extract_feature(concat!(
            "Feature: Ordering\n",
            "  Scenario: first\n",
            "    Given a\n",
            "    And b\n",
            "  Scenario: second\n",
            "    When c\n",
            "    But d\n",
            "    Then e\n",
        ));
        assert_eq!(
            feature.scenarios,
            vec![
                scenario("first", &["Given a", "And b"]),
                scenario("second", &["When c", "But d", "Then e"]),
            ]
        );
        assert_eq!(feature.step_count(), 5);
    }

    #[test]
    fn first_non_empty_title_wins() {
        let feature = extract_feature("Feature:\nFeature: One\nFeature: Two\nScenario: s\n");
        assert_eq!(feature.title, "One");
    }

    #[test]
    fn collects_description_before_title_only() {
        let feature = extract_feature(concat!(
            "  As a user  \n",
            "I want to log in\n",
            "Feature: Login\n",
            "So that I can work\n",
            "Scenario: s\n",
            "Given x\n",
            "some stray prose\n",
        ));
        assert_eq!(feature.description, "As a user I want to log in");
        assert_eq!(feature.scenarios, vec![scenario("s", &["Given x"])]);
    }

    #[test]
    fn drops_steps_before_first_scenario() {
        let feature = extract_feature("Feature: f\nGiven orphan\nScenario: s\nThen kept\n");
        assert_eq!(feature.scenarios, vec![scenario("s", &["Then kept"])]);
        assert!(feature.description.is_empty());
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let feature = extract_feature(concat!(
            "# leading comment\n",
            "\n",
            "Feature: f\n",
            "Scenario: s\n",
            "  # Given commented out\n",
            "\n",
            "  Given real\n",
        ));
        assert_eq!(feature.scenarios, vec![scenario("s", &["Given real"])]);
    }

    #[test]
    fn scenario_without_steps_is_kept() {
        let feature = extract_feature("Feature: f\nScenario: empty\nScenario: full\nGiven x\n");
        assert_eq!(
            feature.scenarios,
            vec![scenario("empty", &[]), scenario("full", &["Given x"])]
        );
        assert!(feature.is_emittable());
    }

    #[rstest]
    #[case("Scenario: s\nGiven x\n", false)]
    #[case("Feature: f\n", false)]
    #[case("Feature: f\nScenario: s\n", true)]
    #[case("", false)]
    fn emittable_requires_title_and_scenarios(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(extract_feature(text).is_emittable(), expected);
    }

    #[rstest]
    #[case("given lowercase keyword")]
    #[case("Givenno space")]
    #[case("Scenario Outline: not supported")]
    #[case("Examples:")]
    fn ignores_non_step_lines_inside_scenario(#[case] line: &str) {
        let feature = extract_feature(&format!("Feature: f\nScenario: s\n{line}\n"));
        assert_eq!(feature.scenarios, vec![scenario("s", &[])]);
    }

    #[test]
    fn passes_unicode_and_quotes_through() {
        let feature = extract_feature(
            "Feature: Café ☕\r\nScenario: «quoted» \"name\"\r\nWhen I type \"naïve\"\r\n",
        );
        assert_eq!(feature.title, "Café ☕");
        assert_eq!(
            feature.scenarios,
            vec![scenario("«quoted» \"name\"", &["When I type \"naïve\""])]
        );
    }
}

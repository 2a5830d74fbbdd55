//! End-to-end tests for the generation pipeline on a scratch directory.
#![expect(clippy::expect_used, reason = "tests use descriptive panics")]

use std::fs;
use std::path::Path;

use bdd_playwright::config::GeneratorConfig;
use bdd_playwright::generate::{DocumentOutcome, run};
use rstest::{fixture, rstest};
use tempfile::TempDir;

const LOGIN: &str = concat!(
    "Feature: Login\n",
    "Scenario: Valid login\n",
    "Given I am on \"https://example.com\"\n",
    "When I enter \"test@x.com\" in the email field\n",
    "Then I should see \"Welcome\"",
);

const CHECKOUT: &str = concat!(
    "# Checkout flows\n",
    "As a shopper I want to pay\n",
    "Feature: Checkout\n",
    "\n",
    "  Scenario: Pay by card\n",
    "    Given I open \"https://shop.test/cart\"\n",
    "    When I fill the \"Card\" field with \"4242\"\n",
    "    And I click \"Pay now\"\n",
    "    And I wait for the confirmation\n",
    "    Then the receipt appears\n",
    "    And I should be on the receipt page\n",
    "\n",
    "  Scenario: Empty basket\n",
    "\n",
    "  Scenario: Search products\n",
    "    When I search for \"socks\"\n",
    "    Then a friendly robot waves\n",
);

struct Project {
    dir: TempDir,
}

impl Project {
    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn config(&self) -> GeneratorConfig {
        GeneratorConfig::new(self.root())
    }

    fn add_feature(&self, name: &str, text: &str) {
        let dir = self.root().join("features");
        fs::create_dir_all(&dir).expect("create features dir");
        fs::write(dir.join(name), text).expect("write feature");
    }

    fn output(&self, name: &str) -> String {
        fs::read_to_string(self.root().join("tests").join(name)).expect("read output")
    }

    fn has_output(&self, name: &str) -> bool {
        self.root().join("tests").join(name).exists()
    }
}

#[fixture]
fn project() -> Project {
    Project {
        dir: tempfile::tempdir().expect("temp dir"),
    }
}

#[rstest]
fn login_feature_generates_expected_module(project: Project) {
    project.add_feature("login.feature", LOGIN);
    let summary = run(&project.config(), None).expect("run");
    assert_eq!(summary.generated(), 1);

    let module = project.output("login.spec.js");
    assert_eq!(module.matches("  test('").count(), 1);
    assert!(module.contains("  test('Valid login', async ({ page }) => {\n"));
    let actions: Vec<_> = module
        .lines()
        .filter(|line| line.starts_with("    await "))
        .collect();
    assert_eq!(
        actions,
        [
            "    await page.goto('https://example.com');",
            "    await page.fill('input[type=\"email\"]', 'test@x.com');",
            "    await expect(page).toContainText('Welcome');",
        ]
    );
}

#[rstest]
fn every_step_is_traceable_in_order(project: Project) {
    project.add_feature("checkout.feature", CHECKOUT);
    run(&project.config(), None).expect("run");
    let module = project.output("checkout.spec.js");

    let cases: Vec<_> = module
        .lines()
        .filter_map(|line| line.strip_prefix("  test('"))
        .filter_map(|rest| rest.split_once('\'').map(|(name, _)| name))
        .collect();
    assert_eq!(cases, ["Pay by card", "Empty basket", "Search products"]);

    let comments: Vec<_> = module
        .lines()
        .filter_map(|line| line.strip_prefix("    // "))
        .filter(|text| !text.starts_with("TODO"))
        .collect();
    let steps: Vec<_> = CHECKOUT
        .lines()
        .map(str::trim)
        .filter(|line| {
            ["Given ", "When ", "Then ", "And ", "But "]
                .iter()
                .any(|kw| line.starts_with(kw))
        })
        .collect();
    assert_eq!(comments, steps);
    assert!(module.contains("  test('Empty basket', async ({ page }) => {\n  });\n"));
    let fallback = "    // Then a friendly robot waves\n    // TODO: Implement this step\n";
    assert!(module.contains(fallback));
}

#[rstest]
fn rerun_produces_identical_output(project: Project) {
    project.add_feature("checkout.feature", CHECKOUT);
    run(&project.config(), None).expect("first run");
    let first = project.output("checkout.spec.js");
    run(&project.config(), None).expect("second run");
    assert_eq!(project.output("checkout.spec.js"), first);
}

#[rstest]
fn existing_output_is_overwritten(project: Project) {
    project.add_feature("login.feature", LOGIN);
    fs::create_dir_all(project.root().join("tests")).expect("create tests dir");
    fs::write(project.root().join("tests/login.spec.js"), "stale").expect("write stale");
    run(&project.config(), None).expect("run");
    assert!(project.output("login.spec.js").starts_with("import { test, expect }"));
}

#[rstest]
#[case::title_without_scenarios("Feature: Lonely\n")]
#[case::scenarios_without_title("Scenario: s\nGiven I am on \"x\"\n")]
#[case::comments_only("# nothing here\n\n")]
fn invalid_documents_produce_no_output(project: Project, #[case] text: &str) {
    project.add_feature("invalid.feature", text);
    let summary = run(&project.config(), None).expect("run");
    assert!(matches!(
        summary.outcomes.as_slice(),
        [DocumentOutcome::Skipped { .. }]
    ));
    assert!(!project.has_output("invalid.spec.js"));
}

#[rstest]
fn target_limits_run_to_one_document(project: Project) {
    project.add_feature("login.feature", LOGIN);
    project.add_feature("checkout.feature", CHECKOUT);
    let summary = run(&project.config(), Some("login.feature")).expect("run");
    assert_eq!(summary.documents(), 1);
    assert!(project.has_output("login.spec.js"));
    assert!(!project.has_output("checkout.spec.js"));
}

#[rstest]
fn non_feature_files_are_ignored(project: Project) {
    project.add_feature("notes.txt", LOGIN);
    let summary = run(&project.config(), None).expect("run");
    assert_eq!(summary.documents(), 0);
    assert!(!summary.created_input_dir);
}

#[rstest]
fn unreadable_document_does_not_block_others(project: Project) {
    project.add_feature("a_binary.feature", "");
    fs::write(
        project.root().join("features/a_binary.feature"),
        [0xff_u8, 0xfe, 0x00],
    )
    .expect("write binary");
    project.add_feature("login.feature", LOGIN);

    let summary = run(&project.config(), None).expect("run");
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.generated(), 1);
    assert!(project.has_output("login.spec.js"));
}

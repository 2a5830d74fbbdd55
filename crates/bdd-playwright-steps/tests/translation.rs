//! Behavioural tests for step translation through the public API.
#![expect(clippy::unwrap_used, reason = "writing into a String cannot fail")]

use bdd_playwright_steps::{Action, StepIntent, StepKeyword, classify, translate};
use rstest::rstest;

fn render(step: &str) -> String {
    let mut out = String::new();
    translate(step).write_to(&mut out).unwrap();
    out
}

#[rstest]
#[case(r#"Given I am on "https://example.com""#)]
#[case(r#"When I enter "it's me" in the email field"#)]
#[case("Then something nobody understands")]
#[case("And 日本語のステップ")]
fn block_comment_is_the_step_text(#[case] step: &str) {
    let out = render(step);
    let first_line = out.lines().next().unwrap();
    assert_eq!(first_line, format!("    // {step}"));
    assert!(out.ends_with("\n\n"));
}

#[test]
fn login_scenario_steps_render_expected_statements() {
    assert_eq!(
        render(r#"Given I am on "https://example.com""#),
        concat!(
            "    // Given I am on \"https://example.com\"\n",
            "    await page.goto('https://example.com');\n\n",
        )
    );
    assert_eq!(
        render(r#"When I enter "test@x.com" in the email field"#),
        concat!(
            "    // When I enter \"test@x.com\" in the email field\n",
            "    await page.fill('input[type=\"email\"]', 'test@x.com');\n\n",
        )
    );
    assert_eq!(
        render(r#"Then I should see "Welcome""#),
        "    // Then I should see \"Welcome\"\n    await expect(page).toContainText('Welcome');\n\n"
    );
}

#[test]
fn embedded_quote_is_escaped_in_value() {
    let out = render(r#"When I enter "it's me" in the email field"#);
    assert!(out.contains("await page.fill('input[type=\"email\"]', 'it\\'s me');"));
}

#[test]
fn unrecognised_step_renders_marker() {
    assert_eq!(
        render("Given the moon is full"),
        "    // Given the moon is full\n    // TODO: Implement this step\n\n"
    );
}

#[test]
fn translation_is_deterministic() {
    let step = "When I click the Save button and wait";
    assert_eq!(translate(step), translate(step));
    assert_eq!(classify(step), StepIntent::Click);
}

#[test]
fn block_records_leading_keyword() {
    let block = translate("But I press Cancel");
    assert_eq!(block.keyword(), Some(StepKeyword::But));
    assert_eq!(
        block.actions(),
        &[Action::Click {
            label: "Cancel".into()
        }]
    );
}

//! Ordered step classification rules.
//!
//! Patterns overlap, so the table is evaluated top to bottom and the first
//! matching rule decides the intent. Reordering entries changes the generated
//! tests.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::action::{Action, ActionBlock, FillTarget};
use crate::literal::{first_quoted_literal, quoted_literals};

const DEFAULT_URL: &str = "https://www.google.com/";
const DEFAULT_EMAIL: &str = "test@example.com";
const DEFAULT_PASSWORD: &str = "password123";
const DEFAULT_BUTTON: &str = "Submit";
const DEFAULT_TEXT: &str = "expected text";
const DEFAULT_SEARCH_TERM: &str = "search term";

/// Intent assigned to a step by the first matching rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepIntent {
    /// Open a URL.
    Navigate,
    /// Fill the email input.
    FillEmail,
    /// Fill the password input.
    FillPassword,
    /// Fill a generic text field.
    FillField,
    /// Click a button or link.
    Click,
    /// Wait for the page to settle.
    Wait,
    /// Assert that the page contains text.
    AssertText,
    /// Assert that something is visible.
    AssertVisible,
    /// Assert the current URL.
    AssertUrl,
    /// Type into the search box.
    Search,
    /// Press a key.
    PressKey,
    /// No rule matched.
    Unrecognised,
}

impl StepIntent {
    /// Short kebab-case name used in logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Navigate => "navigate",
            Self::FillEmail => "fill-email",
            Self::FillPassword => "fill-password",
            Self::FillField => "fill-field",
            Self::Click => "click",
            Self::Wait => "wait",
            Self::AssertText => "assert-text",
            Self::AssertVisible => "assert-visible",
            Self::AssertUrl => "assert-url",
            Self::Search => "search",
            Self::PressKey => "press-key",
            Self::Unrecognised => "unrecognised",
        }
    }
}

impl fmt::Display for StepIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct Rule {
    intent: StepIntent,
    pattern: Regex,
    build: fn(&str) -> Vec<Action>,
}

impl Rule {
    fn new(intent: StepIntent, pattern: &str, build: fn(&str) -> Vec<Action>) -> Self {
        Self {
            intent,
            pattern: Regex::new(pattern).unwrap_or_else(|_| unreachable!()),
            build,
        }
    }
}

static RULES: LazyLock<[Rule; 11]> = LazyLock::new(|| {
    [
        Rule::new(
            StepIntent::Navigate,
            r"(?i)^Given I (?:am on|navigate to|open)",
            navigate,
        ),
        Rule::new(StepIntent::FillEmail, r"(?i)enter.*email", fill_email),
        Rule::new(StepIntent::FillPassword, r"(?i)enter.*password", fill_password),
        // The alternation binds loosest: any step mentioning "enter" lands here.
        Rule::new(
            StepIntent::FillField,
            r"(?i)enter|fill.*(?:field|box|input)",
            fill_field,
        ),
        Rule::new(StepIntent::Click, r"(?i)click|press", click),
        Rule::new(StepIntent::Wait, r"(?i)wait", |_| vec![Action::WaitForLoadState]),
        Rule::new(
            StepIntent::AssertText,
            r"(?i)should see|should contain|contains",
            assert_text,
        ),
        Rule::new(
            StepIntent::AssertVisible,
            r"(?i)should be visible|is visible|appears",
            |_| vec![Action::ExpectVisible],
        ),
        Rule::new(
            StepIntent::AssertUrl,
            r"(?i)should be on|should be at|am on",
            |_| vec![Action::ExpectAnyUrl],
        ),
        Rule::new(StepIntent::Search, r"(?i)search|type", search),
        // Shadowed by the fill-field and click rules above; never selected.
        Rule::new(StepIntent::PressKey, r"(?i)press enter|press key", |_| {
            vec![Action::PressEnter]
        }),
    ]
});

static NAVIGATE_TARGET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:am on|navigate to|open)\s+(?:the\s+)?(\S.*?)\s*$")
        .unwrap_or_else(|_| unreachable!())
});

static CLICK_TARGET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:click|press)\s+(?:the\s+)?"?([^"]+)"?"#)
        .unwrap_or_else(|_| unreachable!())
});

static TEXT_TARGET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:see|contain)\s+"?([^"]+)"?"#).unwrap_or_else(|_| unreachable!())
});

fn capture<'a>(re: &Regex, text: &'a str) -> Option<&'a str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn navigate(step: &str) -> Vec<Action> {
    let url = first_quoted_literal(step)
        .or_else(|| capture(&NAVIGATE_TARGET_RE, step))
        .unwrap_or(DEFAULT_URL);
    vec![Action::Goto {
        url: url.to_string(),
    }]
}

fn fill_email(step: &str) -> Vec<Action> {
    vec![Action::Fill {
        target: FillTarget::Email,
        value: first_quoted_literal(step)
            .unwrap_or(DEFAULT_EMAIL)
            .to_string(),
    }]
}

fn fill_password(step: &str) -> Vec<Action> {
    vec![Action::Fill {
        target: FillTarget::Password,
        value: first_quoted_literal(step)
            .unwrap_or(DEFAULT_PASSWORD)
            .to_string(),
    }]
}

/// The first literal names the field and the second is the value. The
/// selector stays generic, so the field name does not reach the output.
fn fill_field(step: &str) -> Vec<Action> {
    let mut literals = quoted_literals(step);
    match (literals.next(), literals.next()) {
        (Some(_field), Some(value)) => vec![Action::Fill {
            target: FillTarget::AnyText,
            value: value.to_string(),
        }],
        _ => Vec::new(),
    }
}

fn click(step: &str) -> Vec<Action> {
    let label = capture(&CLICK_TARGET_RE, step)
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .unwrap_or(DEFAULT_BUTTON);
    vec![Action::Click {
        label: label.to_string(),
    }]
}

fn assert_text(step: &str) -> Vec<Action> {
    let text = capture(&TEXT_TARGET_RE, step).unwrap_or(DEFAULT_TEXT);
    vec![Action::ExpectContainsText {
        text: text.to_string(),
    }]
}

fn search(step: &str) -> Vec<Action> {
    vec![Action::Fill {
        target: FillTarget::Search,
        value: first_quoted_literal(step)
            .unwrap_or(DEFAULT_SEARCH_TERM)
            .to_string(),
    }]
}

fn matching_rule(step: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.pattern.is_match(step))
}

/// Classify a step without building its actions.
///
/// # Examples
/// ```
/// use bdd_playwright_steps::{classify, StepIntent};
///
/// assert_eq!(classify("When I click and wait"), StepIntent::Click);
/// assert_eq!(classify("Then nothing at all"), StepIntent::Unrecognised);
/// ```
#[must_use]
pub fn classify(step: &str) -> StepIntent {
    matching_rule(step).map_or(StepIntent::Unrecognised, |rule| rule.intent)
}

/// Translate a step into its action block.
///
/// Unrecognised steps yield a block holding only the
/// [`Action::Unimplemented`] marker.
///
/// # Examples
/// ```
/// use bdd_playwright_steps::{translate, Action, StepIntent};
///
/// let block = translate(r#"Given I am on "https://example.com""#);
/// assert_eq!(block.intent(), StepIntent::Navigate);
/// assert_eq!(
///     block.actions(),
///     &[Action::Goto { url: "https://example.com".into() }]
/// );
/// ```
#[must_use]
pub fn translate(step: &str) -> ActionBlock {
    let (intent, actions) = matching_rule(step).map_or_else(
        || (StepIntent::Unrecognised, vec![Action::Unimplemented]),
        |rule| (rule.intent, (rule.build)(step)),
    );
    let block = ActionBlock::new(step, intent, actions);
    debug!(
        step,
        keyword = ?block.keyword(),
        %intent,
        actions = block.actions().len(),
        "translated step"
    );
    block
}

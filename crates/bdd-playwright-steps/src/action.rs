//! Playwright actions and their JavaScript rendering.
//!
//! Every value taken from a step is written into a single-quoted JavaScript
//! string literal. Values are escaped so that quotes, backslashes and line
//! terminators in feature text cannot break the generated module; plain text
//! renders unchanged.

use std::fmt::{self, Write};

use crate::StepIntent;
use crate::keyword::StepKeyword;

const INDENT: &str = "    ";

/// Element targeted by a fill action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillTarget {
    /// `input[type="email"]`
    Email,
    /// `input[type="password"]`
    Password,
    /// Any text input or text area.
    AnyText,
    /// The search box (`q` inputs and search inputs).
    Search,
}

impl FillTarget {
    /// Playwright selector for the target.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Email => r#"input[type="email"]"#,
            Self::Password => r#"input[type="password"]"#,
            Self::AnyText => "input, textarea",
            Self::Search => r#"input[name="q"], input[type="search"]"#,
        }
    }
}

/// A primitive browser action emitted for a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Navigate the page to a URL.
    Goto {
        /// Destination URL.
        url: String,
    },
    /// Fill an input element with a value.
    Fill {
        /// Element receiving the value.
        target: FillTarget,
        /// Text typed into the element.
        value: String,
    },
    /// Click a button or link by its visible text.
    Click {
        /// Visible text of the element.
        label: String,
    },
    /// Wait for the network to settle.
    WaitForLoadState,
    /// Assert that the page contains a piece of text.
    ExpectContainsText {
        /// Expected text.
        text: String,
    },
    /// Always-truthy visibility check. It does not target an element.
    ExpectVisible,
    /// URL check accepting any URL.
    ExpectAnyUrl,
    /// Press Enter in the first text input.
    PressEnter,
    /// Marker left for steps that need a hand-written implementation.
    Unimplemented,
}

impl Action {
    /// Write the action as one indented JavaScript statement line.
    ///
    /// # Errors
    /// Returns an error if writing to `writer` fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> fmt::Result {
        writer.write_str(INDENT)?;
        match self {
            Self::Goto { url } => {
                writer.write_str("await page.goto('")?;
                write_js_string_content(writer, url)?;
                writer.write_str("');")?;
            }
            Self::Fill { target, value } => {
                writer.write_str("await page.fill('")?;
                writer.write_str(target.selector())?;
                writer.write_str("', '")?;
                write_js_string_content(writer, value)?;
                writer.write_str("');")?;
            }
            Self::Click { label } => {
                let text = has_text_argument(label);
                writer.write_str("await page.click('button:has-text(\"")?;
                write_js_string_content(writer, &text)?;
                writer.write_str("\"), a:has-text(\"")?;
                write_js_string_content(writer, &text)?;
                writer.write_str("\")');")?;
            }
            Self::WaitForLoadState => {
                writer.write_str("await page.waitForLoadState('networkidle');")?;
            }
            Self::ExpectContainsText { text } => {
                writer.write_str("await expect(page).toContainText('")?;
                write_js_string_content(writer, text)?;
                writer.write_str("');")?;
            }
            Self::ExpectVisible => {
                writer.write_str("await expect(page.locator('visible=true')).toBeTruthy();")?;
            }
            Self::ExpectAnyUrl => writer.write_str("await expect(page).toHaveURL(/.*/);")?,
            Self::PressEnter => writer.write_str("await page.press('input, textarea', 'Enter');")?,
            Self::Unimplemented => writer.write_str("// TODO: Implement this step")?,
        }
        writer.write_char('\n')
    }
}

/// The translated form of one step: its text, intent and actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionBlock {
    step: String,
    keyword: Option<StepKeyword>,
    intent: StepIntent,
    actions: Vec<Action>,
}

impl ActionBlock {
    /// Assemble a block for `step`.
    #[must_use]
    pub fn new(step: impl Into<String>, intent: StepIntent, actions: Vec<Action>) -> Self {
        let step = step.into();
        let keyword = StepKeyword::from_line(&step);
        Self {
            step,
            keyword,
            intent,
            actions,
        }
    }

    /// The original step text, verbatim.
    #[must_use]
    pub fn step(&self) -> &str {
        &self.step
    }

    /// Keyword the step text starts with, if any.
    #[must_use]
    pub fn keyword(&self) -> Option<StepKeyword> {
        self.keyword
    }

    /// Intent chosen for the step.
    #[must_use]
    pub fn intent(&self) -> StepIntent {
        self.intent
    }

    /// Emitted actions, possibly empty.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Write the block: a comment carrying the step text, the actions, and a
    /// separating blank line.
    ///
    /// # Examples
    /// ```
    /// use bdd_playwright_steps::translate;
    ///
    /// let mut out = String::new();
    /// translate("When I wait for the page").write_to(&mut out).unwrap();
    /// assert_eq!(
    ///     out,
    ///     "    // When I wait for the page\n    await page.waitForLoadState('networkidle');\n\n"
    /// );
    /// ```
    ///
    /// # Errors
    /// Returns an error if writing to `writer` fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> fmt::Result {
        writer.write_str(INDENT)?;
        writer.write_str("// ")?;
        write_comment_text(writer, &self.step)?;
        writer.write_char('\n')?;
        for action in &self.actions {
            action.write_to(writer)?;
        }
        writer.write_char('\n')
    }
}

/// Write `value` escaped for the inside of a single-quoted JavaScript string.
///
/// # Errors
/// Returns an error if writing to `writer` fails.
pub fn write_js_string_content<W: Write>(writer: &mut W, value: &str) -> fmt::Result {
    for character in value.chars() {
        match character {
            '\\' => writer.write_str("\\\\")?,
            '\'' => writer.write_str("\\'")?,
            '\n' => writer.write_str("\\n")?,
            '\r' => writer.write_str("\\r")?,
            '\u{2028}' => writer.write_str("\\u2028")?,
            '\u{2029}' => writer.write_str("\\u2029")?,
            other => writer.write_char(other)?,
        }
    }
    Ok(())
}

/// Escape a label for use inside a double-quoted `:has-text(...)` argument.
fn has_text_argument(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for character in label.chars() {
        if matches!(character, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(character);
    }
    escaped
}

fn write_comment_text<W: Write>(writer: &mut W, text: &str) -> fmt::Result {
    for character in text.chars() {
        match character {
            '\n' | '\r' | '\u{2028}' | '\u{2029}' => writer.write_char(' ')?,
            other => writer.write_char(other)?,
        }
    }
    Ok(())
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "writing into a String cannot fail in these tests"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn render(action: &Action) -> String {
        let mut out = String::new();
        action.write_to(&mut out).unwrap();
        out
    }

    #[rstest]
    #[case(
        Action::Goto { url: "https://example.com".into() },
        "    await page.goto('https://example.com');\n"
    )]
    #[case(
        Action::Fill { target: FillTarget::Email, value: "a@b.c".into() },
        "    await page.fill('input[type=\"email\"]', 'a@b.c');\n"
    )]
    #[case(
        Action::Fill { target: FillTarget::Search, value: "rust".into() },
        "    await page.fill('input[name=\"q\"], input[type=\"search\"]', 'rust');\n"
    )]
    #[case(
        Action::Click { label: "Submit".into() },
        "    await page.click('button:has-text(\"Submit\"), a:has-text(\"Submit\")');\n"
    )]
    #[case(Action::ExpectAnyUrl, "    await expect(page).toHaveURL(/.*/);\n")]
    #[case(Action::Unimplemented, "    // TODO: Implement this step\n")]
    fn renders_statement(#[case] action: Action, #[case] expected: &str) {
        assert_eq!(render(&action), expected);
    }

    #[test]
    fn escapes_single_quotes_and_backslashes() {
        let out = render(&Action::ExpectContainsText {
            text: r"it's C:\temp".into(),
        });
        assert_eq!(
            out,
            "    await expect(page).toContainText('it\\'s C:\\\\temp');\n"
        );
    }

    #[test]
    fn escapes_line_terminators() {
        let mut out = String::new();
        write_js_string_content(&mut out, "a\nb\r\u{2028}").unwrap();
        assert_eq!(out, "a\\nb\\r\\u2028");
    }

    #[test]
    fn escapes_double_quotes_inside_has_text() {
        let out = render(&Action::Click {
            label: r#"Say "hi""#.into(),
        });
        assert_eq!(
            out,
            concat!(
                "    await page.click('",
                "button:has-text(\"Say \\\\\"hi\\\\\"\"), ",
                "a:has-text(\"Say \\\\\"hi\\\\\"\")",
                "');\n",
            )
        );
    }

    #[test]
    fn block_without_actions_keeps_comment_and_separator() {
        let block = ActionBlock::new("And something odd", StepIntent::FillField, Vec::new());
        let mut out = String::new();
        block.write_to(&mut out).unwrap();
        assert_eq!(out, "    // And something odd\n\n");
        assert_eq!(block.keyword(), Some(StepKeyword::And));
    }

    #[test]
    fn comment_flattens_line_breaks() {
        let block = ActionBlock::new("Then a\nb", StepIntent::Unrecognised, Vec::new());
        let mut out = String::new();
        block.write_to(&mut out).unwrap();
        assert_eq!(out, "    // Then a b\n\n");
    }
}

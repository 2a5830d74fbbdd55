//! Double-quoted literal extraction from step text.

use std::sync::LazyLock;

use regex::Regex;

static QUOTED_LITERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)""#).unwrap_or_else(|_| unreachable!()));

/// Iterate over the double-quoted literals in `text`, quotes stripped.
///
/// Literals are yielded left to right and never overlap. An unterminated
/// trailing quote does not produce a literal.
///
/// # Examples
/// ```
/// use bdd_playwright_steps::quoted_literals;
///
/// let found: Vec<_> = quoted_literals(r#"I enter "Name" into the "Full name" box"#).collect();
/// assert_eq!(found, vec!["Name", "Full name"]);
/// ```
pub fn quoted_literals(text: &str) -> impl Iterator<Item = &str> {
    QUOTED_LITERAL_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Return the first double-quoted literal in `text`, if any.
///
/// # Examples
/// ```
/// use bdd_playwright_steps::first_quoted_literal;
///
/// assert_eq!(first_quoted_literal(r#"I search for "rust""#), Some("rust"));
/// assert_eq!(first_quoted_literal("I search"), None);
/// ```
#[must_use]
pub fn first_quoted_literal(text: &str) -> Option<&str> {
    quoted_literals(text).next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("no quotes here", &[])]
    #[case(r#"one "a" literal"#, &["a"])]
    #[case(r#""a" and "b" and "c""#, &["a", "b", "c"])]
    #[case(r#"empty "" literal"#, &[""])]
    #[case(r#"dangling "quote"#, &[])]
    #[case(r#"unicode "naïve café ✓""#, &["naïve café ✓"])]
    fn extracts_literals_in_order(#[case] text: &str, #[case] expected: &[&str]) {
        let found: Vec<_> = quoted_literals(text).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn first_literal_ignores_later_ones() {
        assert_eq!(first_quoted_literal(r#""x" then "y""#), Some("x"));
    }
}

//! Step keyword vocabulary recognised at the start of scenario lines.
//!
//! Feature documents introduce steps with one of five literal prefixes. The
//! match is case-sensitive and requires a single space after the keyword, so
//! `Givenness` or `given x` are not step lines.

use std::fmt;

/// Keyword introducing a step line.
///
/// `Given` is the initiator keyword; the remaining variants continue a
/// scenario. Translation never consults the keyword semantically, except for
/// navigation which is only recognised on `Given` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKeyword {
    /// Setup preconditions for a scenario.
    Given,
    /// Perform an action.
    When,
    /// Assert the expected outcome.
    Then,
    /// Continue the previous step kind.
    And,
    /// Contrasting continuation.
    But,
}

impl StepKeyword {
    /// All keywords in the order they are tried against a line.
    pub const ALL: [Self; 5] = [Self::Given, Self::When, Self::Then, Self::And, Self::But];

    /// Return the keyword as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use bdd_playwright_steps::StepKeyword;
    ///
    /// assert_eq!(StepKeyword::Given.as_str(), "Given");
    /// assert_eq!(StepKeyword::But.as_str(), "But");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
        }
    }

    /// Identify the keyword a trimmed line starts with.
    ///
    /// The keyword must be followed by a space; the comparison is
    /// case-sensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use bdd_playwright_steps::StepKeyword;
    ///
    /// assert_eq!(
    ///     StepKeyword::from_line("When I click \"Go\""),
    ///     Some(StepKeyword::When)
    /// );
    /// assert_eq!(StepKeyword::from_line("when I click"), None);
    /// assert_eq!(StepKeyword::from_line("Given"), None);
    /// ```
    #[must_use]
    pub fn from_line(line: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|keyword| {
            line.strip_prefix(keyword.as_str())
                .is_some_and(|rest| rest.starts_with(' '))
        })
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Given I am on \"x\"", Some(StepKeyword::Given))]
    #[case("When I wait", Some(StepKeyword::When))]
    #[case("Then I should see \"ok\"", Some(StepKeyword::Then))]
    #[case("And I click \"Submit\"", Some(StepKeyword::And))]
    #[case("But nothing happens", Some(StepKeyword::But))]
    #[case("Given", None)]
    #[case("GIVEN I shout", None)]
    #[case("Andromeda rises", None)]
    #[case("Scenario: not a step", None)]
    fn detects_keyword_prefix(#[case] line: &str, #[case] expected: Option<StepKeyword>) {
        assert_eq!(StepKeyword::from_line(line), expected);
    }

    #[test]
    fn display_matches_as_str() {
        for keyword in StepKeyword::ALL {
            assert_eq!(keyword.to_string(), keyword.as_str());
        }
    }
}

//! Step vocabulary and step-to-Playwright translation for bdd-playwright.
//!
//! A step line is classified by an ordered list of rules; the first rule
//! whose pattern matches decides the step's [`StepIntent`] and builds the
//! [`Action`]s emitted for it. The resulting [`ActionBlock`] keeps the
//! original step text so generated tests stay traceable to their source.
//!
//! ```
//! use bdd_playwright_steps::translate;
//!
//! let mut out = String::new();
//! translate(r#"Then I should see "Welcome""#)
//!     .write_to(&mut out)
//!     .unwrap();
//! assert!(out.contains("toContainText('Welcome')"));
//! ```

mod action;
mod keyword;
mod literal;
mod rules;

pub use action::{Action, ActionBlock, FillTarget, write_js_string_content};
pub use keyword::StepKeyword;
pub use literal::{first_quoted_literal, quoted_literals};
pub use rules::{StepIntent, classify, translate};

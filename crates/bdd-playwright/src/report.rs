//! Human-readable run report.

use std::io::{self, Write};
use std::path::Path;

use crate::config::{FEATURES_DIR_NAME, FEATURE_EXTENSION};
use crate::generate::{DocumentOutcome, RunSummary};

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

fn write_outcome(writer: &mut dyn Write, outcome: &DocumentOutcome) -> io::Result<()> {
    match outcome {
        DocumentOutcome::Generated {
            source,
            output,
            scenarios,
        } => {
            writeln!(writer, "generated {}", display_name(source))?;
            writeln!(writer, "  output:    {}", display_name(output))?;
            writeln!(writer, "  scenarios: {scenarios}")
        }
        DocumentOutcome::Skipped { source } => {
            writeln!(writer, "skipped {}: no valid scenarios", display_name(source))
        }
    }
}

/// Write the summary of a run.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_summary(writer: &mut dyn Write, summary: &RunSummary) -> io::Result<()> {
    if summary.created_input_dir {
        writeln!(writer, "Created the {FEATURES_DIR_NAME}/ directory.")?;
    }
    if summary.documents() == 0 {
        writeln!(writer, "No .{FEATURE_EXTENSION} files found in {FEATURES_DIR_NAME}/.")?;
        writeln!(writer, "Create a feature file first, for example:")?;
        writeln!(writer)?;
        return writeln!(writer, "  {FEATURES_DIR_NAME}/example.{FEATURE_EXTENSION}");
    }

    writeln!(writer, "Processing {} feature file(s)...", summary.documents())?;
    writeln!(writer)?;
    for outcome in &summary.outcomes {
        write_outcome(writer, outcome)?;
    }
    for failure in &summary.failures {
        writeln!(writer, "error: {failure}")?;
    }
    writeln!(writer)?;
    writeln!(writer, "To run the tests:")?;
    writeln!(writer)?;
    writeln!(writer, "  npm test")?;
    writeln!(writer)?;
    writeln!(writer, "To view the test report:")?;
    writeln!(writer)?;
    writeln!(writer, "  npx playwright show-report")
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use crate::error::DocumentError;
    use std::path::PathBuf;

    fn render(summary: &RunSummary) -> String {
        let mut out = Vec::new();
        write_summary(&mut out, summary).expect("write summary");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn empty_run_explains_where_features_go() {
        let out = render(&RunSummary {
            created_input_dir: true,
            ..RunSummary::default()
        });
        assert!(out.starts_with("Created the features/ directory.\n"));
        assert!(out.contains("No .feature files found in features/."));
        assert!(out.ends_with("  features/example.feature\n"));
    }

    #[test]
    fn lists_each_document_and_hints() {
        let summary = RunSummary {
            created_input_dir: false,
            outcomes: vec![
                DocumentOutcome::Generated {
                    source: PathBuf::from("features/login.feature"),
                    output: PathBuf::from("tests/login.spec.js"),
                    scenarios: 2,
                },
                DocumentOutcome::Skipped {
                    source: PathBuf::from("features/draft.feature"),
                },
            ],
            failures: vec![DocumentError::Read {
                path: PathBuf::from("features/bad.feature"),
                source: io::Error::new(
                    io::ErrorKind::InvalidData,
                    "stream did not contain valid UTF-8",
                ),
            }],
        };
        let out = render(&summary);
        assert!(out.starts_with("Processing 3 feature file(s)...\n\n"));
        let generated = "generated login.feature\n  output:    login.spec.js\n  scenarios: 2\n";
        assert!(out.contains(generated));
        assert!(out.contains("skipped draft.feature: no valid scenarios\n"));
        let failure = concat!(
            "error: failed to read features/bad.feature: ",
            "stream did not contain valid UTF-8\n",
        );
        assert!(out.contains(failure));
        assert!(out.ends_with("  npx playwright show-report\n"));
    }
}

//! Batch orchestration: discover documents, translate, write outputs.
//!
//! Documents are handled one at a time. A document that cannot be read or
//! written is recorded as a failure and the batch moves on; only failures to
//! prepare the directories end the run.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::config::GeneratorConfig;
use crate::discovery::{Selection, output_file_name, select_documents};
use crate::emit::render_feature;
use crate::error::{DocumentError, GeneratorError};
use crate::feature::read_feature_file;

/// What happened to a document that was processed without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    /// A test module was written.
    Generated {
        /// Input document.
        source: PathBuf,
        /// Written test module.
        output: PathBuf,
        /// Number of test cases in the module.
        scenarios: usize,
    },
    /// The document had no title or no scenarios; nothing was written.
    Skipped {
        /// Input document.
        source: PathBuf,
    },
}

/// Results of a generation run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// The input directory was missing and has been created.
    pub created_input_dir: bool,
    /// Per-document outcomes in processing order.
    pub outcomes: Vec<DocumentOutcome>,
    /// Per-document failures in processing order.
    pub failures: Vec<DocumentError>,
}

impl RunSummary {
    /// Number of documents selected for the run.
    #[must_use]
    pub fn documents(&self) -> usize {
        self.outcomes.len() + self.failures.len()
    }

    /// Number of test modules written.
    #[must_use]
    pub fn generated(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, DocumentOutcome::Generated { .. }))
            .count()
    }

    fn record(mut self, result: Result<DocumentOutcome, DocumentError>) -> Self {
        match result {
            Ok(outcome) => self.outcomes.push(outcome),
            Err(err) => {
                error!(error = %err, "failed to process feature file");
                self.failures.push(err);
            }
        }
        self
    }
}

/// Translate one document and write its test module.
///
/// # Errors
///
/// Returns [`DocumentError`] when the document cannot be read or the output
/// cannot be written.
pub fn process_document(
    path: &Path,
    config: &GeneratorConfig,
) -> Result<DocumentOutcome, DocumentError> {
    let feature = read_feature_file(path)?;
    debug!(
        path = %path.display(),
        title = %feature.title,
        scenarios = feature.scenarios.len(),
        steps = feature.step_count(),
        "extracted feature"
    );

    if !feature.is_emittable() {
        warn!(path = %path.display(), "no valid scenarios, skipping");
        return Ok(DocumentOutcome::Skipped {
            source: path.to_path_buf(),
        });
    }

    let output = config.tests_dir.join(output_file_name(path));
    std::fs::write(&output, render_feature(&feature)).map_err(|source| DocumentError::Write {
        path: output.clone(),
        source,
    })?;
    info!(
        path = %path.display(),
        output = %output.display(),
        scenarios = feature.scenarios.len(),
        "generated test module"
    );

    Ok(DocumentOutcome::Generated {
        source: path.to_path_buf(),
        output,
        scenarios: feature.scenarios.len(),
    })
}

/// Run the generator over the selected documents.
///
/// `target` names a single file inside the features directory; without it
/// every `.feature` file there is processed.
///
/// # Errors
///
/// Returns [`GeneratorError`] when the output directory cannot be created or
/// the input directory cannot be created or listed. Per-document failures are
/// collected in the returned summary instead.
pub fn run(config: &GeneratorConfig, target: Option<&str>) -> Result<RunSummary, GeneratorError> {
    std::fs::create_dir_all(&config.tests_dir).map_err(|source| GeneratorError::OutputDir {
        path: config.tests_dir.clone(),
        source,
    })?;

    let paths = match select_documents(config, target)? {
        Selection::Documents(paths) => paths,
        Selection::CreatedInputDir => {
            return Ok(RunSummary {
                created_input_dir: true,
                ..RunSummary::default()
            });
        }
    };
    info!(documents = paths.len(), "processing feature files");

    Ok(paths
        .iter()
        .map(|path| process_document(path, config))
        .fold(RunSummary::default(), RunSummary::record))
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    struct Workspace {
        _dir: TempDir,
        config: GeneratorConfig,
    }

    impl Workspace {
        fn feature(&self, name: &str, text: &str) -> PathBuf {
            std::fs::create_dir_all(&self.config.features_dir).expect("mkdir features");
            let path = self.config.features_dir.join(name);
            std::fs::write(&path, text).expect("write feature");
            path
        }
    }

    #[fixture]
    fn workspace() -> Workspace {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = GeneratorConfig::new(dir.path());
        Workspace { _dir: dir, config }
    }

    #[rstest]
    fn skips_documents_without_scenarios(workspace: Workspace) {
        std::fs::create_dir_all(&workspace.config.tests_dir).expect("mkdir tests");
        let path = workspace.feature("empty.feature", "Feature: Only a title\n");
        let outcome = process_document(&path, &workspace.config).expect("outcome");
        assert_eq!(outcome, DocumentOutcome::Skipped { source: path });
        assert!(!workspace.config.tests_dir.join("empty.spec.js").exists());
    }

    #[rstest]
    fn missing_document_is_a_read_failure(workspace: Workspace) {
        let summary = run(&workspace.config, Some("ghost.feature")).expect("run");
        assert_eq!(summary.documents(), 1);
        assert!(matches!(
            summary.failures.as_slice(),
            [DocumentError::Read { .. }]
        ));
    }

    #[rstest]
    fn failure_does_not_stop_the_batch(workspace: Workspace) {
        workspace.feature("a.feature", "Feature: A\nScenario: s\nWhen I wait\n");
        workspace.feature("b.feature", "Feature: B\nScenario: s\nWhen I wait\n");
        // An output path occupied by a directory makes the write fail.
        std::fs::create_dir_all(workspace.config.tests_dir.join("a.spec.js"))
            .expect("mkdir blocker");

        let summary = run(&workspace.config, None).expect("run");
        assert_eq!(summary.documents(), 2);
        assert_eq!(summary.generated(), 1);
        assert!(matches!(
            summary.failures.as_slice(),
            [DocumentError::Write { .. }]
        ));
        assert!(workspace.config.tests_dir.join("b.spec.js").is_file());
    }

    #[rstest]
    fn creates_directories_on_first_run(workspace: Workspace) {
        let summary = run(&workspace.config, None).expect("run");
        assert!(summary.created_input_dir);
        assert_eq!(summary.documents(), 0);
        assert!(workspace.config.features_dir.is_dir());
        assert!(workspace.config.tests_dir.is_dir());
    }

    #[rstest]
    fn unwritable_output_directory_aborts_the_run(workspace: Workspace) {
        workspace.feature("a.feature", "Feature: A\nScenario: s\nWhen I wait\n");
        std::fs::write(&workspace.config.tests_dir, "not a directory").expect("write blocker");

        let result = run(&workspace.config, None);
        assert!(matches!(
            result,
            Err(GeneratorError::OutputDir { ref path, .. }) if *path == workspace.config.tests_dir
        ));
    }
}

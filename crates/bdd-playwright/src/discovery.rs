//! Input document selection and output naming.

use std::path::{Path, PathBuf};

use tracing::info;
use walkdir::WalkDir;

use crate::config::{FEATURE_EXTENSION, GeneratorConfig, OUTPUT_SUFFIX};
use crate::error::GeneratorError;

/// Documents chosen for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Paths to process, in processing order.
    Documents(Vec<PathBuf>),
    /// The input directory did not exist and was created empty.
    CreatedInputDir,
}

fn is_feature_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext == FEATURE_EXTENSION)
}

fn convert_walkdir_error(err: walkdir::Error) -> std::io::Error {
    let err_str = err.to_string();
    err.into_io_error()
        .unwrap_or_else(|| std::io::Error::other(err_str))
}

/// List the `.feature` files directly inside `dir`, sorted by path.
///
/// Subdirectories are not searched. Symlinks to files are followed.
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be read.
pub fn collect_feature_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for next in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = next.map_err(convert_walkdir_error)?;
        if entry.file_type().is_file() && is_feature_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Choose the documents to process.
///
/// With a `target`, the single file `features_dir/target` is selected without
/// checking that it exists. Otherwise every `.feature` file in the input
/// directory is selected, creating the directory when it is missing.
///
/// # Errors
///
/// Returns [`GeneratorError::InputDir`] when the input directory cannot be
/// created or listed.
pub fn select_documents(
    config: &GeneratorConfig,
    target: Option<&str>,
) -> Result<Selection, GeneratorError> {
    if let Some(name) = target {
        return Ok(Selection::Documents(vec![config.features_dir.join(name)]));
    }

    let dir = &config.features_dir;
    if !dir.exists() {
        info!(path = %dir.display(), "creating features directory");
        std::fs::create_dir_all(dir).map_err(|source| GeneratorError::InputDir {
            path: dir.clone(),
            source,
        })?;
        return Ok(Selection::CreatedInputDir);
    }

    collect_feature_files(dir)
        .map(Selection::Documents)
        .map_err(|source| GeneratorError::InputDir {
            path: dir.clone(),
            source,
        })
}

/// Derive the output file name for an input document.
///
/// A trailing `.feature` is replaced by `.spec.js`; other names keep their
/// extension and gain the suffix.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use bdd_playwright::discovery::output_file_name;
///
/// assert_eq!(output_file_name(Path::new("features/login.feature")), "login.spec.js");
/// assert_eq!(output_file_name(Path::new("notes.txt")), "notes.txt.spec.js");
/// ```
#[must_use]
pub fn output_file_name(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dotted = format!(".{FEATURE_EXTENSION}");
    let base = name
        .strip_suffix(&dotted)
        .filter(|base| !base.is_empty())
        .unwrap_or(name.as_str());
    format!("{base}{OUTPUT_SUFFIX}")
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

    #[fixture]
    fn root() -> TempDir {
        tempfile::tempdir().expect("temp dir")
    }

    #[rstest]
    #[case("login.feature", "login.spec.js")]
    #[case("a.b.feature", "a.b.spec.js")]
    #[case("plain", "plain.spec.js")]
    #[case(".feature", ".feature.spec.js")]
    #[case("upper.FEATURE", "upper.FEATURE.spec.js")]
    fn derives_output_names(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(output_file_name(Path::new(input)), expected);
    }

    #[rstest]
    fn creates_missing_input_directory(root: TempDir) {
        let config = GeneratorConfig::new(root.path());
        let selection = select_documents(&config, None).expect("selection");
        assert_eq!(selection, Selection::CreatedInputDir);
        assert!(config.features_dir.is_dir());
    }

    #[rstest]
    fn lists_only_top_level_feature_files_sorted(root: TempDir) {
        let config = GeneratorConfig::new(root.path());
        let dir = &config.features_dir;
        std::fs::create_dir_all(dir.join("nested")).expect("mkdir");
        for name in ["b.feature", "a.feature", "readme.md", "nested/c.feature"] {
            std::fs::write(dir.join(name), "").expect("write");
        }
        std::fs::create_dir(dir.join("dir.feature")).expect("mkdir");

        let selection = select_documents(&config, None).expect("selection");
        assert_eq!(
            selection,
            Selection::Documents(vec![dir.join("a.feature"), dir.join("b.feature")])
        );
    }

    #[rstest]
    fn target_selects_single_file_without_checking(root: TempDir) {
        let config = GeneratorConfig::new(root.path());
        let selection = select_documents(&config, Some("missing.feature")).expect("selection");
        assert_eq!(
            selection,
            Selection::Documents(vec![config.features_dir.join("missing.feature")])
        );
        assert!(!config.features_dir.exists());
    }
}

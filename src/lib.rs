pub mod discovery;
pub mod error;
pub mod normalize;
pub mod root;

pub use discovery::{DEFAULT_EXTENSION, find_files};
pub use error::NormalizeError;
pub use normalize::{ReplaceMode, collapse_triple_breaks};
pub use root::{find_project_root, locate_project_root};

use std::path::{Path, PathBuf};

/// Options controlling a normalization run.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// File extension to match, without the leading dot.
    pub extension: String,
    /// How the triple-break replacement is applied.
    pub mode: ReplaceMode,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            mode: ReplaceMode::default(),
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, Default)]
pub struct NormalizeReport {
    /// Every file that was read and rewritten, in processing order.
    pub files: Vec<PathBuf>,
    /// The subset of `files` whose content changed.
    pub changed: Vec<PathBuf>,
}

/// Normalize a single file in place.
///
/// The whole file is read as UTF-8, transformed, and written back even when
/// nothing changed. Returns whether the content changed.
pub fn normalize_file(path: &Path, mode: ReplaceMode) -> Result<bool, NormalizeError> {
    let text = std::fs::read_to_string(path).map_err(|source| NormalizeError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let normalized = mode.apply(&text);
    let changed = normalized != text;

    std::fs::write(path, &normalized).map_err(|source| NormalizeError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    if changed {
        tracing::info!(path = %path.display(), "collapsed blank runs");
    } else {
        tracing::debug!(path = %path.display(), "unchanged");
    }
    Ok(changed)
}

/// Normalize every matching file under `root`.
///
/// Stops at the first failure. Files rewritten before the failure stay
/// rewritten.
pub fn normalize_tree(
    root: &Path,
    options: &NormalizeOptions,
) -> Result<NormalizeReport, NormalizeError> {
    let files = find_files(root, &options.extension)?;
    if files.is_empty() {
        tracing::info!(
            root = %root.display(),
            extension = %options.extension,
            "no matching files"
        );
    }

    let mut report = NormalizeReport::default();
    for path in files {
        if normalize_file(&path, options.mode)? {
            report.changed.push(path.clone());
        }
        report.files.push(path);
    }

    Ok(report)
}

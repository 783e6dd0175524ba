//! Project root discovery.
//!
//! A directory is a project root when it directly contains one of the
//! [`PROJECT_MARKERS`] or an RStudio `*.Rproj` file. The search starts at a
//! given directory and moves up through its ancestors, nearest first.

use std::path::{Path, PathBuf};

use crate::error::NormalizeError;

/// File or directory names that mark a project root.
pub const PROJECT_MARKERS: &[&str] = &[
    ".here",
    "_quarto.yml",
    "_quarto.yaml",
    ".git",
    "pyproject.toml",
    "setup.py",
    "requirements.txt",
    ".idea",
    ".vscode",
    ".spyproject",
    ".dvc",
];

const RPROJ_EXTENSION: &str = "Rproj";

fn contains_rproj(dir: &Path) -> bool {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return false;
    };
    entries.flatten().any(|entry| {
        entry.path().extension().and_then(|e| e.to_str()) == Some(RPROJ_EXTENSION)
            && entry.file_type().is_ok_and(|t| t.is_file())
    })
}

/// Check whether `dir` directly contains a project marker.
pub fn is_project_root(dir: &Path) -> bool {
    PROJECT_MARKERS
        .iter()
        .any(|marker| dir.join(marker).exists())
        || contains_rproj(dir)
}

/// Find the nearest directory at or above `start` that is a project root.
pub fn find_project_root(start: &Path) -> Result<PathBuf, NormalizeError> {
    start
        .ancestors()
        .find(|dir| is_project_root(dir))
        .map(Path::to_path_buf)
        .ok_or_else(|| NormalizeError::RootNotFound {
            start: start.to_path_buf(),
        })
}

/// Find the project root containing the current working directory.
pub fn locate_project_root() -> Result<PathBuf, NormalizeError> {
    let cwd = std::env::current_dir().map_err(NormalizeError::CurrentDir)?;
    let root = find_project_root(&cwd)?;
    tracing::debug!(root = %root.display(), "located project root");
    Ok(root)
}

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::NormalizeError;

/// Extension of Quarto documents, the default target.
pub const DEFAULT_EXTENSION: &str = "qmd";

/// Check whether `path` has exactly the given extension (case-sensitive).
fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}

/// Check whether a walk error is a permission failure below the root.
fn is_skippable(err: &walkdir::Error) -> bool {
    err.depth() > 0
        && err
            .io_error()
            .is_some_and(|e| e.kind() == std::io::ErrorKind::PermissionDenied)
}

/// Find every regular file under `root` with the given extension.
///
/// The walk has no depth limit and skips nothing: build and VCS directories
/// are visited like any other. Subdirectories that cannot be read for lack of
/// permission are skipped with a warning; any other walk error, and every
/// error on the root itself, is returned. Symlinks are not followed. The
/// result is sorted so runs are reproducible.
pub fn find_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>, NormalizeError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) if is_skippable(&err) => {
                tracing::warn!(
                    path = %err.path().unwrap_or(root).display(),
                    "skipping unreadable directory: {err}"
                );
                continue;
            }
            Err(source) => {
                return Err(NormalizeError::Walk {
                    path: source
                        .path()
                        .map_or_else(|| root.to_path_buf(), Path::to_path_buf),
                    source,
                });
            }
        };

        if !has_extension(entry.path(), extension) {
            continue;
        }
        if entry.path_is_symlink() {
            tracing::debug!(path = %entry.path().display(), "skipping symlink");
            continue;
        }
        if !entry.file_type().is_file() {
            continue;
        }

        tracing::debug!(path = %entry.path().display(), "discovered");
        files.push(entry.into_path());
    }

    files.sort();
    Ok(files)
}

use std::path::{Path, PathBuf};

/// Errors that can occur while normalizing a project tree.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("cannot read current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("no project root found above {}", start.display())]
    RootNotFound { start: PathBuf },

    #[error("failed to walk directory")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read file")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NormalizeError {
    /// The file or directory the error is about, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Walk { path, .. } | Self::Read { path, .. } | Self::Write { path, .. } => {
                Some(path)
            }
            Self::CurrentDir(_) | Self::RootNotFound { .. } => None,
        }
    }
}

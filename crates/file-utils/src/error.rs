//! Error types for file-utils operations.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FsError {
    /// An I/O call failed on `path`.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source and destination of a copy resolve to the same file.
    #[error("'{}' and '{}' are the same file", .src.display(), .dst.display())]
    SameFile { src: PathBuf, dst: PathBuf },

    /// Directory traversal failed part-way through.
    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
}

impl FsError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> FsError {
        let path = path.into();
        move |source| FsError::Io { path, source }
    }

    /// The underlying `io::ErrorKind`, when there is one.
    pub fn kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            FsError::Io { source, .. } => Some(source.kind()),
            FsError::SameFile { .. } => Some(std::io::ErrorKind::InvalidInput),
            FsError::Walk(err) => err.io_error().map(std::io::Error::kind),
        }
    }
}

pub type Result<T> = std::result::Result<T, FsError>;

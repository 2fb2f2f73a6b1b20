//! Failure kinds for a redaction pass.
//!
//! Every variant aborts the run. They are kept distinct so callers and tests
//! can tell a traversal failure from a read or write failure even though the
//! binary collapses them all into a non-zero exit.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while walking, reading, or writing files
#[derive(Debug, Error)]
pub enum RedactError {
    /// A directory under the source root could not be listed
    #[error("failed to read directory entry under {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The source root does not exist or is not a directory
    #[error("source root is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// A selected file could not be read as UTF-8 text
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A destination directory could not be created
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A destination file could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A source path has no base name to write under the destination
    #[error("cannot mirror {}: path has no file name", path.display())]
    NoFileName { path: PathBuf },
}

/// Coarse classification of a [`RedactError`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Traversal,
    Read,
    Write,
}

impl RedactError {
    /// Which stage of the pass failed
    pub fn kind(&self) -> ErrorKind {
        match self {
            RedactError::Traversal { .. } | RedactError::NotADirectory { .. } => {
                ErrorKind::Traversal
            }
            RedactError::Read { .. } => ErrorKind::Read,
            RedactError::CreateDir { .. }
            | RedactError::Write { .. }
            | RedactError::NoFileName { .. } => ErrorKind::Write,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let read = RedactError::Read {
            path: PathBuf::from("docs/a.md"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(read.kind(), ErrorKind::Read);

        let write = RedactError::CreateDir {
            path: PathBuf::from("/out/docs"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(write.kind(), ErrorKind::Write);

        let root = RedactError::NotADirectory { path: PathBuf::from("missing") };
        assert_eq!(root.kind(), ErrorKind::Traversal);
    }

    #[test]
    fn test_error_messages_include_path() {
        let err = RedactError::Write {
            path: PathBuf::from("/out/docs/a.md"),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        };
        let message = err.to_string();
        assert!(message.contains("/out/docs/a.md"));
        assert!(message.contains("disk full"));
    }
}

//! Lazy depth-first traversal of a source tree.
//!
//! [`TreeWalker`] yields the path of every non-directory entry reachable from
//! the root. Entries are visited in the order the filesystem lists them at
//! each level; that order is platform dependent and is not sorted.
//!
//! Symbolic links are not followed. A link is yielded like a file, so a link
//! cycle cannot cause unbounded recursion; selecting a link to a directory
//! fails later when it is read.
//!
//! A directory can be excluded with [`TreeWalker::skipping`]; the pass uses
//! this so a destination inside the source tree is never read back.
//!
//! The walker is single use. Start a new one to scan the tree again.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::error::RedactError;

/// Iterator over file paths under a root directory
pub struct TreeWalker {
    root: PathBuf,
    entries: walkdir::IntoIter,
    skip_dir: Option<PathBuf>,
}

impl TreeWalker {
    /// Create a walker rooted at `root`.
    ///
    /// Fails with [`RedactError::NotADirectory`] if `root` is missing or is
    /// not a directory. Listing failures below the root surface lazily as
    /// [`RedactError::Traversal`] items.
    pub fn new(root: &Path) -> Result<Self, RedactError> {
        if !root.is_dir() {
            return Err(RedactError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        debug!("Walking {}", root.display());

        let entries = WalkDir::new(root)
            .follow_links(false)
            .min_depth(1)
            .into_iter();

        Ok(TreeWalker {
            root: root.to_path_buf(),
            entries,
            skip_dir: None,
        })
    }

    /// Never descend into `dir` or yield anything below it.
    ///
    /// `dir` is canonicalized once here and compared against the canonical
    /// form of each directory reached, so `out`, `./out` and an absolute
    /// spelling of the same directory all match. A `dir` that does not exist
    /// yet is compared as given.
    pub fn skipping(mut self, dir: &Path) -> Self {
        let canonical = fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
        debug!("Excluding {} from the walk", canonical.display());
        self.skip_dir = Some(canonical);
        self
    }

    fn is_skipped(&self, dir: &Path) -> bool {
        match &self.skip_dir {
            Some(skip) => fs::canonicalize(dir)
                .map(|canonical| &canonical == skip)
                .unwrap_or(false),
            None => false,
        }
    }

    /// Root this walker was created with
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Iterator for TreeWalker {
    type Item = Result<PathBuf, RedactError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(source) => {
                    let path = source
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    return Some(Err(RedactError::Traversal { path, source }));
                }
            };

            if entry.file_type().is_dir() {
                if self.is_skipped(entry.path()) {
                    debug!("Skipping excluded directory {}", entry.path().display());
                    self.entries.skip_current_dir();
                }
                continue;
            }

            return Some(Ok(entry.into_path()));
        }
    }
}

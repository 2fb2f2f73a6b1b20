//! Destination path computation.
//!
//! Two layouts are supported. [`MirrorPolicy::FullPath`] reproduces the whole
//! source directory path under the destination root, so scanning `docs` into
//! `/out` writes `/out/docs/guide/b.md`. [`MirrorPolicy::RelativeToRoot`]
//! strips the source root first and writes `/out/guide/b.md`.
//!
//! A `..` in the mirrored part is written as [`PARENT_DIR_PLACEHOLDER`], so
//! `-s ../shared` lands in `/out/_up/shared` and never above the destination.

use std::path::{Component, Path, PathBuf};

use crate::constants::PARENT_DIR_PLACEHOLDER;
use crate::error::RedactError;

/// How a source file's directory maps to a destination directory
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MirrorPolicy {
    /// Join the source file's full containing-directory path under the destination
    #[default]
    FullPath,
    /// Join only the part of the containing directory below the source root
    RelativeToRoot,
}

impl MirrorPolicy {
    /// Destination directory for a file found at `source_file` while walking `source_root`.
    ///
    /// Root, drive prefix, and `.` components are dropped so an absolute
    /// source path never replaces `dest_root`. A `..` component becomes
    /// [`PARENT_DIR_PLACEHOLDER`].
    pub fn destination_dir(
        &self,
        source_file: &Path,
        source_root: &Path,
        dest_root: &Path,
    ) -> PathBuf {
        let parent = source_file.parent().unwrap_or_else(|| Path::new(""));

        let mirrored = match self {
            MirrorPolicy::FullPath => parent,
            MirrorPolicy::RelativeToRoot => parent.strip_prefix(source_root).unwrap_or(parent),
        };

        let mut destination = dest_root.to_path_buf();
        for component in mirrored.components() {
            match component {
                Component::Normal(name) => destination.push(name),
                Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
                Component::ParentDir => destination.push(PARENT_DIR_PLACEHOLDER),
            }
        }

        destination
    }

    /// Full destination file path: the destination directory plus the source base name
    pub fn destination_file(
        &self,
        source_file: &Path,
        source_root: &Path,
        dest_root: &Path,
    ) -> Result<PathBuf, RedactError> {
        let dir = self.destination_dir(source_file, source_root, dest_root);
        file_in(&dir, source_file)
    }
}

/// `dir` joined with the base name of `source_file`
pub fn file_in(dir: &Path, source_file: &Path) -> Result<PathBuf, RedactError> {
    match source_file.file_name() {
        Some(name) => Ok(dir.join(name)),
        None => Err(RedactError::NoFileName {
            path: source_file.to_path_buf(),
        }),
    }
}

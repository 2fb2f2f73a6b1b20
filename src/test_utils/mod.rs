//! Test utilities for md-redact
//!
//! Fixtures for building small documentation trees in temporary directories.

#![cfg(test)]

use anyhow::Result;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Creates a temporary directory that is automatically cleaned up
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a documentation tree with Markdown and non-Markdown files
///
/// ```text
/// README.md
/// notes.txt
/// docs/a.md             "pre«secret»post"
/// docs/image.png
/// docs/guide/b.md
/// docs/guide/deep/c.md
/// ```
pub fn create_docs_tree() -> Result<TempDir> {
    let temp_dir = create_temp_dir()?;
    let base_path = temp_dir.path();

    fs::create_dir_all(base_path.join("docs/guide/deep"))?;

    fs::write(base_path.join("README.md"), "# Project «codename»\n")?;
    fs::write(base_path.join("notes.txt"), "«not touched»")?;
    fs::write(base_path.join("docs/a.md"), "pre«secret»post")?;
    fs::write(base_path.join("docs/image.png"), [0x89, b'P', b'N', b'G'])?;
    fs::write(base_path.join("docs/guide/b.md"), "token: «abc123»\n")?;
    fs::write(base_path.join("docs/guide/deep/c.md"), "no secrets here\n")?;

    Ok(temp_dir)
}

/// Where the full-path mirror of `source_root` lands under `dest_root`
pub fn full_mirror_of(dest_root: &Path, source_root: &Path) -> PathBuf {
    let mut mirrored = dest_root.to_path_buf();
    for component in source_root.components() {
        if let Component::Normal(name) = component {
            mirrored.push(name);
        }
    }
    mirrored
}

/// All non-directory paths under `root`, relative to it
pub fn list_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| !entry.file_type().is_dir())
        .filter_map(|entry| entry.path().strip_prefix(root).ok().map(Path::to_path_buf))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_docs_tree() {
        let temp_dir = create_docs_tree().unwrap();
        assert_eq!(list_files(temp_dir.path()).len(), 6);
    }

    #[test]
    fn test_full_mirror_of_relative() {
        let mirrored = full_mirror_of(Path::new("/out"), Path::new("./docs"));
        assert_eq!(mirrored, PathBuf::from("/out/docs"));
    }
}

//! Redaction pass over a source tree.
//!
//! Files are handled one at a time: read, redact, create the mirrored
//! directory, write. The first failure stops the pass. Files written before
//! the failure stay on disk and partially created directories are left as is.
//! Existing destination files are overwritten.
//!
//! The destination root is created before the walk starts and excluded from
//! it, so a destination inside the source tree is never read back.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::constants::MARKDOWN_SUFFIX;
use crate::error::RedactError;
use crate::mirror::{file_in, MirrorPolicy};
use crate::redactor::redact_counted;
use crate::walker::TreeWalker;

/// Settings for one redaction pass
#[derive(Clone, Debug)]
pub struct RedactConfig {
    /// Root directory to scan
    pub src_dir: PathBuf,
    /// Root under which mirrored files are written
    pub dst_dir: PathBuf,
    /// Mask delimited spans; when false files are copied with delimiters removed
    pub redact: bool,
    /// Destination layout
    pub mirror: MirrorPolicy,
}

/// Counters reported at the end of a pass
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Markdown files written to the destination
    pub files_written: usize,
    /// Files seen but not selected by the suffix filter
    pub files_skipped: usize,
    /// Content characters replaced with the mask character
    pub chars_masked: usize,
}

/// Whether `path` names a file the pass should transform.
///
/// The check is a case-sensitive literal suffix match on the file name.
pub fn is_markdown(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(MARKDOWN_SUFFIX))
        .unwrap_or(false)
}

/// Walk `config.src_dir` and write a redacted mirror of every Markdown file.
pub fn process_tree(config: &RedactConfig) -> Result<RunSummary, RedactError> {
    info!(
        "Redacting {} into {} (masking {})",
        config.src_dir.display(),
        config.dst_dir.display(),
        if config.redact { "enabled" } else { "disabled" }
    );

    let walker = TreeWalker::new(&config.src_dir)?;

    fs::create_dir_all(&config.dst_dir).map_err(|source| RedactError::CreateDir {
        path: config.dst_dir.clone(),
        source,
    })?;
    let walker = walker.skipping(&config.dst_dir);

    let mut summary = RunSummary::default();

    for entry in walker {
        let path = entry?;

        if !is_markdown(&path) {
            debug!("Skipping {}", path.display());
            summary.files_skipped += 1;
            continue;
        }

        let (_, masked) = process_file(&path, config)?;
        summary.files_written += 1;
        summary.chars_masked += masked;
    }

    info!(
        "Redaction complete: {} files written, {} skipped, {} characters masked",
        summary.files_written, summary.files_skipped, summary.chars_masked
    );

    Ok(summary)
}

/// Redact a single source file into its mirrored destination.
///
/// Returns the destination path and the number of masked characters.
pub fn process_file(path: &Path, config: &RedactConfig) -> Result<(PathBuf, usize), RedactError> {
    let content = fs::read_to_string(path).map_err(|source| RedactError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Processing {}.", path.display());
    let (redacted, masked) = redact_counted(&content, config.redact);

    let dest_dir = config
        .mirror
        .destination_dir(path, &config.src_dir, &config.dst_dir);
    let dest_path = file_in(&dest_dir, path)?;

    fs::create_dir_all(&dest_dir).map_err(|source| RedactError::CreateDir {
        path: dest_dir.clone(),
        source,
    })?;

    info!("Writing {}", dest_path.display());
    fs::write(&dest_path, redacted).map_err(|source| RedactError::Write {
        path: dest_path.clone(),
        source,
    })?;

    Ok((dest_path, masked))
}

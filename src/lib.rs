//! # md-redact
//!
//! Mirrors a tree of Markdown files into a destination directory, masking
//! every span written between `«` and `»` with `█`.
//!
//! ## Overview
//!
//! A pass walks the source root depth first, selects files whose name ends in
//! `.md`, runs each one through a two-state character scan, and writes the
//! result under the destination root. Files are processed sequentially and
//! the first I/O failure aborts the pass.
//!
//! ## Usage
//!
//! ```no_run
//! use md_redact::mirror::MirrorPolicy;
//! use md_redact::processor::{process_tree, RedactConfig};
//! use std::path::PathBuf;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = RedactConfig {
//!     src_dir: PathBuf::from("docs"),
//!     dst_dir: PathBuf::from("/tmp/shared"),
//!     redact: true,
//!     mirror: MirrorPolicy::FullPath,
//! };
//!
//! let summary = process_tree(&config)?;
//! println!("Wrote {} files", summary.files_written);
//! # Ok(())
//! # }
//! ```
//!
//! The transform on its own:
//!
//! ```
//! use md_redact::redactor::redact;
//!
//! assert_eq!(redact("pre«secret»post", true), "pre██████post");
//! assert_eq!(redact("pre«secret»post", false), "presecretpost");
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`constants`]: Delimiters, mask character, and defaults
//! - [`error`]: Failure kinds for a pass
//! - [`mirror`]: Destination path computation
//! - [`processor`]: The redaction pass over a tree
//! - [`redactor`]: The character-stream transform
//! - [`walker`]: Lazy directory traversal

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Application constants
pub mod constants;

/// Error types for walking, reading, and writing
pub mod error;

/// Mapping of source directories to destination directories
pub mod mirror;

/// File selection and the per-file read/redact/write loop
pub mod processor;

/// Delimited-span masking
pub mod redactor;

/// Recursive file enumeration
pub mod walker;

/// Test utilities and helpers
#[cfg(test)]
pub mod test_utils;

pub use error::{ErrorKind, RedactError};
pub use processor::{process_tree, RedactConfig, RunSummary};
pub use redactor::redact;

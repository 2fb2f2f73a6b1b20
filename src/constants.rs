//! Global constants for md-redact.
//!
//! The sentinel characters are fixed: there is no escaping mechanism, so a
//! literal `«` or `»` in a document is always read as a control character.

/// Opening delimiter; switches the scan into the redacting state
pub const OPEN_DELIMITER: char = '«';

/// Closing delimiter; switches the scan back to passing content through
pub const CLOSE_DELIMITER: char = '»';

/// Character emitted in place of each redacted content character
pub const MASK_CHAR: char = '█';

/// Only files whose name ends with this literal suffix are processed
pub const MARKDOWN_SUFFIX: &str = ".md";

/// Default source root when `--srcDir` is not given
pub const DEFAULT_SRC_DIR: &str = ".";

/// Directory under the system temp dir used when `--dstDir` is not given
pub const DEFAULT_DST_DIR_NAME: &str = "x";

/// Stand-in for a `..` component when mirroring a source path
pub const PARENT_DIR_PLACEHOLDER: &str = "_up";

use clap::{Parser, ValueEnum};
use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_DST_DIR_NAME, DEFAULT_SRC_DIR};
use crate::mirror::MirrorPolicy;
use crate::processor::RedactConfig;

/// Command-line arguments for md-redact.
///
/// All options are optional. The redaction flag is read once here and then
/// carried in [`RedactConfig`] to every file.
#[derive(Parser, Debug)]
#[clap(name = "md-redact", about = "Mirror Markdown files with «delimited» spans masked")]
pub struct Args {
    /// Root directory to scan
    #[clap(short = 's', long = "srcDir", default_value = DEFAULT_SRC_DIR)]
    pub src_dir: PathBuf,

    /// Root under which redacted files are written (default: %TEMP%/x or /tmp/x)
    #[clap(short = 'd', long = "dstDir")]
    pub dst_dir: Option<PathBuf>,

    /// Copy files without masking (delimiters are still removed)
    #[clap(short = 'n', long)]
    pub no_redact: bool,

    /// Destination layout
    #[clap(short = 'm', long, value_enum, default_value_t = MirrorMode::Full)]
    pub mirror: MirrorMode,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,
}

/// Destination layout selectable from the command line.
#[derive(Clone, Copy, Debug, ValueEnum, PartialEq)]
pub enum MirrorMode {
    /// Keep the full source directory path, including the source root
    Full,
    /// Strip the source root from the mirrored path
    Relative,
}

impl std::fmt::Display for MirrorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MirrorMode::Full => write!(f, "full"),
            MirrorMode::Relative => write!(f, "relative"),
        }
    }
}

impl From<MirrorMode> for MirrorPolicy {
    fn from(mode: MirrorMode) -> Self {
        match mode {
            MirrorMode::Full => MirrorPolicy::FullPath,
            MirrorMode::Relative => MirrorPolicy::RelativeToRoot,
        }
    }
}

impl Args {
    /// Destination root, falling back to a fixed directory under the system temp dir
    pub fn resolved_dst_dir(&self) -> PathBuf {
        match &self.dst_dir {
            Some(path) => path.clone(),
            None => env::temp_dir().join(DEFAULT_DST_DIR_NAME),
        }
    }

    /// Settings for the redaction pass
    pub fn to_config(&self) -> RedactConfig {
        RedactConfig {
            src_dir: self.src_dir.clone(),
            dst_dir: self.resolved_dst_dir(),
            redact: !self.no_redact,
            mirror: self.mirror.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_values() {
        let args = Args::parse_from(["md-redact"]);

        assert_eq!(args.src_dir, PathBuf::from("."));
        assert_eq!(args.dst_dir, None);
        assert!(!args.no_redact);
        assert!(!args.verbose);
        assert_eq!(args.mirror, MirrorMode::Full);
    }

    #[test]
    fn test_long_options() {
        let args = Args::parse_from([
            "md-redact",
            "--srcDir", "docs",
            "--dstDir", "/out",
            "--no-redact",
            "--mirror", "relative",
        ]);

        assert_eq!(args.src_dir, PathBuf::from("docs"));
        assert_eq!(args.dst_dir, Some(PathBuf::from("/out")));
        assert!(args.no_redact);
        assert_eq!(args.mirror, MirrorMode::Relative);
    }

    #[test]
    fn test_short_options() {
        let args = Args::parse_from(["md-redact", "-s", "docs", "-d", "/out", "-n", "-v"]);

        assert_eq!(args.src_dir, PathBuf::from("docs"));
        assert_eq!(args.dst_dir, Some(PathBuf::from("/out")));
        assert!(args.no_redact);
        assert!(args.verbose);
    }

    #[test]
    fn test_default_dst_dir_is_under_temp() {
        let args = Args::parse_from(["md-redact"]);
        assert_eq!(args.resolved_dst_dir(), env::temp_dir().join("x"));
    }

    #[test]
    fn test_to_config() {
        let config = Args::parse_from(["md-redact", "-s", "docs", "-d", "/out"]).to_config();
        assert_eq!(config.src_dir, PathBuf::from("docs"));
        assert_eq!(config.dst_dir, PathBuf::from("/out"));
        assert!(config.redact);
        assert_eq!(config.mirror, MirrorPolicy::FullPath);

        let disabled = Args::parse_from(["md-redact", "-n", "-m", "relative"]).to_config();
        assert!(!disabled.redact);
        assert_eq!(disabled.mirror, MirrorPolicy::RelativeToRoot);
    }

    #[test]
    fn test_unknown_mirror_mode_rejected() {
        assert!(Args::try_parse_from(["md-redact", "--mirror", "flat"]).is_err());
    }

    #[test]
    fn test_mirror_mode_display() {
        assert_eq!(format!("{}", MirrorMode::Full), "full");
        assert_eq!(format!("{}", MirrorMode::Relative), "relative");
    }
}

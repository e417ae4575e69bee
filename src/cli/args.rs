// src/cli/args.rs
use std::path::PathBuf;

use clap::{Args, Parser, ValueHint};

/// Arguments of the `json2sta` batch converter.
#[derive(Parser, Debug)]
#[command(
    name = "json2sta",
    version = crate::VERSION,
    about = "Convert every stale JSON document of a directory into an STA artifact"
)]
pub struct ConvertArgs {
    /// Directory scanned for source documents
    #[arg(value_hint = ValueHint::DirPath)]
    pub input_dir: Option<PathBuf>,

    /// Directory receiving the artifacts (defaults to INPUT_DIR)
    #[arg(value_hint = ValueHint::DirPath)]
    pub output_dir: Option<PathBuf>,

    /// Report failed files and keep converting the rest
    #[arg(long)]
    pub keep_going: bool,

    /// Suffix selecting source documents
    #[arg(long, default_value = ".json", value_name = "SUFFIX")]
    pub source_suffix: String,

    /// Suffix given to artifacts
    #[arg(long, default_value = ".sta", value_name = "SUFFIX")]
    pub artifact_suffix: String,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

/// Arguments of the `viewsta` artifact viewer.
#[derive(Parser, Debug)]
#[command(name = "viewsta", version = crate::VERSION, about = "Print an STA artifact as indented JSON")]
pub struct ViewArgs {
    /// Artifact to decode
    #[arg(value_hint = ValueHint::FilePath)]
    pub filename: Option<PathBuf>,

    /// Rendering of binary blobs: 0 = byte list, 1 = @base64@ string, 2 = @binary@<size> placeholder
    #[arg(long, default_value_t = 2, value_name = "MODE")]
    pub binary_mode: u8,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

/// Log level flags shared by both tools.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct Verbosity {
    /// Raise the log level (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    pub quiet: bool,
}

impl Verbosity {
    /// Default filter directive when `RUST_LOG` is unset.
    pub fn directive(self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_args_parse_positionals_and_flags() {
        let args = ConvertArgs::try_parse_from(["json2sta", "in", "out", "--keep-going", "-vv"]).unwrap();
        assert_eq!(args.input_dir, Some(PathBuf::from("in")));
        assert_eq!(args.output_dir, Some(PathBuf::from("out")));
        assert!(args.keep_going);
        assert_eq!(args.source_suffix, ".json");
        assert_eq!(args.artifact_suffix, ".sta");
        assert_eq!(args.verbosity.directive(), "debug");
    }

    #[test]
    fn positionals_are_optional() {
        let args = ConvertArgs::try_parse_from(["json2sta"]).unwrap();
        assert!(args.input_dir.is_none());
        let args = ViewArgs::try_parse_from(["viewsta"]).unwrap();
        assert!(args.filename.is_none());
        assert_eq!(args.binary_mode, 2);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(ConvertArgs::try_parse_from(["json2sta", "-q", "-v", "dir"]).is_err());
    }

    #[test]
    fn verbosity_directives() {
        assert_eq!(Verbosity::default().directive(), "warn");
        assert_eq!(Verbosity { verbose: 1, quiet: false }.directive(), "info");
        assert_eq!(Verbosity { verbose: 5, quiet: false }.directive(), "trace");
        assert_eq!(Verbosity { verbose: 0, quiet: true }.directive(), "error");
    }
}
